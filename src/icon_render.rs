use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{self, create_dir_all},
    io::Write,
    path::Path,
    str::FromStr,
};

/// Every size the iconset needs, in render order. Sizes up to 512 also get a
/// half-size-named `@2x` duplicate, so together these cover all ten
/// size/density slots of a macOS iconset.
pub const ICON_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

// Gradient stops for the background disc: blue at the center, purple at the rim.
const GRADIENT_CENTER: &str = "#3b82f6";
const GRADIENT_EDGE: &str = "#8b5cf6";

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RING_OUTER: Rgba<u8> = Rgba([255, 255, 255, 200]);

/// Render the icon at every size in `sizes` and write the PNGs (plus `@2x`
/// duplicates) into `out_dir`, creating it if needed. Any render or I/O
/// failure aborts the whole run; files already written stay on disk.
pub fn render_all(sizes: &[u32], out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Generating iconset in {}...", out_dir.display());

    for &size in sizes {
        let canvas = render_icon(size)?;

        // Encode once and write the buffer under both names, so the @2x
        // duplicate is byte-identical to its full-size sibling.
        let mut buf = Vec::new();
        write_png(canvas.as_raw(), &mut buf, size)?;

        let filename = format!("icon_{size}x{size}.png");
        fs::write(out_dir.join(&filename), &buf)
            .with_context(|| format!("Failed to write {filename}"))?;
        println!("  ✓ Generated {filename}");

        // Retina alias: same pixels, half the logical dimension in the name.
        if size <= 512 && size % 2 == 0 {
            let half = size / 2;
            let retina = format!("icon_{half}x{half}@2x.png");
            fs::write(out_dir.join(&retina), &buf)
                .with_context(|| format!("Failed to write {retina}"))?;
            println!("  ✓ Generated {retina}");
        }
    }

    println!("Icon images created successfully!");
    Ok(())
}

/// Draw one square icon: gradient disc, inner ring, center dot, outer ring,
/// in that order so later shapes overlay earlier ones.
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    if size < 2 {
        anyhow::bail!("Unsupported icon size {size}: the canvas has no drawable center");
    }

    let center = size / 2;
    let mut canvas = RgbaImage::new(size, size);

    draw_gradient_disc(&mut canvas, center);

    let inner_radius = (size as f64 * 0.25).round() as u32;
    draw_ring(&mut canvas, center, inner_radius, (size / 32).max(1), WHITE);

    let dot_radius = (size as f64 * 0.08).round() as u32;
    draw_dot(&mut canvas, center, dot_radius, WHITE);

    let outer_radius = (size as f64 * 0.4).round() as u32;
    draw_ring(
        &mut canvas,
        center,
        outer_radius,
        (size / 48).max(1),
        RING_OUTER,
    );

    Ok(canvas)
}

/// Fill the disc of radius `center` with a radial gradient. Equivalent to
/// stamping opaque filled circles at every radius from `center` down to 1,
/// largest first: a pixel at distance `d` ends up with the color of the
/// smallest circle still covering it, `max(1, ceil(d))`.
fn draw_gradient_disc(canvas: &mut RgbaImage, center: u32) {
    let center_color = parse_color(GRADIENT_CENTER);
    let edge_color = parse_color(GRADIENT_EDGE);

    let size = canvas.width();
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - center as f64;
            let dy = y as f64 - center as f64;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > center as f64 {
                continue;
            }

            let ratio = (distance.ceil() as u32).max(1) as f64 / center as f64;
            let pixel = Rgba([
                lerp_channel(center_color[0], edge_color[0], ratio),
                lerp_channel(center_color[1], edge_color[1], ratio),
                lerp_channel(center_color[2], edge_color[2], ratio),
                255,
            ]);
            canvas.put_pixel(x, y, pixel);
        }
    }
}

/// Stroke an unfilled circle outline. The stroke extends inward from
/// `radius` and replaces the pixels under it, alpha included.
fn draw_ring(canvas: &mut RgbaImage, center: u32, radius: u32, width: u32, color: Rgba<u8>) {
    let size = canvas.width();
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - center as f64;
            let dy = y as f64 - center as f64;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= radius as f64 && distance > (radius - width.min(radius)) as f64 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a solid circle of `radius` around the canvas center.
fn draw_dot(canvas: &mut RgbaImage, center: u32, radius: u32, color: Rgba<u8>) {
    let size = canvas.width();
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - center as f64;
            let dy = y as f64 - center as f64;
            if dx * dx + dy * dy <= (radius * radius) as f64 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn lerp_channel(center: u8, edge: u8, ratio: f64) -> u8 {
    (edge as f64 * ratio + center as f64 * (1.0 - ratio)).round() as u8
}

fn parse_color(css: &str) -> Rgba<u8> {
    css_color::Srgb::from_str(css)
        .map(|color| {
            Rgba([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
                255,
            ])
        })
        .unwrap_or(WHITE)
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
