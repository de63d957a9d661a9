use raycast::math::RGBColor;
use raycast::Film;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Loads the plain-text pixmap format written by `raycast::output::write_pbm`:
/// magic line, `width height`, channel maximum, then one `r g b` line per
/// pixel with rows outer and columns inner. Malformed files are hard errors.
pub fn load_pbm(
    path: impl AsRef<Path>,
    expected_width: usize,
    expected_height: usize,
) -> Result<Film<RGBColor>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();

    // magic line is ignored, same as the harness this format comes from
    lines.next().ok_or("missing magic line")?;

    let mut dimensions = lines.next().ok_or("missing dimensions line")?.split_whitespace();
    let width: usize = dimensions.next().ok_or("missing width")?.parse()?;
    let height: usize = dimensions.next().ok_or("missing height")?.parse()?;
    if (width != expected_width) || (height != expected_height) {
        return Err(format!(
            "dimensions of the image are not as expected: got {}x{}, want {}x{}",
            width, height, expected_width, expected_height
        )
        .into());
    }

    // channel maximum, also ignored
    lines.next().ok_or("missing max-value line")?;

    let mut film = Film::new(width, height, RGBColor::ZERO);
    for y in 0..height {
        for x in 0..width {
            let line = lines.next().ok_or("ran out of pixel data")?;
            let mut channels = line.split_whitespace();
            let r: f32 = channels.next().ok_or("missing red channel")?.parse()?;
            let g: f32 = channels.next().ok_or("missing green channel")?.parse()?;
            let b: f32 = channels.next().ok_or("missing blue channel")?.parse()?;
            film.write_at(x, y, RGBColor::new(r, g, b));
        }
    }
    Ok(film)
}

/// Signed per-pixel average of the summed channel differences, the
/// comparison metric the reference images are checked against.
pub fn average_diff(rendered: &Film<RGBColor>, reference: &Film<RGBColor>) -> f64 {
    assert_eq!(rendered.width, reference.width);
    assert_eq!(rendered.height, reference.height);
    let mut diff = 0.0f64;
    for (ours, theirs) in rendered.buffer.iter().zip(reference.buffer.iter()) {
        diff += (ours.r - theirs.r) as f64;
        diff += (ours.g - theirs.g) as f64;
        diff += (ours.b - theirs.b) as f64;
    }
    diff / (rendered.total_pixels() as f64)
}
