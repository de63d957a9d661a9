use crate::film::Film;
use crate::math::RGBColor;
use image::{ImageBuffer, Rgb};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn write_png(film: &Film<RGBColor>, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    let mut img = ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = film.at(x as usize, y as usize);
        *pixel = Rgb([
            color.r.round() as u8,
            color.g.round() as u8,
            color.b.round() as u8,
        ]);
    }
    img.save(path)
}

/// Plain-text portable-pixmap style output: a `P3` magic line, the
/// dimensions, the channel maximum, then one `r g b` line per pixel, rows
/// outer and columns inner.
pub fn write_pbm(film: &Film<RGBColor>, path: impl AsRef<Path>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", film.width, film.height)?;
    writeln!(out, "255")?;
    for y in 0..film.height {
        for x in 0..film.width {
            let color = film.at(x, y);
            writeln!(
                out,
                "{} {} {}",
                color.r.round() as u32,
                color.g.round() as u32,
                color.b.round() as u32
            )?;
        }
    }
    out.flush()
}
