use crate::camera::PinholeCamera;
use crate::film::Film;
use crate::math::RGBColor;
use crate::scene::Scene;
use rayon::prelude::*;

/// Casts one ray per pixel and flat-shades: the nearest hit's material color,
/// or black on a miss. Pixels are independent, so the loop is split across
/// the rayon pool; every pixel writes its own cell and the result is
/// identical to a sequential pass.
pub fn render(camera: &PinholeCamera, scene: &Scene) -> Film<RGBColor> {
    let width = camera.width;
    let mut film = Film::new(width, camera.height, RGBColor::ZERO);

    film.buffer.par_iter_mut().enumerate().for_each(|(i, pixel)| {
        let x = i % width;
        let y = i / width;

        let ray = camera.get_ray(x, y);
        *pixel = match scene.intersect(ray) {
            Some(intersection) => scene.material_for(&intersection).color,
            None => RGBColor::ZERO,
        };
    });
    film
}
