use crate::error::Error;
use crate::math::{Point3, Ray, Vec3};

/// Default eye position, on the forward axis far enough back that the test
/// scenes around the world origin sit comfortably in frame.
pub const DEFAULT_POSITION: Point3 = Point3::new(0.0, 0.0, 20.0);

const VERTICAL_FOV_DEGREES: f32 = 90.0;

/// Axis-aligned pinhole camera looking down `-z` with `+y` up. The viewport
/// spans a fixed vertical field of view; the horizontal extent is scaled by
/// the aspect ratio so non-square images are not distorted.
#[derive(Copy, Clone, Debug)]
pub struct PinholeCamera {
    pub position: Point3,
    pub width: usize,
    pub height: usize,
    aspect_ratio: f32,
    half_height: f32,
}

impl PinholeCamera {
    pub fn new(width: usize, height: usize) -> Result<PinholeCamera, Error> {
        PinholeCamera::with_position(width, height, DEFAULT_POSITION)
    }

    pub fn with_position(
        width: usize,
        height: usize,
        position: Point3,
    ) -> Result<PinholeCamera, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResolution { width, height });
        }
        Ok(PinholeCamera {
            position,
            width,
            height,
            aspect_ratio: width as f32 / height as f32,
            half_height: (VERTICAL_FOV_DEGREES.to_radians() / 2.0).tan(),
        })
    }

    /// Maps a pixel coordinate in `[0, w) x [0, h)` to the normalized
    /// world-space direction through that pixel's center. Row `py = 0` is the
    /// top of the image; the center of an odd-sized grid maps exactly onto
    /// the forward axis.
    pub fn ray_direction(&self, px: usize, py: usize) -> Vec3 {
        let u = (px as f32 + 0.5) / self.width as f32;
        let v = (py as f32 + 0.5) / self.height as f32;
        let x = (2.0 * u - 1.0) * self.aspect_ratio * self.half_height;
        let y = (1.0 - 2.0 * v) * self.half_height;
        // the fixed -1.0 z component keeps this vector nonzero
        Vec3::new(x, y, -1.0).normalized()
    }

    pub fn get_ray(&self, px: usize, py: usize) -> Ray {
        Ray::new(self.position, self.ray_direction(px, py))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let cam = PinholeCamera::new(3, 3).unwrap();
        assert_eq!(cam.position, DEFAULT_POSITION);
        let cam = PinholeCamera::with_position(100, 100, Point3::new(0.0, 0.0, -5.0)).unwrap();
        assert_eq!(cam.position, Point3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = PinholeCamera::new(0, 100).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidResolution {
                width: 0,
                height: 100
            }
        );
        assert!(PinholeCamera::new(100, 0).is_err());
    }

    #[test]
    fn test_center_pixel_is_forward() {
        let cam = PinholeCamera::new(3, 3).unwrap();
        assert_eq!(cam.ray_direction(1, 1), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_directions_are_normalized() {
        let cam = PinholeCamera::new(7, 5).unwrap();
        for px in 0..7 {
            for py in 0..5 {
                let norm = cam.ray_direction(px, py).norm();
                assert!((norm - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_mapping_is_symmetric_about_center() {
        let cam = PinholeCamera::new(9, 9).unwrap();
        let left = cam.ray_direction(0, 4);
        let right = cam.ray_direction(8, 4);
        assert!((left.x + right.x).abs() < 1e-6);
        assert_eq!(left.y, right.y);
        let top = cam.ray_direction(4, 0);
        let bottom = cam.ray_direction(4, 8);
        assert!((top.y + bottom.y).abs() < 1e-6);
        // +y is the top of the image
        assert!(top.y > 0.0);
    }

    #[test]
    fn test_aspect_ratio_scales_horizontal_extent() {
        let wide = PinholeCamera::new(200, 100).unwrap();
        let square = PinholeCamera::new(100, 100).unwrap();
        // recover the viewport half-width from the leftmost column; tangents
        // are unaffected by normalization, and pixel 0 samples u = 0.5/w
        let half_width = |cam: &PinholeCamera| {
            let d = cam.ray_direction(0, cam.height / 2);
            (d.x / -d.z) / (1.0 / cam.width as f32 - 1.0)
        };
        let sq = half_width(&square);
        let wd = half_width(&wide);
        assert!((sq - 1.0).abs() < 1e-5, "{}", sq);
        assert!((wd - 2.0 * sq).abs() < 1e-5, "{}", wd);
    }

    #[test]
    fn test_get_ray_originates_at_camera() {
        let cam = PinholeCamera::with_position(5, 5, Point3::new(2.0, 2.0, 10.0)).unwrap();
        let ray = cam.get_ray(1, 0);
        assert_eq!(ray.origin, Point3::new(2.0, 2.0, 10.0));
        assert_eq!(ray.direction, cam.ray_direction(1, 0));
    }
}
