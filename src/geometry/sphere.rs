use crate::error::Error;
use crate::geometry::{Primitive, SurfaceHit};
use crate::math::{Point3, Ray, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub material_id: usize,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, material_id: usize) -> Result<Sphere, Error> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Sphere {
            radius,
            origin,
            material_id,
        })
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceHit> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        // half-b form of b^2 - 4ac; same roots, fewer multiplies
        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        // tangent rays (discriminant == 0) fall through to the single root
        let discriminant_sqrt = discriminant.sqrt();
        for time in [(-b - discriminant_sqrt) / a, (-b + discriminant_sqrt) / a] {
            // nearest root first; both behind the origin means no hit
            if time > t0 && time < t1 && time < r.tmax {
                let point = r.point_at_parameter(time);
                let normal = ((point - self.origin) / self.radius).normalized();
                return Some(SurfaceHit {
                    time,
                    point,
                    normal,
                });
            }
        }
        None
    }

    fn material_id(&self) -> usize {
        self.material_id
    }
}
