use crate::math::{Point3, Ray, Vec3};

mod sphere;

pub use sphere::Sphere;

/// A single surface hit reported by a primitive: parameter along the ray,
/// world-space hit point, and the unit outward normal there.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceHit {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
}

pub trait Primitive {
    /// Nearest intersection with `r` inside the open interval `(t0, t1)`,
    /// additionally clipped by the ray's own `tmax`. `None` is the normal
    /// no-hit outcome, not an error.
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceHit>;

    fn material_id(&self) -> usize;
}

/// Closed set of geometry variants. The renderer loop only sees this enum,
/// so new primitive kinds slot in without touching the camera or the math.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceHit> {
        match self {
            PrimitiveEnum::Sphere(sphere) => sphere.intersect(r, t0, t1),
        }
    }

    fn material_id(&self) -> usize {
        match self {
            PrimitiveEnum::Sphere(sphere) => sphere.material_id(),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(sphere: Sphere) -> PrimitiveEnum {
        PrimitiveEnum::Sphere(sphere)
    }
}
