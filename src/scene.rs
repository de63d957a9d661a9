use crate::geometry::{Primitive, PrimitiveEnum};
use crate::material::Material;
use crate::math::{Point3, Ray, Vec3};
use std::f32::INFINITY;

/// A resolved hit against the scene. `primitive` is an index into the scene's
/// primitive arena rather than a reference, so the record stays valid however
/// the caller stores it.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub primitive: usize,
}

/// Arena-style scene: primitives and materials live in flat vectors and
/// everything else refers to them by index.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    primitives: Vec<PrimitiveEnum>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    pub fn add_material(&mut self, material: Material) -> usize {
        let id = self.materials.len();
        self.materials.push(material);
        id
    }

    pub fn add_primitive(&mut self, primitive: impl Into<PrimitiveEnum>) -> usize {
        let id = self.primitives.len();
        self.primitives.push(primitive.into());
        id
    }

    pub fn primitive(&self, index: usize) -> &PrimitiveEnum {
        &self.primitives[index]
    }

    pub fn primitives(&self) -> &[PrimitiveEnum] {
        &self.primitives
    }

    /// Material for an arena index. A dangling id renders as the default
    /// black material rather than tearing down the whole render.
    pub fn material(&self, index: usize) -> Material {
        self.materials.get(index).copied().unwrap_or_default()
    }

    pub fn material_for(&self, intersection: &Intersection) -> Material {
        self.material(self.primitive(intersection.primitive).material_id())
    }

    /// Nearest hit across all primitives: strictly smallest positive time
    /// wins, so ties go to the first primitive in arena order.
    pub fn intersect(&self, r: Ray) -> Option<Intersection> {
        let mut nearest: Option<Intersection> = None;
        let mut nearest_time = INFINITY;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(hit) = primitive.intersect(r, 0.0, INFINITY) {
                if hit.time < nearest_time {
                    nearest_time = hit.time;
                    nearest = Some(Intersection {
                        time: hit.time,
                        point: hit.point,
                        normal: hit.normal,
                        primitive: index,
                    });
                }
            }
        }
        nearest
    }
}
