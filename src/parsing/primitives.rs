use crate::error::Error;
use crate::geometry::{PrimitiveEnum, Sphere};
use crate::math::Point3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: [f32; 3],
        radius: f32,
        material: String,
    },
}

impl PrimitiveData {
    pub fn material_name(&self) -> &str {
        match self {
            Self::Sphere { material, .. } => material,
        }
    }

    pub fn transform(self, material_id: usize) -> Result<PrimitiveEnum, Error> {
        match self {
            Self::Sphere { origin, radius, .. } => Ok(PrimitiveEnum::Sphere(Sphere::new(
                radius,
                Point3::from(origin),
                material_id,
            )?)),
        }
    }
}
