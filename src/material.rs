use crate::math::RGBColor;

/// Flat surface color. Channels are clamped into display range at
/// construction so a scene file with out-of-range values can't push garbage
/// into the film.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: RGBColor,
}

impl Material {
    pub fn new(r: f32, g: f32, b: f32) -> Material {
        Material {
            color: RGBColor::new(
                r.clamp(0.0, 255.0),
                g.clamp(0.0, 255.0),
                b.clamp(0.0, 255.0),
            ),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(0.0, 0.0, 0.0)
    }
}

impl From<[f32; 3]> for Material {
    fn from(channels: [f32; 3]) -> Material {
        Material::new(channels[0], channels[1], channels[2])
    }
}
