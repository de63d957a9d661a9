use std::ops::{Add, AddAssign, Mul};

/// Flat RGB color with channels in display range, 0.0 to 255.0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);

    pub fn as_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for RGBColor {
    fn default() -> Self {
        RGBColor::ZERO
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(other: [f32; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}
