mod color;
mod point;
mod ray;
mod vec;

pub use color::*;
pub use point::*;
pub use ray::*;
pub use vec::*;
