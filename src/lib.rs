pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod material;
pub mod math;
pub mod output;
pub mod parsing;
pub mod renderer;
pub mod scene;

pub use camera::PinholeCamera;
pub use error::Error;
pub use film::Film;
pub use geometry::{Primitive, PrimitiveEnum, Sphere, SurfaceHit};
pub use material::Material;
pub use renderer::render;
pub use scene::{Intersection, Scene};
