pub mod error;
pub mod materials;
pub mod ray;
pub mod scatter;
pub mod surface;
pub mod surfaces;
pub mod tolerance;
pub mod util;
pub mod world;

pub use error::{Error, Result};
pub use ray::Ray;
pub use scatter::{Color, Scatter};
pub use surface::{Surface, SurfaceIntersection};
pub use world::World;
