mod dielectric;
mod lambertian;
mod metal;
mod phong;

pub use dielectric::DielectricMaterial;
pub use lambertian::LambertianMaterial;
pub use metal::MetalMaterial;
pub use phong::PhongMaterial;
