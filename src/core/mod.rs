pub mod animation;
pub mod camera;
pub mod capability;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod fallback;
pub mod gesture;
pub mod particles;
pub mod shapes;

pub use animation::*;
pub use camera::*;
pub use capability::*;
pub use color::*;
pub use config::*;
pub use controls::*;
pub use gesture::*;
pub use particles::*;
pub use shapes::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
