pub mod anim;
pub mod constants;
pub mod geometry;
pub mod morph;
pub mod orbit;
pub mod state;
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use anim::*;
pub use constants::*;
pub use geometry::*;
pub use morph::*;
pub use orbit::*;
pub use state::*;
