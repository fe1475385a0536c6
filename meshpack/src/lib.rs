//! Procedural mesh buffer packer.
//!
//! Synthesizes vertex directions, derived world positions and triangle
//! indices for a family of shapes into one tightly packed backing store,
//! exposed as three typed regions (u32 indices, f32 normals, f32 positions)
//! that a graphics backend can upload without further transformation.

pub mod math;
pub mod pack;
pub mod shapes;
pub mod util;
