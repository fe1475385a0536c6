pub mod arena;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod writer;

pub use arena::*;
pub use error::*;
pub use layout::*;
pub use mesh::*;
pub use writer::*;
