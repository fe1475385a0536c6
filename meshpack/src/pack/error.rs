use thiserror::Error;

/// Failure modes of a single generation pass.
///
/// All of these abort the pass for the shape that raised them; the partially
/// written backing store is dropped with the error and never reaches a
/// consumer. Generation is deterministic, so retrying with the same
/// descriptor cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    /// A planned region is empty, or a write landed past its capacity.
    #[error("region sized for {capacity} entries cannot accept entry {index}")]
    Sizing { index: usize, capacity: usize },

    /// An input face is not a quad.
    #[error("face {face} has {arity} corners, expected a quad")]
    UnsupportedTopology { face: usize, arity: usize },

    /// A face references a vertex outside the mesh.
    #[error("vertex index {index} is outside the mesh's {limit} vertices")]
    IndexOutOfRange { index: u32, limit: u32 },
}
