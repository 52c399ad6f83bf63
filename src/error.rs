//! Error types shared across the crate.

/// Result type for voxel operations.
pub type Result<T> = std::result::Result<T, VoxelError>;

#[derive(Debug, thiserror::Error)]
pub enum VoxelError {
    /// A vector with zero spatial (x, y, z) magnitude cannot be normalized.
    #[error("cannot normalize a vector whose x, y and z components are all zero")]
    DegenerateVector,

    #[error("voxel index {index} out of range for scene of {count} voxels")]
    VoxelIndex { index: usize, count: usize },

    #[error("a scene needs at least one voxel")]
    EmptyScene,

    /// Window, renderer or event-pump failure reported by SDL.
    #[error("platform error: {0}")]
    Platform(String),
}

impl From<String> for VoxelError {
    fn from(msg: String) -> Self {
        VoxelError::Platform(msg)
    }
}
