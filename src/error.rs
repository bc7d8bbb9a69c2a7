use thiserror::Error;

/// Top-level error type for the Frustra kernel.
#[derive(Debug, Error)]
pub enum FrustraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A perspective projection point lies in the plane of the viewpoint.
    #[error("point at z = {point_z} is coplanar with the viewpoint at z = {viewpoint_z}")]
    CoplanarViewpoint { point_z: f64, viewpoint_z: f64 },

    #[error("projection produced a non-finite coordinate")]
    NonFinite,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Matrix product called with shapes that do not line up.
    #[error("cannot multiply a {left:?} matrix by a {right:?} matrix")]
    NonConformant {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors reported by the drawing document collaborator.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("drawing document is unavailable")]
    Unavailable,

    #[error("unknown {0} handle")]
    UnknownHandle(&'static str),

    #[error("degenerate command: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`FrustraError`].
pub type Result<T> = std::result::Result<T, FrustraError>;
