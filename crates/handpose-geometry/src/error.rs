/// An error type for point and point cloud operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The raw coordinate sequence does not match the requested shape.
    ///
    /// A cloud of `point_count` points in `dimension` dimensions needs exactly
    /// `dimension * point_count` coordinates.
    #[error("Shape mismatch: expected {expected} coordinates, got {actual}")]
    ShapeMismatch {
        /// Number of coordinates implied by the shape.
        expected: usize,
        /// Number of coordinates provided.
        actual: usize,
    },

    /// The requested shape has no points or no dimensions.
    #[error("Invalid shape: dimension ({dimension}) and point count ({point_count}) must be at least 1")]
    EmptyShape {
        /// Requested dimension.
        dimension: usize,
        /// Requested number of points.
        point_count: usize,
    },

    /// Two operands have different dimensions.
    #[error("Dimension mismatch: {left} != {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// A coordinate index is not smaller than the point dimension.
    #[error("Index {index} out of range for point of dimension {dimension}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The dimension of the point.
        dimension: usize,
    },

    /// Scalar division by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A token of a delimited line is not a number.
    #[error("Failed to parse token {index} ({token:?}) as a number")]
    ParseError {
        /// Position of the token in the line, starting at 0.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// The cloud cannot be normalized.
    #[error("Normalization failed: {0}")]
    NormalizationError(String),
}
