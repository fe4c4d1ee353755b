#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for geometry operations.
pub mod error;

/// Landmark adapter trait and the hand landmark layout.
pub mod landmark;

/// Distance functions between points.
pub mod ops;

/// N-dimensional point type.
pub mod point;

/// Point cloud construction and normalization.
pub mod pointcloud;

/// Delimited text serialization of point clouds.
pub mod text;

pub use error::GeometryError;
pub use landmark::{HandLandmark, Landmark, NUM_HAND_LANDMARKS};
pub use ops::{distance, distance_to_origin};
pub use point::{origin, Point, PointView};
pub use pointcloud::{PointCloud, PointCloudConfig};
pub use text::DEFAULT_DELIMITER;
