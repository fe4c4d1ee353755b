use crate::{error::GeometryError, point::Point};

/// Compute the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - A point in n-dimensional space.
/// * `b` - Another point with the same dimension.
///
/// # Returns
///
/// The Euclidean distance between the two points.
///
/// # Errors
///
/// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
///
/// Example:
/// ```
/// use handpose_geometry::{distance, Point};
///
/// let a = Point::from([1.0, 2.0, 3.0]);
/// let b = Point::from([4.0, 6.0, 3.0]);
/// assert_eq!(distance(&a, &b).unwrap(), 5.0);
/// ```
pub fn distance(a: &Point, b: &Point) -> Result<f64, GeometryError> {
    if a.dimension() != b.dimension() {
        return Err(GeometryError::DimensionMismatch {
            left: a.dimension(),
            right: b.dimension(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// Compute the Euclidean distance between a point and the origin of its own dimension.
pub fn distance_to_origin(a: &Point) -> f64 {
    a.norm()
}
