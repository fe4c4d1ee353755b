use serde::{Deserialize, Serialize};

use crate::{
    error::GeometryError,
    landmark::{HandLandmark, Landmark, NUM_HAND_LANDMARKS},
    ops::distance,
    point::Point,
};

/// Shape and normalization parameters used to build a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCloudConfig {
    /// Number of coordinates per point.
    pub dimension: usize,
    /// Number of points in the cloud.
    pub point_count: usize,
    /// Whether to normalize the cloud right after construction.
    pub normalize: bool,
}

impl Default for PointCloudConfig {
    /// A single tracked hand: 21 landmarks in 3D, normalized.
    fn default() -> Self {
        Self {
            dimension: 3,
            point_count: NUM_HAND_LANDMARKS,
            normalize: true,
        }
    }
}

/// An ordered point cloud in n-dimensional space.
///
/// All points share the same dimension and keep the order of the input, which
/// for hand landmarks is the landmark index order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    // The points of the cloud, never empty.
    points: Vec<Point>,
    // The dimension shared by all the points.
    dimension: usize,
}

impl PointCloud {
    /// Create a point cloud from a flat sequence of coordinates.
    ///
    /// The first `dimension` values form point 0, the next `dimension` values
    /// form point 1, and so on.
    ///
    /// # Arguments
    ///
    /// * `raw` - The coordinates of all the points, row-major.
    /// * `dimension` - The number of coordinates per point.
    /// * `point_count` - The number of points.
    /// * `normalize` - Whether to run [`PointCloud::normalize`] before returning.
    ///
    /// # Errors
    ///
    /// * [`GeometryError::EmptyShape`] if `dimension` or `point_count` is zero.
    /// * [`GeometryError::ShapeMismatch`] if `raw.len() != dimension * point_count`.
    /// * Any error of [`PointCloud::normalize`] when `normalize` is set.
    ///
    /// Example:
    /// ```
    /// use handpose_geometry::{Point, PointCloud};
    ///
    /// let raw = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    /// let cloud = PointCloud::new(&raw, 3, 3, true).unwrap();
    /// assert_eq!(cloud.points()[1], Point::from([1.0, 0.0, 0.0]));
    /// ```
    pub fn new(
        raw: &[f64],
        dimension: usize,
        point_count: usize,
        normalize: bool,
    ) -> Result<Self, GeometryError> {
        if dimension == 0 || point_count == 0 {
            return Err(GeometryError::EmptyShape {
                dimension,
                point_count,
            });
        }

        let expected = dimension.saturating_mul(point_count);
        if raw.len() != expected {
            return Err(GeometryError::ShapeMismatch {
                expected,
                actual: raw.len(),
            });
        }

        let points = raw
            .chunks_exact(dimension)
            .map(|chunk| Point::new(chunk.to_vec()))
            .collect();

        let mut cloud = Self { points, dimension };

        if normalize {
            cloud.normalize()?;
        }

        Ok(cloud)
    }

    /// Create a point cloud from a flat sequence of coordinates using a [`PointCloudConfig`].
    pub fn from_config(raw: &[f64], config: &PointCloudConfig) -> Result<Self, GeometryError> {
        Self::new(raw, config.dimension, config.point_count, config.normalize)
    }

    /// Create a point cloud from the landmarks reported by a hand tracking model.
    ///
    /// The `(x, y, z)` triple of every landmark is flattened in order and
    /// reshaped according to `config`.
    ///
    /// # Errors
    ///
    /// The same errors as [`PointCloud::new`].
    pub fn from_landmarks<L: Landmark>(
        landmarks: impl IntoIterator<Item = L>,
        config: &PointCloudConfig,
    ) -> Result<Self, GeometryError> {
        let raw = landmarks
            .into_iter()
            .flat_map(|lm| [lm.x(), lm.y(), lm.z()])
            .collect::<Vec<_>>();
        Self::from_config(&raw, config)
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get the dimension shared by all the points.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the point cloud and return its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Get the point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Get the point of a hand landmark, if the cloud holds that many points.
    pub fn landmark(&self, landmark: HandLandmark) -> Option<&Point> {
        self.get(landmark.index())
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Flatten the coordinates of all the points, row-major.
    pub fn to_raw(&self) -> Vec<f64> {
        self.points
            .iter()
            .flat_map(|p| p.iter().copied())
            .collect()
    }

    /// Largest distance between the first point and any other point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NormalizationError`] if the cloud has a single point.
    pub fn max_distance_from_first(&self) -> Result<f64, GeometryError> {
        let Some((first, rest)) = self.points.split_first() else {
            return Err(GeometryError::NormalizationError(
                "the point cloud is empty".to_string(),
            ));
        };

        if rest.is_empty() {
            return Err(GeometryError::NormalizationError(
                "a single point gives no scale reference".to_string(),
            ));
        }

        rest.iter().try_fold(0.0f64, |max, p| {
            let d = distance(p, first)?;
            Ok::<_, GeometryError>(max.max(d))
        })
    }

    /// Normalize the points relative to the first point.
    ///
    /// Every point `p` becomes `(p - first) / max_distance`, where
    /// `max_distance` is the largest distance from the first point to any
    /// other point. Afterwards the first point is the zero vector and the
    /// farthest point lies at unit distance from it.
    ///
    /// Calling it again on a normalized cloud leaves it unchanged up to
    /// rounding. On any other input the reference is recomputed from the
    /// current points, so the operation is not idempotent in general.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NormalizationError`] if the cloud has a single
    /// point or all its points coincide. The cloud is left unchanged.
    pub fn normalize(&mut self) -> Result<(), GeometryError> {
        let max_distance = self.max_distance_from_first()?;

        if max_distance.is_nan() || max_distance <= 0.0 {
            return Err(GeometryError::NormalizationError(format!(
                "all points coincide with the first one (max distance {max_distance})"
            )));
        }

        let origin = self.points[0].clone();
        let points = self
            .points
            .iter()
            .map(|p| p.subtract(&origin)?.divide(max_distance))
            .collect::<Result<Vec<_>, _>>()?;

        self.points = points;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn random_raw(len: usize) -> Vec<f64> {
        (0..len).map(|_| rand::random::<f64>() * 2.0 - 1.0).collect()
    }

    #[test]
    fn test_pointcloud_new() -> Result<(), GeometryError> {
        let raw = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let cloud = PointCloud::new(&raw, 3, 2, false)?;

        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.point_count(), 2);
        assert_eq!(cloud.dimension(), 3);
        assert!(!cloud.is_empty());
        assert_eq!(cloud.points()[0], Point::from([1.0, 2.0, 3.0]));
        assert_eq!(cloud.points()[1], Point::from([4.0, 5.0, 6.0]));
        assert_eq!(cloud.to_raw(), raw.to_vec());

        // the same coordinates read as three 2D points
        let cloud = PointCloud::new(&raw, 2, 3, false)?;
        assert_eq!(cloud.get(1), Some(&Point::from([3.0, 4.0])));
        assert_eq!(cloud.get(3), None);

        Ok(())
    }

    #[test]
    fn test_pointcloud_shape_mismatch() {
        for dimension in 1..5 {
            for point_count in 1..5 {
                let expected = dimension * point_count;
                for len in [0, expected - 1, expected + 1, expected * 2] {
                    if len == expected {
                        continue;
                    }
                    let raw = vec![0.5; len];
                    assert_eq!(
                        PointCloud::new(&raw, dimension, point_count, false),
                        Err(GeometryError::ShapeMismatch {
                            expected,
                            actual: len
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn test_pointcloud_empty_shape() {
        assert_eq!(
            PointCloud::new(&[], 0, 3, false),
            Err(GeometryError::EmptyShape {
                dimension: 0,
                point_count: 3
            })
        );
        assert_eq!(
            PointCloud::new(&[], 3, 0, false),
            Err(GeometryError::EmptyShape {
                dimension: 3,
                point_count: 0
            })
        );
    }

    #[test]
    fn test_normalize_unit_axes() -> Result<(), GeometryError> {
        let raw = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let cloud = PointCloud::new(&raw, 3, 3, true)?;
        assert_eq!(
            cloud.points(),
            &[
                Point::from([0.0, 0.0, 0.0]),
                Point::from([1.0, 0.0, 0.0]),
                Point::from([0.0, 1.0, 0.0]),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_normalize_scaling() -> Result<(), GeometryError> {
        let raw = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let cloud = PointCloud::new(&raw, 3, 3, true)?;
        assert_eq!(
            cloud.points(),
            &[
                Point::from([0.0, 0.0, 0.0]),
                Point::from([1.0, 0.0, 0.0]),
                Point::from([0.0, 0.0, 0.0]),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_normalize_recenters_on_first_point() -> Result<(), GeometryError> {
        let raw = [1.0, 1.0, 3.0, 1.0, 1.0, 5.0];
        let cloud = PointCloud::new(&raw, 2, 3, true)?;
        assert_eq!(cloud.points()[0], Point::from([0.0, 0.0]));
        assert_relative_eq!(cloud.points()[1][0], 0.5);
        assert_relative_eq!(cloud.points()[1][1], 0.0);
        assert_relative_eq!(cloud.points()[2][0], 0.0);
        assert_relative_eq!(cloud.points()[2][1], 1.0);
        Ok(())
    }

    #[test]
    fn test_normalize_postcondition() -> Result<(), GeometryError> {
        for (dimension, point_count) in [(1, 2), (2, 5), (3, 21), (4, 7)] {
            let raw = random_raw(dimension * point_count);
            let cloud = PointCloud::new(&raw, dimension, point_count, true)?;

            let first = &cloud.points()[0];
            assert!(first.iter().all(|&c| c == 0.0));

            let max_distance = cloud.max_distance_from_first()?;
            assert_relative_eq!(max_distance, 1.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_normalize_twice() -> Result<(), GeometryError> {
        let raw = random_raw(3 * 21);
        let mut cloud = PointCloud::new(&raw, 3, 21, true)?;
        let once = cloud.clone();
        cloud.normalize()?;
        for (a, b) in cloud.to_raw().iter().zip(once.to_raw().iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_normalize_single_point() -> Result<(), GeometryError> {
        assert!(matches!(
            PointCloud::new(&[1.0, 2.0, 3.0], 3, 1, true),
            Err(GeometryError::NormalizationError(_))
        ));

        let mut cloud = PointCloud::new(&[1.0, 2.0, 3.0], 3, 1, false)?;
        assert!(matches!(
            cloud.normalize(),
            Err(GeometryError::NormalizationError(_))
        ));
        assert_eq!(cloud.points()[0], Point::from([1.0, 2.0, 3.0]));
        Ok(())
    }

    #[test]
    fn test_normalize_coincident_points() -> Result<(), GeometryError> {
        let raw = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5];
        let mut cloud = PointCloud::new(&raw, 3, 2, false)?;
        assert!(matches!(
            cloud.normalize(),
            Err(GeometryError::NormalizationError(_))
        ));
        assert_eq!(cloud.to_raw(), raw.to_vec());
        Ok(())
    }

    #[test]
    fn test_from_landmarks() -> Result<(), GeometryError> {
        let landmarks = (0..21)
            .map(|i| [i as f64, 0.5 * i as f64, 0.0])
            .collect::<Vec<_>>();

        let config = PointCloudConfig {
            normalize: false,
            ..Default::default()
        };
        let cloud = PointCloud::from_landmarks(&landmarks, &config)?;
        assert_eq!(cloud.point_count(), 21);
        assert_eq!(
            cloud.landmark(HandLandmark::IndexFingerTip),
            Some(&Point::from([8.0, 4.0, 0.0]))
        );

        let cloud = PointCloud::from_landmarks(&landmarks, &PointCloudConfig::default())?;
        assert_eq!(
            cloud.landmark(HandLandmark::Wrist),
            Some(&Point::from([0.0, 0.0, 0.0]))
        );
        let tip = cloud.landmark(HandLandmark::PinkyTip).map(Point::norm);
        assert_relative_eq!(tip.unwrap_or_default(), 1.0, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn test_from_landmarks_wrong_count() {
        let landmarks = vec![(0.0f64, 0.0f64, 0.0f64); 20];
        assert_eq!(
            PointCloud::from_landmarks(landmarks, &PointCloudConfig::default()),
            Err(GeometryError::ShapeMismatch {
                expected: 63,
                actual: 60
            })
        );
    }

    #[test]
    fn test_config_serde() -> Result<(), serde_json::Error> {
        let config: PointCloudConfig = serde_json::from_str(r#"{"point_count": 5}"#)?;
        assert_eq!(
            config,
            PointCloudConfig {
                dimension: 3,
                point_count: 5,
                normalize: true
            }
        );
        Ok(())
    }
}
