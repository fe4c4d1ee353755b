use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A point in n-dimensional space with double precision coordinates.
///
/// The dimension is fixed at construction. Arithmetic never mutates a point,
/// every operation returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coordinates: Vec<f64>,
}

/// Named view over the coordinates of a point.
///
/// The `x`, `y` and `z` accessors only exist for points of dimension 1, 2 and
/// 3. Any other dimension, including 0, is exposed as a plain slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointView<'a> {
    /// A 1-dimensional point.
    Line {
        /// x coordinate
        x: f64,
    },
    /// A 2-dimensional point.
    Plane {
        /// x coordinate
        x: f64,
        /// y coordinate
        y: f64,
    },
    /// A 3-dimensional point.
    Space {
        /// x coordinate
        x: f64,
        /// y coordinate
        y: f64,
        /// z coordinate
        z: f64,
    },
    /// A point of any other dimension.
    Other(&'a [f64]),
}

impl Point {
    /// Create a new point from its coordinates.
    ///
    /// An empty sequence gives a point of dimension 0. Such a point only
    /// compares with other 0-dimensional points.
    pub fn new(coordinates: impl Into<Vec<f64>>) -> Self {
        Self {
            coordinates: coordinates.into(),
        }
    }

    /// Create the origin of the given dimension, i.e. all coordinates zero.
    pub fn origin(dimension: usize) -> Self {
        Self {
            coordinates: vec![0.0; dimension],
        }
    }

    /// Get the number of coordinates of the point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Get as reference the coordinates of the point.
    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Consume the point and return its coordinates.
    pub fn into_inner(self) -> Vec<f64> {
        self.coordinates
    }

    /// Iterate over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.coordinates.iter()
    }

    /// Get the coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index >= dimension`.
    pub fn get(&self, index: usize) -> Result<f64, GeometryError> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// Get the named view of the coordinates.
    pub fn view(&self) -> PointView<'_> {
        match self.coordinates.as_slice() {
            &[x] => PointView::Line { x },
            &[x, y] => PointView::Plane { x, y },
            &[x, y, z] => PointView::Space { x, y, z },
            other => PointView::Other(other),
        }
    }

    /// Element-wise addition of two points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Point) -> Result<Point, GeometryError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction of two points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn subtract(&self, other: &Point) -> Result<Point, GeometryError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every coordinate by `factor`.
    pub fn scale(&self, factor: f64) -> Point {
        Point {
            coordinates: self.coordinates.iter().map(|c| c * factor).collect(),
        }
    }

    /// Divide every coordinate by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `factor` is zero.
    pub fn divide(&self, factor: f64) -> Result<Point, GeometryError> {
        if factor == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Point {
            coordinates: self.coordinates.iter().map(|c| c / factor).collect(),
        })
    }

    /// Euclidean distance from the point to the origin of its dimension.
    pub fn norm(&self) -> f64 {
        self.coordinates.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    fn zip_with(
        &self,
        other: &Point,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Point, GeometryError> {
        if self.dimension() != other.dimension() {
            return Err(GeometryError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(Point {
            coordinates: self
                .coordinates
                .iter()
                .zip(other.coordinates.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}

/// Create the origin of the given dimension.
///
/// Built per call so that the reference always matches the caller's dimension.
pub fn origin(dimension: usize) -> Point {
    Point::origin(dimension)
}

impl std::ops::Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Self {
        Self::new(coordinates)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coordinates: [f64; N]) -> Self {
        Self::new(coordinates.to_vec())
    }
}

impl<'a> IntoIterator for &'a Point {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            // debug formatting keeps the fractional part, e.g. `1.0`
            write!(f, "{c:?}")?;
        }
        write!(f, ")")
    }
}
