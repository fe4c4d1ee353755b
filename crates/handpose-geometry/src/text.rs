use crate::{
    error::GeometryError,
    pointcloud::{PointCloud, PointCloudConfig},
};

/// Default delimiter of the text format.
pub const DEFAULT_DELIMITER: &str = ",";

/// Parse a single token of a delimited line.
fn parse_token(index: usize, token: &str) -> Result<f64, GeometryError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| GeometryError::ParseError {
            index,
            token: token.to_string(),
        })
}

impl PointCloud {
    /// Create a point cloud from a single line of delimited numbers.
    ///
    /// The line holds `dimension * point_count` tokens in row-major order,
    /// without header or trailing delimiter. Whitespace around a token is
    /// ignored, so a line read with its newline still parses.
    ///
    /// # Arguments
    ///
    /// * `line` - The line to parse.
    /// * `delimiter` - The token separator, usually [`DEFAULT_DELIMITER`].
    /// * `config` - The shape of the cloud and whether to normalize it.
    ///
    /// # Errors
    ///
    /// * [`GeometryError::ParseError`] if a token is not a number.
    /// * The errors of [`PointCloud::new`].
    ///
    /// Example:
    /// ```
    /// use handpose_geometry::{PointCloud, PointCloudConfig};
    ///
    /// let config = PointCloudConfig { dimension: 2, point_count: 2, normalize: false };
    /// let cloud = PointCloud::from_delimited_text("1.0;2.0;3.0;4.5", ";", &config).unwrap();
    /// assert_eq!(cloud.to_delimited_text(","), "1.0,2.0,3.0,4.5");
    /// ```
    pub fn from_delimited_text(
        line: &str,
        delimiter: &str,
        config: &PointCloudConfig,
    ) -> Result<Self, GeometryError> {
        let raw = line
            .split(delimiter)
            .enumerate()
            .map(|(index, token)| parse_token(index, token))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_config(&raw, config)
    }

    /// Serialize the coordinates of all the points as a single delimited line.
    ///
    /// Every coordinate is written with the shortest representation that
    /// parses back to the same value, so the output round-trips through
    /// [`PointCloud::from_delimited_text`] exactly.
    pub fn to_delimited_text(&self, delimiter: &str) -> String {
        self.iter()
            .flat_map(|p| p.iter())
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}
