use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use handpose_geometry::{GeometryError, Landmark, PointCloud, PointCloudConfig};
use serde::{Deserialize, Serialize};

/// Error types for the landmarks module.
#[derive(Debug, thiserror::Error)]
pub enum LandmarkError {
    /// Error reading or writing file
    #[error("error reading or writing file")]
    Io(#[from] std::io::Error),

    /// A line is not a valid frame
    #[error("Invalid frame at line {line}: {source}")]
    Json {
        /// Line number, starting at 1.
        line: usize,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// Failed to serialize a frame
    #[error("Failed to serialize frame: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A landmark in normalized image coordinates as reported by the detector.
///
/// `x` and `y` are in `[0, 1]` relative to the image width and height, `z` is
/// the depth relative to the wrist with roughly the same scale as `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
    /// z coordinate
    pub z: f64,
}

impl Landmark for NormalizedLandmark {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
}

/// The landmarks detected in a single camera frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    /// One landmark list per detected hand. Empty when no hand was found.
    #[serde(default)]
    pub hands: Vec<Vec<NormalizedLandmark>>,
}

impl HandFrame {
    /// Check whether at least one hand was detected.
    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }

    /// Build the point cloud of the first detected hand.
    ///
    /// Returns `None` when the frame has no hand.
    pub fn first_hand_cloud(
        &self,
        config: &PointCloudConfig,
    ) -> Option<Result<PointCloud, GeometryError>> {
        self.hands
            .first()
            .map(|hand| PointCloud::from_landmarks(hand, config))
    }

    /// Build the point cloud of every detected hand, in detection order.
    pub fn hand_clouds<'a>(
        &'a self,
        config: &'a PointCloudConfig,
    ) -> impl Iterator<Item = Result<PointCloud, GeometryError>> + 'a {
        self.hands
            .iter()
            .map(move |hand| PointCloud::from_landmarks(hand, config))
    }
}

/// Iterator over the frames of a JSON-lines landmark recording.
///
/// Every non-blank line holds one [`HandFrame`].
pub struct LandmarkReader<R> {
    reader: R,
    line_number: usize,
    buffer: String,
}

impl<R: BufRead> LandmarkReader<R> {
    /// Create a new reader over a buffered source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl LandmarkReader<BufReader<File>> {
    /// Open a recording file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LandmarkError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for LandmarkReader<R> {
    type Item = Result<HandFrame, LandmarkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line_number = self.line_number;
                    let line = self.buffer.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(
                        serde_json::from_str(line).map_err(|source| LandmarkError::Json {
                            line: line_number,
                            source,
                        }),
                    );
                }
                Err(e) => return Some(Err(LandmarkError::Io(e))),
            }
        }
    }
}

/// Read all the frames of a JSON-lines landmark recording.
///
/// # Arguments
///
/// * `path` - The path to the recording.
///
/// # Returns
///
/// The frames in recording order.
pub fn read_frames(path: impl AsRef<Path>) -> Result<Vec<HandFrame>, LandmarkError> {
    let frames = LandmarkReader::open(path.as_ref())?.collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "Read {} frames from {}",
        frames.len(),
        path.as_ref().display()
    );
    Ok(frames)
}

/// Write frames as a JSON-lines landmark recording.
pub fn write_frames<'a>(
    path: impl AsRef<Path>,
    frames: impl IntoIterator<Item = &'a HandFrame>,
) -> Result<(), LandmarkError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for frame in frames {
        serde_json::to_writer(&mut writer, frame)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
