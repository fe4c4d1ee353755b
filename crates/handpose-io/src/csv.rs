use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use handpose_geometry::{GeometryError, PointCloud, PointCloudConfig};

/// Error types for the CSV module.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// Error reading or writing file
    #[error("error reading or writing file")]
    Io(#[from] std::io::Error),

    /// A line does not describe a valid point cloud
    #[error("Invalid point cloud at line {line}: {source}")]
    Line {
        /// Line number, starting at 1.
        line: usize,
        /// The underlying error.
        source: GeometryError,
    },
}

/// Read a point cloud dataset, one cloud per line.
///
/// Blank lines are skipped.
///
/// # Arguments
///
/// * `path` - The path to the dataset file.
/// * `delimiter` - The token separator.
/// * `config` - The shape of every cloud and whether to normalize it.
///
/// # Returns
///
/// The point clouds in file order.
pub fn read_pointclouds(
    path: impl AsRef<Path>,
    delimiter: &str,
    config: &PointCloudConfig,
) -> Result<Vec<PointCloud>, CsvError> {
    // open the file and create a buffered reader
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let clouds = reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(parse_line(i + 1, &line, delimiter, config)),
            Err(e) => Some(Err(CsvError::from(e))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Read {} point clouds from {}",
        clouds.len(),
        path.as_ref().display()
    );

    Ok(clouds)
}

/// Write a point cloud dataset, one cloud per line.
///
/// An existing file is truncated.
pub fn write_pointclouds<'a>(
    path: impl AsRef<Path>,
    clouds: impl IntoIterator<Item = &'a PointCloud>,
    delimiter: &str,
) -> Result<(), CsvError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    let mut num_clouds = 0usize;
    for cloud in clouds {
        writeln!(writer, "{}", cloud.to_delimited_text(delimiter))?;
        num_clouds += 1;
    }
    writer.flush()?;

    log::debug!(
        "Wrote {} point clouds to {}",
        num_clouds,
        path.as_ref().display()
    );

    Ok(())
}

/// Append a single point cloud to a dataset, creating the file if needed.
pub fn append_pointcloud(
    path: impl AsRef<Path>,
    cloud: &PointCloud,
    delimiter: &str,
) -> Result<(), CsvError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    writeln!(file, "{}", cloud.to_delimited_text(delimiter))?;
    Ok(())
}

fn parse_line(
    line_number: usize,
    line: &str,
    delimiter: &str,
    config: &PointCloudConfig,
) -> Result<PointCloud, CsvError> {
    PointCloud::from_delimited_text(line, delimiter, config).map_err(|source| CsvError::Line {
        line: line_number,
        source,
    })
}
