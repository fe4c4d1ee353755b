use argh::FromArgs;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use handpose::{
    geometry::{PointCloud, PointCloudConfig},
    io::csv::write_pointclouds,
};

#[derive(FromArgs)]
/// Normalize a dataset of raw hand landmarks, one point cloud per line
struct Args {
    /// path to the input dataset
    #[argh(option, short = 'i')]
    input_path: PathBuf,

    /// path to the output dataset
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// the token delimiter
    #[argh(option, short = 'd', default = "String::from(\",\")")]
    delimiter: String,

    /// the number of coordinates per point
    #[argh(option, default = "3")]
    dimension: usize,

    /// the number of points per cloud
    #[argh(option, short = 'n', default = "21")]
    point_count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = PointCloudConfig {
        dimension: args.dimension,
        point_count: args.point_count,
        normalize: true,
    };

    let reader = BufReader::new(File::open(&args.input_path)?);

    let mut clouds = Vec::new();
    let mut num_skipped = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // a malformed frame is skipped, the rest of the dataset is still usable
        match PointCloud::from_delimited_text(&line, &args.delimiter, &config) {
            Ok(cloud) => clouds.push(cloud),
            Err(e) => {
                log::warn!("Skipping line {}: {}", i + 1, e);
                num_skipped += 1;
            }
        }
    }

    write_pointclouds(&args.output_path, &clouds, &args.delimiter)?;

    log::info!(
        "Normalized {} point clouds ({} skipped) into {}",
        clouds.len(),
        num_skipped,
        args.output_path.display()
    );

    Ok(())
}
