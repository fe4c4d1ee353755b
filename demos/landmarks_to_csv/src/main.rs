use argh::FromArgs;
use std::path::PathBuf;

use handpose::{
    geometry::PointCloudConfig,
    io::{csv::append_pointcloud, landmarks::LandmarkReader},
};

#[derive(FromArgs)]
/// Replay a recorded hand landmark stream and append the hand point clouds to a dataset
struct Args {
    /// path to the JSON-lines landmark recording
    #[argh(option, short = 'i')]
    input_path: PathBuf,

    /// path to the dataset to append to
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// the token delimiter of the dataset
    #[argh(option, short = 'd', default = "String::from(\",\")")]
    delimiter: String,

    /// keep every detected hand instead of only the first one
    #[argh(switch)]
    all_hands: bool,

    /// store the raw landmarks without normalization
    #[argh(switch)]
    raw: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = PointCloudConfig {
        normalize: !args.raw,
        ..Default::default()
    };

    let reader = LandmarkReader::open(&args.input_path)?;

    let mut num_frames = 0;
    let mut num_clouds = 0;

    for frame in reader {
        let frame = frame?;
        num_frames += 1;

        if !frame.has_hands() {
            log::debug!("Frame {}: no hand detected", num_frames);
            continue;
        }

        let num_hands = if args.all_hands { frame.hands.len() } else { 1 };

        for (hand_id, cloud) in frame.hand_clouds(&config).take(num_hands).enumerate() {
            match cloud {
                Ok(cloud) => {
                    append_pointcloud(&args.output_path, &cloud, &args.delimiter)?;
                    num_clouds += 1;
                }
                Err(e) => log::warn!("Frame {} hand {}: {}", num_frames, hand_id, e),
            }
        }
    }

    log::info!(
        "Appended {} point clouds from {} frames to {}",
        num_clouds,
        num_frames,
        args.output_path.display()
    );

    Ok(())
}
