//! Batch crack detection from the command line.
//!
//! Reads image files from disk, runs the crack-detection pipeline over
//! all of them with one shared parameter set, and writes the result
//! archive (processed PNGs plus a parameter manifest) into a
//! destination directory.

use std::path::PathBuf;

use clap::Parser;
use hibi_export::ArchiveManifest;
use hibi_pipeline::{ParamId, ParamStore, SourceImage};
use time::OffsetDateTime;

/// Run the crack-detection pipeline over image files and save the
/// result archive locally.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input image paths (PNG or JPEG).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Destination directory for the result archive.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Gaussian blur kernel size (coerced to odd inside the pipeline).
    #[arg(long, default_value_t = 1)]
    blur: u32,

    /// Canny low threshold.
    #[arg(long, default_value_t = 50)]
    canny_min: u32,

    /// Canny high threshold.
    #[arg(long, default_value_t = 150)]
    canny_max: u32,

    /// Morphological closing kernel size (coerced to odd inside the
    /// pipeline).
    #[arg(long, default_value_t = 1)]
    kernel: u32,
}

impl Args {
    /// Clamp the command-line values into the documented parameter
    /// bounds, the same way the UI widgets do.
    fn into_store(self) -> (Vec<PathBuf>, PathBuf, ParamStore) {
        let mut store = ParamStore::new();
        store.set(ParamId::Blur, self.blur);
        store.set(ParamId::CannyMin, self.canny_min);
        store.set(ParamId::CannyMax, self.canny_max);
        store.set(ParamId::Kernel, self.kernel);
        (self.inputs, self.output, store)
    }
}

/// Read the input files into memory, skipping unreadable paths.
///
/// A path that cannot be read is reported on stderr and dropped, the
/// same way decode failures are handled later: one bad input does not
/// discard the rest of the batch.
fn read_sources(inputs: &[PathBuf]) -> Vec<SourceImage> {
    let mut sources = Vec::with_capacity(inputs.len());
    for path in inputs {
        eprintln!("Reading image from {}", path.display());
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Skipping {}: {e}", path.display());
                continue;
            }
        };
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });
        sources.push(SourceImage { name, bytes });
    }
    sources
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (inputs, output, store) = Args::parse().into_store();
    let params = store.params();

    let sources = read_sources(&inputs);

    eprintln!(
        "Processing {} image(s) with blur={} canny={}..{} kernel={}",
        sources.len(),
        params.blur,
        params.canny_min,
        params.canny_max,
        params.kernel,
    );
    let outcome = hibi_pipeline::process_batch(&sources, &params);

    for failure in &outcome.failures {
        eprintln!("Skipping {}: {}", failure.name, failure.error);
    }
    if outcome.is_empty() {
        return Err("no image could be processed".into());
    }

    let manifest = ArchiveManifest::new(params, outcome.image_names());
    let timestamp = OffsetDateTime::now_utc();
    let archive = hibi_export::build_archive(&outcome.archive_entries(), &manifest, timestamp)?;

    let archive_path = output.join(hibi_export::archive_filename(timestamp)?);
    eprintln!("Saving archive to {}", archive_path.display());
    std::fs::write(&archive_path, archive)?;

    eprintln!("Done.");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_path_is_skipped_not_fatal() {
        let dir = std::env::temp_dir();
        let good = dir.join(format!("hibi_cli_read_{}.png", std::process::id()));
        std::fs::write(&good, [1u8, 2, 3]).unwrap();
        let missing = dir.join("hibi_cli_does_not_exist.png");

        let sources = read_sources(&[missing, good.clone()]);
        std::fs::remove_file(&good).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, good.file_name().unwrap().to_string_lossy());
        assert_eq!(sources[0].bytes, vec![1, 2, 3]);
    }

    #[test]
    fn no_inputs_yields_no_sources() {
        assert!(read_sources(&[]).is_empty());
    }
}
