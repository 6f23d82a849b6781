//! Multi-image orchestration.
//!
//! Runs the pipeline over every uploaded image with one shared
//! parameter snapshot, producing a composite per image for the tabbed
//! display and the aggregated processed-buffer list for the archive
//! builder. There is no per-image parameter override.

use crate::params::PipelineParams;
use crate::types::{PipelineError, ProcessResult, RgbImage};

/// One uploaded image: its original filename and raw bytes.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Original filename as uploaded (including extension).
    pub name: String,
    /// Raw encoded file bytes.
    pub bytes: Vec<u8>,
}

/// Successful pipeline run for one image.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Original filename of the source image.
    pub name: String,
    /// Full pipeline output for this image.
    pub result: ProcessResult,
}

/// Failed pipeline run for one image.
///
/// A failure covers only its own file; the rest of the batch still
/// processes.
#[derive(Debug)]
pub struct BatchFailure {
    /// Original filename of the source image.
    pub name: String,
    /// Why processing failed.
    pub error: PipelineError,
}

/// Outcome of processing a whole batch with one parameter snapshot.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully processed images, in upload order.
    pub items: Vec<BatchItem>,
    /// Per-file failures, in upload order.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// `(name, processed)` pairs for the archive builder, in upload
    /// order.
    #[must_use]
    pub fn archive_entries(&self) -> Vec<(String, RgbImage)> {
        self.items
            .iter()
            .map(|item| (item.name.clone(), item.result.processed.clone()))
            .collect()
    }

    /// Original filenames of the successfully processed images.
    #[must_use]
    pub fn image_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    /// `true` when no image processed successfully.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Process every image in the batch with the given parameters.
///
/// Each image runs through the full pipeline independently; a file
/// that fails to decode is recorded in `failures` without aborting the
/// others. All images see the same parameter values, sampled once by
/// the caller before invocation.
#[must_use]
pub fn process_batch(images: &[SourceImage], params: &PipelineParams) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for source in images {
        match crate::process(&source.bytes, params) {
            Ok(result) => outcome.items.push(BatchItem {
                name: source.name.clone(),
                result,
            }),
            Err(error) => outcome.failures.push(BatchFailure {
                name: source.name.clone(),
                error,
            }),
        }
    }
    outcome
}
