//! Zip container assembly for processed images.
//!
//! Builds the downloadable archive entirely in memory: the manifest
//! entry first, then one PNG per processed image in input order. The
//! archive is rebuilt from scratch on every invocation -- there is no
//! incremental or cached state. The caller supplies the timestamp so
//! this crate stays clock-free.

use std::io::{Cursor, Write};

use image::ImageEncoder;
use time::OffsetDateTime;
use time::macros::format_description;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use hibi_pipeline::RgbImage;

use crate::manifest::ArchiveManifest;

/// Errors that can occur while assembling an archive.
///
/// Any failure aborts the export; no partial archive is delivered.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The zip writer rejected an entry or failed to finalize.
    #[error("failed to write archive: {0}")]
    Write(#[from] zip::result::ZipError),

    /// An entry body could not be written.
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),

    /// A processed image could not be encoded as PNG.
    #[error("failed to encode processed image: {0}")]
    PngEncode(#[from] image::ImageError),

    /// The timestamp could not be formatted.
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Format a timestamp as `YYYY-MM-DD_HH-MM-SS` for entry and archive
/// filenames.
///
/// # Errors
///
/// Returns [`ArchiveError::Timestamp`] if formatting fails.
pub fn timestamp_label(timestamp: OffsetDateTime) -> Result<String, ArchiveError> {
    let format = format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(timestamp.format(&format)?)
}

/// Download filename for an archive built at `timestamp`:
/// `processed_data_<YYYY-MM-DD_HH-MM-SS>.zip`.
///
/// # Errors
///
/// Returns [`ArchiveError::Timestamp`] if formatting fails.
pub fn archive_filename(timestamp: OffsetDateTime) -> Result<String, ArchiveError> {
    Ok(format!("processed_data_{}.zip", timestamp_label(timestamp)?))
}

/// Archive entry name for a processed image: the original filename's
/// stem with a `_processed.png` suffix.
#[must_use]
pub fn processed_entry_name(original_name: &str) -> String {
    let stem = original_name
        .rsplit_once('.')
        .map_or(original_name, |(stem, _ext)| stem);
    format!("{stem}_processed.png")
}

/// Build the export archive: manifest first, then one
/// `<stem>_processed.png` entry per image in input order.
///
/// Returns the complete zip container as bytes, ready for download or
/// for writing to disk. An empty `images` slice yields an archive
/// containing only the manifest.
///
/// # Errors
///
/// Returns [`ArchiveError`] if PNG encoding, entry writing, or
/// finalization fails; in that case no archive bytes are produced.
pub fn build_archive(
    images: &[(String, RgbImage)],
    manifest: &ArchiveManifest,
    timestamp: OffsetDateTime,
) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    // Manifest entry first.
    let manifest_name = format!("parameters_{}.txt", timestamp_label(timestamp)?);
    writer.start_file(manifest_name, options)?;
    writer.write_all(manifest.to_text().as_bytes())?;

    // Then one PNG per image, in input order.
    for (name, processed) in images {
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder.write_image(
            processed.as_raw(),
            processed.width(),
            processed.height(),
            image::ExtendedColorType::Rgb8,
        )?;

        writer.start_file(processed_entry_name(name), options)?;
        writer.write_all(&png_bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamp_label_matches_pattern() {
        let ts = datetime!(2026-08-30 14:05:09 UTC);
        assert_eq!(timestamp_label(ts).unwrap(), "2026-08-30_14-05-09");
    }

    #[test]
    fn archive_filename_matches_pattern() {
        let ts = datetime!(2026-01-02 03:04:05 UTC);
        assert_eq!(
            archive_filename(ts).unwrap(),
            "processed_data_2026-01-02_03-04-05.zip",
        );
    }

    #[test]
    fn entry_name_strips_extension() {
        assert_eq!(processed_entry_name("wall.png"), "wall_processed.png");
        assert_eq!(processed_entry_name("crack.scan.jpg"), "crack.scan_processed.png");
    }

    #[test]
    fn entry_name_without_extension() {
        assert_eq!(processed_entry_name("wall"), "wall_processed.png");
    }
}
