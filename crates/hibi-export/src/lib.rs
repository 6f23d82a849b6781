//! hibi-export: Archive and manifest serializers (sans-IO).
//!
//! Packages processed images plus a textual parameter manifest into a
//! zip container. Pure functions over in-memory data -- callers supply
//! the clock and handle delivery (browser download or filesystem).

pub mod archive;
pub mod manifest;

pub use archive::{ArchiveError, archive_filename, build_archive, processed_entry_name};
pub use manifest::ArchiveManifest;
