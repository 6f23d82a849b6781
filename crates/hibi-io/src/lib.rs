//! hibi-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, Blob downloads, raster image encoding, and
//! the wall clock, and provides the reusable UI components for the
//! hibi web application.

pub mod clock;
pub mod components;
pub mod download;
pub mod raster;

pub use components::{CompositePreview, ExportPanel, FileUpload, ImageTabs, ParamControls};
