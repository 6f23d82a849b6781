//! Dioxus UI components for hibi.
//!
//! Provides the multi-file upload zone, the paired slider/number
//! parameter controls, the per-image tab strip, the composite preview,
//! and the export panel.

mod export;
mod image_tabs;
mod param_controls;
mod preview;
mod upload;

pub use export::ExportPanel;
pub use image_tabs::ImageTabs;
pub use param_controls::ParamControls;
pub use preview::CompositePreview;
pub use upload::FileUpload;
