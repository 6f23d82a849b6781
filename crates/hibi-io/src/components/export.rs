//! Export panel component with the archive download button.

use std::rc::Rc;

use dioxus::prelude::*;
use hibi_export::ArchiveManifest;
use hibi_pipeline::{BatchOutcome, PipelineParams};

use crate::clock;
use crate::download;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone)]
pub struct ExportPanelProps {
    /// The batch outcome to export. `None` disables the button.
    /// Wrapped in `Rc` to avoid cloning pixel data on each render.
    outcome: Option<Rc<BatchOutcome>>,
    /// Parameter snapshot recorded in the manifest.
    params: PipelineParams,
}

impl PartialEq for ExportPanelProps {
    fn eq(&self, other: &Self) -> bool {
        let outcomes_eq = match (&self.outcome, &other.outcome) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        outcomes_eq && self.params == other.params
    }
}

/// Export panel with the zip download button.
///
/// Builds the archive fresh on every click: manifest first, then one
/// processed PNG per image. Failures surface as a visible message and
/// abort the export without delivering a partial archive.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let has_outcome = props.outcome.is_some();
    let mut export_error = use_signal(|| Option::<String>::None);

    // Clear stale export errors when the batch outcome changes.
    let outcome_present = props.outcome.is_some();
    use_effect(move || {
        // Subscribe to outcome_present so this fires on each change.
        let _ = outcome_present;
        export_error.set(None);
    });

    let zip_click = {
        let outcome = props.outcome.clone();
        let params = props.params;
        move |_| {
            let Some(ref outcome) = outcome else {
                return;
            };
            let manifest = ArchiveManifest::new(params, outcome.image_names());
            let timestamp = clock::now_utc();

            let archive = hibi_export::archive_filename(timestamp).and_then(|filename| {
                hibi_export::build_archive(&outcome.archive_entries(), &manifest, timestamp)
                    .map(|bytes| (filename, bytes))
            });

            match archive {
                Ok((filename, bytes)) => {
                    if let Err(e) =
                        download::trigger_bytes_download(&bytes, &filename, "application/zip")
                    {
                        export_error.set(Some(format!("Download failed: {e}")));
                    } else {
                        export_error.set(None);
                    }
                }
                Err(e) => {
                    export_error.set(Some(format!("Export failed: {e}")));
                }
            }
        }
    };

    rsx! {
        div { class: "panel",
            h3 { class: "panel-title", "Export" }

            if let Some(ref err) = export_error() {
                p { class: "error-text", "{err}" }
            }

            button {
                class: if has_outcome { "btn" } else { "btn btn-disabled" },
                disabled: !has_outcome,
                onclick: zip_click,
                "Download ZIP"
            }

            p { class: "muted",
                "Processed images plus a parameter manifest."
            }
        }
    }
}
