//! Full-size composite preview for the selected image.
//!
//! Displays the original∥processed composite as a PNG `<img>` via a
//! Blob URL. The URL is revoked once the image has loaded (or failed)
//! so repeated re-renders don't leak object URLs.

use std::rc::Rc;

use dioxus::prelude::*;
use hibi_pipeline::BatchOutcome;

use crate::raster;

/// Props for the [`CompositePreview`] component.
#[derive(Props, Clone)]
pub struct CompositePreviewProps {
    /// Current batch outcome.
    /// Wrapped in `Rc` to avoid cloning pixel data on each render.
    outcome: Rc<BatchOutcome>,
    /// Index of the displayed image within `outcome.items`.
    index: usize,
}

impl PartialEq for CompositePreviewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.outcome, &other.outcome) && self.index == other.index
    }
}

/// Renders the side-by-side composite for one image.
#[component]
pub fn CompositePreview(props: CompositePreviewProps) -> Element {
    let Some(item) = props.outcome.items.get(props.index) else {
        return rsx! {
            p { class: "error-text", "No processed image to display." }
        };
    };

    match raster::rgb_image_to_blob_url(&item.result.composite) {
        Ok(url) => {
            let revoke_url = url.clone();
            let error_url = url.clone();
            rsx! {
                figure { class: "preview",
                    img {
                        src: "{url}",
                        class: "preview-img",
                        alt: "Original and processed view of {item.name}",
                        onload: move |_| raster::revoke_blob_url(&revoke_url),
                        onerror: move |_| raster::revoke_blob_url(&error_url),
                    }
                    figcaption { class: "muted", "{item.name}" }
                }
            }
        }
        Err(e) => rsx! {
            p { class: "error-text", "Preview failed: {e}" }
        },
    }
}
