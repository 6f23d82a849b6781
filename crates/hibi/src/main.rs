use std::rc::Rc;

use dioxus::prelude::*;
use hibi_io::{CompositePreview, ExportPanel, FileUpload, ImageTabs, ParamControls};
use hibi_pipeline::{BatchOutcome, ParamId, ParamStore, SourceImage};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Manages the core application state via Dioxus signals and wires
/// together the upload, parameter controls, tabbed preview, and export
/// components. Any parameter change or upload triggers a full
/// recomputation of the pipeline for every loaded image before the
/// display refreshes.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut images = use_signal(Vec::<SourceImage>::new);
    let mut store = use_signal(ParamStore::new);
    let mut outcome = use_signal(|| Option::<Rc<BatchOutcome>>::None);
    let mut processing = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);
    let mut selected = use_signal(|| 0usize);

    // --- File upload handler ---
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        images.write().push(SourceImage { name, bytes });
    };

    // --- Parameter change handler ---
    // Both widgets of a parameter funnel through this single write;
    // the store clamps and both re-render from the stored value.
    let on_param_change = move |(id, value): (ParamId, u32)| {
        store.write().set(id, value);
    };

    // --- Batch processing effect ---
    // Re-runs whenever the image list or any parameter changes.
    // Spawns an async task so the "Processing..." indicator renders
    // before the heavy synchronous pipeline work blocks the thread.
    use_effect(move || {
        let sources = images();
        let params = store().params();
        if sources.is_empty() {
            outcome.set(None);
            return;
        }

        // Increment generation so any in-flight task from a prior
        // trigger knows it is stale and should discard its result.
        generation += 1;
        let my_generation = *generation.peek();

        processing.set(true);

        spawn(async move {
            // Yield to the browser event loop so it can paint the
            // "Processing..." state before we block on the pipeline.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let batch = hibi_pipeline::process_batch(&sources, &params);

            // If another run was triggered while we were processing,
            // discard this stale result silently.
            if *generation.peek() != my_generation {
                return;
            }

            let item_count = batch.items.len();
            outcome.set(Some(Rc::new(batch)));
            // Keep the selected tab in range after files come and go.
            if *selected.peek() >= item_count {
                selected.set(0);
            }
            processing.set(false);
        });
    });

    // --- Tab select handler ---
    let on_select = move |index: usize| {
        selected.set(index);
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "hibi" }
                p { class: "muted",
                    "Crack detection: blur, Canny edges, and morphological closing, side by side with the original"
                }
            }

            div { class: "app-main",
                // Left sidebar: parameters + export
                div { class: "sidebar",
                    div { class: "panel",
                        h3 { class: "panel-title", "Parameters" }
                        ParamControls {
                            store: store(),
                            on_change: on_param_change,
                        }
                    }

                    ExportPanel {
                        outcome: outcome(),
                        params: store().params(),
                    }
                }

                // Main content: tabs + preview
                div { class: "content",
                    if processing() {
                        p { class: "processing", "Processing..." }
                    } else if let Some(ref batch) = outcome() {
                        ImageTabs {
                            outcome: Rc::clone(batch),
                            selected: selected(),
                            on_select: on_select,
                        }

                        if batch.is_empty() {
                            p { class: "error-text",
                                "No image could be processed. Try different files."
                            }
                        } else {
                            CompositePreview {
                                outcome: Rc::clone(batch),
                                index: selected(),
                            }
                        }
                    } else {
                        p { class: "placeholder",
                            "Upload an image to get started"
                        }
                    }

                    FileUpload {
                        on_upload: on_upload,
                    }
                }
            }
        }
    }
}
