//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Allowed file extensions for image uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check whether a filename has an allowed image extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called once per successfully read file with `(bytes, filename)`.
    on_upload: EventHandler<(Vec<u8>, String)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts PNG and JPEG images, several per selection. Each file is
/// validated and read independently; one unreadable file does not
/// block the others.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut loaded = use_signal(|| Vec::<String>::new());
    let mut error = use_signal(|| Option::<String>::None);

    // Validate, read, and forward every file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the validation/read/callback logic
    // lives in one place.
    let process_files = move |files: Vec<FileData>| async move {
        for file in files {
            let name = file.name();
            if !has_allowed_extension(&name) {
                error.set(Some(format!("Unsupported file type: {name}")));
                continue;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    loaded.write().push(name.clone());
                    error.set(None);
                    props.on_upload.call((bytes.to_vec(), name));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to read {name}: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone-drag"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if !loaded().is_empty() {
                p { class: "upload-loaded",
                    "Loaded: {loaded().join(\", \")}"
                }
            }

            if let Some(ref err) = error() {
                p { class: "error-text", "{err}" }
            }

            p { class: "muted", "Drop images here or " }

            label { class: "btn",
                input {
                    r#type: "file",
                    accept: ".png,.jpg,.jpeg",
                    multiple: true,
                    class: "hidden-input",
                    onchange: handle_files,
                }
                "Choose Files"
            }

            p { class: "upload-hint", "PNG, JPEG" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        assert!(has_allowed_extension("wall.png"));
        assert!(has_allowed_extension("wall.PNG"));
        assert!(has_allowed_extension("bridge.jpg"));
        assert!(has_allowed_extension("bridge.Jpeg"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("photo.webp"));
        assert!(!has_allowed_extension("photo.bmp"));
    }

    #[test]
    fn rejects_names_without_an_extension() {
        assert!(!has_allowed_extension("photo"));
        assert!(!has_allowed_extension(""));
    }

    #[test]
    fn only_the_final_extension_counts() {
        assert!(has_allowed_extension("archive.tar.png"));
        assert!(!has_allowed_extension("image.png.txt"));
    }
}
