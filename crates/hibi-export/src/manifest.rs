//! Textual parameter manifest bundled into every archive.
//!
//! The manifest records the four parameter values and the source image
//! names at archive-build time. It is regenerated fresh on every
//! export -- nothing persists across sessions -- and its rendering is
//! deterministic so an extracted manifest can be compared verbatim.

use std::fmt::Write;

use hibi_pipeline::{ParamId, PipelineParams};

/// Parameter values and source names recorded alongside an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveManifest {
    /// Parameter snapshot the batch was processed with.
    pub params: PipelineParams,
    /// Original filenames of the exported images, in archive order.
    pub image_names: Vec<String>,
}

impl ArchiveManifest {
    /// Build a manifest from a parameter snapshot and image names.
    #[must_use]
    pub const fn new(params: PipelineParams, image_names: Vec<String>) -> Self {
        Self {
            params,
            image_names,
        }
    }

    /// Render the manifest as plain text: one `Key: Value` line per
    /// parameter plus an `Original Image Path` line with the
    /// comma-joined source names.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let lines = [
            (ParamId::Blur, self.params.blur),
            (ParamId::CannyMin, self.params.canny_min),
            (ParamId::CannyMax, self.params.canny_max),
            (ParamId::Kernel, self.params.kernel),
        ];
        for (id, value) in lines {
            let _ = writeln!(text, "{}: {value}", id.spec().label);
        }
        let _ = writeln!(text, "Original Image Path: {}", self.image_names.join(", "));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_all_parameters_and_names() {
        let manifest = ArchiveManifest::new(
            PipelineParams {
                blur: 3,
                canny_min: 40,
                canny_max: 160,
                kernel: 5,
            },
            vec!["wall.png".into(), "bridge.jpg".into()],
        );
        assert_eq!(
            manifest.to_text(),
            "GaussianBlur: 3\n\
             Canny Min: 40\n\
             Canny Max: 160\n\
             Kernel Size: 5\n\
             Original Image Path: wall.png, bridge.jpg\n",
        );
    }

    #[test]
    fn empty_image_list_renders_empty_path_line() {
        let manifest = ArchiveManifest::new(PipelineParams::default(), vec![]);
        let text = manifest.to_text();
        assert!(text.ends_with("Original Image Path: \n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let manifest =
            ArchiveManifest::new(PipelineParams::default(), vec!["a.png".into()]);
        assert_eq!(manifest.to_text(), manifest.to_text());
    }
}
