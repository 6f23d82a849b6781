//! Pipeline parameters and the shared parameter store.
//!
//! Each of the four parameters is presented through two widgets (a
//! bounded number entry and a bounded slider) that mirror one logical
//! value. [`ParamStore`] is that single source-of-truth cell: both
//! widgets render from it and both write into it, so last-writer-wins
//! and widget agreement hold by construction, independently per
//! parameter.
//!
//! Parity is deliberately *not* coerced here. Blur and kernel size
//! must be odd when they reach the smoothing and morphology kernels,
//! but the stored value may be even — the coercion happens inside the
//! pipeline (see [`effective_odd`]), so an even value displays as-is
//! while the effective processed value is the next odd number.

use serde::{Deserialize, Serialize};

/// Identifies one of the four tunable pipeline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamId {
    /// Gaussian blur kernel size.
    Blur,
    /// Canny low (weak edge) threshold.
    CannyMin,
    /// Canny high (strong edge) threshold.
    CannyMax,
    /// Morphological closing kernel size.
    Kernel,
}

/// Static metadata for one parameter: bounds, step, default, and
/// whether the effective value is coerced to odd inside the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Which parameter this describes.
    pub id: ParamId,
    /// Display label, also used as the manifest key.
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
    /// Widget step increment.
    pub step: u32,
    /// Initial value on first display.
    pub default: u32,
    /// `true` when the pipeline coerces the value to odd before use.
    pub odd_only: bool,
}

/// All four parameter specs in display order.
pub const PARAM_SPECS: [ParamSpec; 4] = [
    ParamSpec {
        id: ParamId::Blur,
        label: "GaussianBlur",
        min: 1,
        max: 20,
        step: 2,
        default: 1,
        odd_only: true,
    },
    ParamSpec {
        id: ParamId::CannyMin,
        label: "Canny Min",
        min: 0,
        max: 500,
        step: 1,
        default: 50,
        odd_only: false,
    },
    ParamSpec {
        id: ParamId::CannyMax,
        label: "Canny Max",
        min: 0,
        max: 500,
        step: 1,
        default: 150,
        odd_only: false,
    },
    ParamSpec {
        id: ParamId::Kernel,
        label: "Kernel Size",
        min: 1,
        max: 20,
        step: 2,
        default: 1,
        odd_only: true,
    },
];

impl ParamId {
    /// Look up the static spec for this parameter.
    #[must_use]
    pub fn spec(self) -> &'static ParamSpec {
        match self {
            Self::Blur => &PARAM_SPECS[0],
            Self::CannyMin => &PARAM_SPECS[1],
            Self::CannyMax => &PARAM_SPECS[2],
            Self::Kernel => &PARAM_SPECS[3],
        }
    }
}

/// Coerce a kernel size to the next odd value.
///
/// Returns `v` unchanged when it is already odd, otherwise `v + 1`.
/// Smoothing and morphology kernels require an odd side length so the
/// kernel has a center pixel.
#[must_use]
pub const fn effective_odd(v: u32) -> u32 {
    if v % 2 == 0 { v + 1 } else { v }
}

/// The current value of each pipeline parameter.
///
/// Values are independent integers; `canny_min` may legally exceed
/// `canny_max` here — the edge-detection step clamps when invoking the
/// detector (see `edge::canny`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Gaussian blur kernel size. Coerced to odd inside the pipeline.
    pub blur: u32,
    /// Canny low threshold.
    pub canny_min: u32,
    /// Canny high threshold.
    pub canny_max: u32,
    /// Morphological closing kernel size. Coerced to odd inside the
    /// pipeline.
    pub kernel: u32,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            blur: ParamId::Blur.spec().default,
            canny_min: ParamId::CannyMin.spec().default,
            canny_max: ParamId::CannyMax.spec().default,
            kernel: ParamId::Kernel.spec().default,
        }
    }
}

/// Single source-of-truth cell for the four parameter values.
///
/// The slider and the number entry for a parameter are projections of
/// the same cell: each read goes through [`ParamStore::get`] and each
/// write through [`ParamStore::set`], which clamps into the
/// parameter's bounds. Whichever widget wrote last determines the
/// value both display next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamStore {
    values: PipelineParams,
}

impl ParamStore {
    /// Create a store holding the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all four values, read immediately before each
    /// pipeline invocation.
    #[must_use]
    pub const fn params(&self) -> PipelineParams {
        self.values
    }

    /// Current value of one parameter (what both widgets display).
    #[must_use]
    pub const fn get(&self, id: ParamId) -> u32 {
        match id {
            ParamId::Blur => self.values.blur,
            ParamId::CannyMin => self.values.canny_min,
            ParamId::CannyMax => self.values.canny_max,
            ParamId::Kernel => self.values.kernel,
        }
    }

    /// Write a value from either widget, clamped into the parameter's
    /// bounds. Returns the stored value.
    pub fn set(&mut self, id: ParamId, value: u32) -> u32 {
        let spec = id.spec();
        let clamped = value.clamp(spec.min, spec.max);
        match id {
            ParamId::Blur => self.values.blur = clamped,
            ParamId::CannyMin => self.values.canny_min = clamped,
            ParamId::CannyMax => self.values.canny_max = clamped,
            ParamId::Kernel => self.values.kernel = clamped,
        }
        clamped
    }
}
