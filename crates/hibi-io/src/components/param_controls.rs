//! Paired slider/number controls for the pipeline parameters.
//!
//! Each parameter renders as a bounded number entry and a bounded
//! range slider sharing one logical value. Both widgets display the
//! value currently held in the parameter store; editing either one
//! fires the same `on_change`, the app writes the store, and both
//! widgets re-render from it — whichever widget the user edited last
//! wins, and the two can never disagree.
//!
//! Odd-parity coercion is *not* applied here: an even stored value
//! displays as-is while the pipeline uses the next odd number.

use dioxus::prelude::*;
use hibi_pipeline::{PARAM_SPECS, ParamId, ParamSpec, ParamStore};

/// Props for the [`ParamControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ParamControlsProps {
    /// Current parameter store snapshot (read-only).
    store: ParamStore,
    /// Callback fired when either widget of any parameter changes.
    on_change: EventHandler<(ParamId, u32)>,
}

/// Renders the four parameter rows, each with its paired widgets.
#[component]
pub fn ParamControls(props: ParamControlsProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div { class: "param-list",
            for spec in PARAM_SPECS {
                {render_param_row(spec, props.store.get(spec.id), on_change)}
            }
        }
    }
}

/// Render one parameter: label, number entry, and range slider bound
/// to the same stored value.
fn render_param_row(spec: ParamSpec, value: u32, on_change: EventHandler<(ParamId, u32)>) -> Element {
    let id = spec.id;
    let parity_note = parity_note(spec, value);

    // Non-numeric or out-of-range text in the number entry is ignored
    // here; the store clamps anything that does parse.
    let number_input = move |e: FormEvent| {
        if let Ok(v) = e.value().parse::<u32>() {
            on_change.call((id, v));
        }
    };
    let slider_input = move |e: FormEvent| {
        match e.value().parse::<u32>() {
            Ok(v) => on_change.call((id, v)),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("slider parse failure: {err:?} from {:?}", e.value()).into(),
                );
            }
        }
    };

    rsx! {
        div { class: "param-row",
            div { class: "param-header",
                label { r#for: "{spec.label}-number",
                    class: "param-label",
                    "{spec.label}"
                }
                span { class: "param-value", "{value}{parity_note}" }
            }
            div { class: "param-inputs",
                input {
                    r#type: "number",
                    id: "{spec.label}-number",
                    min: "{spec.min}",
                    max: "{spec.max}",
                    step: "{spec.step}",
                    value: "{value}",
                    class: "param-number",
                    onchange: number_input,
                }
                input {
                    r#type: "range",
                    id: "{spec.label}-slider",
                    min: "{spec.min}",
                    max: "{spec.max}",
                    step: "{spec.step}",
                    value: "{value}",
                    class: "param-slider",
                    aria_label: "{spec.label} slider",
                    oninput: slider_input,
                }
            }
        }
    }
}

/// Suffix shown next to an odd-only parameter holding an even value,
/// e.g. `" (effective 5)"` for a stored 4. Empty otherwise.
fn parity_note(spec: ParamSpec, value: u32) -> String {
    if spec.odd_only && value % 2 == 0 {
        format!(" (effective {})", hibi_pipeline::effective_odd(value))
    } else {
        String::new()
    }
}
