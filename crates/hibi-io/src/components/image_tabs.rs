//! Tab strip for switching between uploaded images.
//!
//! One tab per successfully processed image; failed files are shown
//! as disabled tabs carrying the error message in their tooltip.

use std::rc::Rc;

use dioxus::prelude::*;
use hibi_pipeline::BatchOutcome;

/// Props for the [`ImageTabs`] component.
#[derive(Props, Clone)]
pub struct ImageTabsProps {
    /// Current batch outcome.
    outcome: Rc<BatchOutcome>,
    /// Index of the selected tab within `outcome.items`.
    selected: usize,
    /// Callback fired when a tab is clicked.
    on_select: EventHandler<usize>,
}

impl PartialEq for ImageTabsProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.outcome, &other.outcome) && self.selected == other.selected
    }
}

/// Horizontal strip of image tabs.
#[component]
pub fn ImageTabs(props: ImageTabsProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div { class: "tab-strip",
            for (index, item) in props.outcome.items.iter().enumerate() {
                {
                    let is_selected = index == props.selected;
                    let class = if is_selected { "tab tab-active" } else { "tab" };
                    let name = item.name.clone();
                    rsx! {
                        button {
                            class: "{class}",
                            onclick: move |_| on_select.call(index),
                            "aria-pressed": "{is_selected}",
                            "{name}"
                        }
                    }
                }
            }

            for failure in props.outcome.failures.iter() {
                button {
                    class: "tab tab-failed",
                    disabled: true,
                    title: "{failure.error}",
                    "{failure.name}"
                }
            }
        }
    }
}
