use std::collections::HashSet;

use leptos::*;
use thiserror::Error;

use crate::components::icons::{MinusIcon, PlusIcon};

/// How many items of an accordion may be expanded at the same time.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AccordionMode {
    /// At most one item open; opening an item closes the rest.
    Single,
    /// Any number of items open independently.
    #[default]
    Multiple,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionError {
    #[error("accordion components must be used within an Accordion container")]
    OutsideContainer,
}

/// Applies one toggle transition to the set of open item values.
///
/// In `Single` mode toggling an open value empties the set, and toggling a
/// closed value makes it the only member. In `Multiple` mode only the
/// membership of `value` flips.
pub fn apply_toggle(open: &mut HashSet<String>, value: &str, mode: AccordionMode) {
    match mode {
        AccordionMode::Single => {
            let was_open = open.contains(value);
            open.clear();
            if !was_open {
                open.insert(value.to_string());
            }
        }
        AccordionMode::Multiple => {
            if !open.remove(value) {
                open.insert(value.to_string());
            }
        }
    }
}

/// Shared accordion state: the mode and the set of currently open values.
///
/// The hosting view owns one of these and passes it explicitly to the
/// container and every item, trigger, and content component. All items start
/// closed; the set only changes through `toggle`.
#[derive(Clone, Copy)]
pub struct AccordionState {
    mode: AccordionMode,
    open_items: RwSignal<HashSet<String>>,
}

impl AccordionState {
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            open_items: create_rw_signal(HashSet::new()),
        }
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Flip the open/closed state of `value` according to the mode.
    pub fn toggle(&self, value: &str) {
        let mode = self.mode;
        self.open_items.update(|open| apply_toggle(open, value, mode));
    }

    /// Reactive read of whether `value` is currently expanded.
    pub fn is_open(&self, value: &str) -> bool {
        self.open_items.with(|open| open.contains(value))
    }

    pub fn open_count(&self) -> usize {
        self.open_items.with(|open| open.len())
    }
}

/// Looks up the state registered by the nearest enclosing `Accordion`.
///
/// Custom children that cannot take the state as a prop can fall back to
/// this; it fails when called outside an `Accordion` container.
pub fn use_accordion() -> Result<AccordionState, AccordionError> {
    use_context::<AccordionState>().ok_or(AccordionError::OutsideContainer)
}

fn data_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Accordion container component.
///
/// The caller creates the `AccordionState` and hands it to the container and
/// to each child, so the data flow stays visible at the call site. The
/// container additionally registers the state for `use_accordion`.
#[component]
pub fn Accordion(
    state: AccordionState,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    provide_context(state);

    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// One collapsible section, identified by a unique `value`.
#[component]
pub fn AccordionItem(
    state: AccordionState,
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion-item {}", extra)
    } else {
        "accordion-item".to_string()
    };

    view! {
        <div
            class=full_class
            data-state=move || data_state(state.is_open(&value))
        >
            {children()}
        </div>
    }
}

/// Heading wrapper around a trigger.
#[component]
pub fn AccordionHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion-header {}", extra)
    } else {
        "accordion-header".to_string()
    };

    view! {
        <h3 class=full_class>
            {children()}
        </h3>
    }
}

/// Button that toggles the item with the given `value` on activation.
#[component]
pub fn AccordionTrigger(
    state: AccordionState,
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion-trigger {}", extra)
    } else {
        "accordion-trigger".to_string()
    };

    let value_state = value.clone();
    let value_icon = value.clone();

    view! {
        <button
            type="button"
            class=full_class
            style="display: flex; gap: 1rem; justify-content: space-between; align-items: center; width: 100%; cursor: pointer;"
            data-state=move || data_state(state.is_open(&value_state))
            on:click=move |_| state.toggle(&value)
        >
            <span class="accordion-trigger-label" style="flex: 1; text-align: left;">
                {children()}
            </span>
            {move || if state.is_open(&value_icon) {
                view! { <MinusIcon size=20 /> }.into_view()
            } else {
                view! { <PlusIcon size=20 /> }.into_view()
            }}
        </button>
    }
}

/// Content region shown while the item with the given `value` is open.
#[component]
pub fn AccordionContent(
    state: AccordionState,
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion-content {}", extra)
    } else {
        "accordion-content".to_string()
    };

    let value_state = value.clone();

    view! {
        <div
            class=full_class
            role="region"
            data-state=move || data_state(state.is_open(&value_state))
            style=move || if state.is_open(&value) {
                "padding: 0.5rem 1rem 1.5rem;"
            } else {
                "display: none;"
            }
        >
            {children()}
        </div>
    }
}
