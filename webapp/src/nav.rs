use std::sync::Arc;

use dioxus::prelude::*;

use menu_core::{
    config::MenuConfig,
    haptics::Haptic,
    items::TabEntry,
    strip::StripStep,
};

use crate::common::{
    Navigator, PageState, sync_edges,
    dom::{DomViewport, STRIP_ID, haptic},
    labels,
};

#[derive(Clone, PartialEq, Props)]
struct StripTabProps {
    tab: TabEntry,
    active: bool,
}

#[component]
fn StripTab(props: StripTabProps) -> Element {
    let navigator = use_context::<Navigator>();
    let id = props.tab.id.clone();

    rsx! {
        a {
            class: if props.active { "strip-tab active" } else { "strip-tab" },
            href: "#{props.tab.id}",
            "data-id": "{props.tab.id}",
            role: "tab",
            "aria-selected": "{props.active}",
            "aria-controls": "{props.tab.id}",
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                navigator.go(&id);
            },
            span { class: "strip-tab-icon", "aria-hidden": "true", "{props.tab.icon}" }
            span { "{props.tab.title}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct StripStepButtonProps {
    step: StripStep,
    visible: bool,
}

// the overlay buttons at either end of the strip
#[component]
fn StripStepButton(props: StripStepButtonProps) -> Element {
    let mut view = use_context::<Signal<PageState>>();
    let step = props.step;

    let (edge, label, glyph) = match step {
        StripStep::Backward => ("start", labels::SCROLL_BACK, "❮"),
        StripStep::Forward => ("end", labels::SCROLL_FORWARD, "❯"),
    };
    let hidden = if props.visible { "" } else { "hidden" };

    rsx! {
        button {
            class: "strip-step {edge} {hidden}",
            "aria-label": label,
            onclick: move |_| {
                haptic(Haptic::Nudge);
                view.write().step_strip(step, &mut DomViewport::new());
            },
            "{glyph}"
        }
    }
}

// the sticky category strip
#[component]
pub fn TabStrip() -> Element {
    let config = use_context::<Arc<MenuConfig>>();
    let view = use_context::<Signal<PageState>>();

    let tabs = config.tabs();
    let edges = view.read().edges;
    let active = view.read().active_section().map(str::to_owned);

    rsx! {
        nav { class: "strip-nav", "aria-label": labels::CATEGORIES,
            div { class: "strip-frame",
                StripStepButton { step: StripStep::Backward, visible: edges.backward }
                StripStepButton { step: StripStep::Forward, visible: edges.forward }

                div { class: "strip-fade start" }
                div { class: "strip-fade end" }

                div {
                    id: STRIP_ID,
                    class: "strip",
                    role: "tablist",
                    onscroll: move |_| sync_edges(view),
                    for tab in tabs {
                        StripTab {
                            key: "{tab.id}",
                            active: active.as_deref() == Some(tab.id.as_str()),
                            tab: tab.clone(),
                        }
                    }
                }
            }
        }
    }
}
