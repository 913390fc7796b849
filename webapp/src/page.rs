use std::sync::Arc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};

use menu_core::{config::MenuConfig, nav::ObservationZone, view::ViewState};

use crate::common::{
    Navigator, PageState, sync_edges,
    dom::{DomViewport, apply_theme},
    labels,
    observer::{SectionObserver, WindowListener},
    storage::LocalPreferences,
};
use crate::components::{
    action_bar::ActionBar, additions::AdditionsCard, footer::Footer, header::Header,
    section::SectionCard,
};
use crate::nav::TabStrip;

// dom hooks that live as long as the page
struct PageBindings {
    _observer: Option<SectionObserver>,
    _resize: Option<WindowListener>,
}

#[component]
pub fn MenuPage() -> Element {
    let config = use_context::<Arc<MenuConfig>>();

    let view: Signal<PageState> = use_context_provider(|| {
        let keys = config.tabs().into_iter().map(|tab| tab.id).collect();
        Signal::new(ViewState::new(keys, config.direction, LocalPreferences))
    });

    let settle = use_signal(|| None::<Timeout>);
    use_context_provider(|| Navigator::new(view, settle));

    // presentation flag on the document root
    let theme = use_memo(move || view.read().theme());
    use_effect(move || apply_theme(theme()));

    let mut bindings = use_signal(|| None::<PageBindings>);
    let keys = use_hook(|| view.peek().nav.keys().to_vec());

    // the anchors exist once the first render is mounted
    use_effect(move || {
        let mut view = view;

        // peek first so a batch that changes nothing does not re-render the page
        let observer = SectionObserver::observe(&keys, ObservationZone::default(), move |batch| {
            if view.peek().nav.pending(&batch).is_some() {
                view.write().observe(&batch, &mut DomViewport::new());
            }
        });
        if observer.is_none() {
            warn!("section observer unavailable, tabs will only follow clicks");
        }

        let resize = WindowListener::new("resize", move || {
            view.write().recenter(&mut DomViewport::new());
        });

        sync_edges(view);

        debug!(sections = keys.len(), "page bindings installed");
        bindings.set(Some(PageBindings {
            _observer: observer,
            _resize: resize,
        }));
    });

    let dir = config.direction.as_str();
    let restaurant = &config.restaurant;

    rsx! {
        div { class: "page", dir: dir,
            Header {}
            TabStrip {}

            main { class: "page-main",
                div { class: "card hero-card",
                    div { class: "open-now",
                        span { class: "open-dot", "aria-hidden": "true" }
                        span { {labels::OPEN_NOW} }
                    }
                    h2 { "{restaurant.headline}" }
                    p { "{restaurant.tagline}" }
                    div { class: "hero-flame", "aria-hidden": "true", "🔥" }
                }

                for (idx, section) in config.sections.iter().enumerate() {
                    SectionCard { key: "{section.id}", first: idx == 0, section: section.clone() }
                }

                AdditionsCard {}
                Footer {}
            }

            ActionBar {}
        }
    }
}
