use std::sync::Arc;

use dioxus::prelude::*;

use menu_core::{config::MenuConfig, contact::CallSurface, haptics::Haptic};

use crate::common::{
    Navigator, PageState,
    dom::{haptic, scroll_to_top},
    labels,
};
use crate::components::call_menu::CallMenuPopover;

// floating contact bar at the bottom of small screens
#[component]
pub fn ActionBar() -> Element {
    let config = use_context::<Arc<MenuConfig>>();
    let mut view = use_context::<Signal<PageState>>();
    let navigator = use_context::<Navigator>();

    let call_open = view.read().call_menu.is_open(CallSurface::ActionBar);
    let first_section = config.first_section().map(str::to_owned);

    rsx! {
        nav { class: "action-bar",
            div { class: "action-bar-inner",
                if call_open {
                    CallMenuPopover { placement: "above" }
                }

                a {
                    class: "action",
                    href: config.contact.whatsapp_order_link(),
                    onclick: move |_| haptic(Haptic::Tap),
                    span { class: "action-icon", "💬" }
                    span { class: "action-label", {labels::WHATSAPP} }
                }

                button {
                    class: if call_open { "action open" } else { "action" },
                    onclick: move |_| {
                        haptic(Haptic::Tap);
                        view.write().call_menu.toggle(CallSurface::ActionBar);
                    },
                    span { class: "action-icon", "📞" }
                    span { class: "action-label", {labels::CALL} }
                }

                button {
                    class: "action-top",
                    onclick: move |_| {
                        haptic(Haptic::Tap);
                        scroll_to_top();
                    },
                    "🔝"
                }

                a {
                    class: "action",
                    href: config.contact.map_link(),
                    target: "_blank",
                    onclick: move |_| haptic(Haptic::Tap),
                    span { class: "action-icon", "📍" }
                    span { class: "action-label", {labels::LOCATION} }
                }

                button {
                    class: "action",
                    onclick: move |_| {
                        if let Some(id) = &first_section {
                            navigator.go(id);
                        }
                    },
                    span { class: "action-icon", "📋" }
                    span { class: "action-label", {labels::MENU} }
                }
            }
        }
    }
}
