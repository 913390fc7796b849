use std::sync::Arc;

use dioxus::prelude::*;

use menu_core::{config::MenuConfig, contact::CallSurface, haptics::Haptic};

use crate::common::{PageState, dom::haptic, labels};
use crate::components::call_menu::CallMenuPopover;

#[component]
pub fn Header() -> Element {
    let config = use_context::<Arc<MenuConfig>>();
    let mut view = use_context::<Signal<PageState>>();

    let is_dark = view.read().theme().is_dark();
    let call_open = view.read().call_menu.is_open(CallSurface::Header);

    rsx! {
        header { class: "site-header",
            div { class: "container",
                div { class: "brand-row",
                    div { class: "brand", onclick: move |_| haptic(Haptic::Tap),
                        span { class: "brand-flame", "aria-hidden": "true", "🔥" }
                        div {
                            h1 { "{config.restaurant.name}" }
                            span { class: "brand-locality", "{config.restaurant.locality}" }
                        }
                    }

                    button {
                        class: "icon-button",
                        "aria-label": if is_dark { labels::LIGHT_MODE } else { labels::DARK_MODE },
                        onclick: move |_| {
                            haptic(Haptic::ThemeToggle);
                            view.write().toggle_theme();
                        },
                        if is_dark { "☀️" } else { "🌙" }
                    }
                }

                div { class: "header-actions",
                    div { class: "call-anchor",
                        button {
                            class: "btn btn-call",
                            onclick: move |_| {
                                haptic(Haptic::Tap);
                                view.write().call_menu.toggle(CallSurface::Header);
                            },
                            span { "aria-hidden": "true", "📞" }
                            span { {labels::CALL_US} }
                        }

                        if call_open {
                            CallMenuPopover { placement: "below" }
                        }
                    }

                    a {
                        class: "btn btn-whatsapp",
                        href: config.contact.whatsapp_link(),
                        "aria-label": labels::WHATSAPP_ARIA,
                        onclick: move |_| haptic(Haptic::Tap),
                        span { "aria-hidden": "true", "💬" }
                        span { {labels::WHATSAPP} }
                    }
                }
            }
        }
    }
}
