use std::sync::Arc;

use dioxus::prelude::*;

use menu_core::{config::MenuConfig, haptics::Haptic};

use crate::common::{PageState, dom::haptic};

#[derive(Clone, PartialEq, Props)]
pub struct CallMenuPopoverProps {
    // "below" the header button or "above" the action bar
    placement: &'static str,
}

// the phone numbers, one per carrier; picking one or tapping outside closes it
#[component]
pub fn CallMenuPopover(props: CallMenuPopoverProps) -> Element {
    let config = use_context::<Arc<MenuConfig>>();
    let mut view = use_context::<Signal<PageState>>();

    rsx! {
        div {
            class: "call-backdrop",
            onclick: move |_| {
                haptic(Haptic::Tap);
                view.write().call_menu.close();
            },
        }
        div { class: "call-menu {props.placement}",
            for phone in config.contact.phones.iter() {
                a {
                    key: "{phone.number}",
                    class: "call-option",
                    href: phone.link(),
                    onclick: move |_| {
                        haptic(Haptic::Tap);
                        view.write().call_menu.close();
                    },
                    span { class: "call-label", "{phone.label}" }
                    span { class: "call-number", "{phone.number}" }
                }
            }
        }
    }
}
