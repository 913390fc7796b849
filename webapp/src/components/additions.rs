use std::sync::Arc;

use dioxus::prelude::*;

use menu_core::{
    config::MenuConfig,
    items::{ADDITIONS_ID, format_price},
};

use crate::common::labels;

// the add-ons block at the end of the menu; it has its own tab like a regular section
#[component]
pub fn AdditionsCard() -> Element {
    let config = use_context::<Arc<MenuConfig>>();
    let additions = &config.additions;

    rsx! {
        section { id: ADDITIONS_ID, class: "menu-section",
            div { class: "section-banner additions-banner",
                img { src: "{additions.image}", alt: "", loading: "lazy" }
                div { class: "banner-shade" }
                div { class: "banner-caption",
                    span { class: "banner-kicker", {labels::CUSTOMIZE} }
                    div { class: "banner-title",
                        h2 { "{additions.title}" }
                    }
                }
            }

            div { class: "additions-panel",
                for addition in additions.general.iter() {
                    div { key: "{addition.name}", class: "addition-row",
                        span { "{addition.name}" }
                        span { class: "addition-price", {format_price(addition.price)} }
                    }
                }

                div { class: "protein-card",
                    h4 { {labels::ADD_PROTEIN} }
                    div { class: "protein-items",
                        for item in additions.protein.items.iter() {
                            span { key: "{item}", class: "protein-chip", "{item}" }
                        }
                    }
                    div { class: "protein-price",
                        span { {labels::ADDITION_PRICE} }
                        span { class: "protein-price-value", {format_price(additions.protein.price)} }
                    }
                }
            }
        }
    }
}
