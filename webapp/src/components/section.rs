use dioxus::prelude::*;

use menu_core::{
    haptics::Haptic,
    items::{CURRENCY_SYMBOL, MenuItem, MenuSection},
};

use crate::common::{dom::haptic, labels};

#[derive(Clone, PartialEq, Props)]
pub struct SectionCardProps {
    section: MenuSection,
    // the first banner is above the fold and should not wait for lazy loading
    #[props(default)]
    first: bool,
}

#[component]
pub fn SectionCard(props: SectionCardProps) -> Element {
    let section = props.section;
    let headers = section.column_headers().map(<[String]>::to_vec);

    rsx! {
        section {
            id: "{section.id}",
            class: "menu-section",
            "aria-labelledby": "{section.id}-heading",
            div { class: "section-banner",
                img {
                    src: "{section.image}",
                    alt: "",
                    loading: if props.first { "eager" } else { "lazy" },
                    decoding: "async",
                    "fetchpriority": if props.first { "high" } else { "auto" },
                }
                div { class: "banner-shade" }
                div { class: "banner-caption",
                    span { class: "banner-kicker", "aria-hidden": "true", {labels::CATEGORY} }
                    div { class: "banner-title",
                        h2 { id: "{section.id}-heading", "{section.title}" }
                        span { "aria-hidden": "true", "{section.icon}" }
                    }
                }
            }

            div { class: "section-items",
                if let Some(headers) = headers {
                    div { class: "tier-headers", "aria-hidden": "true",
                        for header in headers {
                            span { "{header}" }
                        }
                    }
                }

                div { role: "list",
                    for (idx, item) in section.items.iter().enumerate() {
                        ItemRow { key: "{idx}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ItemRowProps {
    item: MenuItem,
}

#[component]
fn ItemRow(props: ItemRowProps) -> Element {
    let item = props.item;
    let description = item.describe();

    rsx! {
        div {
            class: "item-row",
            role: "listitem",
            "aria-label": "{description}",
            onclick: move |_| haptic(Haptic::Nudge),
            div { class: "item-name",
                span { class: "item-title", "{item.name}" }
                div { class: "item-flags", "aria-hidden": "true",
                    if item.popular {
                        span { class: "badge-popular", {labels::POPULAR} }
                    }
                    if item.spicy {
                        span { class: "badge-spicy", "🌶️" }
                    }
                }
            }

            div { class: "item-prices", "aria-hidden": "true",
                for (idx, (label, price)) in item.tiers().enumerate() {
                    div { key: "{idx}", class: "tier",
                        if let Some(label) = label {
                            span { class: "tier-label", "{label}" }
                        }
                        div { class: "tier-price",
                            span { class: "price-value", "{price}" }
                            span { class: "price-currency", {CURRENCY_SYMBOL} }
                        }
                    }
                }
            }
        }
    }
}
