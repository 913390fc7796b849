use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use menu_core::config::MenuConfig;

use crate::common::{dom::current_url, labels};

#[component]
pub fn Footer() -> Element {
    let config = use_context::<Arc<MenuConfig>>();

    // the address does not change while the page is open
    let page_url = use_hook(current_url);
    let qr_url = config.qr.image_url(page_url.as_deref());

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-column",
                div { class: "card qr-card",
                    div {
                        h3 { {labels::SHARE_MENU} }
                        p { {labels::SCAN_HINT} }
                    }

                    div { class: "qr-frame",
                        img {
                            src: "{qr_url}",
                            alt: "QR Code",
                            onload: move |_| debug!("qr image loaded"),
                        }
                        div { class: "qr-badge",
                            span { "🔥" }
                        }
                    }

                    a {
                        class: "qr-print",
                        href: "{qr_url}",
                        download: "{config.qr.download_name}",
                        target: "_blank",
                        {labels::PRINT_QR}
                    }
                }

                div { class: "card info-card",
                    div { class: "info-row",
                        div { class: "info-icon", "📍" }
                        div {
                            span { class: "info-kicker", {labels::LOCATION} }
                            p { class: "info-text", "{config.restaurant.address}" }
                        }
                    }
                    div { class: "info-divider" }
                    div { class: "info-row",
                        div { class: "info-icon", "📞" }
                        div {
                            span { class: "info-kicker", {labels::DIRECT_CONTACT} }
                            a { class: "info-hotline", href: config.contact.hotline_link(), "{config.contact.hotline}" }
                        }
                    }
                }

                p { class: "credit",
                    {labels::DESIGNED_BY}
                    " {config.contact.credit_name}"
                    br {}
                    {labels::CONTACT}
                    " {config.contact.credit_number}"
                }
            }
        }
    }
}
