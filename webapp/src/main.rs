#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

use menu_core::{DEFAULT_MENU, config::read_config};

mod common;

mod components;

mod nav;

mod page;
use page::MenuPage;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // the menu is compiled in, so a document that does not parse is a build mistake
    use_context_provider(|| read_config(DEFAULT_MENU).expect("failed to parse embedded menu"));

    rsx! {
        style { {common::style::MENU_STYLES} }
        MenuPage {}
    }
}
