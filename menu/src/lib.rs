use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub mod config;
pub mod contact;
pub mod haptics;
pub mod items;
pub mod nav;
pub mod qr;
pub mod strip;
pub mod theme;
pub mod view;

// the menu shipped with the page
pub const DEFAULT_MENU: &str = include_str!("../menu.toml");

// link encoding
//
// links are built from localized text (greetings, map queries) and from the page address, and
// must come out exactly as the browser's encodeURIComponent would produce them, which leaves the
// unreserved marks below alone and escapes everything else as utf-8 bytes
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
