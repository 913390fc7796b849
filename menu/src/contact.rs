use serde::{Deserialize, Serialize};

use crate::encode_component;

pub const WHATSAPP_BASE: &str = "https://wa.me";
pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PhoneLine {
    pub label: String,
    pub number: String,
}

impl PhoneLine {
    pub fn link(&self) -> String {
        tel_link(&self.number)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContactConfig {
    // one per carrier, shown in the call popover
    pub phones: Vec<PhoneLine>,
    // international format, without the leading +
    pub whatsapp: String,
    pub whatsapp_message: String,
    pub map_query: String,
    pub hotline: String,
    pub credit_name: String,
    pub credit_number: String,
}

impl ContactConfig {
    pub fn whatsapp_link(&self) -> String {
        format!("{WHATSAPP_BASE}/{}", self.whatsapp)
    }

    // chat link with the order greeting already typed in
    pub fn whatsapp_order_link(&self) -> String {
        format!(
            "{}?text={}",
            self.whatsapp_link(),
            encode_component(&self.whatsapp_message)
        )
    }

    pub fn map_link(&self) -> String {
        let query = self
            .map_query
            .split_whitespace()
            .map(encode_component)
            .collect::<Vec<_>>()
            .join("+");

        format!("{MAPS_SEARCH_BASE}/{query}")
    }

    pub fn hotline_link(&self) -> String {
        tel_link(&self.hotline)
    }
}

pub fn tel_link(number: &str) -> String {
    format!("tel:{number}")
}

// where a call popover can be opened from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallSurface {
    Header,
    ActionBar,
}

// the call popover; the only transient contact state
//
// at most one surface shows it at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallMenu {
    open: Option<CallSurface>,
}

impl CallMenu {
    pub fn is_open(self, surface: CallSurface) -> bool {
        self.open == Some(surface)
    }

    #[cfg(test)]
    pub(crate) fn is_any_open(self) -> bool {
        self.open.is_some()
    }

    pub fn toggle(&mut self, surface: CallSurface) {
        self.open = match self.open {
            Some(open) if open == surface => None,
            _ => Some(surface),
        };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactConfig {
        ContactConfig {
            phones: vec![PhoneLine {
                label: String::from("اتصالات"),
                number: String::from("01126770105"),
            }],
            whatsapp: String::from("201126770105"),
            whatsapp_message: String::from("hello, I'd like to order"),
            map_query: String::from("مطعم هوت ميكس"),
            hotline: String::from("01126770105"),
            credit_name: String::new(),
            credit_number: String::new(),
        }
    }

    #[test]
    fn phone_links() {
        let contact = contact();

        assert_eq!(contact.phones[0].link(), "tel:01126770105");
        assert_eq!(contact.hotline_link(), "tel:01126770105");
    }

    #[test]
    fn whatsapp_message_is_encoded() {
        let contact = contact();

        assert_eq!(contact.whatsapp_link(), "https://wa.me/201126770105");
        assert_eq!(
            contact.whatsapp_order_link(),
            "https://wa.me/201126770105?text=hello%2C%20I'd%20like%20to%20order"
        );
    }

    #[test]
    fn map_query_joins_words_with_plus() {
        let link = contact().map_link();

        assert!(link.starts_with("https://www.google.com/maps/search/"));
        assert_eq!(link.matches('+').count(), 2);
        assert!(!link.contains(' '));
    }

    #[test]
    fn call_menu_toggles() {
        let mut menu = CallMenu::default();
        assert!(!menu.is_any_open());

        menu.toggle(CallSurface::Header);
        assert!(menu.is_open(CallSurface::Header));
        assert!(!menu.is_open(CallSurface::ActionBar));

        menu.toggle(CallSurface::Header);
        assert!(!menu.is_any_open());
    }

    #[test]
    fn call_menu_moves_between_surfaces() {
        let mut menu = CallMenu::default();

        menu.toggle(CallSurface::Header);
        menu.toggle(CallSurface::ActionBar);
        assert!(menu.is_open(CallSurface::ActionBar));
        assert!(!menu.is_open(CallSurface::Header));

        menu.close();
        menu.close();
        assert!(!menu.is_any_open());
    }
}
