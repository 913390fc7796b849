use serde::{Deserialize, Serialize};

use crate::encode_component;

// parameters of the third-party qr image endpoint; the qr code itself is never rendered locally
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct QrConfig {
    pub endpoint: String,
    pub size: u32,
    // hex colors without the leading #
    pub background: String,
    pub foreground: String,
    // used when the page address is not known yet
    pub fallback_url: String,
    pub download_name: String,
}

impl QrConfig {
    pub fn image_url(&self, page_url: Option<&str>) -> String {
        let data = match page_url {
            Some(url) if !url.is_empty() => url,
            _ => self.fallback_url.as_str(),
        };

        format!(
            "{}?size={size}x{size}&data={}&bgcolor={}&color={}",
            self.endpoint,
            encode_component(data),
            self.background,
            self.foreground,
            size = self.size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> QrConfig {
        QrConfig {
            endpoint: String::from("https://api.qrserver.com/v1/create-qr-code/"),
            size: 200,
            background: String::from("ffffff"),
            foreground: String::from("ff5f00"),
            fallback_url: String::from("https://hotmix.com"),
            download_name: String::from("hotmix-qr.png"),
        }
    }

    #[test]
    fn encodes_current_address() {
        let url = config().image_url(Some("https://example.com/menu"));

        assert!(url.contains("data=https%3A%2F%2Fexample.com%2Fmenu&"));
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fexample.com%2Fmenu&bgcolor=ffffff&color=ff5f00"
        );
    }

    #[test]
    fn falls_back_when_address_is_unknown() {
        let config = config();

        for page in [None, Some("")] {
            assert!(config.image_url(page).contains("data=https%3A%2F%2Fhotmix.com&"));
        }
    }

    #[test]
    fn query_and_fragment_are_encoded() {
        let url = config().image_url(Some("https://example.com/menu?table=4#grill"));

        assert!(url.contains("data=https%3A%2F%2Fexample.com%2Fmenu%3Ftable%3D4%23grill&"));
    }
}
