use std::{collections::HashSet, sync::Arc};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    contact::ContactConfig,
    items::{ADDITIONS_ID, Additions, MenuSection, TabEntry},
    qr::QrConfig,
    strip::Direction,
};

// menu configuration
//
// everything the page displays is static and lives here; it is parsed once at startup and
// shared read-only afterwards
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MenuConfig {
    pub direction: Direction,
    pub restaurant: RestaurantConfig,
    pub contact: ContactConfig,
    pub qr: QrConfig,
    pub sections: Vec<MenuSection>,
    pub additions: Additions,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub locality: String,
    pub headline: String,
    pub tagline: String,
    pub address: String,
}

impl MenuConfig {
    // navigation keys in page order, with the additions block last
    pub fn tabs(&self) -> Vec<TabEntry> {
        self.sections
            .iter()
            .map(|section| TabEntry {
                id: section.id.clone(),
                title: section.title.clone(),
                icon: section.icon.clone(),
            })
            .chain(std::iter::once(TabEntry {
                id: String::from(ADDITIONS_ID),
                title: self.additions.tab_title.clone(),
                icon: self.additions.icon.clone(),
            }))
            .collect()
    }

    pub fn first_section(&self) -> Option<&str> {
        self.sections.first().map(|section| section.id.as_str())
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            bail!("menu has no sections");
        }

        let mut seen = HashSet::new();

        for section in &self.sections {
            if section.id.trim().is_empty() {
                bail!("section \"{}\" has an empty id", section.title);
            }

            if section.id == ADDITIONS_ID {
                bail!("section id \"{ADDITIONS_ID}\" is reserved");
            }

            if !seen.insert(section.id.as_str()) {
                bail!("duplicate section id \"{}\"", section.id);
            }

            for item in &section.items {
                if item.prices.is_empty() {
                    bail!("item \"{}\" in \"{}\" has no prices", item.name, section.id);
                }

                if let Some(labels) = &item.labels {
                    if labels.len() != item.prices.len() {
                        bail!(
                            "item \"{}\" in \"{}\" has {} labels for {} prices",
                            item.name,
                            section.id,
                            labels.len(),
                            item.prices.len()
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

// the menu lives in a [config] subtable so that the document can carry other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: MenuConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> Result<Arc<MenuConfig>> {
    debug!("parsing menu document");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse menu document")?;

    data.config.validate().context("invalid menu document")?;

    debug!(sections = data.config.sections.len(), "successfully parsed menu document");
    Ok(Arc::new(data.config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MENU;

    const MINIMAL: &str = r#"
[config]
direction = "rtl"

[config.restaurant]
name = "n"
locality = "l"
headline = "h"
tagline = "t"
address = "a"

[config.contact]
whatsapp = "201126770105"
whatsapp_message = "hi"
map_query = "somewhere nice"
hotline = "01126770105"
credit_name = "c"
credit_number = "0"
phones = [{ label = "one", number = "01126770105" }]

[config.qr]
endpoint = "https://api.qrserver.com/v1/create-qr-code/"
size = 200
background = "ffffff"
foreground = "ff5f00"
fallback_url = "https://hotmix.com"
download_name = "qr.png"

[config.additions]
title = "extras"
tab_title = "extras"
icon = "+"
image = "x.webp"
general = []
protein = { price = 20, items = [] }

[[config.sections]]
id = "pizza"
title = "pizza"
icon = "p"
image = "p.webp"

[[config.sections.items]]
name = "margherita"
prices = [90, 105]
"#;

    #[test]
    fn embedded_menu_parses() {
        let config = read_config(DEFAULT_MENU).expect("embedded menu must parse");

        let tabs = config.tabs();
        let ids: Vec<_> = tabs.iter().map(|tab| tab.id.as_str()).collect();
        assert_eq!(ids, vec!["pizza", "grill", "sandwiches", "crepes", ADDITIONS_ID]);
        assert_eq!(config.contact.phones.len(), 3);
        assert_eq!(config.direction, Direction::Rtl);
    }

    #[test]
    fn minimal_menu_parses() {
        let config = read_config(MINIMAL).unwrap();

        assert_eq!(config.first_section(), Some("pizza"));
        assert_eq!(config.sections[0].items[0].labels, None);
        assert!(!config.sections[0].items[0].popular);
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let doc = MINIMAL.replace("prices = [90, 105]", "prices = [90, 105]\nlabels = [\"m\"]");

        let err = read_config(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("1 labels for 2 prices"));
    }

    #[test]
    fn empty_prices_are_rejected() {
        let doc = MINIMAL.replace("prices = [90, 105]", "prices = []");

        assert!(read_config(&doc).is_err());
    }

    #[test]
    fn reserved_and_duplicate_ids_are_rejected() {
        let reserved = MINIMAL.replace("id = \"pizza\"", "id = \"additions\"");
        assert!(read_config(&reserved).is_err());

        let duplicate = format!(
            "{MINIMAL}\n[[config.sections]]\nid = \"pizza\"\ntitle = \"again\"\nicon = \"p\"\nimage = \"p.webp\"\nitems = []\n"
        );
        let err = read_config(&duplicate).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate section id"));
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let doc = MINIMAL.replace("direction = \"rtl\"", "direction = \"sideways\"");

        assert!(read_config(&doc).is_err());
    }
}
