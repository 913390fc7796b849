use serde::{Deserialize, Serialize};

// the anchor/tab key of the additions block, which is not part of the regular section list
pub const ADDITIONS_ID: &str = "additions";

pub const CURRENCY_SYMBOL: &str = "ج";
pub const CURRENCY_NAME: &str = "جنيه مصري";

// a single dish
//
// prices are ordered tiers (e.g. medium/large, or quarter/half/kilo); when labels are present
// they run parallel to the prices, which read_config() checks before anything is rendered
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub prices: Vec<u32>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub spicy: bool,
}

impl MenuItem {
    pub fn tiers(&self) -> impl Iterator<Item = (Option<&str>, u32)> + '_ {
        self.prices.iter().enumerate().map(|(idx, price)| {
            let label = self
                .labels
                .as_ref()
                .and_then(|labels| labels.get(idx))
                .map(String::as_str);
            (label, *price)
        })
    }

    pub fn has_labels(&self) -> bool {
        self.labels.as_ref().is_some_and(|labels| !labels.is_empty())
    }

    // spoken description used as the accessible label of the item row
    pub fn describe(&self) -> String {
        let prices = self
            .prices
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" أو ");

        let mut out = format!("{}. السعر: {} {}.", self.name, prices, CURRENCY_NAME);

        if self.popular {
            out.push_str(" صنف مميز.");
        }
        if self.spicy {
            out.push_str(" صنف حار.");
        }
        out
    }
}

pub fn format_price(price: u32) -> String {
    format!("{price} {CURRENCY_SYMBOL}")
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MenuSection {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub image: String,
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub subtitles: Option<Vec<String>>,
}

impl MenuSection {
    // the tier column headers are only meaningful when no item brings its own labels
    pub fn column_headers(&self) -> Option<&[String]> {
        match &self.subtitles {
            Some(subtitles) if !self.items.iter().any(MenuItem::has_labels) => {
                Some(subtitles.as_slice())
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Addition {
    pub name: String,
    pub price: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProteinGroup {
    pub price: u32,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Additions {
    pub title: String,
    pub tab_title: String,
    pub icon: String,
    pub image: String,
    pub general: Vec<Addition>,
    pub protein: ProteinGroup,
}

// a tab in the category strip
#[derive(Clone, Debug, PartialEq)]
pub struct TabEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // no labels means the item has none at all
    fn item(prices: &[u32], labels: &[&str]) -> MenuItem {
        MenuItem {
            name: String::from("شاورما فراخ"),
            prices: prices.to_vec(),
            labels: (!labels.is_empty()).then(|| labels.iter().map(|s| s.to_string()).collect()),
            popular: false,
            spicy: false,
        }
    }

    #[test]
    fn tiers_pair_labels_with_prices() {
        let item = item(&[40, 45, 55], &["صغير", "وسط", "كبير"]);
        let tiers: Vec<_> = item.tiers().collect();

        assert_eq!(
            tiers,
            vec![(Some("صغير"), 40), (Some("وسط"), 45), (Some("كبير"), 55)]
        );
    }

    #[test]
    fn tiers_without_labels() {
        let item = item(&[105, 120], &[]);
        let tiers: Vec<_> = item.tiers().collect();

        assert_eq!(tiers, vec![(None, 105), (None, 120)]);
        assert!(!item.has_labels());
    }

    #[test]
    fn describe_mentions_every_price_and_flag() {
        let mut item = item(&[130, 150], &[]);
        item.name = String::from("تشيكن رانش");
        item.popular = true;
        item.spicy = true;

        assert_eq!(
            item.describe(),
            "تشيكن رانش. السعر: 130 أو 150 جنيه مصري. صنف مميز. صنف حار."
        );
    }

    #[test]
    fn column_headers_hidden_when_items_are_labelled() {
        let mut section = MenuSection {
            id: String::from("pizza"),
            title: String::from("قسم البيتزا"),
            icon: String::from("🍕"),
            image: String::new(),
            items: vec![item(&[130, 150], &[])],
            subtitles: Some(vec![String::from("وسط"), String::from("كبير")]),
        };
        assert_eq!(section.column_headers().map(|h| h.len()), Some(2));

        section.items.push(item(&[35, 45], &["وسط", "كبير"]));
        assert_eq!(section.column_headers(), None);
    }

    #[test]
    fn price_carries_currency() {
        assert_eq!(format_price(25), "25 ج");
    }
}
