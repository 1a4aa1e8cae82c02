//! Pages
//!
//! One projection per tab, from the held slots to a [`Page`]. A pending or
//! fallback slot projects to empty lists; nothing here does I/O.

pub mod crypto;
pub mod dashboard;
pub mod education;
pub mod markets;
pub mod news;
pub mod nft;
pub mod portfolio;
pub mod settings;
pub mod ton;

use serde_json::{Map, Value};

use crate::api::dto::display_value;
use crate::components::{Page, Row, Tab};
use crate::state::DataSlots;

/// Build the page for `tab`
pub fn render(tab: Tab, slots: &DataSlots) -> Page {
    let cards = match tab {
        Tab::Dashboard => dashboard::cards(slots),
        Tab::Markets => markets::cards(slots),
        Tab::Crypto => crypto::cards(slots),
        Tab::Ton => ton::cards(slots),
        Tab::Nft => nft::cards(slots),
        Tab::Portfolio => portfolio::cards(slots),
        Tab::Education => education::cards(slots),
        Tab::News => news::cards(slots),
        Tab::Settings => settings::cards(slots),
    };
    Page::new(tab, cards)
}

/// Price in dollars with two decimals; absent prices show as zero
pub(crate) fn usd(price: Option<f64>) -> String {
    format!("${:.2}", price.unwrap_or(0.0))
}

/// One row per key of a display map
pub(crate) fn map_rows(map: Option<&Map<String, Value>>) -> Vec<Row> {
    map.map(|m| {
        m.iter()
            .map(|(key, value)| Row::new(key.as_str(), display_value(value)))
            .collect()
    })
    .unwrap_or_default()
}

/// Optional text, treating empty strings as absent
pub(crate) fn text_or(value: Option<&String>, placeholder: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| placeholder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_usd() {
        assert_eq!(usd(Some(189.456)), "$189.46");
        assert_eq!(usd(None), "$0.00");
    }

    #[test]
    fn test_map_rows() {
        let map = json!({"usd": 5.12, "change_24h": "-1.3%"});
        let rows = map_rows(map.as_object());
        assert_eq!(rows, vec![Row::new("usd", "5.12"), Row::new("change_24h", "-1.3%")]);
        assert!(map_rows(None).is_empty());
    }

    #[test]
    fn test_text_or() {
        assert_eq!(text_or(Some(&"pro".to_string()), "free"), "pro");
        assert_eq!(text_or(Some(&String::new()), "free"), "free");
        assert_eq!(text_or(None, "free"), "free");
    }

    #[test]
    fn test_every_tab_renders_empty_slots() {
        let slots = DataSlots::default();
        for tab in Tab::ALL {
            let page = render(tab, &slots);
            assert_eq!(page.tab, tab);
            assert!(!page.cards.is_empty());
        }
    }
}
