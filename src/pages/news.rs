//! News Page
//!
//! Headlines as external links.

use crate::components::{Card, CardBody, LinkRow};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let links = slots
        .news
        .get()
        .map(|h| {
            h.items
                .iter()
                .map(|n| LinkRow {
                    title: n.title.clone().unwrap_or_default(),
                    url: n.url.clone().unwrap_or_default(),
                    source: n.source.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    vec![Card::new("Headlines", CardBody::Links(links)).subtitle("Market news")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_headline_links() {
        let mut slots = DataSlots::default();
        slots.news.fill(
            serde_json::from_value(json!({
                "items": [
                    {"title": "Fed holds rates", "url": "https://news.example/fed", "source": "Reuters"},
                    {"title": "TON hits new high", "url": "https://news.example/ton"}
                ]
            }))
            .unwrap(),
        );

        let cards = cards(&slots);
        let CardBody::Links(links) = &cards[0].body else {
            panic!("headlines card is not a link list");
        };
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].source.as_deref(), Some("Reuters"));
        assert_eq!(links[1].url, "https://news.example/ton");
        assert_eq!(links[1].source, None);
    }
}
