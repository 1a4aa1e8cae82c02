//! Dashboard Page
//!
//! Highlights, the demo market pulse chart, quick prices and allocation.

use crate::api::dto::display_value;
use crate::components::{allocation_chart, market_pulse_demo, Card, CardBody, Row};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let dashboard = slots.dashboard.get();

    let highlights = dashboard
        .map(|d| {
            d.highlights
                .iter()
                .map(|h| Row::new(h.label.clone().unwrap_or_default(), display_value(&h.value)))
                .collect()
        })
        .unwrap_or_default();

    let prices = dashboard
        .and_then(|d| d.prices.as_ref())
        .map(|prices| {
            prices
                .iter()
                .map(|(ticker, value)| Row::new(ticker.to_uppercase(), display_value(value)))
                .collect()
        })
        .unwrap_or_default();

    let portfolio = slots.portfolio.get().cloned().unwrap_or_default();

    vec![
        Card::new("Highlights", CardBody::List(highlights)).subtitle("Market pulse & quick stats"),
        Card::new("Market Pulse", CardBody::Line(market_pulse_demo()))
            .subtitle("Weekly activity (demo)"),
        Card::new("Quick Prices", CardBody::List(prices)).subtitle("Top crypto tickers"),
        Card::new("Allocation", CardBody::Pie(allocation_chart(&portfolio)))
            .subtitle("Your portfolio mix"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_cards() {
        let mut slots = DataSlots::default();
        slots.dashboard.fill(
            serde_json::from_value(json!({
                "highlights": [
                    {"label": "BTC Dominance", "value": "N/A"},
                    {"label": "Fear & Greed", "value": 61}
                ],
                "prices": {"bitcoin": 64000, "ethereum": 3100.5}
            }))
            .unwrap(),
        );

        let cards = cards(&slots);
        assert_eq!(cards.len(), 4);
        assert_eq!(
            cards[0].rows(),
            &[Row::new("BTC Dominance", "N/A"), Row::new("Fear & Greed", "61")]
        );
        assert_eq!(
            cards[2].rows(),
            &[Row::new("BITCOIN", "64000"), Row::new("ETHEREUM", "3100.5")]
        );

        let CardBody::Pie(pie) = &cards[3].body else {
            panic!("allocation card is not a pie chart");
        };
        assert_eq!(pie.segments.len(), 2);
    }

    #[test]
    fn test_market_pulse_ignores_data() {
        let cards = cards(&DataSlots::default());
        let CardBody::Line(line) = &cards[1].body else {
            panic!("market pulse card is not a line chart");
        };
        assert!(line.placeholder);
        assert_eq!(cards[1].subtitle.as_deref(), Some("Weekly activity (demo)"));
    }
}
