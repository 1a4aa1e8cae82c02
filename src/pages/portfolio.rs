//! Portfolio Page
//!
//! Holdings list and allocation pie.

use crate::api::dto::display_value;
use crate::components::{allocation_chart, Card, CardBody, Row};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let holdings = slots
        .portfolio_items
        .get()
        .map(|p| {
            p.items
                .iter()
                .map(|h| {
                    let label = format!(
                        "{} · {}",
                        h.symbol.as_deref().unwrap_or_default(),
                        h.asset_type.as_deref().unwrap_or_default()
                    );
                    Row::new(label, display_value(&h.amount))
                })
                .collect()
        })
        .unwrap_or_default();

    let portfolio = slots.portfolio.get().cloned().unwrap_or_default();

    vec![
        Card::new("Holdings", CardBody::List(holdings)).subtitle("Your assets"),
        Card::new("Allocation", CardBody::Pie(allocation_chart(&portfolio)))
            .subtitle("By asset type"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_holdings_rows() {
        let mut slots = DataSlots::default();
        slots.portfolio_items.fill(
            serde_json::from_value(json!({
                "items": [
                    {"symbol": "BTC", "asset_type": "crypto", "amount": 0.25},
                    {"symbol": "AAPL", "asset_type": "stock", "amount": 10}
                ]
            }))
            .unwrap(),
        );

        let cards = cards(&slots);
        assert_eq!(
            cards[0].rows(),
            &[Row::new("BTC · crypto", "0.25"), Row::new("AAPL · stock", "10")]
        );
    }

    #[test]
    fn test_allocation_uses_portfolio_slot() {
        let mut slots = DataSlots::default();
        slots.portfolio.fill(
            serde_json::from_value(json!({"allocation": {"crypto": 1, "stock": 1, "nft": 2}}))
                .unwrap(),
        );

        let cards = cards(&slots);
        let CardBody::Pie(pie) = &cards[1].body else {
            panic!("allocation card is not a pie chart");
        };
        let names: Vec<_> = pie.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["crypto", "stock", "nft"]);
    }
}
