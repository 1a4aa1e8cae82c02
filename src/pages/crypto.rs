//! Crypto Page

use super::usd;
use crate::components::{Card, CardBody, Row};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let rows = slots
        .crypto_top
        .get()
        .map(|list| {
            list.items
                .iter()
                .map(|c| {
                    let label = format!(
                        "#{} {}",
                        c.rank.as_deref().unwrap_or_default(),
                        c.symbol.as_deref().unwrap_or_default()
                    );
                    Row::new(label, usd(c.price))
                })
                .collect()
        })
        .unwrap_or_default();

    vec![Card::new("Top Crypto", CardBody::List(rows)).subtitle("Ranked by market cap")]
}
