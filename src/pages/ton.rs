//! TON Page
//!
//! TON price, top jettons and trending NFT collections.

use super::map_rows;
use crate::api::dto::{display_value, Jetton};
use crate::components::{Card, CardBody, Row};
use crate::state::DataSlots;

const TOP_PROJECTS: usize = 8;

fn first_present(candidates: [Option<&String>; 2]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
}

fn jetton_row(jetton: &Jetton) -> Row {
    let name = first_present([jetton.metadata.name.as_ref(), jetton.name.as_ref()])
        .unwrap_or_else(|| "Jetton".to_string());
    let symbol = first_present([jetton.symbol.as_ref(), jetton.metadata.symbol.as_ref()])
        .unwrap_or_else(|| "—".to_string());
    Row::new(name, symbol)
}

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let price = map_rows(slots.ton_price.get().and_then(|p| p.price.as_ref()));

    let projects = slots
        .ton_projects
        .get()
        .map(|p| p.items.iter().take(TOP_PROJECTS).map(jetton_row).collect())
        .unwrap_or_default();

    let collections = slots
        .ton_collections
        .get()
        .map(|c| {
            c.collections
                .iter()
                .map(|name| Row::new(display_value(name), "Hot"))
                .collect()
        })
        .unwrap_or_default();

    vec![
        Card::new("TON Price", CardBody::List(price)).subtitle("Live price & 24h change"),
        Card::new("TON Projects", CardBody::List(projects)).subtitle("Top jettons"),
        Card::new("TON NFT Collections", CardBody::List(collections))
            .subtitle("Trending collections"),
    ]
}
