//! NFT Page

use super::map_rows;
use crate::api::dto::display_value;
use crate::components::{Card, CardBody, Row};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let collections = slots
        .nft_collections
        .get()
        .map(|c| {
            c.collections
                .iter()
                .map(|name| Row::new(display_value(name), "Top"))
                .collect()
        })
        .unwrap_or_default();

    let floors = map_rows(slots.nft_floors.get().and_then(|f| f.floors.as_ref()));

    vec![
        Card::new("Top Collections", CardBody::List(collections)).subtitle("OpenSea trending"),
        Card::new("Floor Prices", CardBody::List(floors)).subtitle("Selected collections"),
    ]
}
