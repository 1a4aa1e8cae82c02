//! Markets Page
//!
//! Top stocks, ETFs and forex pairs, six rows each.

use super::usd;
use crate::api::dto::{ForexList, QuoteList};
use crate::components::{Card, CardBody, Row};
use crate::state::DataSlots;

const TOP_N: usize = 6;

fn quote_rows(list: Option<&QuoteList>) -> Vec<Row> {
    list.map(|l| {
        l.items
            .iter()
            .take(TOP_N)
            .map(|q| Row::new(q.symbol.clone().unwrap_or_default(), usd(q.price)))
            .collect()
    })
    .unwrap_or_default()
}

fn forex_rows(list: Option<&ForexList>) -> Vec<Row> {
    list.map(|l| {
        l.items
            .iter()
            .take(TOP_N)
            .map(|p| {
                Row::new(
                    p.pair.clone().unwrap_or_default(),
                    format!("{:.5}", p.rate.unwrap_or(0.0)),
                )
            })
            .collect()
    })
    .unwrap_or_default()
}

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    vec![
        Card::new("Top Stocks", CardBody::List(quote_rows(slots.stocks.get())))
            .subtitle("Gainers right now"),
        Card::new("Top ETFs", CardBody::List(quote_rows(slots.etfs.get())))
            .subtitle("Sorted by volume"),
        Card::new("Forex Top Pairs", CardBody::List(forex_rows(slots.forex.get())))
            .subtitle("Major FX moves"),
    ]
}
