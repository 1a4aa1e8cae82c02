//! Education Page

use crate::api::dto::display_value;
use crate::components::{Card, CardBody, Row};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let lessons = slots
        .lessons
        .get()
        .map(|l| {
            l.lessons
                .iter()
                .map(|title| Row::new(display_value(title), "2 min"))
                .collect()
        })
        .unwrap_or_default();

    let glossary = slots
        .glossary
        .get()
        .map(|g| {
            g.glossary
                .iter()
                .map(|term| Row::new(display_value(term), "Term"))
                .collect()
        })
        .unwrap_or_default();

    vec![
        Card::new("Mini Lessons", CardBody::List(lessons)).subtitle("Bite-sized learning"),
        Card::new("Glossary", CardBody::List(glossary)).subtitle("Key terms"),
    ]
}
