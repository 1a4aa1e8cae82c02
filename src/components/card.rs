//! Card Component
//!
//! A titled panel holding one list, link list or chart. Pages are built
//! from cards; renderers only ever see these types.

use serde::Serialize;

use super::chart::{LineChart, PieChart};
use super::nav::Tab;

/// One tab's worth of cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub tab: Tab,
    pub cards: Vec<Card>,
}

impl Page {
    pub fn new(tab: Tab, cards: Vec<Card>) -> Self {
        Self { tab, cards }
    }

    /// Look up a card by title
    pub fn card(&self, title: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.title == title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub body: CardBody,
}

impl Card {
    pub fn new(title: impl Into<String>, body: CardBody) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            body,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Rows of a list card; empty for any other body
    pub fn rows(&self) -> &[Row] {
        match &self.body {
            CardBody::List(rows) => rows.as_slice(),
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CardBody {
    List(Vec<Row>),
    Links(Vec<LinkRow>),
    Line(LineChart),
    Pie(PieChart),
}

/// Label on the left, value on the right
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// External link opened outside the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRow {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
