//! Navigation
//!
//! The nine top-level tabs, in nav-bar order.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Markets,
    Crypto,
    #[serde(rename = "TON")]
    Ton,
    #[serde(rename = "NFT")]
    Nft,
    Portfolio,
    Education,
    News,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 9] = [
        Tab::Dashboard,
        Tab::Markets,
        Tab::Crypto,
        Tab::Ton,
        Tab::Nft,
        Tab::Portfolio,
        Tab::Education,
        Tab::News,
        Tab::Settings,
    ];

    /// Nav-bar label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Markets => "Markets",
            Tab::Crypto => "Crypto",
            Tab::Ton => "TON",
            Tab::Nft => "NFT",
            Tab::Portfolio => "Portfolio",
            Tab::Education => "Education",
            Tab::News => "News",
            Tab::Settings => "Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown tab: {0}")]
pub struct TabParseError(pub String);

impl FromStr for Tab {
    type Err = TabParseError;

    /// Case-insensitive match on the label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TabParseError(wanted.to_string()))
    }
}
