//! Data Slots
//!
//! One holding cell per endpoint. A slot starts pending and is filled
//! exactly once with the fetched payload or its fallback.

use crate::api::dto::{
    CollectionList, CryptoList, DashboardResponse, ForexList, Glossary, Headlines, Lessons,
    NftFloors, PortfolioItems, PortfolioOverview, Profile, QuoteList, TonPriceResponse,
    TonProjects,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot<T> {
    #[default]
    Pending,
    Ready(T),
}

impl<T> Slot<T> {
    /// Fill a pending slot. Returns `false`, leaving the value untouched,
    /// if the slot was already filled.
    pub fn fill(&mut self, value: T) -> bool {
        match self {
            Slot::Pending => {
                *self = Slot::Ready(value);
                true
            }
            Slot::Ready(_) => false,
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Pending => None,
            Slot::Ready(value) => Some(value),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Slot::Ready(_))
    }
}

/// The sixteen endpoint slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSlots {
    pub dashboard: Slot<DashboardResponse>,
    pub stocks: Slot<QuoteList>,
    pub etfs: Slot<QuoteList>,
    pub forex: Slot<ForexList>,
    pub crypto_top: Slot<CryptoList>,
    pub ton_price: Slot<TonPriceResponse>,
    pub ton_projects: Slot<TonProjects>,
    pub ton_collections: Slot<CollectionList>,
    pub nft_collections: Slot<CollectionList>,
    pub nft_floors: Slot<NftFloors>,
    pub portfolio: Slot<PortfolioOverview>,
    pub portfolio_items: Slot<PortfolioItems>,
    pub lessons: Slot<Lessons>,
    pub glossary: Slot<Glossary>,
    pub news: Slot<Headlines>,
    pub profile: Slot<Profile>,
}

impl DataSlots {
    /// Number of filled slots
    pub fn ready_count(&self) -> usize {
        [
            self.dashboard.is_ready(),
            self.stocks.is_ready(),
            self.etfs.is_ready(),
            self.forex.is_ready(),
            self.crypto_top.is_ready(),
            self.ton_price.is_ready(),
            self.ton_projects.is_ready(),
            self.ton_collections.is_ready(),
            self.nft_collections.is_ready(),
            self.nft_floors.is_ready(),
            self.portfolio.is_ready(),
            self.portfolio_items.is_ready(),
            self.lessons.is_ready(),
            self.glossary.is_ready(),
            self.news.is_ready(),
            self.profile.is_ready(),
        ]
        .into_iter()
        .filter(|ready| *ready)
        .count()
    }
}
