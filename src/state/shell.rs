//! View Shell
//!
//! Holds the active tab and the endpoint slots. Mounting fans out all
//! sixteen safe fetches at once and fills the slots in one batch after
//! every fetch has settled. Tab selection is pure UI state.

use chrono::{DateTime, Utc};

use super::slot::DataSlots;
use crate::api::dto::{
    CollectionList, CryptoList, DashboardResponse, ForexList, Glossary, Headlines, Lessons,
    NftFloors, PortfolioItems, PortfolioOverview, Profile, QuoteList, TonPriceResponse,
    TonProjects,
};
use crate::api::{safe_get_or_default, ApiClient, Endpoint};
use crate::components::{Page, Tab};
use crate::pages;

#[derive(Debug, Clone, Default)]
pub struct ViewShell {
    active_tab: Tab,
    slots: DataSlots,
    loaded_at: Option<DateTime<Utc>>,
    mounted: bool,
}

impl ViewShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a tab other than the dashboard
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn slots(&self) -> &DataSlots {
        &self.slots
    }

    /// When the mount fetch completed
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    /// Fetch every endpoint and fill the slots.
    ///
    /// Runs once; later calls return `false` without any I/O. A failed
    /// endpoint fills its own slot with the empty fallback and leaves the
    /// others alone.
    pub async fn mount(&mut self, client: &ApiClient) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        tracing::info!(base_url = client.base_url(), "loading dashboard data");

        let (
            dashboard,
            stocks,
            etfs,
            forex,
            crypto_top,
            ton_price,
            ton_projects,
            ton_collections,
            nft_collections,
            nft_floors,
            portfolio,
            portfolio_items,
            lessons,
            glossary,
            news,
            profile,
        ) = tokio::join!(
            safe_get_or_default::<DashboardResponse>(client, Endpoint::Dashboard.path()),
            safe_get_or_default::<QuoteList>(client, Endpoint::StocksTop.path()),
            safe_get_or_default::<QuoteList>(client, Endpoint::EtfsTop.path()),
            safe_get_or_default::<ForexList>(client, Endpoint::ForexTop.path()),
            safe_get_or_default::<CryptoList>(client, Endpoint::CryptoTop.path()),
            safe_get_or_default::<TonPriceResponse>(client, Endpoint::TonPrice.path()),
            safe_get_or_default::<TonProjects>(client, Endpoint::TonProjects.path()),
            safe_get_or_default::<CollectionList>(client, Endpoint::TonCollections.path()),
            safe_get_or_default::<CollectionList>(client, Endpoint::NftCollections.path()),
            safe_get_or_default::<NftFloors>(client, Endpoint::NftFloors.path()),
            safe_get_or_default::<PortfolioOverview>(client, Endpoint::Portfolio.path()),
            safe_get_or_default::<PortfolioItems>(client, Endpoint::PortfolioItems.path()),
            safe_get_or_default::<Lessons>(client, Endpoint::Lessons.path()),
            safe_get_or_default::<Glossary>(client, Endpoint::Glossary.path()),
            safe_get_or_default::<Headlines>(client, Endpoint::NewsHeadlines.path()),
            safe_get_or_default::<Profile>(client, Endpoint::Profile.path()),
        );

        let slots = &mut self.slots;
        slots.dashboard.fill(dashboard);
        slots.stocks.fill(stocks);
        slots.etfs.fill(etfs);
        slots.forex.fill(forex);
        slots.crypto_top.fill(crypto_top);
        slots.ton_price.fill(ton_price);
        slots.ton_projects.fill(ton_projects);
        slots.ton_collections.fill(ton_collections);
        slots.nft_collections.fill(nft_collections);
        slots.nft_floors.fill(nft_floors);
        slots.portfolio.fill(portfolio);
        slots.portfolio_items.fill(portfolio_items);
        slots.lessons.fill(lessons);
        slots.glossary.fill(glossary);
        slots.news.fill(news);
        slots.profile.fill(profile);

        self.loaded_at = Some(Utc::now());
        tracing::info!(filled = self.slots.ready_count(), "dashboard data loaded");
        true
    }

    /// Switch tabs; no I/O
    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Project the active tab from the held slots
    pub fn page(&self) -> Page {
        pages::render(self.active_tab, &self.slots)
    }
}
