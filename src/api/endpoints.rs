//! Backend endpoints consumed by the dashboard.

use std::fmt;

/// One of the sixteen `GET` endpoints fetched on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Dashboard,
    StocksTop,
    EtfsTop,
    ForexTop,
    CryptoTop,
    TonPrice,
    TonProjects,
    TonCollections,
    NftCollections,
    NftFloors,
    Portfolio,
    PortfolioItems,
    Lessons,
    Glossary,
    NewsHeadlines,
    Profile,
}

impl Endpoint {
    pub const ALL: [Endpoint; 16] = [
        Endpoint::Dashboard,
        Endpoint::StocksTop,
        Endpoint::EtfsTop,
        Endpoint::ForexTop,
        Endpoint::CryptoTop,
        Endpoint::TonPrice,
        Endpoint::TonProjects,
        Endpoint::TonCollections,
        Endpoint::NftCollections,
        Endpoint::NftFloors,
        Endpoint::Portfolio,
        Endpoint::PortfolioItems,
        Endpoint::Lessons,
        Endpoint::Glossary,
        Endpoint::NewsHeadlines,
        Endpoint::Profile,
    ];

    /// Request path including the fixed query string
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Dashboard => "/api/dashboard",
            Endpoint::StocksTop => "/api/markets/stocks/top?sort=gainers",
            Endpoint::EtfsTop => "/api/markets/etfs/top?sort=volume",
            Endpoint::ForexTop => "/api/markets/forex/top?sort=gainers",
            Endpoint::CryptoTop => "/api/crypto/top?limit=10",
            Endpoint::TonPrice => "/api/ton/price",
            Endpoint::TonProjects => "/api/ton/projects?limit=8",
            Endpoint::TonCollections => "/api/ton/nft/collections",
            Endpoint::NftCollections => "/api/nft/collections",
            Endpoint::NftFloors => "/api/nft/floors",
            Endpoint::Portfolio => "/api/portfolio",
            Endpoint::PortfolioItems => "/api/portfolio/items",
            Endpoint::Lessons => "/api/education/lessons",
            Endpoint::Glossary => "/api/education/glossary",
            Endpoint::NewsHeadlines => "/api/news/headlines",
            Endpoint::Profile => "/api/user/profile",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
