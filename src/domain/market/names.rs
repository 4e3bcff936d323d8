//! Market-name enrichment and search over market-scoped rows.

use super::Market;
use crate::shared::MarketCode;
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Deref;

/// Anything that belongs to exactly one market.
pub trait MarketScoped {
    fn market_code(&self) -> &MarketCode;
}

/// A row joined with its market's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Named<T> {
    pub market_name: String,
    #[serde(flatten)]
    pub item: T,
}

impl<T> Named<T> {
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> Deref for Named<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T: MarketScoped> MarketScoped for Named<T> {
    fn market_code(&self) -> &MarketCode {
        self.item.market_code()
    }
}

/// Lookup from market code to display name.
///
/// Built once per market list; codes without an entry resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct MarketNames {
    names: HashMap<MarketCode, String>,
}

impl MarketNames {
    pub fn new(markets: &[Market]) -> Self {
        let names = markets
            .iter()
            .map(|m| (m.market_code.clone(), m.display_name().to_string()))
            .collect();
        Self { names }
    }

    pub fn name_for<'a>(&'a self, code: &'a MarketCode) -> &'a str {
        self.names
            .get(code)
            .map(String::as_str)
            .unwrap_or_else(|| code.as_str())
    }

    pub fn enrich<T: MarketScoped>(&self, item: T) -> Named<T> {
        let market_name = self.name_for(item.market_code()).to_string();
        Named { market_name, item }
    }

    pub fn enrich_all<T, I>(&self, items: I) -> Vec<Named<T>>
    where
        T: MarketScoped,
        I: IntoIterator<Item = T>,
    {
        items.into_iter().map(|item| self.enrich(item)).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Case-insensitive substring match on display name or raw code.
/// An empty term matches everything.
pub fn matches_search(name: &str, code: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    name.to_lowercase().contains(&term) || code.to_lowercase().contains(&term)
}

/// Keep rows matching `term`, preserving their order.
pub fn filter_by_search<T>(rows: &[Named<T>], term: &str) -> Vec<Named<T>>
where
    T: MarketScoped + Clone,
{
    rows.iter()
        .filter(|row| matches_search(&row.market_name, row.market_code().as_str(), term))
        .cloned()
        .collect()
}
