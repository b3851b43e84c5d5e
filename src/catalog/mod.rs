//! The mock influencer catalog behind the discovery lists.
//!
//! Records come from an embedded JSON fixture. Entries that fail to
//! deserialize (for example an invalid contact email) are skipped with a
//! warning instead of failing the whole catalog.

mod filter;
mod influencer;

pub use filter::{ListFilter, visible_ids};
pub use influencer::{
    HistoricalInfluencer, Listed, NewInfluencer, Performance, PricedInfluencer, Priority,
};

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::domain::{InfluencerId, Recipient};
use crate::selection::SelectionSet;

const BUILTIN_FIXTURE: &str = include_str!("../../fixtures/influencers.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub historical: Vec<HistoricalInfluencer>,
    pub new: Vec<NewInfluencer>,
}

/// One influencer looked up by id, tagged with the list it belongs to.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "list", rename_all = "snake_case")]
pub enum Profile<'a> {
    Historical(&'a HistoricalInfluencer),
    New(PricedInfluencer<'a>),
}

#[derive(serde::Deserialize)]
struct RawCatalog {
    #[serde(default)]
    historical: Vec<serde_json::Value>,
    #[serde(default)]
    new: Vec<serde_json::Value>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, anyhow::Error> {
        Self::from_json(BUILTIN_FIXTURE).context("Failed to load the built-in influencer catalog.")
    }

    #[tracing::instrument(name = "Loading influencer catalog", skip(json))]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Self {
            historical: parse_entries(raw.historical, "historical"),
            new: parse_entries(raw.new, "new"),
        };
        tracing::info!(
            historical = catalog.historical.len(),
            new = catalog.new.len(),
            "Influencer catalog loaded"
        );
        Ok(catalog)
    }

    /// The full record behind `id`, with new talent priced at `base_cpm`.
    pub fn profile(&self, id: &InfluencerId, base_cpm: f64) -> Option<Profile<'_>> {
        if let Some(h) = self.historical.iter().find(|h| &h.id == id) {
            return Some(Profile::Historical(h));
        }
        self.new
            .iter()
            .find(|n| &n.id == id)
            .map(|n| Profile::New(n.priced(base_cpm)))
    }

    /// Recipients for every selected id the catalog knows, in catalog order
    /// (historical first). Unknown ids are dropped.
    #[tracing::instrument(name = "Resolving selected recipients", skip(self, selection))]
    pub fn resolve(&self, selection: &SelectionSet, base_cpm: f64) -> Vec<Recipient> {
        let stale: Vec<&InfluencerId> = selection
            .iter()
            .filter(|id| !self.contains(id))
            .collect();
        if !stale.is_empty() {
            tracing::debug!(?stale, "Ignoring selected ids missing from the catalog");
        }

        let historical = self
            .historical
            .iter()
            .filter(|h| selection.contains(&h.id))
            .map(HistoricalInfluencer::to_recipient);
        let new = self
            .new
            .iter()
            .filter(|n| selection.contains(&n.id))
            .map(|n| n.to_recipient(base_cpm));

        historical.chain(new).collect()
    }

    pub fn contains(&self, id: &InfluencerId) -> bool {
        self.historical.iter().any(|h| &h.id == id) || self.new.iter().any(|n| &n.id == id)
    }
}

fn parse_entries<T: DeserializeOwned>(entries: Vec<serde_json::Value>, list: &str) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!(
                    err.cause_chain = ?err,
                    list,
                    index,
                    "Skipping a catalog entry. The record is invalid."
                );
                None
            }
        })
        .collect()
}
