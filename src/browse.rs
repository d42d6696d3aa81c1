//! List view logic: region options, search/region filtering and card summaries.
//!
//! Everything here is a pure function of the dataset and the two pieces of UI
//! state (query, region). Filtering never reorders records.

use crate::format::format_population;
use crate::models::{CountryRecord, Dataset};
use serde::Serialize;

/// Distinct non-empty regions in first-seen order.
pub fn regions(dataset: &Dataset) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for region in dataset.iter().map(CountryRecord::region_str) {
        if !region.is_empty() && !out.contains(&region) {
            out.push(region);
        }
    }
    out
}

/// Text query plus region selection. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: String,
    pub region: String,
}

impl Filter {
    pub fn new(query: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            region: region.into(),
        }
    }

    /// Case-insensitive substring match on the name, exact match on the region.
    pub fn matches(&self, record: &CountryRecord) -> bool {
        let q = self.query.trim().to_lowercase();
        self.matches_folded(&q, record)
    }

    fn matches_folded(&self, q: &str, record: &CountryRecord) -> bool {
        let match_query = q.is_empty() || record.name.to_lowercase().contains(q);
        let match_region = self.region.is_empty() || record.region_str() == self.region;
        match_query && match_region
    }

    /// Matching records in dataset order.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a CountryRecord> {
        let q = self.query.trim().to_lowercase();
        dataset
            .iter()
            .filter(|r| self.matches_folded(&q, r))
            .collect()
    }
}

/// Summary row rendered for each matching country in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCard {
    pub code: String,
    pub name: String,
    pub population: String,
    pub region: String,
    pub capital: String,
    pub flag: Option<String>,
}

impl CountryCard {
    pub fn from_record(record: &CountryRecord, locale: &str) -> Self {
        Self {
            code: record.alpha3_code.clone(),
            name: record.name.clone(),
            population: format_population(record.population, locale),
            region: record.region_str().to_string(),
            capital: record.capital_display(),
            flag: record.card_flag().map(str::to_string),
        }
    }
}

/// Filter the dataset and build one card per match.
pub fn cards(dataset: &Dataset, filter: &Filter, locale: &str) -> Vec<CountryCard> {
    filter
        .apply(dataset)
        .into_iter()
        .map(|r| CountryCard::from_record(r, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, region: &str) -> CountryRecord {
        serde_json::from_value(serde_json::json!({
            "name": name, "alpha3Code": name.to_uppercase(), "region": region
        }))
        .unwrap()
    }

    #[test]
    fn query_is_trimmed() {
        let f = Filter::new("  fra ", "");
        assert!(f.matches(&rec("France", "Europe")));
    }

    #[test]
    fn region_is_case_sensitive() {
        let f = Filter::new("", "europe");
        assert!(!f.matches(&rec("France", "Europe")));
    }
}
