//! Detail view logic: lookup by code and border-name resolution.

use crate::format::format_population;
use crate::models::{CountryRecord, Dataset};
use serde::Serialize;

/// First record whose `alpha3Code` equals `code`.
///
/// Codes are not guaranteed unique in a dataset; the first match wins.
pub fn find_by_code<'a>(dataset: &'a Dataset, code: &str) -> Option<&'a CountryRecord> {
    dataset.iter().find(|c| c.alpha3_code == code)
}

/// A navigable link to a neighbouring country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorderLink {
    pub code: String,
    /// Resolved country name, or the raw code when the dataset lacks it.
    pub label: String,
}

/// Resolve each border code of `record` against the same dataset, in listed order.
pub fn resolve_borders(dataset: &Dataset, record: &CountryRecord) -> Vec<BorderLink> {
    record
        .borders
        .iter()
        .map(|code| BorderLink {
            code: code.clone(),
            label: find_by_code(dataset, code)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| code.clone()),
        })
        .collect()
}

/// Every field the detail page renders, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDetail {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub population: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub top_level_domain: String,
    pub currencies: String,
    pub languages: String,
    pub flag: Option<String>,
    pub borders: Vec<BorderLink>,
}

impl CountryDetail {
    pub fn build(dataset: &Dataset, record: &CountryRecord, locale: &str) -> Self {
        Self {
            code: record.alpha3_code.clone(),
            name: record.name.clone(),
            native_name: record.native_name_str().to_string(),
            population: format_population(record.population, locale),
            region: record.region_str().to_string(),
            subregion: record.subregion_str().to_string(),
            capital: record.capital_display(),
            top_level_domain: record.top_level_domain_display(),
            currencies: record.currencies_display(),
            languages: record.languages_display(),
            flag: record.detail_flag().map(str::to_string),
            borders: resolve_borders(dataset, record),
        }
    }
}

/// Outcome of looking a code up. "Not found" is a display state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(CountryDetail),
    NotFound,
}

pub fn lookup(dataset: &Dataset, code: &str, locale: &str) -> Lookup {
    match find_by_code(dataset, code) {
        Some(record) => Lookup::Found(CountryDetail::build(dataset, record, locale)),
        None => Lookup::NotFound,
    }
}
