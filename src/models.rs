use serde::{Deserialize, Serialize};

/// Placeholder shown for absent optional fields.
pub const PLACEHOLDER: &str = "—";

/// One country as supplied by the dataset fixture.
///
/// Only `name` and `alpha3Code` are required; everything else is optional in the
/// wild and defaults to empty. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    pub alpha3_code: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    /// Non-negative head count; missing values read as zero.
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub flags: Option<Flags>,
    /// Legacy single flag reference, used when `flags` lacks the wanted variant.
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_level_domain: Vec<String>,
}

/// Image references for a country's flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

/// A currency or language entry; only the name is displayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedEntry {
    #[serde(default)]
    pub name: Option<String>,
}

/// Serde helper: treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

fn join_names(entries: &[NamedEntry]) -> String {
    entries
        .iter()
        .filter_map(|e| non_empty(&e.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_placeholder(s: String) -> String {
    if s.is_empty() { PLACEHOLDER.to_string() } else { s }
}

impl CountryRecord {
    pub fn region_str(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }

    pub fn subregion_str(&self) -> &str {
        self.subregion.as_deref().unwrap_or("")
    }

    pub fn native_name_str(&self) -> &str {
        self.native_name.as_deref().unwrap_or("")
    }

    /// Capital, or the placeholder dash when absent or empty.
    pub fn capital_display(&self) -> String {
        non_empty(&self.capital).unwrap_or(PLACEHOLDER).to_string()
    }

    /// Currency names joined with `", "`; entries without a name are dropped.
    pub fn currencies_display(&self) -> String {
        or_placeholder(join_names(&self.currencies))
    }

    /// Language names joined with `", "`; entries without a name are dropped.
    pub fn languages_display(&self) -> String {
        or_placeholder(join_names(&self.languages))
    }

    pub fn top_level_domain_display(&self) -> String {
        self.top_level_domain.join(", ")
    }

    /// Flag for the detail page: vector image first, then the legacy field.
    pub fn detail_flag(&self) -> Option<&str> {
        self.flags
            .as_ref()
            .and_then(|f| non_empty(&f.svg))
            .or_else(|| non_empty(&self.flag))
    }

    /// Flag for list cards: raster image first, then the legacy field.
    pub fn card_flag(&self) -> Option<&str> {
        self.flags
            .as_ref()
            .and_then(|f| non_empty(&f.png))
            .or_else(|| non_empty(&self.flag))
    }
}

/// The full ordered sequence of records from one load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }
}

impl From<Vec<CountryRecord>> for Dataset {
    fn from(records: Vec<CountryRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
