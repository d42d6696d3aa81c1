//! countries_rs
//!
//! A small Rust library for browsing a static country dataset. Pairs with the
//! `countries` CLI and the `countries-gui` desktop app.
//!
//! ### Features
//! - Load a JSON array of country records from `{base}/data.json` or a local file
//! - Derive region options and filter by name substring + region
//! - Look a country up by alpha-3 code and resolve its border countries
//! - Per-view background loads that are discarded once the view is torn down
//!
//! ### Example
//! ```no_run
//! use countries_rs::{Client, Filter, Source, browse, detail};
//!
//! let client = Client::new(Source::parse("data.json"));
//! let dataset = client.load()?;
//! println!("regions: {:?}", browse::regions(&dataset));
//! for c in Filter::new("fra", "").apply(&dataset) {
//!     println!("{} ({})", c.name, c.alpha3_code);
//! }
//! if let Some(fra) = detail::find_by_code(&dataset, "FRA") {
//!     println!("{:?}", detail::resolve_borders(&dataset, fra));
//! }
//! # Ok::<(), countries_rs::LoadError>(())
//! ```

pub mod api;
pub mod browse;
pub mod detail;
pub mod error;
pub mod format;
pub mod models;
pub mod nav;
pub mod settings;
pub mod view;

pub use api::{Client, Source};
pub use browse::{CountryCard, Filter};
pub use detail::{BorderLink, CountryDetail, Lookup};
pub use error::LoadError;
pub use models::{CountryRecord, Dataset};
pub use view::{DatasetTask, DetailDisplay, DetailView, ListView, LoadState};
