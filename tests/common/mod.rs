//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use countrydeck::catalog::{Catalog, CountryName, CountryRecord};
use countrydeck::config::UiConfig;
use countrydeck::ui::app::App;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Seventeen countries plus Antarctica, which has no subregion or capital.
pub const COUNTRIES_JSON: &str = include_str!("../fixtures/countries.json");

pub fn fixture_records() -> Vec<CountryRecord> {
    serde_json::from_str(COUNTRIES_JSON).expect("Fixture must decode")
}

pub fn fixture_catalog() -> Catalog {
    Catalog::new(fixture_records())
}

/// Minimal record with only the fields the controller looks at.
pub fn record(
    name: &str,
    continent: Option<&str>,
    subregion: Option<&str>,
    population: u64,
    area: Option<f64>,
) -> CountryRecord {
    CountryRecord {
        name: CountryName {
            common: name.to_string(),
            official: None,
        },
        cca3: name.to_uppercase(),
        capital: None,
        population,
        area,
        continents: continent.map(|c| vec![c.to_string()]).unwrap_or_default(),
        subregion: subregion.map(str::to_string),
        currencies: None,
        languages: None,
        flags: Default::default(),
        flag: None,
        maps: Default::default(),
    }
}

/// Common names of the visible records, in display order.
pub fn names(catalog: &Catalog) -> Vec<String> {
    catalog.visible().map(|r| r.name.common.clone()).collect()
}

pub fn dataset_names(catalog: &Catalog) -> Vec<String> {
    catalog
        .dataset()
        .iter()
        .map(|r| r.name.common.clone())
        .collect()
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    let mut app = App::new(&UiConfig::default());
    app.on_resize(100, 40);
    app
}

pub fn ready_app() -> App {
    let mut app = make_app();
    app.on_catalog_loaded(Ok(fixture_records()));
    app
}
