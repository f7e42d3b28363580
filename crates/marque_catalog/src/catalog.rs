//! Catalog parsing and lookup

use crate::model::Vehicle;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors from parsing a catalog document
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("vehicle at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate vehicle id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogDoc {
    vehicles: Vec<Vehicle>,
}

/// The vehicle catalog: declaration-ordered records plus an id index
#[derive(Debug)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Parse a catalog from its TOML document
    ///
    /// Ids must be non-empty and unique.
    pub fn from_toml_str(doc: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = toml::from_str(doc)?;

        let mut index = FxHashMap::default();
        for (position, vehicle) in doc.vehicles.iter().enumerate() {
            if vehicle.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if index.insert(vehicle.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(vehicle.id.clone()));
            }
        }

        Ok(Self {
            vehicles: doc.vehicles,
            index,
        })
    }

    /// All vehicles, in display order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Look up a vehicle by id
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.index.get(id).map(|&i| &self.vehicles[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

const CATALOG_TOML: &str = include_str!("../data/catalog.toml");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The embedded showcase catalog, parsed on first access
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        Catalog::from_toml_str(CATALOG_TOML).expect("embedded catalog document is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let gt = catalog().get("meridian-gt").unwrap();
        assert_eq!(gt.title, "Meridian GT");
        assert_eq!(gt.specs.horsepower, 1015);
        assert_eq!(gt.specs.price, 248_000);
        assert!(catalog().get("unknown-model").is_none());
    }

    #[test]
    fn test_display_order_preserved() {
        let ids: Vec<&str> = catalog().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["meridian-gt", "vanta-s", "aurelia-r", "strada-e"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doc = r#"
            [[vehicles]]
            id = "twin"
            src = "a.jpg"
            alt = "a"
            title = "A"
            description = "first"
            tagline = "one"
            specs = { horsepower = 1, top_speed = 1, acceleration = 1.0, engine = "e", price = 1 }

            [[vehicles]]
            id = "twin"
            src = "b.jpg"
            alt = "b"
            title = "B"
            description = "second"
            tagline = "two"
            specs = { horsepower = 2, top_speed = 2, acceleration = 2.0, engine = "e", price = 2 }
        "#;
        assert!(matches!(
            Catalog::from_toml_str(doc),
            Err(CatalogError::DuplicateId(id)) if id == "twin"
        ));
    }

    #[test]
    fn test_empty_id_rejected() {
        let doc = r#"
            [[vehicles]]
            id = ""
            src = "a.jpg"
            alt = "a"
            title = "A"
            description = "d"
            tagline = "t"
            specs = { horsepower = 1, top_speed = 1, acceleration = 1.0, engine = "e", price = 1 }
        "#;
        assert!(matches!(
            Catalog::from_toml_str(doc),
            Err(CatalogError::EmptyId(0))
        ));
    }
}
