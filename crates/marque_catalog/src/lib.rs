//! Marque Vehicle Catalog
//!
//! The fixed set of vehicles the showcase displays. Records are read-only
//! display content: parsed once from the embedded catalog document, never
//! mutated.
//!
//! # Example
//!
//! ```rust
//! use marque_catalog::catalog;
//!
//! let gt = catalog().get("meridian-gt").unwrap();
//! assert_eq!(gt.specs.horsepower, 1015);
//! ```

pub mod catalog;
pub mod model;

pub use catalog::{catalog, Catalog, CatalogError};
pub use model::{Vehicle, VehicleSpecs};
