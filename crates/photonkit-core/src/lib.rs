//! # PhotonKit Core
//!
//! Core types and utilities for PhotonKit.
//! Provides the shared error taxonomy, unit and angle helpers, and the
//! foundry data tables (materials and common layer names).

pub mod data;
pub mod error;
pub mod units;

pub use data::{CommonLayer, Material, MaterialCategory, MaterialId, MaterialLibrary};
pub use error::{Error, GeometryError, LookupError, Result, ValidationError};
pub use units::{angles_equivalent, approx_eq, normalize_degrees, LengthUnit, GEOMETRY_TOLERANCE};
