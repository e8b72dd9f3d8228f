//! Foundry data tables
//!
//! This module provides:
//! - Optical materials with refractive indices
//! - Common fabrication layer names used as registry keys

pub mod layers;
pub mod materials;

pub use layers::CommonLayer;
pub use materials::{
    init_standard_library, Material, MaterialCategory, MaterialId, MaterialLibrary, AIR_N,
    NITRIDE_N, OXIDE_N, SILICON_N,
};
