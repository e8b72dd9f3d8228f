//! Optical materials table
//!
//! This module provides:
//! - Material categories for photonic process stacks
//! - Refractive indices at the 1550 nm telecom band
//! - A small library keyed by material id with the common stack preloaded

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Material categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum MaterialCategory {
    /// Waveguide core materials (silicon, nitride)
    Core,
    /// Cladding and buried-oxide materials
    Cladding,
    /// Metals for heaters and contacts
    Metal,
    /// Vacuum or air
    Ambient,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core => write!(f, "Core"),
            Self::Cladding => write!(f, "Cladding"),
            Self::Metal => write!(f, "Metal"),
            Self::Ambient => write!(f, "Ambient"),
        }
    }
}

/// Unique identifier for a material
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub String);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An optical material used in a fabrication stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material identifier used as the lookup key
    pub id: MaterialId,
    /// Human readable name
    pub name: String,
    /// Category of the material
    pub category: MaterialCategory,
    /// Refractive index at the design wavelength
    pub n: f64,
}

impl Material {
    /// Create a new material
    pub fn new(id: &str, name: &str, category: MaterialCategory, n: f64) -> Self {
        Self {
            id: MaterialId(id.to_string()),
            name: name.to_string(),
            category,
            n,
        }
    }
}

/// Refractive index of crystalline silicon at 1550 nm
pub const SILICON_N: f64 = 3.4757;
/// Refractive index of thermal oxide at 1550 nm
pub const OXIDE_N: f64 = 1.4440;
/// Refractive index of stoichiometric silicon nitride at 1550 nm
pub const NITRIDE_N: f64 = 1.9963;
/// Refractive index of air
pub const AIR_N: f64 = 1.0;

/// Material library, iterated in insertion order
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    /// Collection of materials by ID
    materials: IndexMap<MaterialId, Material>,
}

impl MaterialLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            materials: IndexMap::new(),
        }
    }

    /// Add a material to the library, replacing any material with the same id
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Get a material by ID
    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(&MaterialId(id.to_string()))
    }

    /// Refractive index of a material, failing with the offending id
    pub fn index_of(&self, id: &str) -> Result<f64> {
        self.get_material(id).map(|m| m.n).ok_or_else(|| {
            LookupError::UnknownMaterial {
                material: id.to_string(),
            }
            .into()
        })
    }

    /// All materials in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    /// Get all materials in a specific category
    pub fn get_materials_by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        self.materials
            .values()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Get the number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the standard silicon-photonics material library
pub fn init_standard_library() -> MaterialLibrary {
    let mut library = MaterialLibrary::new();
    library.add_material(Material::new("si", "Silicon", MaterialCategory::Core, SILICON_N));
    library.add_material(Material::new(
        "sin",
        "Silicon Nitride",
        MaterialCategory::Core,
        NITRIDE_N,
    ));
    library.add_material(Material::new(
        "sio2",
        "Silicon Dioxide",
        MaterialCategory::Cladding,
        OXIDE_N,
    ));
    library.add_material(Material::new("al", "Aluminum", MaterialCategory::Metal, 1.44));
    library.add_material(Material::new("air", "Air", MaterialCategory::Ambient, AIR_N));
    library
}
