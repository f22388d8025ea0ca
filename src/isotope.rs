//! Nuclear isotope table
//!
//! Static attribute records for the light isotopes the demos work with
//! (H, D, T, He-3, He-4). The table is populated once at startup, either
//! from a JSON config file or from the built-in data, and is read-only
//! for the rest of the run.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::Result;

/// A nuclear species record. Immutable once the table is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isotope {
    pub name: String,
    pub z: u32,                    // Protons
    pub n: u32,                    // Neutrons
    pub a: u32,                    // Mass number
    pub mass_u: f64,               // Atomic mass [u]
    pub binding_energy_mev: f64,
    pub chirality_index: f64,
    pub handedness: String,
    pub h7_index: u8,              // H7 conservation index
    pub h7_partner: u8,
}

/// Read-only isotope lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsotopeTable {
    isotopes: Vec<Isotope>,
}

/// Config file locations probed by [`IsotopeTable::load`].
const CONFIG_PATHS: [&str; 2] = ["config/isotopes.json", "../config/isotopes.json"];

impl IsotopeTable {
    /// The five-entry table shipped with the simulator.
    pub fn builtin() -> Self {
        let isotopes = vec![
            Isotope {
                name: "H".to_string(),
                z: 1,
                n: 0,
                a: 1,
                mass_u: 1.00783,
                binding_energy_mev: 0.0,
                chirality_index: 0.0,
                handedness: "ACHIRAL".to_string(),
                h7_index: 7,
                h7_partner: 0,
            },
            Isotope {
                name: "D".to_string(),
                z: 1,
                n: 1,
                a: 2,
                mass_u: 2.01410,
                binding_energy_mev: 1.112,
                chirality_index: 0.0,
                handedness: "ACHIRAL".to_string(),
                h7_index: 0,
                h7_partner: 7,
            },
            Isotope {
                name: "T".to_string(),
                z: 1,
                n: 2,
                a: 3,
                mass_u: 3.01605,
                binding_energy_mev: 2.827,
                chirality_index: 1.0,
                handedness: "LEFT-HANDED".to_string(),
                h7_index: 2,
                h7_partner: 5,
            },
            Isotope {
                name: "He-3".to_string(),
                z: 2,
                n: 1,
                a: 3,
                mass_u: 3.01603,
                binding_energy_mev: 7.718,
                chirality_index: -1.0,
                handedness: "RIGHT-HANDED".to_string(),
                h7_index: 5,
                h7_partner: 2,
            },
            Isotope {
                name: "He-4".to_string(),
                z: 2,
                n: 2,
                a: 4,
                mass_u: 4.00260,
                binding_energy_mev: 28.296,
                chirality_index: 0.0,
                handedness: "CENTER (Balanced)".to_string(),
                h7_index: 1,
                h7_partner: 6,
            },
        ];

        Self { isotopes }
    }

    /// Load the table from a JSON config file.
    pub fn from_config_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table: IsotopeTable = serde_json::from_str(&content)?;
        Ok(table)
    }

    /// Probe the known config locations; fall back to the built-in table.
    pub fn load() -> Self {
        for path in &CONFIG_PATHS {
            match Self::from_config_file(path) {
                Ok(table) => {
                    log::info!("Loaded {} isotopes from {}", table.isotopes.len(), path);
                    return table;
                }
                Err(crate::error::NuclearError::Io(_)) => continue,
                Err(e) => {
                    log::warn!("Ignoring malformed isotope config {path}: {e}");
                }
            }
        }

        log::info!("Using built-in isotope table");
        Self::builtin()
    }

    /// Exact-name lookup. Absence is a normal outcome, not an error.
    pub fn find_isotope(&self, name: &str) -> Option<&Isotope> {
        self.isotopes.iter().find(|iso| iso.name == name)
    }

    pub fn len(&self) -> usize {
        self.isotopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.isotopes.is_empty()
    }

    /// H7 conservation check between two isotopes: each must pair its
    /// index with its partner to sum to 7. False if either is unknown.
    pub fn h7_conserved(&self, a: &str, b: &str) -> bool {
        match (self.find_isotope(a), self.find_isotope(b)) {
            (Some(x), Some(y)) => {
                x.h7_index + x.h7_partner == 7 && y.h7_index + y.h7_partner == 7
            }
            _ => false,
        }
    }
}

impl Default for IsotopeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
