//! PSimon Nuclear Demo - Main Entry Point
//!
//! Runs the beta-decay and Simon's-algorithm demos against the isotope
//! table, writing trace output to stdout.

use psimon_nuclear_lib::{beta_decay, simon, ConsoleSerial, IsotopeTable, NuclearError};

fn main() {
    // Initialize logging
    env_logger::init();

    let table = IsotopeTable::load();
    let mut serial = ConsoleSerial;

    // Optional isotope name argument; defaults to the tritium demo.
    let parent = std::env::args().nth(1).unwrap_or_else(|| "T".to_string());

    match beta_decay::simulate(&table, &mut serial, &parent) {
        Ok(result) if result.occurred => {
            beta_decay::compute_chirality(&mut serial, result.fermionic_output);
        }
        Ok(_) => {}
        Err(NuclearError::IsotopeNotFound(name)) => {
            log::warn!("Unknown isotope {name:?}, skipping decay demo");
        }
        Err(e) => {
            log::error!("Decay simulation failed: {e}");
        }
    }

    if let Err(e) = simon::nuclear_search(&table, &mut serial, &parent) {
        log::warn!("Nuclear search failed: {e}");
    }
}
