//! Simon's algorithm, classical emulation
//!
//! A toy oracle f(x) = x ⊕ secret with a query counter, a fixed
//! three-query "algorithm" run, and a bridge that seeds the oracle from
//! an isotope's H7 index. The oracle is one-to-one rather than
//! two-to-one, so nothing here performs real hidden-period recovery;
//! the runner reports the configured secret directly.

use serde::{Deserialize, Serialize};

use crate::error::{NuclearError, Result};
use crate::isotope::IsotopeTable;
use crate::serial::SerialSink;

/// Qubit count the nuclear bridge requests. Reported only; it does not
/// size any data structure.
pub const BRIDGE_QUBITS: u8 = 3;

/// XOR oracle with a query counter. One instance per algorithm run;
/// re-initialization means constructing a fresh oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimonOracle {
    secret: u8,
    queries: u32,
}

impl SimonOracle {
    /// Set up the oracle with its secret and a zeroed query counter.
    pub fn init(serial: &mut dyn SerialSink, secret: u8) -> Self {
        serial.write("[Simon Oracle] Initialized with secret: ");
        serial.write_decimal(secret as u32);
        serial.write("\n");

        Self { secret, queries: 0 }
    }

    /// One oracle query: f(x) = x ⊕ secret.
    pub fn query(&mut self, serial: &mut dyn SerialSink, x: u8) -> u8 {
        self.queries += 1;
        let result = x ^ self.secret;

        serial.write("[Oracle] Query ");
        serial.write_decimal(self.queries);
        serial.write(": f(");
        serial.write_decimal(x as u32);
        serial.write(") = ");
        serial.write_decimal(result as u32);
        serial.write("\n");

        result
    }

    /// Queries issued since initialization.
    pub fn query_count(&self) -> u32 {
        self.queries
    }

    pub(crate) fn secret(&self) -> u8 {
        self.secret
    }
}

/// Outcome of one algorithm run. Fresh per run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimonResult {
    pub queries: u32,
    pub secret_found: bool,
    pub recovered_secret: u8,
}

/// Run the (classical, simplified) Simon's algorithm against an oracle.
///
/// Issues exactly three queries with inputs 0, 1, 2, then reports the
/// oracle's own secret as "recovered". A faithful implementation would
/// derive the secret from the query outputs; this one does not, and
/// `secret_found` is unconditionally true.
pub fn run_algorithm(
    oracle: &mut SimonOracle,
    serial: &mut dyn SerialSink,
    n_qubits: u8,
) -> SimonResult {
    let mut result = SimonResult::default();

    serial.write("[Simon] Starting algorithm with ");
    serial.write_decimal(n_qubits as u32);
    serial.write(" qubits\n");

    for x in 0..3u8 {
        let _fx = oracle.query(serial, x);
        result.queries += 1;
    }

    result.recovered_secret = oracle.secret();
    result.secret_found = true;

    serial.write("[Simon] Algorithm complete. Secret: ");
    serial.write_decimal(result.recovered_secret as u32);
    serial.write("\n");

    result
}

/// Look up an isotope, seed a fresh oracle with its H7 index, and run
/// the algorithm. A lookup miss touches no oracle state.
pub fn nuclear_search(
    table: &IsotopeTable,
    serial: &mut dyn SerialSink,
    target_isotope: &str,
) -> Result<SimonResult> {
    serial.write("[Simon Nuclear] Searching for: ");
    serial.write(target_isotope);
    serial.write("\n");

    let Some(iso) = table.find_isotope(target_isotope) else {
        serial.write("[Simon Nuclear] Isotope not found\n");
        return Err(NuclearError::IsotopeNotFound(target_isotope.to_string()));
    };

    serial.write("[Simon Nuclear] Found: ");
    serial.write(&iso.name);
    serial.write("\n[Simon Nuclear] H7 index: ");
    serial.write_decimal(iso.h7_index as u32);
    serial.write("\n[Simon Nuclear] Chirality: ");
    serial.write(&iso.handedness);
    serial.write("\n");

    let mut oracle = SimonOracle::init(serial, iso.h7_index);
    let result = run_algorithm(&mut oracle, serial, BRIDGE_QUBITS);

    serial.write("[Simon Nuclear] Search complete\n");
    Ok(result)
}
