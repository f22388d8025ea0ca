//! PSimon Nuclear Demo Library
//!
//! This library provides two small nuclear simulation demos: tritium
//! beta decay with fermionic chirality reporting, and a classical
//! emulation of Simon's algorithm seeded from an isotope table. All
//! observable behavior is reported as trace text through a serial sink.

pub mod beta_decay;
pub mod error;
pub mod isotope;
pub mod serial;
pub mod simon;

pub use beta_decay::{Chirality, DecayResult, FermionicOutput};
pub use error::{NuclearError, Result};
pub use isotope::{Isotope, IsotopeTable};
pub use serial::{ConsoleSerial, MemorySerial, SerialSink};
pub use simon::{SimonOracle, SimonResult};
