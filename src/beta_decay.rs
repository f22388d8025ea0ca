//! Beta decay simulation
//!
//! Implements the single nuclear transition the demo knows about,
//! tritium beta-minus decay (T → He-3 + e⁻ + ν̄ₑ), plus the chirality
//! classification of the emitted fermions. Every branch reports what it
//! did over the serial trace sink.

use serde::{Deserialize, Serialize};

use crate::error::{NuclearError, Result};
use crate::isotope::IsotopeTable;
use crate::serial::SerialSink;

/// Physical constants for the decay rule
pub mod constants {
    /// Q value of tritium beta decay [MeV]. Hardcoded, not derived from
    /// the mass table.
    pub const T_HE3_Q_VALUE_MEV: f64 = 0.01857;
    /// Digits after the decimal point for serial float traces.
    pub const SERIAL_FLOAT_DIGITS: usize = 5;
}

/// Which decay-product fermions are present.
///
/// Wire layout is two bits: bit 0 = electron, bit 1 = antineutrino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FermionicOutput {
    pub electron: bool,
    pub antineutrino: bool,
}

impl FermionicOutput {
    /// Both decay products present, the beta-minus signature.
    pub const BETA_MINUS: Self = Self {
        electron: true,
        antineutrino: true,
    };

    pub fn from_bits(bits: u8) -> Self {
        Self {
            electron: bits & 0b01 != 0,
            antineutrino: bits & 0b10 != 0,
        }
    }

    pub fn bits(self) -> u8 {
        (self.electron as u8) | ((self.antineutrino as u8) << 1)
    }
}

/// Handedness classification of a fermionic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chirality {
    LeftHanded,
    RightHanded,
    Center,
}

impl Chirality {
    /// Exhaustive classification policy: both fermions → LEFT-HANDED,
    /// electron alone → RIGHT-HANDED, everything else → CENTER.
    pub fn classify(output: FermionicOutput) -> Self {
        match (output.electron, output.antineutrino) {
            (true, true) => Chirality::LeftHanded,
            (true, false) => Chirality::RightHanded,
            (false, true) | (false, false) => Chirality::Center,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Chirality::LeftHanded => "LEFT-HANDED",
            Chirality::RightHanded => "RIGHT-HANDED",
            Chirality::Center => "CENTER",
        }
    }
}

/// Outcome of a single decay simulation. Fresh per call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DecayResult {
    pub occurred: bool,
    pub q_value_mev: f64,
    pub fermionic_output: FermionicOutput,
}

/// Simulate beta decay of the named parent isotope.
///
/// Only the tritium rule exists: a parent whose name starts with "T"
/// decays to He-3. Any other known parent is stable, which is a normal
/// outcome with `occurred = false`. An unknown parent is the one real
/// error this module can produce.
pub fn simulate(
    table: &IsotopeTable,
    serial: &mut dyn SerialSink,
    parent_name: &str,
) -> Result<DecayResult> {
    let mut result = DecayResult::default();

    let Some(parent) = table.find_isotope(parent_name) else {
        serial.write("[Beta Decay] Parent isotope not found\n");
        return Err(NuclearError::IsotopeNotFound(parent_name.to_string()));
    };

    serial.write("[Beta Decay] Simulating: ");
    serial.write(&parent.name);
    serial.write(" → ");

    if parent.name.starts_with('T') {
        if let Some(daughter) = table.find_isotope("He-3") {
            result.occurred = true;
            result.q_value_mev = constants::T_HE3_Q_VALUE_MEV;
            result.fermionic_output = FermionicOutput::BETA_MINUS;

            serial.write(&daughter.name);
            serial.write(" + e⁻ + ν̄ₑ\n");
            serial.write("[Beta Decay] Q = ");
            serial.write_float(result.q_value_mev, constants::SERIAL_FLOAT_DIGITS);
            serial.write(" MeV\n");
        } else {
            // Daughter missing from the table suppresses the decay.
            serial.write("(daughter He-3 not in table, decay suppressed)\n");
        }
    } else {
        serial.write("STABLE (no decay)\n");
    }

    Ok(result)
}

/// Decode a fermionic output and report its handedness.
///
/// Purely a reporting step; the classification itself is in
/// [`Chirality::classify`].
pub fn compute_chirality(serial: &mut dyn SerialSink, output: FermionicOutput) -> Chirality {
    serial.write("[Chirality] Fermionic output: ");
    serial.write_hex(output.bits());
    serial.write("\n");

    serial.write("[Chirality] e⁻: ");
    serial.write(if output.electron { "YES" } else { "NO" });
    serial.write("\n[Chirality] ν̄ₑ: ");
    serial.write(if output.antineutrino { "YES" } else { "NO" });
    serial.write("\n");

    let chirality = Chirality::classify(output);
    serial.write("[Chirality] Handedness: ");
    serial.write(chirality.label());
    serial.write("\n");

    chirality
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serial::MemorySerial;

    #[test]
    fn test_tritium_decays_to_he3() {
        let table = IsotopeTable::builtin();
        let mut serial = MemorySerial::new();

        let result = simulate(&table, &mut serial, "T").unwrap();
        assert!(result.occurred);
        assert_eq!(result.q_value_mev, 0.01857);
        assert_eq!(result.fermionic_output.bits(), 0b11);
        assert!(serial.contains("T → He-3 + e⁻ + ν̄ₑ"));
        assert!(serial.contains("Q = 0.01857 MeV"));
    }

    #[test]
    fn test_stable_isotopes_do_not_decay() {
        let table = IsotopeTable::builtin();
        for name in ["H", "D", "He-3", "He-4"] {
            let mut serial = MemorySerial::new();
            let result = simulate(&table, &mut serial, name).unwrap();
            assert!(!result.occurred, "{name} should be stable");
            assert_eq!(result.q_value_mev, 0.0);
            assert_eq!(result.fermionic_output.bits(), 0);
            assert!(serial.contains("STABLE (no decay)"));
        }
    }

    #[test]
    fn test_unknown_parent_is_an_error() {
        let table = IsotopeTable::builtin();
        let mut serial = MemorySerial::new();

        let err = simulate(&table, &mut serial, "U-235").unwrap_err();
        assert!(matches!(err, NuclearError::IsotopeNotFound(name) if name == "U-235"));
        assert!(serial.contains("Parent isotope not found"));
    }

    #[test]
    fn test_missing_daughter_suppresses_decay() {
        // A table holding tritium but no He-3.
        let json = serde_json::json!({
            "isotopes": [{
                "name": "T", "z": 1, "n": 2, "a": 3,
                "mass_u": 3.01605, "binding_energy_mev": 2.827,
                "chirality_index": 1.0, "handedness": "LEFT-HANDED",
                "h7_index": 2, "h7_partner": 5
            }]
        });
        let table: IsotopeTable = serde_json::from_value(json).unwrap();

        let mut serial = MemorySerial::new();
        let result = simulate(&table, &mut serial, "T").unwrap();
        assert!(!result.occurred);
        assert_eq!(result.fermionic_output.bits(), 0);
    }

    #[test]
    fn test_fermionic_output_bit_layout() {
        assert!(FermionicOutput::from_bits(0b01).electron);
        assert!(!FermionicOutput::from_bits(0b01).antineutrino);
        assert!(!FermionicOutput::from_bits(0b10).electron);
        assert!(FermionicOutput::from_bits(0b10).antineutrino);
        assert_eq!(FermionicOutput::BETA_MINUS.bits(), 0b11);
    }

    #[test]
    fn test_chirality_classification() {
        let cases = [
            (0b11, Chirality::LeftHanded),
            (0b01, Chirality::RightHanded),
            (0b10, Chirality::Center),
            (0b00, Chirality::Center),
        ];
        for (bits, expected) in cases {
            let mut serial = MemorySerial::new();
            let got = compute_chirality(&mut serial, FermionicOutput::from_bits(bits));
            assert_eq!(got, expected, "mask {bits:#04b}");
            assert!(serial.contains(expected.label()));
        }
    }

    #[test]
    fn test_chirality_trace_lines() {
        let mut serial = MemorySerial::new();
        compute_chirality(&mut serial, FermionicOutput::BETA_MINUS);
        assert_eq!(
            serial.lines(),
            &[
                "[Chirality] Fermionic output: 0x03",
                "[Chirality] e⁻: YES",
                "[Chirality] ν̄ₑ: YES",
                "[Chirality] Handedness: LEFT-HANDED",
            ]
        );
    }
}
