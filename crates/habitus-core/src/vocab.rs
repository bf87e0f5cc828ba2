//! Fixed survey vocabularies and the feature column order.
//!
//! The scaler and classifier were fit against this exact column order and
//! these exact category positions. Reordering either silently corrupts
//! predictions without raising an error, so both live here as const tables
//! rather than inline literals at each use site.

/// Feature columns in training order. `encode` emits one value per entry.
pub const COLUMNS: [&str; 16] = [
    "Age",
    "Gender",
    "Height",
    "Weight",
    "CALC",
    "FAVC",
    "FCVC",
    "NCP",
    "SCC",
    "SMOKE",
    "CH2O",
    "family_history_with_overweight",
    "FAF",
    "TUE",
    "CAEC",
    "MTRANS",
];

/// Consumption-frequency levels (CALC, CAEC), ordinal: position is the code.
pub const FREQUENCY_LEVELS: [&str; 4] = ["no", "Sometimes", "Frequently", "Always"];

/// Transport modes (MTRANS), nominal: position is the code.
pub const TRANSPORT_LEVELS: [&str; 5] = [
    "Public_Transportation",
    "Walking",
    "Automobile",
    "Motorbike",
    "Bike",
];

/// Gender tokens. "Male" encodes to 1, "Female" to 0.
pub const GENDER_LEVELS: [&str; 2] = ["Female", "Male"];

/// Yes/no tokens (FAVC, SCC, SMOKE, family history). "yes" encodes to 1.
pub const YES_NO_LEVELS: [&str; 2] = ["no", "yes"];

/// Zero-based position of `token` in `levels`, or `None` if absent.
pub fn position(levels: &[&str], token: &str) -> Option<usize> {
    levels.iter().position(|l| *l == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_positions_are_the_ordinal_codes() {
        assert_eq!(position(&FREQUENCY_LEVELS, "no"), Some(0));
        assert_eq!(position(&FREQUENCY_LEVELS, "Sometimes"), Some(1));
        assert_eq!(position(&FREQUENCY_LEVELS, "Frequently"), Some(2));
        assert_eq!(position(&FREQUENCY_LEVELS, "Always"), Some(3));
    }

    #[test]
    fn transport_positions_are_the_nominal_codes() {
        assert_eq!(position(&TRANSPORT_LEVELS, "Public_Transportation"), Some(0));
        assert_eq!(position(&TRANSPORT_LEVELS, "Bike"), Some(4));
    }

    #[test]
    fn unknown_token_has_no_position() {
        assert_eq!(position(&FREQUENCY_LEVELS, "sometimes"), None);
        assert_eq!(position(&TRANSPORT_LEVELS, "Car"), None);
    }
}
