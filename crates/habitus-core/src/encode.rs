//! Survey answers → fixed-order numeric feature vector.
//!
//! The output follows [`crate::vocab::COLUMNS`]: Age, Gender, Height, Weight,
//! CALC, FAVC, FCVC, NCP, SCC, SMOKE, CH2O, family_history_with_overweight,
//! FAF, TUE, CAEC, MTRANS. The scaler and classifier were fit against this
//! order; nothing downstream can detect a reordering, so changes here must
//! stay in lockstep with the artifact export.

use crate::profile::Profile;

/// Number of feature columns.
pub const FEATURE_COUNT: usize = 16;

/// One encoded prediction request, in training column order.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Encode a profile into the feature vector the classifier expects.
///
/// Deterministic and pure: numerics pass through, binary answers map to
/// {0, 1} with the positive token ("Male", "yes") as 1, ordinal and nominal
/// answers map to their zero-based vocabulary position.
pub fn encode(profile: &Profile) -> FeatureVector {
    [
        profile.age as f64,
        profile.gender.encoded(),
        profile.height,
        profile.weight,
        profile.alcohol.encoded(),
        profile.high_calorie_food.encoded(),
        profile.vegetable_freq,
        profile.meals_per_day,
        profile.monitors_calories.encoded(),
        profile.smokes.encoded(),
        profile.water_intake,
        profile.family_history.encoded(),
        profile.physical_activity,
        profile.screen_time,
        profile.snacking.encoded(),
        profile.transport.encoded(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::baseline;
    use crate::profile::{Frequency, Gender, Transport, YesNo};
    use crate::vocab::COLUMNS;

    fn column(name: &str) -> usize {
        COLUMNS.iter().position(|c| *c == name).unwrap()
    }

    #[test]
    fn baseline_profile_encodes_to_known_vector() {
        let v = encode(&baseline());
        assert_eq!(
            v,
            [
                25.0, 1.0, 1.70, 60.0, 0.0, 0.0, 2.0, 3.0, 0.0, 0.0, 2.0, 0.0, 1.0, 1.0, 1.0, 0.0
            ]
        );
    }

    #[test]
    fn encode_is_deterministic() {
        let p = baseline();
        assert_eq!(encode(&p), encode(&p));
    }

    #[test]
    fn binary_answers_map_positive_token_to_one() {
        let mut p = baseline();
        p.gender = Gender::Male;
        assert_eq!(encode(&p)[column("Gender")], 1.0);
        p.gender = Gender::Female;
        assert_eq!(encode(&p)[column("Gender")], 0.0);

        p.high_calorie_food = YesNo::Yes;
        p.monitors_calories = YesNo::Yes;
        p.smokes = YesNo::Yes;
        p.family_history = YesNo::Yes;
        let v = encode(&p);
        for name in ["FAVC", "SCC", "SMOKE", "family_history_with_overweight"] {
            assert_eq!(v[column(name)], 1.0, "{name} should encode yes as 1");
        }
    }

    #[test]
    fn ordinal_answers_map_to_vocabulary_position() {
        let mut p = baseline();
        p.alcohol = Frequency::Always;
        assert_eq!(encode(&p)[column("CALC")], 3.0);
        p.alcohol = Frequency::No;
        assert_eq!(encode(&p)[column("CALC")], 0.0);
        p.snacking = Frequency::Frequently;
        assert_eq!(encode(&p)[column("CAEC")], 2.0);
    }

    #[test]
    fn transport_maps_to_vocabulary_position() {
        let mut p = baseline();
        p.transport = Transport::Bike;
        assert_eq!(encode(&p)[column("MTRANS")], 4.0);
        p.transport = Transport::PublicTransportation;
        assert_eq!(encode(&p)[column("MTRANS")], 0.0);
    }

    #[test]
    fn numeric_answers_pass_through() {
        let mut p = baseline();
        p.weight = 87.5;
        p.water_intake = 2.5;
        let v = encode(&p);
        assert_eq!(v[column("Weight")], 87.5);
        assert_eq!(v[column("CH2O")], 2.5);
    }
}
