//! One prediction request: the sixteen survey answers.
//!
//! Categorical answers are typed enums whose `FromStr` impls are the
//! vocabulary checkpoints — any path that builds a [`Profile`] from raw
//! strings rejects tokens outside the fixed sets in [`crate::vocab`].
//! Serde names follow the survey column schema, so a serialized profile
//! round-trips through the same tokens the training data used.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::vocab::{FREQUENCY_LEVELS, GENDER_LEVELS, TRANSPORT_LEVELS, YES_NO_LEVELS, position};

/// Gender answer. "Male" encodes to 1, "Female" to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        GENDER_LEVELS[*self as usize]
    }

    pub(crate) fn encoded(self) -> f64 {
        self as u8 as f64
    }
}

/// Binary yes/no answer (FAVC, SCC, SMOKE, family history). "yes" encodes to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "no")]
    No,
    #[serde(rename = "yes")]
    Yes,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        YES_NO_LEVELS[*self as usize]
    }

    pub(crate) fn encoded(self) -> f64 {
        self as u8 as f64
    }
}

/// Consumption frequency (alcohol CALC, snacking CAEC).
///
/// Ordinal: the variant position is the trained encoding, `no` = 0 up to
/// `Always` = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "no")]
    No,
    Sometimes,
    Frequently,
    Always,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        FREQUENCY_LEVELS[*self as usize]
    }

    pub(crate) fn encoded(self) -> f64 {
        self as u8 as f64
    }
}

/// Usual transport mode (MTRANS).
///
/// Nominal, but the trained encoding is still the variant position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transport {
    #[serde(rename = "Public_Transportation")]
    PublicTransportation,
    Walking,
    Automobile,
    Motorbike,
    Bike,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        TRANSPORT_LEVELS[*self as usize]
    }

    pub(crate) fn encoded(self) -> f64 {
        self as u8 as f64
    }
}

macro_rules! token_impls {
    ($ty:ident, $levels:expr, $vocabulary:literal, [$($variant:ident),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = EncodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                const VARIANTS: &[$ty] = &[$($ty::$variant),+];
                position(&$levels, s)
                    .map(|i| VARIANTS[i])
                    .ok_or_else(|| EncodeError::UnknownCategory {
                        vocabulary: $vocabulary,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_impls!(Gender, GENDER_LEVELS, "gender", [Female, Male]);
token_impls!(YesNo, YES_NO_LEVELS, "yes/no", [No, Yes]);
token_impls!(
    Frequency,
    FREQUENCY_LEVELS,
    "frequency",
    [No, Sometimes, Frequently, Always]
);
token_impls!(
    Transport,
    TRANSPORT_LEVELS,
    "transport",
    [PublicTransportation, Walking, Automobile, Motorbike, Bike]
);

/// The sixteen survey answers describing one prediction request.
///
/// Transient: built per submission, consumed by [`crate::encode`], dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years.
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    /// Height in metres.
    #[serde(rename = "Height")]
    pub height: f64,
    /// Weight in kilograms.
    #[serde(rename = "Weight")]
    pub weight: f64,
    /// Alcohol consumption.
    #[serde(rename = "CALC")]
    pub alcohol: Frequency,
    /// Frequent high-calorie food.
    #[serde(rename = "FAVC")]
    pub high_calorie_food: YesNo,
    /// Vegetable frequency per meal, 1–3.
    #[serde(rename = "FCVC")]
    pub vegetable_freq: f64,
    /// Main meals per day, 1–4.
    #[serde(rename = "NCP")]
    pub meals_per_day: f64,
    /// Monitors calorie intake.
    #[serde(rename = "SCC")]
    pub monitors_calories: YesNo,
    #[serde(rename = "SMOKE")]
    pub smokes: YesNo,
    /// Water intake in litres per day, 1–3.
    #[serde(rename = "CH2O")]
    pub water_intake: f64,
    /// Family history of overweight.
    #[serde(rename = "family_history_with_overweight")]
    pub family_history: YesNo,
    /// Physical activity in hours per week, 0–3.
    #[serde(rename = "FAF")]
    pub physical_activity: f64,
    /// Screen time in hours per day, 0–2.
    #[serde(rename = "TUE")]
    pub screen_time: f64,
    /// Snacking between meals.
    #[serde(rename = "CAEC")]
    pub snacking: Frequency,
    /// Usual transport mode.
    #[serde(rename = "MTRANS")]
    pub transport: Transport,
}

impl Profile {
    /// Check every numeric answer against its survey widget range.
    ///
    /// The interactive form enforces these bounds at input time; this is the
    /// equivalent checkpoint for profiles built programmatically.
    pub fn validate(&self) -> Result<(), EncodeError> {
        in_range("Age", self.age as f64, 0.0, 100.0)?;
        in_range("Height", self.height, 1.0, 2.5)?;
        in_range("Weight", self.weight, 1.0, 200.0)?;
        in_range("FCVC", self.vegetable_freq, 1.0, 3.0)?;
        in_range("NCP", self.meals_per_day, 1.0, 4.0)?;
        in_range("CH2O", self.water_intake, 1.0, 3.0)?;
        in_range("FAF", self.physical_activity, 0.0, 3.0)?;
        in_range("TUE", self.screen_time, 0.0, 2.0)?;
        Ok(())
    }
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), EncodeError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(EncodeError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
