//! The seven obesity categories the classifier predicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Obesity category, in classifier class-index order (0–6).
///
/// The classifier was trained against this exact table; an index it returns
/// outside 0..=6 means the artifact and this table disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObesityLevel {
    #[serde(rename = "Insufficient_Weight")]
    InsufficientWeight,
    #[serde(rename = "Normal_Weight")]
    NormalWeight,
    #[serde(rename = "Obesity_Type_I")]
    ObesityTypeI,
    #[serde(rename = "Obesity_Type_II")]
    ObesityTypeII,
    #[serde(rename = "Obesity_Type_III")]
    ObesityTypeIII,
    #[serde(rename = "Overweight_Level_I")]
    OverweightLevelI,
    #[serde(rename = "Overweight_Level_II")]
    OverweightLevelII,
}

/// All levels in class-index order.
pub const LEVELS: [ObesityLevel; 7] = [
    ObesityLevel::InsufficientWeight,
    ObesityLevel::NormalWeight,
    ObesityLevel::ObesityTypeI,
    ObesityLevel::ObesityTypeII,
    ObesityLevel::ObesityTypeIII,
    ObesityLevel::OverweightLevelI,
    ObesityLevel::OverweightLevelII,
];

impl ObesityLevel {
    /// Resolve a classifier output class, `None` outside the table.
    pub fn from_class(class: usize) -> Option<Self> {
        LEVELS.get(class).copied()
    }

    /// The classifier class index of this level.
    pub fn class(self) -> usize {
        self as usize
    }

    /// The dataset label token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "Insufficient_Weight",
            Self::NormalWeight => "Normal_Weight",
            Self::ObesityTypeI => "Obesity_Type_I",
            Self::ObesityTypeII => "Obesity_Type_II",
            Self::ObesityTypeIII => "Obesity_Type_III",
            Self::OverweightLevelI => "Overweight_Level_I",
            Self::OverweightLevelII => "Overweight_Level_II",
        }
    }

    /// Short human-readable assessment for display.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "Below the healthy weight range",
            Self::NormalWeight => "Within the healthy weight range",
            Self::ObesityTypeI => "Obesity, class I",
            Self::ObesityTypeII => "Obesity, class II",
            Self::ObesityTypeIII => "Obesity, class III",
            Self::OverweightLevelI => "Overweight, level I",
            Self::OverweightLevelII => "Overweight, level II",
        }
    }
}

impl fmt::Display for ObesityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
