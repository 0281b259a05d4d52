//! Skill levels and the named tiers derived from them.

#[cfg(test)]
#[path = "skill_test.rs"]
mod skill_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ListingError;

/// Numeric skill level in `0..=5`.
///
/// Values outside the range never exist: construction and deserialization
/// both reject them, so renderers can match on the tier without a fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    /// Build a level, rejecting values outside `0..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::SkillLevelOutOfRange`] for any other value.
    pub fn new(value: i32) -> Result<Self, ListingError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(ListingError::SkillLevelOutOfRange(value)),
        }
    }

    /// Build a level, clamping into `0..=5`.
    #[must_use]
    pub fn saturating(value: i32) -> Self {
        let clamped = value.clamp(i32::from(Self::MIN), i32::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn tier(self) -> SkillTier {
        SkillTier::for_level(self)
    }
}

impl TryFrom<i32> for SkillLevel {
    type Error = ListingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i32::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Named band a skill level falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    Unskilled,
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl SkillTier {
    /// Step function from level to tier: 0, 1-2, 3, 4, 5.
    #[must_use]
    pub fn for_level(level: SkillLevel) -> Self {
        match level.value() {
            0 => Self::Unskilled,
            1 | 2 => Self::Beginner,
            3 => Self::Intermediate,
            4 => Self::Advanced,
            _ => Self::Master,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unskilled => "unskilled",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Master => "master",
        }
    }

    /// BEM modifier class used by the badge stylesheet.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Unskilled => "skill-badge--unskilled",
            Self::Beginner => "skill-badge--beginner",
            Self::Intermediate => "skill-badge--intermediate",
            Self::Advanced => "skill-badge--advanced",
            Self::Master => "skill-badge--master",
        }
    }

    /// Accent color for the tier.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Unskilled => "#9e9a93",
            Self::Beginner => "#6fa86b",
            Self::Intermediate => "#4f8fc0",
            Self::Advanced => "#c98a2e",
            Self::Master => "#8b4049",
        }
    }
}
