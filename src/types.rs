//! Strength tiers and classification results.

use std::fmt;

/// Discrete strength bucket for a candidate password.
///
/// The enumeration is closed. Overlong input clamps to
/// [`StrengthTier::Strong`] with an advisory description instead of
/// introducing a fourth state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    /// Up to 9 characters under the default policy. The initial state of an
    /// empty field.
    #[default]
    Weak,
    /// 10 to 19 characters under the default policy.
    Medium,
    /// 20 characters and up under the default policy.
    Strong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Outcome of a single classification call.
///
/// Produced fresh on every call. Two inputs of equal character count always
/// yield identical results under the same policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub tier: StrengthTier,
    /// Human-readable advisory text for the matched band.
    pub description: String,
}

impl StrengthResult {
    pub fn new(tier: StrengthTier, description: impl Into<String>) -> Self {
        StrengthResult {
            tier,
            description: description.into(),
        }
    }
}
