//! Classification policy - length bands and their advisory texts.

use thiserror::Error;

use crate::types::{StrengthResult, StrengthTier};

pub const DESC_TOO_WEAK: &str = "Too Weak";
pub const DESC_COULD_BE_STRONGER: &str = "Could Be Stronger";
pub const DESC_STRONG: &str = "Strong Password";
pub const DESC_TOO_LONG: &str = "Password Too Long";

const DEFAULT_MEDIUM_AT: usize = 10;
const DEFAULT_STRONG_AT: usize = 20;
const DEFAULT_MAX_LEN: usize = 50;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
    #[error("medium_at must be at least 1 character")]
    ZeroMediumAt,
    #[error(
        "Thresholds out of order: medium_at {medium_at} <= strong_at {strong_at} <= max_len {max_len} must hold"
    )]
    MisorderedThresholds {
        medium_at: usize,
        strong_at: usize,
        max_len: usize,
    },
}

/// Inclusive character-count bands driving classification.
///
/// A count below `medium_at` is weak, below `strong_at` medium, up to
/// `max_len` strong. Anything longer clamps to strong with the advisory
/// description. The named constructors validate the ordering; a policy built
/// from a struct literal is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthPolicy {
    pub medium_at: usize,
    pub strong_at: usize,
    pub max_len: usize,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        StrengthPolicy {
            medium_at: DEFAULT_MEDIUM_AT,
            strong_at: DEFAULT_STRONG_AT,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl StrengthPolicy {
    /// Builds a validated policy with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns error if `1 <= medium_at <= strong_at <= max_len` does not
    /// hold.
    pub fn new(medium_at: usize, strong_at: usize, max_len: usize) -> Result<Self, PolicyError> {
        let policy = StrengthPolicy {
            medium_at,
            strong_at,
            max_len,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Builds the policy from environment overrides on top of the defaults.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_METER_MEDIUM_AT`: first count classified as medium
    /// - `PWD_METER_STRONG_AT`: first count classified as strong
    /// - `PWD_METER_MAX_LEN`: last count before the overlong advisory
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a set variable does not parse as an integer, or if
    /// the resulting thresholds are out of order.
    pub fn from_env() -> Result<Self, PolicyError> {
        let defaults = StrengthPolicy::default();
        let policy = StrengthPolicy {
            medium_at: read_env("PWD_METER_MEDIUM_AT", defaults.medium_at)?,
            strong_at: read_env("PWD_METER_STRONG_AT", defaults.strong_at)?,
            max_len: read_env("PWD_METER_MAX_LEN", defaults.max_len)?,
        };
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if self.medium_at == 0 {
            return Err(PolicyError::ZeroMediumAt);
        }
        if self.medium_at > self.strong_at || self.strong_at > self.max_len {
            return Err(PolicyError::MisorderedThresholds {
                medium_at: self.medium_at,
                strong_at: self.strong_at,
                max_len: self.max_len,
            });
        }
        Ok(())
    }

    /// Maps a character count to its band.
    ///
    /// Total: every count has a defined result, the overlong range included.
    pub fn band(&self, count: usize) -> StrengthResult {
        if count > self.max_len {
            // Overlong input clamps to the strongest tier; the advisory text
            // still carries the limit to the caller.
            StrengthResult::new(StrengthTier::Strong, DESC_TOO_LONG)
        } else if count >= self.strong_at {
            StrengthResult::new(StrengthTier::Strong, DESC_STRONG)
        } else if count >= self.medium_at {
            StrengthResult::new(StrengthTier::Medium, DESC_COULD_BE_STRONGER)
        } else {
            StrengthResult::new(StrengthTier::Weak, DESC_TOO_WEAK)
        }
    }
}

fn read_env(name: &'static str, default: usize) -> Result<usize, PolicyError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PolicyError::InvalidVar { name, value: raw }),
        Err(_) => Ok(default),
    }
}
