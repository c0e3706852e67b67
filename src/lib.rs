//! Password strength classification for live entry meters
//!
//! This library classifies candidate passwords into discrete strength tiers
//! by character count and derives the view state a strength meter renders.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async classification with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_MEDIUM_AT`, `PWD_METER_STRONG_AT`, `PWD_METER_MAX_LEN`:
//!   optional overrides for the classification bands
//!   (defaults: 10, 20, 50; see [`StrengthPolicy::from_env`])
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{classify_password_strength, render, PasswordField, StrengthTier};
//! use secrecy::SecretString;
//!
//! // One-shot classification
//! let password = SecretString::new("correct horse battery".to_string().into());
//! let result = classify_password_strength(&password);
//! assert_eq!(result.tier, StrengthTier::Strong);
//!
//! // Live edit session
//! let mut field = PasswordField::new();
//! let outcome = field.on_change("hunter2");
//! assert_eq!(outcome.result.tier, StrengthTier::Weak);
//!
//! let view = render(field.result());
//! println!("{}", view.description);
//! ```

// Internal modules
mod classifier;
mod field;
mod policy;
mod render;
mod types;

// Public API
pub use classifier::{classify_password_strength, classify_with_policy};
pub use field::{ChangeOutcome, PasswordField};
pub use policy::{PolicyError, StrengthPolicy};
pub use render::{render, MeterViewState, SegmentColor};
pub use types::{StrengthResult, StrengthTier};

#[cfg(feature = "async")]
pub use classifier::classify_password_strength_tx;
