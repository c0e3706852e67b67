//! Edit-session model for a password entry field.
//!
//! The UI layer owns the widgets; this model owns the password and its
//! classification for the duration of an edit session.

use secrecy::{ExposeSecret, SecretString};

use crate::classifier::classify_with_policy;
use crate::policy::StrengthPolicy;
use crate::render::{render, MeterViewState};
use crate::types::{StrengthResult, StrengthTier};

const MASK_CHAR: char = '•';

/// Outcome of a single text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    /// Fresh classification of the new text.
    pub result: StrengthResult,
    /// True exactly when the new classification crossed a band boundary.
    /// The UI layer keys transient per-threshold effects off this flag.
    pub tier_changed: bool,
}

/// Owns the password for the duration of an edit session.
///
/// The UI layer forwards every text change to [`PasswordField::on_change`];
/// the field re-classifies and exposes the current password, tier and meter
/// view state. Starts empty, weak and masked.
#[derive(Debug)]
pub struct PasswordField {
    policy: StrengthPolicy,
    password: SecretString,
    result: StrengthResult,
    revealed: bool,
}

impl PasswordField {
    pub fn new() -> Self {
        Self::with_policy(StrengthPolicy::default())
    }

    pub fn with_policy(policy: StrengthPolicy) -> Self {
        let password = SecretString::new("".to_string().into());
        let result = classify_with_policy(&password, &policy);
        PasswordField {
            policy,
            password,
            result,
            revealed: false,
        }
    }

    /// Replaces the current text and re-classifies.
    ///
    /// Every input updates the session state, overlong input included: the
    /// field never holds a password that disagrees with the displayed text.
    pub fn on_change(&mut self, text: &str) -> ChangeOutcome {
        let previous_tier = self.result.tier;

        self.password = SecretString::new(text.to_string().into());
        self.result = classify_with_policy(&self.password, &self.policy);

        let tier_changed = self.result.tier != previous_tier;

        #[cfg(feature = "tracing")]
        if tier_changed {
            tracing::debug!(from = %previous_tier, to = %self.result.tier, "strength tier changed");
        }

        ChangeOutcome {
            result: self.result.clone(),
            tier_changed,
        }
    }

    /// The password as last provided by the UI layer.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn strength(&self) -> StrengthTier {
        self.result.tier
    }

    pub fn result(&self) -> &StrengthResult {
        &self.result
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Show/hide toggle for the entry text. Returns the new state.
    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Text as the UI should display it: one mask character per character
    /// while hidden, the raw text while revealed.
    pub fn display_text(&self) -> String {
        let text = self.password.expose_secret();
        if self.revealed {
            text.to_string()
        } else {
            text.chars().map(|_| MASK_CHAR).collect()
        }
    }

    /// Meter view state, with the neutral empty presentation: no text means
    /// no segment lit and no description.
    pub fn view_state(&self) -> MeterViewState {
        if self.password.expose_secret().is_empty() {
            return MeterViewState::neutral();
        }
        render(&self.result)
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{DESC_STRONG, DESC_TOO_LONG};
    use crate::render::SegmentColor;

    #[test]
    fn test_new_field_starts_empty_weak_masked() {
        let field = PasswordField::new();

        assert_eq!(field.password().expose_secret(), "");
        assert_eq!(field.strength(), StrengthTier::Weak);
        assert!(!field.is_revealed());
    }

    #[test]
    fn test_on_change_updates_password_and_result() {
        let mut field = PasswordField::new();

        let outcome = field.on_change("abcdefghij");

        assert_eq!(field.password().expose_secret(), "abcdefghij");
        assert_eq!(outcome.result.tier, StrengthTier::Medium);
        assert_eq!(field.strength(), StrengthTier::Medium);
        assert_eq!(field.result(), &outcome.result);
    }

    #[test]
    fn test_tier_changed_only_across_band_boundaries() {
        let mut field = PasswordField::new();

        // Empty field is already weak
        assert!(!field.on_change("short").tier_changed);
        // Crosses into medium
        assert!(field.on_change("abcdefghij").tier_changed);
        // Still medium
        assert!(!field.on_change("abcdefghijk").tier_changed);
        // Back down to weak
        assert!(field.on_change("short").tier_changed);
    }

    #[test]
    fn test_overlong_input_still_updates_session() {
        let mut field = PasswordField::new();
        let overlong = "a".repeat(51);

        let outcome = field.on_change(&overlong);

        assert_eq!(field.password().expose_secret(), overlong);
        assert_eq!(outcome.result.tier, StrengthTier::Strong);
        assert_eq!(outcome.result.description, DESC_TOO_LONG);
    }

    #[test]
    fn test_trimming_overlong_input_returns_to_strong() {
        let mut field = PasswordField::new();
        field.on_change(&"a".repeat(51));

        let outcome = field.on_change(&"a".repeat(50));

        assert_eq!(outcome.result.description, DESC_STRONG);
        assert!(!outcome.tier_changed);
    }

    #[test]
    fn test_toggle_reveal() {
        let mut field = PasswordField::new();

        assert!(field.toggle_reveal());
        assert!(field.is_revealed());
        assert!(!field.toggle_reveal());
        assert!(!field.is_revealed());
    }

    #[test]
    fn test_display_text_masks_per_character() {
        let mut field = PasswordField::new();
        field.on_change("héllo");

        assert_eq!(field.display_text(), "•••••");

        field.toggle_reveal();
        assert_eq!(field.display_text(), "héllo");
    }

    #[test]
    fn test_view_state_neutral_when_empty() {
        let field = PasswordField::new();
        let view = field.view_state();

        assert_eq!(view.segments, [SegmentColor::Unused; 3]);
        assert!(view.description.is_empty());
    }

    #[test]
    fn test_view_state_follows_classification() {
        let mut field = PasswordField::new();
        field.on_change("a".repeat(20).as_str());

        let view = field.view_state();
        assert_eq!(
            view.segments,
            [SegmentColor::Weak, SegmentColor::Medium, SegmentColor::Strong]
        );
        assert_eq!(view.description, DESC_STRONG);
    }

    #[test]
    fn test_with_custom_policy() {
        let policy = StrengthPolicy::new(4, 8, 12).expect("valid policy");
        let mut field = PasswordField::with_policy(policy);

        let outcome = field.on_change("seven77");
        assert_eq!(outcome.result.tier, StrengthTier::Medium);
    }
}
