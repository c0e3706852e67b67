//! Pure derivation of meter view state from a classification.

use crate::types::{StrengthResult, StrengthTier};

/// Color slot for one indicator segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentColor {
    Unused,
    Weak,
    Medium,
    Strong,
}

/// Declarative state of the three-segment meter.
///
/// Derivable from a [`StrengthResult`] alone; the UI layer maps the slots to
/// its concrete colors and widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterViewState {
    /// Weak, medium and strong segments, left to right.
    pub segments: [SegmentColor; 3],
    pub description: String,
}

impl MeterViewState {
    /// Empty-field presentation: nothing lit, nothing said.
    pub fn neutral() -> Self {
        MeterViewState {
            segments: [SegmentColor::Unused; 3],
            description: String::new(),
        }
    }
}

/// Derives the meter from a classification.
///
/// Weak lights the first segment, medium the first two, strong all three;
/// a lit segment takes its own tier's color, the rest stay unused. The
/// description is copied from the result verbatim.
pub fn render(result: &StrengthResult) -> MeterViewState {
    let segments = match result.tier {
        StrengthTier::Weak => [SegmentColor::Weak, SegmentColor::Unused, SegmentColor::Unused],
        StrengthTier::Medium => [SegmentColor::Weak, SegmentColor::Medium, SegmentColor::Unused],
        StrengthTier::Strong => [SegmentColor::Weak, SegmentColor::Medium, SegmentColor::Strong],
    };

    MeterViewState {
        segments,
        description: result.description.clone(),
    }
}
