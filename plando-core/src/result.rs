//! Normalized output document and the final validation result.

use serde::Serialize;

use crate::bosses::BossAssignmentMap;
use crate::diagnostics::Messages;
use crate::difficulty::ChapterDifficultyMap;
use crate::move_costs::MoveCosts;
use crate::placement::PlacementMap;
use crate::settings::SettingOverrideSet;
use crate::spirits::Spirit;

/// Generator-ready mirror of the recognized sections' validated contents.
///
/// A section is `None` when the document omitted it or set it to null;
/// the generator then decides freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedPlando {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<ChapterDifficultyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boss_battles: Option<BossAssignmentMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_spirits: Option<Vec<Spirit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_costs: Option<MoveCosts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<PlacementMap>,
}

impl NormalizedPlando {
    /// True when no section carries any override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none()
            && self.boss_battles.is_none()
            && self.required_spirits.is_none()
            && self.move_costs.is_none()
            && self.items.is_none()
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Normalized document; emptied whenever any error was recorded.
    pub document: NormalizedPlando,
    pub messages: Messages,
    /// Setting changes the placements recommend; the caller decides
    /// whether and when to apply them.
    pub overrides: SettingOverrideSet,
}

impl ValidationResult {
    /// True when the document survived validation.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.messages.errors.is_empty()
    }
}
