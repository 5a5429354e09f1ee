//! Generator settings flags supplied by the caller, and the setting
//! overrides a validation run recommends in return.
//!
//! The engine never mutates settings; recommended overrides are attached
//! to the result and the caller decides how and when to apply them.

use serde::{Deserialize, Serialize};

/// Seed-generator settings relevant to plando validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// When active, chapter difficulty is computed automatically and the
    /// document's `difficulty` section is ignored.
    #[serde(default)]
    pub progressive_scaling: bool,
    /// Progressive badge variants replace the standalone charge badges.
    #[serde(default)]
    pub progressive_badges: bool,
    /// Partner upgrade items are shuffled into the item pool.
    #[serde(default)]
    pub partner_upgrade_shuffle: bool,
    /// Total power stars the generator places for the star hunt.
    #[serde(default = "GeneratorSettings::default_total_power_stars")]
    pub total_power_stars: u32,
    /// Traps the active trap mode budgets for.
    #[serde(default)]
    pub trap_count: u32,
}

impl GeneratorSettings {
    const fn default_total_power_stars() -> u32 {
        70
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            progressive_scaling: false,
            progressive_badges: false,
            partner_upgrade_shuffle: false,
            total_power_stars: Self::default_total_power_stars(),
            trap_count: 0,
        }
    }
}

/// A single recommended settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "setting", content = "value", rename_all = "snake_case")]
pub enum SettingOverride {
    ProgressiveBadges(bool),
    PartnerUpgradeShuffle(bool),
    RandomPuzzles(bool),
    TotalPowerStars(u32),
}

impl SettingOverride {
    /// Stable key identifying which setting the override targets.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ProgressiveBadges(_) => "progressive_badges",
            Self::PartnerUpgradeShuffle(_) => "partner_upgrade_shuffle",
            Self::RandomPuzzles(_) => "random_puzzles",
            Self::TotalPowerStars(_) => "total_power_stars",
        }
    }
}

/// Ordered set of recommended overrides; at most one entry per setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SettingOverrideSet {
    entries: Vec<SettingOverride>,
}

impl SettingOverrideSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recommendation, replacing any earlier one for the same
    /// setting. Returns `true` when the set actually changed.
    pub fn recommend(&mut self, override_: SettingOverride) -> bool {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|entry| entry.key() == override_.key())
        {
            if *existing == override_ {
                return false;
            }
            *existing = override_;
            return true;
        }
        self.entries.push(override_);
        true
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<SettingOverride> {
        self.entries.iter().find(|entry| entry.key() == key).copied()
    }

    #[must_use]
    pub fn contains(&self, override_: SettingOverride) -> bool {
        self.entries.contains(&override_)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SettingOverride> + '_ {
        self.entries.iter().copied()
    }
}
