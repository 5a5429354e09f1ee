//! Chapter boss battle overrides.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

use crate::diagnostics::Diagnostics;
use crate::document::{parse_chapter_key, type_name};

/// The seven chapter bosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Boss {
    KoopaBros,
    Tutankoopa,
    TubbasHeart,
    GeneralGuy,
    LavaPiranha,
    HuffNPuff,
    CrystalKing,
}

impl Boss {
    pub const ALL: [Self; 7] = [
        Self::KoopaBros,
        Self::Tutankoopa,
        Self::TubbasHeart,
        Self::GeneralGuy,
        Self::LavaPiranha,
        Self::HuffNPuff,
        Self::CrystalKing,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::KoopaBros => "KoopaBros",
            Self::Tutankoopa => "Tutankoopa",
            Self::TubbasHeart => "TubbasHeart",
            Self::GeneralGuy => "GeneralGuy",
            Self::LavaPiranha => "LavaPiranha",
            Self::HuffNPuff => "HuffNPuff",
            Self::CrystalKing => "CrystalKing",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|boss| boss.name() == name)
    }
}

/// Explicit boss assignments, chapter 1-7 to boss.
pub type BossAssignmentMap = BTreeMap<u8, Boss>;

/// Validate the `boss_battles` section.
///
/// A clean bijection over all seven chapters and bosses passes silently;
/// any other non-empty assignment warns, since boss multiplicity then
/// depends on the active difficulty scaling settings.
pub(crate) fn validate_boss_battles(
    entries: &Map<String, Value>,
    diag: &mut Diagnostics,
) -> BossAssignmentMap {
    let mut parsed = BossAssignmentMap::new();

    for (key, value) in entries {
        let Some(chapter) = parse_chapter_key(key) else {
            diag.error(format!(
                "boss_battles: key \"{key}\" is not a chapter between 1 and 7"
            ));
            continue;
        };
        if value.is_null() {
            continue;
        }
        let boss = match value.as_str().and_then(Boss::from_name) {
            Some(boss) => boss,
            None => {
                diag.error(format!(
                    "boss_battles: chapter {chapter} has disallowed value {value} \
                     (expected a boss name or null, got {})",
                    type_name(value)
                ));
                continue;
            }
        };
        parsed.insert(chapter, boss);
    }

    if !parsed.is_empty() {
        let distinct: BTreeSet<Boss> = parsed.values().copied().collect();
        let clean = parsed.len() == Boss::ALL.len() && distinct.len() == Boss::ALL.len();
        if !clean {
            diag.warn(
                "boss_battles: not all 7 bosses are assigned exactly once; a boss may \
                 appear multiple times or go missing depending on scaling settings",
            );
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(section: Value) -> (BossAssignmentMap, Vec<String>, Vec<String>) {
        let mut diag = Diagnostics::new();
        let parsed = validate_boss_battles(section.as_object().unwrap(), &mut diag);
        let messages = diag.into_messages();
        (parsed, messages.warnings, messages.errors)
    }

    #[test]
    fn clean_bijection_passes_silently() {
        let (parsed, warnings, errors) = run(json!({
            "chapter 1": "CrystalKing",
            "chapter 2": "KoopaBros",
            "chapter 3": "Tutankoopa",
            "chapter 4": "TubbasHeart",
            "chapter 5": "GeneralGuy",
            "chapter 6": "LavaPiranha",
            "chapter 7": "HuffNPuff",
        }));
        assert_eq!(parsed.len(), 7);
        assert!(warnings.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn partial_assignment_warns_once() {
        let (parsed, warnings, errors) = run(json!({ "chapter 1": "CrystalKing" }));
        assert_eq!(parsed, BossAssignmentMap::from([(1, Boss::CrystalKing)]));
        assert_eq!(warnings.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn repeated_boss_warns_even_when_all_chapters_set() {
        let (parsed, warnings, _) = run(json!({
            "chapter 1": "KoopaBros",
            "chapter 2": "KoopaBros",
            "chapter 3": "Tutankoopa",
            "chapter 4": "TubbasHeart",
            "chapter 5": "GeneralGuy",
            "chapter 6": "LavaPiranha",
            "chapter 7": "HuffNPuff",
        }));
        assert_eq!(parsed.len(), 7);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn unknown_boss_and_chapter_error() {
        let (parsed, _, errors) = run(json!({
            "chapter 9": "KoopaBros",
            "chapter 2": "Goomboss",
            "chapter 3": null,
        }));
        assert!(parsed.is_empty());
        assert_eq!(errors.len(), 2);
    }
}
