//! Required star spirit overrides for the Star Way gate.

use serde::Serialize;
use serde_json::Value;

use crate::constants::{CHAPTER_MAX, CHAPTER_MIN};
use crate::diagnostics::Diagnostics;
use crate::document::type_name;

/// The seven star spirits, in chapter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Spirit {
    Eldstar,
    Mamar,
    Skolar,
    Muskular,
    Misstar,
    Klevar,
    Kalmar,
}

impl Spirit {
    pub const ALL: [Self; 7] = [
        Self::Eldstar,
        Self::Mamar,
        Self::Skolar,
        Self::Muskular,
        Self::Misstar,
        Self::Klevar,
        Self::Kalmar,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eldstar => "Eldstar",
            Self::Mamar => "Mamar",
            Self::Skolar => "Skolar",
            Self::Muskular => "Muskular",
            Self::Misstar => "Misstar",
            Self::Klevar => "Klevar",
            Self::Kalmar => "Kalmar",
        }
    }

    /// Chapter the spirit is rescued in.
    #[must_use]
    pub const fn chapter(self) -> u8 {
        self as u8 + 1
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|spirit| spirit.name() == name)
    }

    #[must_use]
    pub fn from_chapter(chapter: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|spirit| spirit.chapter() == chapter)
    }
}

/// Validate the `required_spirits` section.
///
/// Entries may name a spirit directly or give its chapter number; both
/// forms resolve to the same identifier, and duplicates are detected on
/// the resolved spirit rather than the literal entry.
pub(crate) fn validate_required_spirits(
    entries: &[Value],
    diag: &mut Diagnostics,
) -> Vec<Spirit> {
    let mut parsed: Vec<Spirit> = Vec::new();

    for entry in entries {
        if entry.is_null() {
            continue;
        }
        let resolved = match entry {
            Value::String(name) => Spirit::from_name(name),
            Value::Number(_) => entry
                .as_u64()
                .filter(|n| (u64::from(CHAPTER_MIN)..=u64::from(CHAPTER_MAX)).contains(n))
                .and_then(|n| Spirit::from_chapter(n as u8)),
            _ => None,
        };
        let Some(spirit) = resolved else {
            diag.error(format!(
                "required_spirits: entry {entry} is not a spirit name or a chapter \
                 between 1 and 7 (got {})",
                type_name(entry)
            ));
            continue;
        };
        if parsed.contains(&spirit) {
            diag.warn(format!(
                "required_spirits: spirit \"{}\" set multiple times, ignoring",
                spirit.name()
            ));
        } else {
            parsed.push(spirit);
        }
    }

    if parsed.len() == Spirit::ALL.len() {
        diag.warn(
            "required_spirits: all seven spirits required, which makes the override moot",
        );
    }
    if !parsed.is_empty() {
        diag.warn(
            "required_spirits: explicit spirits overrule the generator's Star Way \
             spirit count; they are ignored entirely if specific spirits are not required",
        );
    }

    parsed.sort();
    parsed
}
