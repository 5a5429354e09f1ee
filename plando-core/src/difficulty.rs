//! Chapter difficulty overrides.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::constants::{
    DIFFICULTY_MAX, DIFFICULTY_MIN, STARTING_CHAPTERS, STARTING_CHAPTER_DIFFICULTY_CEILING,
};
use crate::diagnostics::Diagnostics;
use crate::document::{parse_chapter_key, type_name};

/// Explicit chapter difficulty assignments, chapter 1-7 to level 1-8.
pub type ChapterDifficultyMap = BTreeMap<u8, u8>;

/// Validate the `difficulty` section.
///
/// Null values mean "let the generator decide" and are omitted. Chapters
/// outside 1-7 and levels outside 1-8 are errors. Possible starting
/// chapters scaled past level 3 warn, since a fresh file may begin there.
pub(crate) fn validate_difficulty(
    entries: &Map<String, Value>,
    diag: &mut Diagnostics,
) -> ChapterDifficultyMap {
    let mut parsed = ChapterDifficultyMap::new();

    for (key, value) in entries {
        let Some(chapter) = parse_chapter_key(key) else {
            diag.error(format!(
                "difficulty: key \"{key}\" is not a chapter between 1 and 7"
            ));
            continue;
        };
        if value.is_null() {
            continue;
        }
        let level = match value.as_u64() {
            Some(level) if (u64::from(DIFFICULTY_MIN)..=u64::from(DIFFICULTY_MAX))
                .contains(&level) =>
            {
                level as u8
            }
            _ => {
                diag.error(format!(
                    "difficulty: chapter {chapter} has disallowed value {value} \
                     (expected {DIFFICULTY_MIN}-{DIFFICULTY_MAX} or null, got {})",
                    type_name(value)
                ));
                continue;
            }
        };
        parsed.insert(chapter, level);
    }

    for chapter in STARTING_CHAPTERS {
        if let Some(&level) = parsed.get(&chapter) {
            if level > STARTING_CHAPTER_DIFFICULTY_CEILING {
                diag.warn(format!(
                    "difficulty: chapter {chapter} is scaled past difficulty \
                     {STARTING_CHAPTER_DIFFICULTY_CEILING}; beware if it turns out \
                     to be the starting chapter"
                ));
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(section: Value) -> (ChapterDifficultyMap, Vec<String>, Vec<String>) {
        let mut diag = Diagnostics::new();
        let parsed = validate_difficulty(section.as_object().unwrap(), &mut diag);
        let messages = diag.into_messages();
        (parsed, messages.warnings, messages.errors)
    }

    #[test]
    fn accepts_explicit_and_null_values() {
        let (parsed, warnings, errors) = run(json!({
            "chapter 3": 5,
            "chapter 4": null,
            "chapter 6": 1,
        }));
        assert_eq!(parsed, ChapterDifficultyMap::from([(3, 5), (6, 1)]));
        assert!(warnings.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn rejects_out_of_range_chapters_and_levels() {
        let (parsed, _, errors) = run(json!({
            "chapter 8": 2,
            "chapter 2": 9,
            "chapter 5": "hard",
        }));
        assert!(parsed.is_empty());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn warns_on_hot_starting_chapter() {
        let (parsed, warnings, errors) = run(json!({ "chapter 1": 5 }));
        assert_eq!(parsed.get(&1), Some(&5));
        assert_eq!(warnings.len(), 1);
        assert!(errors.is_empty());

        let (_, warnings, errors) = run(json!({ "chapter 3": 5 }));
        assert!(warnings.is_empty());
        assert!(errors.is_empty());
    }
}
