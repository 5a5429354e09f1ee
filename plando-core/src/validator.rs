//! Validation entry points and top-level dispatch.

use log::debug;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::catalog::Catalogs;
use crate::diagnostics::Diagnostics;
use crate::document::type_name;
use crate::result::{NormalizedPlando, ValidationResult};
use crate::settings::{GeneratorSettings, SettingOverrideSet};
use crate::{bosses, difficulty, move_costs, placement, spirits};

pub const FIELD_DIFFICULTY: &str = "difficulty";
pub const FIELD_BOSS_BATTLES: &str = "boss_battles";
pub const FIELD_REQUIRED_SPIRITS: &str = "required_spirits";
pub const FIELD_MOVE_COSTS: &str = "move_costs";
pub const FIELD_ITEMS: &str = "items";

/// Hard failures while obtaining a document. These never appear as
/// validation diagnostics; an unreadable file is the caller's problem.
#[derive(Debug, Error)]
pub enum PlandoFileError {
    #[error("could not read plando file: {0}")]
    Io(#[from] io::Error),
    #[error("could not decode plando JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation engine for plando override documents.
///
/// Holds only borrowed, read-only inputs; all run state lives inside a
/// single `validate_value` call, so one `Validator` may serve any number
/// of sequential or concurrent runs.
pub struct Validator<'a> {
    catalogs: &'a Catalogs,
    settings: &'a GeneratorSettings,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub const fn new(catalogs: &'a Catalogs, settings: &'a GeneratorSettings) -> Self {
        Self { catalogs, settings }
    }

    /// Load a plando document from disk and validate it.
    ///
    /// # Errors
    ///
    /// Returns `PlandoFileError` when the file cannot be read or is not
    /// syntactically valid JSON.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<ValidationResult, PlandoFileError> {
        let text = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&text)?;
        Ok(self.validate_value(&document))
    }

    /// Validate an already-parsed plando document.
    #[must_use]
    pub fn validate_value(&self, document: &Value) -> ValidationResult {
        let mut diag = Diagnostics::new();
        let mut overrides = SettingOverrideSet::new();
        let mut normalized = NormalizedPlando::default();

        let Some(entries) = document.as_object() else {
            if !document.is_null() {
                diag.error(format!(
                    "plando: document has wrong shape (expected mapping, got {})",
                    type_name(document)
                ));
            }
            return assemble(normalized, diag, overrides);
        };

        for (key, value) in entries {
            debug!("validating top level field \"{key}\"");
            match key.as_str() {
                FIELD_DIFFICULTY => {
                    if self.settings.progressive_scaling {
                        diag.warn(
                            "difficulty: ignored because progressive scaling is active",
                        );
                        continue;
                    }
                    if let Some(section) = section_mapping(key, value, &mut diag) {
                        normalized.difficulty =
                            Some(difficulty::validate_difficulty(section, &mut diag));
                    }
                }
                FIELD_BOSS_BATTLES => {
                    if let Some(section) = section_mapping(key, value, &mut diag) {
                        normalized.boss_battles =
                            Some(bosses::validate_boss_battles(section, &mut diag));
                    }
                }
                FIELD_REQUIRED_SPIRITS => {
                    if let Some(section) = section_list(key, value, &mut diag) {
                        normalized.required_spirits =
                            Some(spirits::validate_required_spirits(section, &mut diag));
                    }
                }
                FIELD_MOVE_COSTS => {
                    if let Some(section) = section_mapping(key, value, &mut diag) {
                        normalized.move_costs = Some(move_costs::validate_move_costs(
                            section,
                            &self.catalogs.moves,
                            &mut diag,
                        ));
                    }
                }
                FIELD_ITEMS => {
                    if let Some(section) = section_mapping(key, value, &mut diag) {
                        normalized.items = Some(placement::validate_items(
                            section,
                            self.catalogs,
                            self.settings,
                            &mut diag,
                            &mut overrides,
                        ));
                    }
                }
                _ => diag.warn(format!(
                    "plando: unrecognized top level field \"{key}\", ignoring"
                )),
            }
        }

        assemble(normalized, diag, overrides)
    }
}

fn section_mapping<'v>(
    field: &str,
    value: &'v Value,
    diag: &mut Diagnostics,
) -> Option<&'v serde_json::Map<String, Value>> {
    if value.is_null() {
        return None;
    }
    let entries = value.as_object();
    if entries.is_none() {
        diag.error(format!(
            "plando: field \"{field}\" has wrong shape (expected mapping or null, got {})",
            type_name(value)
        ));
    }
    entries
}

fn section_list<'v>(field: &str, value: &'v Value, diag: &mut Diagnostics) -> Option<&'v [Value]> {
    if value.is_null() {
        return None;
    }
    let entries = value.as_array();
    if entries.is_none() {
        diag.error(format!(
            "plando: field \"{field}\" has wrong shape (expected list or null, got {})",
            type_name(value)
        ));
    }
    entries.map(Vec::as_slice)
}

fn assemble(
    normalized: NormalizedPlando,
    diag: Diagnostics,
    overrides: SettingOverrideSet,
) -> ValidationResult {
    let document = if diag.has_errors() {
        NormalizedPlando::default()
    } else {
        normalized
    };
    ValidationResult {
        document,
        messages: diag.into_messages(),
        overrides,
    }
}
