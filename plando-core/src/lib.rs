//! Plando Validation Engine
//!
//! Validates and normalizes player-authored override documents ("plandos")
//! for the seed generator: structural checks, numeric ranges, enum
//! membership, placement quotas, badge family exclusions, and the setting
//! overrides certain placements recommend. The engine is a pure function
//! of (document, catalogs, settings); all run state is local to one call.

pub mod bosses;
pub mod catalog;
pub mod constants;
pub mod diagnostics;
pub mod difficulty;
mod document;
pub mod move_costs;
pub mod placement;
pub mod result;
pub mod settings;
pub mod spirits;
pub mod validator;

// Re-export commonly used types
pub use bosses::{Boss, BossAssignmentMap};
pub use catalog::{
    CatalogError, Catalogs, CostKind, FamilyMode, ItemCatalog, ItemCategory, ItemDef,
    LocationKind, MoveCatalog, WorldCatalog,
};
pub use diagnostics::{Diagnostics, Messages};
pub use difficulty::ChapterDifficultyMap;
pub use move_costs::{BadgeCost, MoveCosts};
pub use placement::{ItemSpec, PlacementMap, PlacementValue, SpecialToken};
pub use result::{NormalizedPlando, ValidationResult};
pub use settings::{GeneratorSettings, SettingOverride, SettingOverrideSet};
pub use spirits::Spirit;
pub use validator::{PlandoFileError, Validator};
