//! Read-only reference catalogs backing plando validation.
//!
//! Catalogs are decoded once from embedded JSON assets and passed by
//! reference into every validation run. They are never mutated after
//! construction, so sharing one instance across concurrent runs is safe.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

const ITEMS_DATA: &str = include_str!("../assets/items.json");
const MOVES_DATA: &str = include_str!("../assets/moves.json");
const WORLD_DATA: &str = include_str!("../assets/world.json");

/// Errors raised while decoding catalog assets.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate item identifier in catalog: \"{id}\"")]
    DuplicateItem { id: String },
    #[error("duplicate area identifier in catalog: \"{id}\"")]
    DuplicateArea { id: String },
}

/// Broad item grouping used by placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Badge,
    KeyItem,
    PartnerUpgrade,
    Collectible,
    Currency,
    Consumable,
    Trap,
}

/// Which half of a badge family an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyMode {
    Regular,
    Progressive,
}

/// A single item the generator recognizes.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub category: ItemCategory,
    /// Maximum placement count; `None` means unlimited.
    #[serde(default)]
    pub max_count: Option<u32>,
    /// Badge family name, for items covered by a progressive variant.
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub mode: Option<FamilyMode>,
}

#[derive(Debug, Deserialize)]
struct ItemsFile {
    items: Vec<ItemDef>,
}

/// Lookup table over every placeable item identifier.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemDef>,
}

impl ItemCatalog {
    /// Decode an item catalog from its JSON asset form.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate identifiers.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: ItemsFile = serde_json::from_str(json)?;
        let mut items = BTreeMap::new();
        for def in file.items {
            let id = def.id.clone();
            if items.insert(id.clone(), def).is_some() {
                return Err(CatalogError::DuplicateItem { id });
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cost currency a move may be charged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CostKind {
    #[serde(rename = "BP")]
    Bp,
    #[serde(rename = "FP")]
    Fp,
}

impl CostKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bp => "BP",
            Self::Fp => "FP",
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovesFile {
    badges: BTreeMap<String, Vec<CostKind>>,
    partners: BTreeMap<String, Vec<String>>,
    starpowers: Vec<String>,
}

/// Cost-type applicability tables for badges, partner moves, and star powers.
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    badges: BTreeMap<String, Vec<CostKind>>,
    partners: BTreeMap<String, Vec<String>>,
    starpowers: Vec<String>,
}

impl MoveCatalog {
    /// Decode a move catalog from its JSON asset form.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: MovesFile = serde_json::from_str(json)?;
        Ok(Self {
            badges: file.badges,
            partners: file.partners,
            starpowers: file.starpowers,
        })
    }

    /// Cost kinds a badge accepts, or `None` for unknown badges.
    #[must_use]
    pub fn badge_cost_kinds(&self, badge: &str) -> Option<&[CostKind]> {
        self.badges.get(badge).map(Vec::as_slice)
    }

    /// Moves a partner owns, or `None` for unknown partners.
    #[must_use]
    pub fn partner_moves(&self, partner: &str) -> Option<&[String]> {
        self.partners.get(partner).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_starpower(&self, name: &str) -> bool {
        self.starpowers.iter().any(|s| s == name)
    }
}

/// What kind of check a location performs on placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    #[default]
    Chest,
    Shop,
    SpecialMerchant,
    StarPieceTrade,
    HiddenBlock,
    CoinBlock,
    ShopCode,
}

impl LocationKind {
    /// Locations that sell their contents and accept a shop tuple.
    #[must_use]
    pub const fn is_shoplike(self) -> bool {
        matches!(
            self,
            Self::Shop | Self::SpecialMerchant | Self::StarPieceTrade | Self::ShopCode
        )
    }

    /// Shop-family locations cannot render a trap sprite.
    #[must_use]
    pub const fn rejects_traps(self) -> bool {
        self.is_shoplike()
    }

    /// Block locations are not plando-able at all.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, Self::HiddenBlock | Self::CoinBlock)
    }

    /// Whether a shop tuple's price override is honored here.
    /// Star-piece trades and special merchants keep their vanilla rates.
    #[must_use]
    pub const fn honors_price_override(self) -> bool {
        matches!(self, Self::Shop | Self::ShopCode)
    }
}

#[derive(Debug, Deserialize)]
struct LocationDef {
    id: String,
    #[serde(default)]
    kind: LocationKind,
}

#[derive(Debug, Deserialize)]
struct AreaFileDef {
    id: String,
    locations: Vec<LocationDef>,
}

#[derive(Debug, Deserialize)]
struct WorldFile {
    areas: Vec<AreaFileDef>,
}

/// Every area and location key the generator recognizes.
#[derive(Debug, Clone, Default)]
pub struct WorldCatalog {
    areas: BTreeMap<String, BTreeMap<String, LocationKind>>,
}

impl WorldCatalog {
    /// Decode a world catalog from its JSON asset form.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate area identifiers.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: WorldFile = serde_json::from_str(json)?;
        let mut areas = BTreeMap::new();
        for area in file.areas {
            let locations = area
                .locations
                .into_iter()
                .map(|loc| (loc.id, loc.kind))
                .collect();
            if areas.insert(area.id.clone(), locations).is_some() {
                return Err(CatalogError::DuplicateArea { id: area.id });
            }
        }
        Ok(Self { areas })
    }

    #[must_use]
    pub fn contains_area(&self, area: &str) -> bool {
        self.areas.contains_key(area)
    }

    /// Kind of a location within an area, or `None` when either key is unknown.
    #[must_use]
    pub fn location_kind(&self, area: &str, location: &str) -> Option<LocationKind> {
        self.areas.get(area)?.get(location).copied()
    }
}

/// Bundle of all reference catalogs used by one validation run.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub items: ItemCatalog,
    pub moves: MoveCatalog,
    pub world: WorldCatalog,
}

impl Catalogs {
    /// Decode the catalogs embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns an error when an embedded asset fails to decode; that is a
    /// packaging defect, not a property of the validated document.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        Self::from_json_parts(ITEMS_DATA, MOVES_DATA, WORLD_DATA)
    }

    /// Build catalogs from caller-supplied JSON documents.
    ///
    /// # Errors
    ///
    /// Returns an error when any document fails to decode.
    pub fn from_json_parts(items: &str, moves: &str, world: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            items: ItemCatalog::from_json(items)?,
            moves: MoveCatalog::from_json(moves)?,
            world: WorldCatalog::from_json(world)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogs_decode() {
        let catalogs = Catalogs::from_embedded().unwrap();
        assert!(catalogs.items.len() > 100);
        assert!(catalogs.items.contains("UltraStone"));
        assert!(catalogs.items.contains("TRAP"));
        assert!(catalogs.world.contains_area("Toad Town"));
        assert!(catalogs.moves.is_starpower("Refresh"));
    }

    #[test]
    fn badge_families_are_wired() {
        let catalogs = Catalogs::from_embedded().unwrap();
        let regular = catalogs.items.get("JumpCharge").unwrap();
        assert_eq!(regular.family.as_deref(), Some("JumpCharge"));
        assert_eq!(regular.mode, Some(FamilyMode::Regular));

        let progressive = catalogs.items.get("ProgressiveJumpCharge").unwrap();
        assert_eq!(progressive.family.as_deref(), Some("JumpCharge"));
        assert_eq!(progressive.mode, Some(FamilyMode::Progressive));
        assert_eq!(progressive.max_count, Some(3));
    }

    #[test]
    fn location_kinds_resolve() {
        let catalogs = Catalogs::from_embedded().unwrap();
        assert_eq!(
            catalogs.world.location_kind("Toad Town", "Shop Item 1"),
            Some(LocationKind::Shop)
        );
        assert_eq!(
            catalogs
                .world
                .location_kind("Shooting Star Summit", "Merlow Reward 1"),
            Some(LocationKind::StarPieceTrade)
        );
        assert_eq!(
            catalogs
                .world
                .location_kind("Toad Town Tunnels", "Rip Cheato Offer 1"),
            Some(LocationKind::SpecialMerchant)
        );
        assert!(
            catalogs
                .world
                .location_kind("Goomba Village", "Behind Goompa House Block")
                .unwrap()
                .is_block()
        );
        assert_eq!(catalogs.world.location_kind("Toad Town", "Nope"), None);
    }

    #[test]
    fn duplicate_items_rejected() {
        let json = r#"{"items":[{"id":"Coin","category":"currency"},{"id":"Coin","category":"currency"}]}"#;
        let err = ItemCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem { id } if id == "Coin"));
    }

    #[test]
    fn unknown_badge_has_no_cost_kinds() {
        let catalogs = Catalogs::from_embedded().unwrap();
        assert!(catalogs.moves.badge_cost_kinds("HPPlus").is_some());
        assert!(catalogs.moves.badge_cost_kinds("NotABadge").is_none());
    }
}
