//! Item placement validation.
//!
//! Traverses area -> location -> placement overrides in document order,
//! maintaining a running placement ledger, parsing compound placement
//! specs, applying per-category and per-family rules, and checking
//! aggregate quotas after the full traversal.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::catalog::{Catalogs, FamilyMode, ItemCategory, LocationKind};
use crate::constants::{
    ITEM_COIN, ITEM_POWER_STAR, ITEM_STAR_PIECE, ITEM_THREE_STAR_PIECES, POWER_STAR_CAP,
    SHOP_PRICE_MAX, STAR_PIECE_HARD_CAP, STAR_PIECE_SOFT_CAP, THREE_STAR_PIECES_CAP, TRAP_ID,
};
use crate::diagnostics::Diagnostics;
use crate::document::type_name;
use crate::settings::{GeneratorSettings, SettingOverride, SettingOverrideSet};

/// Category directives that may stand in for a concrete item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialToken {
    NonProgression,
    Consumable,
}

impl SpecialToken {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonProgression => "NonProgression",
            Self::Consumable => "Consumable",
        }
    }

    fn from_spec(raw: &str) -> Option<Self> {
        match raw {
            "NonProgression" => Some(Self::NonProgression),
            "Consumable" => Some(Self::Consumable),
            _ => None,
        }
    }
}

/// One parsed placement spec: a category token, a bare item, or a trap
/// optionally forcing the sprite of a real item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSpec {
    Token(SpecialToken),
    Item(String),
    Trap { sprite: Option<String> },
}

impl ItemSpec {
    /// Parse the string form of a placement spec. Purely syntactic; the
    /// caller checks identifiers against the item catalog.
    fn parse(raw: &str) -> Self {
        if let Some(token) = SpecialToken::from_spec(raw) {
            return Self::Token(token);
        }
        if raw == TRAP_ID {
            return Self::Trap { sprite: None };
        }
        if let Some(inner) = raw.strip_prefix("TRAP (").and_then(|r| r.strip_suffix(')')) {
            return Self::Trap {
                sprite: Some(inner.to_string()),
            };
        }
        Self::Item(raw.to_string())
    }

    fn spec_string(&self) -> String {
        match self {
            Self::Token(token) => token.as_str().to_string(),
            Self::Item(name) => name.clone(),
            Self::Trap { sprite: None } => TRAP_ID.to_string(),
            Self::Trap {
                sprite: Some(name),
            } => format!("TRAP ({name})"),
        }
    }
}

impl Serialize for ItemSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.spec_string())
    }
}

/// A validated placement override as it appears in the normalized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementValue {
    Single(ItemSpec),
    Shop {
        item: Option<ItemSpec>,
        price: Option<u16>,
    },
}

impl Serialize for PlacementValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(spec) => spec.serialize(serializer),
            Self::Shop { item, price } => {
                let mut map = serializer.serialize_map(None)?;
                if let Some(item) = item {
                    map.serialize_entry("item", item)?;
                }
                if let Some(price) = price {
                    map.serialize_entry("price", price)?;
                }
                map.end()
            }
        }
    }
}

/// Normalized placement overrides, area to location to value.
pub type PlacementMap = BTreeMap<String, BTreeMap<String, PlacementValue>>;

#[derive(Debug, Default)]
struct FamilySeen {
    regular: bool,
    progressive: bool,
}

struct PlacementRun<'a> {
    catalogs: &'a Catalogs,
    settings: &'a GeneratorSettings,
    /// Running count per concrete identifier placed so far.
    ledger: BTreeMap<String, u32>,
    families: BTreeMap<String, FamilySeen>,
    traps_placed: u32,
    parsed: PlacementMap,
}

/// Validate the `items` section.
pub(crate) fn validate_items(
    areas: &Map<String, Value>,
    catalogs: &Catalogs,
    settings: &GeneratorSettings,
    diag: &mut Diagnostics,
    overrides: &mut SettingOverrideSet,
) -> PlacementMap {
    let mut run = PlacementRun {
        catalogs,
        settings,
        ledger: BTreeMap::new(),
        families: BTreeMap::new(),
        traps_placed: 0,
        parsed: PlacementMap::new(),
    };

    for (area, locations) in areas {
        if !catalogs.world.contains_area(area) {
            diag.warn(format!(
                "items: \"{area}\" is not a recognized area, ignoring"
            ));
            continue;
        }
        if locations.is_null() {
            continue;
        }
        let Some(locations) = locations.as_object() else {
            diag.error(format!(
                "items: value for area \"{area}\" has wrong shape \
                 (expected mapping or null, got {})",
                type_name(locations)
            ));
            continue;
        };
        for (location, raw) in locations {
            let Some(kind) = catalogs.world.location_kind(area, location) else {
                diag.warn(format!(
                    "items: \"{area}:{location}\" is not a recognized location, ignoring"
                ));
                continue;
            };
            if raw.is_null() {
                continue;
            }
            if kind.is_block() {
                diag.warn(format!(
                    "items: \"{area}:{location}\" cannot be plando'd at the moment \
                     and is ignored"
                ));
                continue;
            }
            match raw {
                Value::String(spec) => {
                    run.place_single(area, location, kind, ItemSpec::parse(spec), diag, overrides);
                }
                Value::Object(tuple) => {
                    run.place_shop_tuple(area, location, kind, tuple, diag, overrides);
                }
                _ => diag.error(format!(
                    "items: \"{area}:{location}\" has wrong shape \
                     (expected string, mapping, or null, got {})",
                    type_name(raw)
                )),
            }
        }
    }

    run.check_aggregates(diag, overrides);
    run.parsed
}

impl PlacementRun<'_> {
    fn place_single(
        &mut self,
        area: &str,
        location: &str,
        kind: LocationKind,
        spec: ItemSpec,
        diag: &mut Diagnostics,
        overrides: &mut SettingOverrideSet,
    ) {
        if let Some(applied) = self.apply_spec(area, location, kind, spec, diag, overrides) {
            self.parsed
                .entry(area.to_string())
                .or_default()
                .insert(location.to_string(), PlacementValue::Single(applied));
        }
    }

    fn place_shop_tuple(
        &mut self,
        area: &str,
        location: &str,
        kind: LocationKind,
        tuple: &Map<String, Value>,
        diag: &mut Diagnostics,
        overrides: &mut SettingOverrideSet,
    ) {
        if !kind.is_shoplike() {
            diag.error(format!(
                "items: \"{area}:{location}\" is not a shop, but its value is a mapping"
            ));
            return;
        }

        let mut item: Option<ItemSpec> = None;
        let mut price: Option<u16> = None;
        for (key, value) in tuple {
            match key.as_str() {
                "item" => {
                    if value.is_null() {
                        continue;
                    }
                    let Some(raw) = value.as_str() else {
                        diag.error(format!(
                            "items: shop item at \"{area}:{location}\" has wrong shape \
                             (expected string or null, got {})",
                            type_name(value)
                        ));
                        continue;
                    };
                    if kind == LocationKind::ShopCode
                        && overrides.recommend(SettingOverride::RandomPuzzles(true))
                    {
                        diag.warn(format!(
                            "items: \"{area}:{location}\" is a shop code slot; placing an \
                             item here may force Random Puzzles on"
                        ));
                    }
                    item =
                        self.apply_spec(area, location, kind, ItemSpec::parse(raw), diag, overrides);
                }
                "price" => {
                    if value.is_null() {
                        continue;
                    }
                    if !kind.honors_price_override() {
                        diag.warn(format!(
                            "items: \"{area}:{location}\" keeps its vanilla rate; \
                             the price override is ignored"
                        ));
                        continue;
                    }
                    match value.as_u64() {
                        Some(p) if p <= u64::from(SHOP_PRICE_MAX) => price = Some(p as u16),
                        _ => diag.error(format!(
                            "items: shop price at \"{area}:{location}\" is outside the \
                             allowed range of 0-{SHOP_PRICE_MAX}: {value}"
                        )),
                    }
                }
                _ => diag.warn(format!(
                    "items: unexpected key \"{key}\" in shop tuple at \
                     \"{area}:{location}\" (expected item or price)"
                )),
            }
        }

        if item.is_some() || price.is_some() {
            self.parsed
                .entry(area.to_string())
                .or_default()
                .insert(location.to_string(), PlacementValue::Shop { item, price });
        }
    }

    fn apply_spec(
        &mut self,
        area: &str,
        location: &str,
        kind: LocationKind,
        spec: ItemSpec,
        diag: &mut Diagnostics,
        overrides: &mut SettingOverrideSet,
    ) -> Option<ItemSpec> {
        match spec {
            ItemSpec::Token(token) => Some(ItemSpec::Token(token)),
            ItemSpec::Trap { sprite } => self.apply_trap(area, location, kind, sprite, diag),
            ItemSpec::Item(name) => self.apply_item(area, location, name, diag, overrides),
        }
    }

    fn apply_trap(
        &mut self,
        area: &str,
        location: &str,
        kind: LocationKind,
        sprite: Option<String>,
        diag: &mut Diagnostics,
    ) -> Option<ItemSpec> {
        if kind.rejects_traps() {
            diag.error(format!("items: \"{area}:{location}\" cannot hold traps"));
            return None;
        }
        if let Some(name) = &sprite {
            let Some(def) = self.catalogs.items.get(name) else {
                diag.error(format!(
                    "items: trap at \"{area}:{location}\" forces a sprite that is not \
                     a recognized item: \"{name}\""
                ));
                return None;
            };
            if name == ITEM_COIN {
                diag.error(format!(
                    "items: trap at \"{area}:{location}\" cannot disguise itself as \
                     the coin sprite"
                ));
                return None;
            }
            // The generator materializes a forced sprite as that concrete
            // item, so it charges the item's own ledger entry.
            let max = def.max_count;
            if !self.charge_ledger(name, max, area, location, diag) {
                return None;
            }
        } else {
            let max = self.catalogs.items.get(TRAP_ID).and_then(|def| def.max_count);
            if !self.charge_ledger(TRAP_ID, max, area, location, diag) {
                return None;
            }
        }
        self.traps_placed += 1;
        Some(ItemSpec::Trap { sprite })
    }

    fn apply_item(
        &mut self,
        area: &str,
        location: &str,
        name: String,
        diag: &mut Diagnostics,
        overrides: &mut SettingOverrideSet,
    ) -> Option<ItemSpec> {
        let Some(def) = self.catalogs.items.get(&name) else {
            diag.error(format!(
                "items: found unexpected item at \"{area}:{location}\": \"{name}\""
            ));
            return None;
        };
        let max = def.max_count;
        let category = def.category;
        let family = def.family.clone();
        let mode = def.mode;

        if let (Some(family), Some(mode)) = (&family, mode) {
            if self.family_conflict(family, mode) {
                diag.error(format!(
                    "items: cannot place both progressive and non-progressive badges \
                     of the \"{family}\" family"
                ));
                return None;
            }
        }

        if !self.charge_ledger(&name, max, area, location, diag) {
            return None;
        }

        if let (Some(family), Some(mode)) = (family, mode) {
            self.commit_family(&name, &family, mode, diag, overrides);
        }
        if category == ItemCategory::PartnerUpgrade
            && !self.settings.partner_upgrade_shuffle
            && overrides.recommend(SettingOverride::PartnerUpgradeShuffle(true))
        {
            diag.warn(
                "items: placing a partner upgrade turns on Partner Upgrade Shuffle",
            );
        }

        Some(ItemSpec::Item(name))
    }

    fn family_conflict(&self, family: &str, mode: FamilyMode) -> bool {
        self.families.get(family).is_some_and(|seen| match mode {
            FamilyMode::Regular => seen.progressive,
            FamilyMode::Progressive => seen.regular,
        })
    }

    fn commit_family(
        &mut self,
        name: &str,
        family: &str,
        mode: FamilyMode,
        diag: &mut Diagnostics,
        overrides: &mut SettingOverrideSet,
    ) {
        let seen = self.families.entry(family.to_string()).or_default();
        match mode {
            FamilyMode::Regular => {
                seen.regular = true;
                let replaces_on = matches!(
                    overrides.get("progressive_badges"),
                    Some(SettingOverride::ProgressiveBadges(true))
                );
                if overrides.recommend(SettingOverride::ProgressiveBadges(false)) {
                    if replaces_on {
                        diag.warn(format!(
                            "items: badge \"{name}\" is manually set; this forces \
                             Progressive Badges off instead"
                        ));
                    } else {
                        diag.warn(format!(
                            "items: badge \"{name}\" is manually set; this turns off \
                             Progressive Badges"
                        ));
                    }
                }
            }
            FamilyMode::Progressive => {
                seen.progressive = true;
                if overrides.recommend(SettingOverride::ProgressiveBadges(true)) {
                    diag.warn(format!(
                        "items: badge \"{name}\" is manually set; this turns on \
                         Progressive Badges"
                    ));
                }
            }
        }
    }

    fn charge_ledger(
        &mut self,
        id: &str,
        max: Option<u32>,
        area: &str,
        location: &str,
        diag: &mut Diagnostics,
    ) -> bool {
        let count = self.ledger.entry(id.to_string()).or_insert(0);
        if let Some(max) = max {
            if *count >= max {
                diag.error(format!(
                    "items: \"{id}\" at \"{area}:{location}\" is placed more often \
                     than allowed (max {max})"
                ));
                return false;
            }
        }
        *count += 1;
        true
    }

    fn count(&self, id: &str) -> u32 {
        self.ledger.get(id).copied().unwrap_or(0)
    }

    fn check_aggregates(&self, diag: &mut Diagnostics, overrides: &mut SettingOverrideSet) {
        let star_pieces = self.count(ITEM_STAR_PIECE);
        if star_pieces > STAR_PIECE_HARD_CAP {
            diag.error(format!(
                "items: {star_pieces} star pieces placed, more than the \
                 {STAR_PIECE_HARD_CAP} the game can hold"
            ));
        } else if star_pieces > STAR_PIECE_SOFT_CAP {
            diag.warn(format!(
                "items: {star_pieces} star pieces placed; more than \
                 {STAR_PIECE_SOFT_CAP} can displace vanilla overworld star pieces \
                 depending on settings"
            ));
        }

        let bundles = self.count(ITEM_THREE_STAR_PIECES);
        if bundles > THREE_STAR_PIECES_CAP {
            diag.error(format!(
                "items: {bundles} three-star-piece bundles placed \
                 (max {THREE_STAR_PIECES_CAP})"
            ));
        }
        if bundles > 0 {
            diag.warn(
                "items: three-star-piece bundles are placed; these normally come \
                 from unusual acquisition paths",
            );
        }

        let power_stars = self.count(ITEM_POWER_STAR);
        if power_stars > POWER_STAR_CAP {
            diag.error(format!(
                "items: {power_stars} power stars placed (max {POWER_STAR_CAP})"
            ));
        } else if power_stars > self.settings.total_power_stars
            && overrides.recommend(SettingOverride::TotalPowerStars(power_stars))
        {
            diag.warn(format!(
                "items: {power_stars} power stars placed, more than the configured \
                 total of {}; raising the total to match",
                self.settings.total_power_stars
            ));
        }

        if self.traps_placed > self.settings.trap_count {
            diag.warn(format!(
                "items: {} traps placed, more than the {} the trap mode budgets for; \
                 manually placed traps are kept",
                self.traps_placed, self.settings.trap_count
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(section: Value, settings: &GeneratorSettings) -> RunOutcome {
        let catalogs = Catalogs::from_embedded().unwrap();
        let mut diag = Diagnostics::new();
        let mut overrides = SettingOverrideSet::new();
        let parsed = validate_items(
            section.as_object().unwrap(),
            &catalogs,
            settings,
            &mut diag,
            &mut overrides,
        );
        let messages = diag.into_messages();
        RunOutcome {
            parsed,
            warnings: messages.warnings,
            errors: messages.errors,
            overrides,
        }
    }

    struct RunOutcome {
        parsed: PlacementMap,
        warnings: Vec<String>,
        errors: Vec<String>,
        overrides: SettingOverrideSet,
    }

    #[test]
    fn spec_strings_parse_and_roundtrip() {
        assert_eq!(
            ItemSpec::parse("NonProgression"),
            ItemSpec::Token(SpecialToken::NonProgression)
        );
        assert_eq!(ItemSpec::parse("TRAP"), ItemSpec::Trap { sprite: None });
        assert_eq!(
            ItemSpec::parse("TRAP (UltraStone)"),
            ItemSpec::Trap {
                sprite: Some("UltraStone".to_string())
            }
        );
        assert_eq!(
            ItemSpec::parse("HPPlus"),
            ItemSpec::Item("HPPlus".to_string())
        );
        assert_eq!(
            ItemSpec::parse("TRAP (UltraStone)").spec_string(),
            "TRAP (UltraStone)"
        );
    }

    #[test]
    fn bare_item_placement_is_recorded() {
        let outcome = run(
            json!({ "Goomba Village": { "On The Balcony": "UltraStone" } }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert_eq!(
            outcome.parsed["Goomba Village"]["On The Balcony"],
            PlacementValue::Single(ItemSpec::Item("UltraStone".to_string()))
        );
    }

    #[test]
    fn coin_sprite_trap_is_rejected() {
        let outcome = run(
            json!({ "Goomba Village": { "On The Balcony": "TRAP (Coin)" } }),
            &GeneratorSettings::default(),
        );
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.parsed.is_empty());
    }

    #[test]
    fn trap_at_shop_is_rejected() {
        let outcome = run(
            json!({ "Toad Town": { "Shop Item 1": "TRAP" } }),
            &GeneratorSettings::default(),
        );
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn block_locations_are_ignored_with_warning() {
        let outcome = run(
            json!({ "Goomba Village": { "Behind Goompa House Block": "Mushroom" } }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.parsed.is_empty());
    }

    #[test]
    fn ledger_caps_sixth_hp_plus() {
        let outcome = run(
            json!({
                "Goomba Village": {
                    "On The Balcony": "HPPlus",
                    "Goompa Veranda Gift": "HPPlus",
                    "Goompapa Letter Reward": "HPPlus",
                    "Bottom Of The Cliff Chest": "HPPlus",
                    "Goomba Road Sign Prize": "HPPlus"
                },
                "Koopa Village": { "Bush Gift": "HPPlus" }
            }),
            &GeneratorSettings::default(),
        );
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("max 5"));
        assert_eq!(outcome.parsed["Goomba Village"].len(), 5);
        assert!(!outcome.parsed.contains_key("Koopa Village"));
    }

    #[test]
    fn forced_sprite_shares_the_item_ledger() {
        let outcome = run(
            json!({
                "Goomba Village": {
                    "On The Balcony": "TRAP (UltraStone)",
                    "Goompa Veranda Gift": "UltraStone"
                }
            }),
            &GeneratorSettings::default(),
        );
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("UltraStone"));
    }

    #[test]
    fn mixed_family_modes_error() {
        let outcome = run(
            json!({
                "Goomba Village": {
                    "On The Balcony": "JumpCharge",
                    "Goompa Veranda Gift": "ProgressiveJumpCharge"
                }
            }),
            &GeneratorSettings::default(),
        );
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("JumpCharge"));
    }

    #[test]
    fn progressive_badge_recommends_setting_on() {
        let outcome = run(
            json!({ "Goomba Village": { "On The Balcony": "ProgressiveJumpCharge" } }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert!(
            outcome
                .overrides
                .contains(SettingOverride::ProgressiveBadges(true))
        );
    }

    #[test]
    fn regular_family_badge_flips_recommendation_off() {
        let outcome = run(
            json!({
                "Goomba Village": {
                    "On The Balcony": "ProgressiveJumpCharge",
                    "Goompa Veranda Gift": "SmashCharge"
                }
            }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert!(
            outcome
                .overrides
                .contains(SettingOverride::ProgressiveBadges(false))
        );
        assert!(
            outcome
                .warnings
                .iter()
                .any(|w| w.contains("off instead"))
        );
    }

    #[test]
    fn partner_upgrade_recommends_shuffle_unless_enabled() {
        let outcome = run(
            json!({ "Goomba Village": { "On The Balcony": "KooperUpgrade" } }),
            &GeneratorSettings::default(),
        );
        assert!(
            outcome
                .overrides
                .contains(SettingOverride::PartnerUpgradeShuffle(true))
        );

        let enabled = GeneratorSettings {
            partner_upgrade_shuffle: true,
            ..GeneratorSettings::default()
        };
        let outcome = run(
            json!({ "Goomba Village": { "On The Balcony": "KooperUpgrade" } }),
            &enabled,
        );
        assert!(outcome.overrides.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn shop_tuple_sets_item_and_price() {
        let outcome = run(
            json!({ "Toad Town": { "Shop Item 1": { "item": "Mushroom", "price": 42 } } }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert_eq!(
            outcome.parsed["Toad Town"]["Shop Item 1"],
            PlacementValue::Shop {
                item: Some(ItemSpec::Item("Mushroom".to_string())),
                price: Some(42),
            }
        );
    }

    #[test]
    fn star_piece_trade_discards_price_override() {
        let outcome = run(
            json!({
                "Shooting Star Summit": {
                    "Merlow Reward 1": { "item": "Mushroom", "price": 500 }
                }
            }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(
            outcome.parsed["Shooting Star Summit"]["Merlow Reward 1"],
            PlacementValue::Shop {
                item: Some(ItemSpec::Item("Mushroom".to_string())),
                price: None,
            }
        );
    }

    #[test]
    fn shop_tuple_outside_shops_errors() {
        let outcome = run(
            json!({ "Goomba Village": { "On The Balcony": { "item": "Mushroom" } } }),
            &GeneratorSettings::default(),
        );
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn shop_code_slot_recommends_random_puzzles() {
        let outcome = run(
            json!({ "Dry Dry Outpost": { "Shop Code Item 1": { "item": "Mushroom" } } }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert!(
            outcome
                .overrides
                .contains(SettingOverride::RandomPuzzles(true))
        );
    }

    #[test]
    fn power_star_surplus_recommends_raising_total() {
        let settings = GeneratorSettings {
            total_power_stars: 2,
            ..GeneratorSettings::default()
        };
        let outcome = run(
            json!({
                "Goomba Village": {
                    "On The Balcony": "PowerStar",
                    "Goompa Veranda Gift": "PowerStar",
                    "Goompapa Letter Reward": "PowerStar"
                }
            }),
            &settings,
        );
        assert!(outcome.errors.is_empty());
        assert!(
            outcome
                .overrides
                .contains(SettingOverride::TotalPowerStars(3))
        );
    }

    #[test]
    fn trap_surplus_warns_but_keeps_placements() {
        let outcome = run(
            json!({
                "Goomba Village": {
                    "On The Balcony": "TRAP",
                    "Goompa Veranda Gift": "TRAP"
                }
            }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert!(outcome.warnings.iter().any(|w| w.contains("traps placed")));
        assert_eq!(outcome.parsed["Goomba Village"].len(), 2);
    }

    #[test]
    fn unknown_area_and_location_warn_and_drop() {
        let outcome = run(
            json!({
                "Nowhere": { "Spot": "Mushroom" },
                "Goomba Village": { "Nope": "Mushroom" }
            }),
            &GeneratorSettings::default(),
        );
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome.parsed.is_empty());
    }
}
