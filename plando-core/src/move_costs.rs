//! Badge, partner move, and star power cost overrides.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::catalog::{CostKind, MoveCatalog};
use crate::constants::{BP_COST_MAX, FP_COST_MAX, SP_COST_MAX};
use crate::diagnostics::Diagnostics;
use crate::document::type_name;

const TABLE_BADGE: &str = "badge";
const TABLE_PARTNER: &str = "partner";
const TABLE_STARPOWER: &str = "starpower";

/// Validated cost overrides for one badge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BadgeCost {
    #[serde(rename = "BP", skip_serializing_if = "Option::is_none")]
    pub bp: Option<u8>,
    #[serde(rename = "FP", skip_serializing_if = "Option::is_none")]
    pub fp: Option<u8>,
}

impl BadgeCost {
    #[must_use]
    fn is_empty(&self) -> bool {
        self.bp.is_none() && self.fp.is_none()
    }
}

/// Validated move cost overrides across the three sub-tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveCosts {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub badge: BTreeMap<String, BadgeCost>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub partner: BTreeMap<String, BTreeMap<String, u8>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub starpower: BTreeMap<String, u8>,
}

impl MoveCosts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.badge.is_empty() && self.partner.is_empty() && self.starpower.is_empty()
    }
}

/// Validate the `move_costs` section against the move catalog.
pub(crate) fn validate_move_costs(
    entries: &Map<String, Value>,
    moves: &MoveCatalog,
    diag: &mut Diagnostics,
) -> MoveCosts {
    let mut parsed = MoveCosts::default();

    for (table, value) in entries {
        match table.as_str() {
            TABLE_BADGE => {
                if let Some(badges) = expect_table(table, value, diag) {
                    validate_badges(badges, moves, diag, &mut parsed);
                }
            }
            TABLE_PARTNER => {
                if let Some(partners) = expect_table(table, value, diag) {
                    validate_partners(partners, moves, diag, &mut parsed);
                }
            }
            TABLE_STARPOWER => {
                if let Some(starpowers) = expect_table(table, value, diag) {
                    validate_starpowers(starpowers, moves, diag, &mut parsed);
                }
            }
            _ => diag.warn(format!(
                "move_costs: unexpected sub-table \"{table}\" \
                 (expected badge, partner, or starpower)"
            )),
        }
    }

    parsed
}

fn expect_table<'a>(
    table: &str,
    value: &'a Value,
    diag: &mut Diagnostics,
) -> Option<&'a Map<String, Value>> {
    if value.is_null() {
        return None;
    }
    let entries = value.as_object();
    if entries.is_none() {
        diag.error(format!(
            "move_costs: value for \"{table}\" has wrong shape \
             (expected mapping or null, got {})",
            type_name(value)
        ));
    }
    entries
}

fn parse_cost(
    context: &str,
    value: &Value,
    max: u8,
    diag: &mut Diagnostics,
) -> Option<u8> {
    if value.is_null() {
        return None;
    }
    match value.as_u64() {
        Some(cost) if cost <= u64::from(max) => Some(cost as u8),
        _ => {
            diag.error(format!(
                "move_costs: {context} has disallowed value {value} \
                 (expected 0-{max} or null, got {})",
                type_name(value)
            ));
            None
        }
    }
}

fn validate_badges(
    badges: &Map<String, Value>,
    moves: &MoveCatalog,
    diag: &mut Diagnostics,
    parsed: &mut MoveCosts,
) {
    for (badge, costs) in badges {
        let Some(kinds) = moves.badge_cost_kinds(badge) else {
            diag.error(format!("move_costs: \"{badge}\" is not a known badge"));
            continue;
        };
        if costs.is_null() {
            continue;
        }
        let Some(costs) = costs.as_object() else {
            diag.error(format!(
                "move_costs: costs for badge \"{badge}\" have wrong shape \
                 (expected mapping or null, got {})",
                type_name(costs)
            ));
            continue;
        };

        let mut entry = BadgeCost::default();
        for (cost_key, cost_value) in costs {
            let kind = match cost_key.as_str() {
                "BP" => CostKind::Bp,
                "FP" => CostKind::Fp,
                _ => {
                    diag.error(format!(
                        "move_costs: cost type \"{cost_key}\" of badge \"{badge}\" \
                         is not a known cost type"
                    ));
                    continue;
                }
            };
            if !kinds.contains(&kind) {
                diag.error(format!(
                    "move_costs: cost type \"{}\" does not apply to badge \"{badge}\"",
                    kind.as_str()
                ));
                continue;
            }
            let max = match kind {
                CostKind::Bp => BP_COST_MAX,
                CostKind::Fp => FP_COST_MAX,
            };
            let context = format!("cost \"{badge}:{}\"", kind.as_str());
            match kind {
                CostKind::Bp => entry.bp = parse_cost(&context, cost_value, max, diag),
                CostKind::Fp => entry.fp = parse_cost(&context, cost_value, max, diag),
            }
        }
        if !entry.is_empty() {
            parsed.badge.insert(badge.clone(), entry);
        }
    }
}

fn validate_partners(
    partners: &Map<String, Value>,
    moves: &MoveCatalog,
    diag: &mut Diagnostics,
    parsed: &mut MoveCosts,
) {
    for (partner, partner_moves) in partners {
        let Some(known_moves) = moves.partner_moves(partner) else {
            diag.error(format!("move_costs: \"{partner}\" is not a known partner"));
            continue;
        };
        if partner_moves.is_null() {
            continue;
        }
        let Some(partner_moves) = partner_moves.as_object() else {
            diag.error(format!(
                "move_costs: moves for partner \"{partner}\" have wrong shape \
                 (expected mapping or null, got {})",
                type_name(partner_moves)
            ));
            continue;
        };

        for (move_name, cost_value) in partner_moves {
            if !known_moves.iter().any(|m| m == move_name) {
                diag.error(format!(
                    "move_costs: \"{move_name}\" is not a move of partner \"{partner}\""
                ));
                continue;
            }
            let context = format!("FP cost of \"{partner}:{move_name}\"");
            let Some(cost) = parse_cost(&context, cost_value, FP_COST_MAX, diag) else {
                continue;
            };
            if cost == 0 {
                diag.warn(format!(
                    "move_costs: FP cost of \"{partner}:{move_name}\" set to zero; \
                     this reorders battle menus in surprising ways"
                ));
            }
            parsed
                .partner
                .entry(partner.clone())
                .or_default()
                .insert(move_name.clone(), cost);
        }
    }
}

fn validate_starpowers(
    starpowers: &Map<String, Value>,
    moves: &MoveCatalog,
    diag: &mut Diagnostics,
    parsed: &mut MoveCosts,
) {
    for (name, cost_value) in starpowers {
        if !moves.is_starpower(name) {
            diag.error(format!("move_costs: \"{name}\" is not a known star power"));
            continue;
        }
        let context = format!("SP cost of \"{name}\"");
        if let Some(cost) = parse_cost(&context, cost_value, SP_COST_MAX, diag) {
            parsed.starpower.insert(name.clone(), cost);
        }
    }
}
