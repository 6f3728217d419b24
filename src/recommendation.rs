//! Selection and ranking of mitigation actions.
//!
//! Rules are static data. For each request the engine keeps the rules whose
//! predicate holds for the profile, then promotes the rule mapped to the
//! dominant emission category (see [`PRIORITY_RULES`]). When the dominant
//! category has no mapped rule, or that rule does not apply, the first
//! applicable rule in definition order becomes the priority item.

use std::fmt;

use serde::Serialize;

use crate::factors::TREE_ABSORPTION_KG_PER_MONTH;
use crate::model::{EmissionCategory, FootprintResult, InputProfile, TransportMode};

/// Stable identifier of a recommendation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    PlantTrees,
    RenewableEnergy,
    PublicTransport,
    RecycleMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    High,
    Medium,
}

impl ImpactTier {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactTier::High => "High Impact",
            ImpactTier::Medium => "Medium Impact",
        }
    }
}

/// Dominant category → the rule promoted to priority for it.
///
/// Diet and water have no dedicated rule and always fall back.
pub const PRIORITY_RULES: [(EmissionCategory, RuleId); 3] = [
    (EmissionCategory::Transportation, RuleId::PublicTransport),
    (EmissionCategory::Electricity, RuleId::RenewableEnergy),
    (EmissionCategory::Waste, RuleId::RecycleMore),
];

/// A candidate mitigation action.
///
/// `description` is a template; `{trees}` and `{footprint}` are replaced with
/// the tree count and the whole-number total when the rule is rendered.
#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub id: RuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactTier,
    pub applies_to: fn(&InputProfile) -> bool,
}

impl RecommendationRule {
    /// The category this rule is promoted for, if any.
    pub fn addresses(&self) -> Option<EmissionCategory> {
        PRIORITY_RULES
            .iter()
            .find(|(_, id)| *id == self.id)
            .map(|(category, _)| *category)
    }

    fn render(&self, result: &FootprintResult) -> RecommendationItem {
        let trees = trees_to_offset(result.total);
        let description = self
            .description
            .replace("{trees}", &trees.to_string())
            .replace("{footprint}", &(result.total.round() as i64).to_string());

        RecommendationItem {
            id: self.id,
            title: self.title,
            description,
            impact: self.impact,
            impact_label: self.impact.label(),
            trees_to_offset: (self.id == RuleId::PlantTrees).then_some(trees),
        }
    }
}

impl fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("impact", &self.impact)
            .finish_non_exhaustive()
    }
}

/// All rules, in definition order.
pub const RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        id: RuleId::PlantTrees,
        title: "Plant Trees",
        description: "Plant {trees} trees this month to offset {footprint} kg CO₂",
        impact: ImpactTier::High,
        applies_to: always,
    },
    RecommendationRule {
        id: RuleId::RenewableEnergy,
        title: "Switch to Renewable Energy",
        description: "Consider solar panels or green energy plans to reduce electricity emissions",
        impact: ImpactTier::High,
        applies_to: without_renewable_energy,
    },
    RecommendationRule {
        id: RuleId::PublicTransport,
        title: "Use Public Transport",
        description: "Try using public transport 2-3 times a week to cut travel emissions",
        impact: ImpactTier::Medium,
        applies_to: drives_motor_vehicle,
    },
    RecommendationRule {
        id: RuleId::RecycleMore,
        title: "Recycle More",
        description: "Proper recycling can reduce waste emissions by up to 70%",
        impact: ImpactTier::Medium,
        applies_to: without_recycling,
    },
];

fn always(_: &InputProfile) -> bool {
    true
}

fn without_renewable_energy(profile: &InputProfile) -> bool {
    !profile.renewable_energy
}

fn drives_motor_vehicle(profile: &InputProfile) -> bool {
    matches!(
        profile.transport_mode,
        TransportMode::Car | TransportMode::Motorbike
    )
}

fn without_recycling(profile: &InputProfile) -> bool {
    !profile.recycle
}

/// Trees needed to absorb `total` kg CO₂e in a month.
pub fn trees_to_offset(total: f64) -> u64 {
    (total.max(0.0) / TREE_ABSORPTION_KG_PER_MONTH).ceil() as u64
}

/// A rendered recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationItem {
    pub id: RuleId,
    pub title: &'static str,
    pub description: String,
    pub impact: ImpactTier,
    /// Display text for `impact`, e.g. "High Impact".
    pub impact_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trees_to_offset: Option<u64>,
}

/// The priority item plus the remaining applicable items in rule order.
///
/// `priority` is `None` only when no rule applies, in which case `others` is
/// empty as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub priority: Option<RecommendationItem>,
    pub others: Vec<RecommendationItem>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none()
    }
}

/// Select and rank the applicable rules for `profile`.
pub fn recommend(
    result: &FootprintResult,
    profile: &InputProfile,
    rules: &[RecommendationRule],
) -> Recommendations {
    let applicable: Vec<&RecommendationRule> = rules
        .iter()
        .filter(|rule| (rule.applies_to)(profile))
        .collect();

    let dominant = result.breakdown.dominant();
    let promoted = applicable
        .iter()
        .position(|rule| rule.addresses() == Some(dominant));

    let Some(priority_index) = promoted.or((!applicable.is_empty()).then_some(0)) else {
        return Recommendations {
            priority: None,
            others: Vec::new(),
        };
    };

    let others = applicable
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != priority_index)
        .map(|(_, rule)| rule.render(result))
        .collect();

    Recommendations {
        priority: Some(applicable[priority_index].render(result)),
        others,
    }
}

/// Recommend from [`RULES`].
pub fn get_recommendations(result: &FootprintResult, profile: &InputProfile) -> Recommendations {
    recommend(result, profile, &RULES)
}
