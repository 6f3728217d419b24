//! Data models for footprint estimation.
//!
//! # Units
//!
//! Every emission figure in this module is a **monthly** amount in kilograms
//! of CO₂-equivalent. Survey answers keep the unit the question was asked in
//! (km per day, meals per week, liters per day); conversion to a month
//! happens in [`crate::calculator`].
//!
//! # Wire format
//!
//! [`InputProfile`] is exchanged as a flat camelCase JSON object. Boolean
//! answers accept either JSON booleans or the strings `"yes"` / `"no"` and are
//! always written back as `"yes"` / `"no"`, which is what the delegated
//! calculation service expects.

use serde::{Deserialize, Serialize};

/// Upper bound for non-vegetarian meals per week (three meals a day).
pub const MAX_MEAT_MEALS_PER_WEEK: f64 = 21.0;

// Caps for the open-ended answers. Far beyond any real survey answer, and
// small enough that every product and sum in the calculation stays finite.
pub const MAX_TRAVEL_KM_PER_DAY: f64 = 1_000_000.0;
pub const MAX_ELECTRICITY_UNITS: f64 = 1_000_000_000.0;
pub const MAX_DAIRY_LITERS_PER_DAY: f64 = 1_000_000.0;
pub const MAX_WASTE_KG_PER_WEEK: f64 = 1_000_000.0;
pub const MAX_WATER_USAGE_LITERS: f64 = 1_000_000_000.0;
pub const MAX_SHOPPING_FREQ: f64 = 1_000_000.0;
pub const MAX_ONLINE_ORDERS: f64 = 1_000_000.0;

/// Main mode of transport for daily travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    /// Motorbike or scooter. The survey form calls this "bike".
    #[serde(alias = "bike")]
    Motorbike,
    Bus,
    Metro,
    Bicycle,
    Walk,
}

/// How often air conditioning is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcUsage {
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "occasionally", alias = "occasional")]
    Occasional,
    #[serde(rename = "daily")]
    Daily,
}

/// One person's answers to the lifestyle survey.
///
/// Built once by the caller and never mutated afterwards. Numeric fields are
/// expected to be within their documented ranges; anything outside is clamped
/// to the nearest bound by [`crate::calculator::clamp_profile`] before use.
///
/// Fields missing from a JSON body take the survey's initial answers
/// (see [`InputProfile::default`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputProfile {
    // Travel
    /// Average distance traveled per day, in km (≥ 0).
    pub travel_km_per_day: f64,
    pub transport_mode: TransportMode,
    #[serde(with = "yes_no")]
    pub carpool: bool,

    // Home energy
    /// Electricity consumed per month, in units (kWh) (≥ 0).
    pub electricity_units: f64,
    pub ac_usage: AcUsage,
    #[serde(with = "yes_no")]
    pub renewable_energy: bool,

    // Diet
    /// Non-vegetarian meals per week (0–21).
    pub meat_meals_per_week: f64,
    /// Dairy consumed per day, in liters (≥ 0).
    pub dairy_liters_per_day: f64,
    #[serde(with = "yes_no")]
    pub local_food: bool,

    // Waste and water
    /// Waste generated per week, in kg (≥ 0).
    pub waste_kg_per_week: f64,
    #[serde(with = "yes_no")]
    pub recycle: bool,
    /// Water used per day, in liters (≥ 0).
    pub water_usage_liters: f64,

    // Lifestyle
    /// New clothing purchases per month (≥ 0).
    pub shopping_freq: f64,
    /// Online orders delivered per month (≥ 0).
    pub online_orders: f64,
}

impl Default for InputProfile {
    fn default() -> Self {
        Self {
            travel_km_per_day: 25.0,
            transport_mode: TransportMode::Car,
            carpool: false,
            electricity_units: 300.0,
            ac_usage: AcUsage::Occasional,
            renewable_energy: false,
            meat_meals_per_week: 7.0,
            dairy_liters_per_day: 0.5,
            local_food: false,
            waste_kg_per_week: 10.0,
            recycle: false,
            water_usage_liters: 200.0,
            shopping_freq: 3.0,
            online_orders: 5.0,
        }
    }
}

/// A displayed emission category.
///
/// The declaration order is the fixed category order used everywhere a
/// breakdown is walked, including tie-breaks for the dominant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionCategory {
    Transportation,
    Electricity,
    Diet,
    Waste,
    Water,
}

impl EmissionCategory {
    /// All categories in the fixed order.
    pub const ALL: [EmissionCategory; 5] = [
        EmissionCategory::Transportation,
        EmissionCategory::Electricity,
        EmissionCategory::Diet,
        EmissionCategory::Waste,
        EmissionCategory::Water,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmissionCategory::Transportation => "Transportation",
            EmissionCategory::Electricity => "Electricity",
            EmissionCategory::Diet => "Diet",
            EmissionCategory::Waste => "Waste",
            EmissionCategory::Water => "Water",
        }
    }
}

/// Monthly emissions per displayed category, in kg CO₂e. Every value is ≥ 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub water: f64,
}

impl Breakdown {
    /// Emissions attributed to one category.
    pub fn get(&self, category: EmissionCategory) -> f64 {
        match category {
            EmissionCategory::Transportation => self.transportation,
            EmissionCategory::Electricity => self.electricity,
            EmissionCategory::Diet => self.diet,
            EmissionCategory::Waste => self.waste,
            EmissionCategory::Water => self.water,
        }
    }

    /// Walk the categories in the fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (EmissionCategory, f64)> + '_ {
        EmissionCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Sum of the displayed categories.
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    /// The category with the largest value.
    ///
    /// Ties go to whichever category comes first in [`EmissionCategory::ALL`].
    pub fn dominant(&self) -> EmissionCategory {
        let mut best = (EmissionCategory::Transportation, self.transportation);
        for (category, value) in self.iter().skip(1) {
            if value > best.1 {
                best = (category, value);
            }
        }
        best.0
    }

    /// Each category's share of [`Breakdown::sum`], in percent.
    ///
    /// All shares are 0 when the sum is 0.
    pub fn shares(&self) -> Vec<(EmissionCategory, f64)> {
        let sum = self.sum();
        self.iter()
            .map(|(category, value)| {
                let share = if sum > 0.0 { value / sum * 100.0 } else { 0.0 };
                (category, share)
            })
            .collect()
    }
}

/// Output of one footprint calculation. Values are unrounded.
///
/// `total` is the sum of the breakdown plus `uncategorized`, the lifestyle
/// term (clothing and deliveries) that has no displayed category. The total
/// may therefore exceed the sum of the displayed categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub total: f64,
    pub breakdown: Breakdown,
    pub uncategorized: f64,
}

/// Response body of `POST /predict`, the delegated calculation contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Monthly footprint in kg CO₂e, rounded to two decimals.
    pub footprint: f64,
}

/// Serde adapter for survey flags written as `"yes"` / `"no"`.
mod yes_no {
    use std::fmt;

    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(YesNoVisitor)
    }

    struct YesNoVisitor;

    impl de::Visitor<'_> for YesNoVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or \"yes\"/\"no\"")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            match value.trim().to_ascii_lowercase().as_str() {
                "yes" | "true" => Ok(true),
                "no" | "false" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn breakdown(values: [f64; 5]) -> Breakdown {
        Breakdown {
            transportation: values[0],
            electricity: values[1],
            diet: values[2],
            waste: values[3],
            water: values[4],
        }
    }

    #[test]
    fn test_dominant_category_largest_value() {
        let b = breakdown([500.0, 100.0, 50.0, 30.0, 10.0]);
        assert_eq!(b.dominant(), EmissionCategory::Transportation);

        let b = breakdown([10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(b.dominant(), EmissionCategory::Water);
    }

    #[test]
    fn test_dominant_category_tie_goes_to_first() {
        let b = breakdown([10.0, 90.0, 90.0, 90.0, 5.0]);
        assert_eq!(b.dominant(), EmissionCategory::Electricity);

        // All zero: first category wins
        assert_eq!(
            Breakdown::default().dominant(),
            EmissionCategory::Transportation
        );
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let b = breakdown([50.0, 25.0, 25.0, 0.0, 0.0]);
        let shares = b.shares();

        assert_eq!(shares[0], (EmissionCategory::Transportation, 50.0));
        assert_eq!(shares[1], (EmissionCategory::Electricity, 25.0));
        let total: f64 = shares.iter().map(|(_, s)| s).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_of_empty_breakdown() {
        let shares = Breakdown::default().shares();
        assert_eq!(shares.len(), 5);
        assert!(shares.iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn test_profile_accepts_yes_no_strings() {
        let profile: InputProfile = serde_json::from_value(json!({
            "travelKmPerDay": 12,
            "transportMode": "bike",
            "carpool": "yes",
            "acUsage": "daily",
            "renewableEnergy": true,
            "recycle": "No"
        }))
        .unwrap();

        assert_eq!(profile.travel_km_per_day, 12.0);
        assert_eq!(profile.transport_mode, TransportMode::Motorbike);
        assert!(profile.carpool);
        assert_eq!(profile.ac_usage, AcUsage::Daily);
        assert!(profile.renewable_energy);
        assert!(!profile.recycle);
        // Unspecified fields keep the survey defaults
        assert_eq!(profile.electricity_units, 300.0);
        assert_eq!(profile.online_orders, 5.0);
    }

    #[test]
    fn test_profile_rejects_unknown_flag_value() {
        let result: Result<InputProfile, _> = serde_json::from_value(json!({ "carpool": "maybe" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_serializes_flat_camel_case() {
        let value = serde_json::to_value(InputProfile::default()).unwrap();

        assert_eq!(value["travelKmPerDay"], 25.0);
        assert_eq!(value["transportMode"], "car");
        assert_eq!(value["carpool"], "no");
        assert_eq!(value["acUsage"], "occasionally");
        assert_eq!(value["waterUsageLiters"], 200.0);
    }
}
