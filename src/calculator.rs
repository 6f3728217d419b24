//! Footprint calculation.
//!
//! Each displayed category is computed independently: the base amount first,
//! then the category's lifestyle multipliers, applied multiplicatively and in
//! a fixed order. The lifestyle term (clothing and deliveries) is added to the
//! total only.
//!
//! Nothing here is rounded. Rounding belongs to [`crate::report`].

use tracing::debug;

use crate::factors::{DAYS_PER_MONTH, EmissionFactorTable, STANDARD, WEEKS_PER_MONTH};
use crate::model::{
    Breakdown, FootprintResult, InputProfile, MAX_DAIRY_LITERS_PER_DAY, MAX_ELECTRICITY_UNITS,
    MAX_MEAT_MEALS_PER_WEEK, MAX_ONLINE_ORDERS, MAX_SHOPPING_FREQ, MAX_TRAVEL_KM_PER_DAY,
    MAX_WASTE_KG_PER_WEEK, MAX_WATER_USAGE_LITERS,
};

/// Compute the monthly footprint of `profile` using `table`.
///
/// Never fails: out-of-range fields are clamped first (see [`clamp_profile`]).
pub fn compute(profile: &InputProfile, table: &EmissionFactorTable) -> FootprintResult {
    let profile = clamp_profile(profile);

    let breakdown = Breakdown {
        transportation: transportation(&profile, table),
        electricity: electricity(&profile, table),
        diet: diet(&profile, table),
        waste: waste(&profile, table),
        water: water(&profile, table),
    };
    let uncategorized = lifestyle(&profile, table);

    FootprintResult {
        total: breakdown.sum() + uncategorized,
        breakdown,
        uncategorized,
    }
}

/// Compute with the [`STANDARD`] factor table.
pub fn compute_footprint(profile: &InputProfile) -> FootprintResult {
    compute(profile, &STANDARD)
}

/// Clamp every numeric field to its documented range.
///
/// Negative values become 0, meat meals are capped at 21 per week, and the
/// open-ended answers are capped at the `MAX_*` bounds in [`crate::model`] so
/// the calculation stays finite. NaN (which JSON cannot carry but Rust callers
/// can) becomes 0.
pub fn clamp_profile(profile: &InputProfile) -> InputProfile {
    InputProfile {
        travel_km_per_day: clamp_field(
            "travel_km_per_day",
            profile.travel_km_per_day,
            MAX_TRAVEL_KM_PER_DAY,
        ),
        electricity_units: clamp_field(
            "electricity_units",
            profile.electricity_units,
            MAX_ELECTRICITY_UNITS,
        ),
        meat_meals_per_week: clamp_field(
            "meat_meals_per_week",
            profile.meat_meals_per_week,
            MAX_MEAT_MEALS_PER_WEEK,
        ),
        dairy_liters_per_day: clamp_field(
            "dairy_liters_per_day",
            profile.dairy_liters_per_day,
            MAX_DAIRY_LITERS_PER_DAY,
        ),
        waste_kg_per_week: clamp_field(
            "waste_kg_per_week",
            profile.waste_kg_per_week,
            MAX_WASTE_KG_PER_WEEK,
        ),
        water_usage_liters: clamp_field(
            "water_usage_liters",
            profile.water_usage_liters,
            MAX_WATER_USAGE_LITERS,
        ),
        shopping_freq: clamp_field("shopping_freq", profile.shopping_freq, MAX_SHOPPING_FREQ),
        online_orders: clamp_field("online_orders", profile.online_orders, MAX_ONLINE_ORDERS),
        ..*profile
    }
}

fn clamp_field(field: &'static str, value: f64, max: f64) -> f64 {
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    };

    // NaN never compares equal, so it is reported too
    if clamped != value {
        debug!(field, value, clamped, "Input clamped to range");
    }

    clamped
}

fn transportation(profile: &InputProfile, table: &EmissionFactorTable) -> f64 {
    let carpool = if profile.carpool {
        table.carpool_retention
    } else {
        1.0
    };

    profile.travel_km_per_day
        * DAYS_PER_MONTH
        * table.transport.for_mode(profile.transport_mode)
        * carpool
}

fn electricity(profile: &InputProfile, table: &EmissionFactorTable) -> f64 {
    let mut electricity = profile.electricity_units * table.electricity_per_unit
        + table.ac_add_on_units.for_usage(profile.ac_usage) * table.electricity_per_unit;

    if profile.renewable_energy {
        electricity *= table.renewable_retention;
    }

    electricity
}

fn diet(profile: &InputProfile, table: &EmissionFactorTable) -> f64 {
    let mut diet = profile.meat_meals_per_week * WEEKS_PER_MONTH * table.meat_per_meal
        + profile.dairy_liters_per_day * DAYS_PER_MONTH * table.dairy_per_liter;

    if profile.local_food {
        diet *= table.local_food_retention;
    }

    diet
}

fn waste(profile: &InputProfile, table: &EmissionFactorTable) -> f64 {
    let mut waste = profile.waste_kg_per_week * WEEKS_PER_MONTH * table.waste_per_kg;

    if profile.recycle {
        waste *= table.recycling_retention;
    }

    waste
}

fn water(profile: &InputProfile, table: &EmissionFactorTable) -> f64 {
    profile.water_usage_liters * table.water_per_liter * DAYS_PER_MONTH
}

fn lifestyle(profile: &InputProfile, table: &EmissionFactorTable) -> f64 {
    profile.shopping_freq * table.clothing_per_item
        + profile.online_orders * table.delivery_per_order
}
