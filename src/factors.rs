//! Emission factor reference data.
//!
//! All factors are kg CO₂e per unit of activity. [`STANDARD`] is the table the
//! service uses by default; a regional table can be built as a
//! [`EmissionFactorTable`] value and passed to [`crate::calculator::compute`]
//! without touching the algorithm.
//!
//! # Sources
//!
//! - Transport: DEFRA 2024 GHG conversion factors
//! - Electricity: blended EPA eGRID 2024 / IEA 2024 grid average
//! - Food: Our World in Data / FAO lifecycle studies
//! - Waste: IPCC 2006 waste guidelines

use serde::Serialize;

use crate::model::{AcUsage, TransportMode};

/// Days in a billing month.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Weeks in a billing month.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// CO₂e absorbed by one tree per month, in kg.
pub const TREE_ABSORPTION_KG_PER_MONTH: f64 = 25.0;

/// Per passenger-km factor for each transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportFactors {
    pub car: f64,
    pub motorbike: f64,
    pub bus: f64,
    pub metro: f64,
    pub bicycle: f64,
    pub walk: f64,
}

impl TransportFactors {
    pub fn for_mode(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.car,
            TransportMode::Motorbike => self.motorbike,
            TransportMode::Bus => self.bus,
            TransportMode::Metro => self.metro,
            TransportMode::Bicycle => self.bicycle,
            TransportMode::Walk => self.walk,
        }
    }
}

/// Extra electricity units per month attributed to air conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcAddOns {
    pub never: f64,
    pub occasional: f64,
    pub daily: f64,
}

impl AcAddOns {
    pub fn for_usage(&self, usage: AcUsage) -> f64 {
        match usage {
            AcUsage::Never => self.never,
            AcUsage::Occasional => self.occasional,
            AcUsage::Daily => self.daily,
        }
    }
}

/// Immutable emission factors and conditional multipliers.
///
/// Retention fractions are the share of a category's baseline that remains
/// once a mitigating behavior applies (recycling keeps 30% of waste emissions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactorTable {
    /// kg CO₂e per passenger-km.
    pub transport: TransportFactors,
    /// Multiplier applied to the transport term when carpooling.
    pub carpool_retention: f64,

    /// kg CO₂e per electricity unit (kWh).
    pub electricity_per_unit: f64,
    /// Monthly AC add-on, in electricity units.
    pub ac_add_on_units: AcAddOns,
    pub renewable_retention: f64,

    /// kg CO₂e per non-vegetarian meal (12 kg/kg mixed meat × 0.2 kg portion).
    pub meat_per_meal: f64,
    /// kg CO₂e per liter of dairy milk.
    pub dairy_per_liter: f64,
    pub local_food_retention: f64,

    /// kg CO₂e per kg of landfilled waste.
    pub waste_per_kg: f64,
    pub recycling_retention: f64,
    /// kg CO₂e per liter of water (treatment and heating).
    pub water_per_liter: f64,

    /// kg CO₂e per new clothing item.
    pub clothing_per_item: f64,
    /// kg CO₂e per delivered online order.
    pub delivery_per_order: f64,
}

/// Default factor table.
pub const STANDARD: EmissionFactorTable = EmissionFactorTable {
    transport: TransportFactors {
        car: 0.171,
        motorbike: 0.103,
        bus: 0.103,
        metro: 0.031,
        bicycle: 0.0,
        walk: 0.0,
    },
    carpool_retention: 0.5,
    electricity_per_unit: 0.42,
    ac_add_on_units: AcAddOns {
        never: 0.0,
        occasional: 50.0,
        daily: 150.0,
    },
    renewable_retention: 0.3,
    meat_per_meal: 2.4,
    dairy_per_liter: 1.9,
    local_food_retention: 0.88,
    waste_per_kg: 0.7,
    recycling_retention: 0.3,
    water_per_liter: 0.0003,
    clothing_per_item: 20.0,
    delivery_per_order: 1.5,
};

impl Default for EmissionFactorTable {
    fn default() -> Self {
        STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_emission_modes() {
        assert_eq!(STANDARD.transport.for_mode(TransportMode::Bicycle), 0.0);
        assert_eq!(STANDARD.transport.for_mode(TransportMode::Walk), 0.0);
        assert!(STANDARD.transport.for_mode(TransportMode::Car) > 0.0);
    }

    #[test]
    fn test_ac_add_ons_increase_with_usage() {
        let add_ons = STANDARD.ac_add_on_units;
        assert_eq!(add_ons.for_usage(AcUsage::Never), 0.0);
        assert!(add_ons.for_usage(AcUsage::Occasional) < add_ons.for_usage(AcUsage::Daily));
    }

    #[test]
    fn test_retention_fractions_are_fractions() {
        for retention in [
            STANDARD.carpool_retention,
            STANDARD.renewable_retention,
            STANDARD.local_food_retention,
            STANDARD.recycling_retention,
        ] {
            assert!(retention > 0.0 && retention <= 1.0);
        }
    }
}
