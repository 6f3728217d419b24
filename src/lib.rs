//! Footprint - monthly carbon footprint estimation from a lifestyle survey.
//!
//! # Overview
//!
//! A caller supplies one [`model::InputProfile`] (travel, home energy, diet,
//! waste and water, lifestyle answers). The calculator turns it into a
//! monthly total in kg CO₂e with a per-category breakdown; the total is then
//! compared against fixed benchmarks, and mitigation actions are selected and
//! ranked from the breakdown and the profile.
//!
//! The core is pure, synchronous and deterministic. The only fallible path is
//! the optional delegation of the calculation to a remote service.
//!
//! # Modules
//!
//! - [`model`]: Survey profile, emission categories, calculation results
//! - [`factors`]: Emission factor tables
//! - [`calculator`]: Footprint calculation and input clamping
//! - [`benchmark`]: Benchmark comparison, average summary and rating
//! - [`recommendation`]: Recommendation rules and priority selection
//! - [`report`]: Presentation-rounded report assembly
//! - [`remote`]: Client for a delegated calculation service
//! - [`error`]: Remote calculation errors
//! - [`api`]: HTTP API handlers

pub mod api;
pub mod benchmark;
pub mod calculator;
pub mod error;
pub mod factors;
pub mod model;
pub mod recommendation;
pub mod remote;
pub mod report;
