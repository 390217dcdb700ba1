#![cfg_attr(test, recursion_limit = "256")]
//! Output contracts for the three LLM calls of the career-guidance pipeline.
//!
//! 1. `CareerRecommendationsOutput`: personality profile and ranked careers.
//! 2. `CareerQuantitativeOutput`: demand forecast, salaries, geography, education.
//! 3. `CareerQualitativeOutput`: O*NET data, lived experience, roadmap, resources.
//!    `CareerQualitativeOutputV1` keeps the earlier camelCase shape.
//!
//! Every contract validates an untyped `serde_json::Value` and reports *all*
//! violations with their dotted field paths, or yields a typed record that
//! serializes back to the same wire names.

pub mod config;
pub mod contract;
pub mod error;
pub mod payload;
pub mod schemas;
pub mod telemetry;
pub mod validate;

pub use config::{Config, ValidationOptions};
pub use contract::{ContractKind, ContractOutput, OutputContract};
pub use error::{PayloadError, SchemaValidationError, Violation, ViolationKind};
pub use schemas::{
    CareerQualitativeOutput, CareerQualitativeOutputV1, CareerQuantitativeOutput,
    CareerRecommendationsOutput,
};
