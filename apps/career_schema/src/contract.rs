//! Output contracts: the root records returned by each LLM exchange.
//!
//! | Exchange | Contract                     |
//! |----------|------------------------------|
//! | 1        | `CareerRecommendationsOutput` |
//! | 2        | `CareerQuantitativeOutput`    |
//! | 3        | `CareerQualitativeOutput` (canonical), `CareerQualitativeOutputV1` |

use std::str::FromStr;

use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::ValidationOptions;
use crate::error::{PayloadError, SchemaValidationError};
use crate::schemas::{
    CareerQualitativeOutput, CareerQualitativeOutputV1, CareerQuantitativeOutput,
    CareerRecommendationsOutput,
};
use crate::validate::{closed_set, validate_root, ClosedSet, Validate};

/// A root record that crosses the boundary with the external LLM caller.
pub trait OutputContract: Validate + Serialize + JsonSchema {
    const NAME: &'static str;
    const KIND: ContractKind;

    /// Validates against the base contract.
    fn validate(value: &Value) -> Result<Self, SchemaValidationError> {
        Self::validate_with(value, &ValidationOptions::default())
    }

    fn validate_with(value: &Value, options: &ValidationOptions) -> Result<Self, SchemaValidationError> {
        validate_root(Self::NAME, value, options)
    }

    /// Decodes model-generated text (code fences and invocation envelopes
    /// included) and validates it.
    fn from_json_str(text: &str) -> Result<Self, PayloadError> {
        crate::payload::parse_payload(text, &ValidationOptions::default())
    }

    /// JSON Schema document describing the contract, for structured-output prompting.
    fn root_schema() -> RootSchema {
        schemars::schema_for!(Self)
    }
}

/// Backs the `Deserialize` impl of every root type, so serde can never produce
/// an unvalidated record.
pub(crate) fn deserialize_contract<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: OutputContract,
{
    let value = Value::deserialize(deserializer)?;
    T::validate(&value).map_err(serde::de::Error::custom)
}

closed_set! {
    /// The contracts known to this crate, by wire name.
    pub enum ContractKind {
        Recommendations => "career_recommendations",
        Quantitative => "career_quantitative",
        Qualitative => "career_qualitative",
        QualitativeV1 => "career_qualitative_v1",
    }
}

#[derive(Debug, Error)]
#[error("Unknown contract '{0}'")]
pub struct UnknownContract(pub String);

impl FromStr for ContractKind {
    type Err = UnknownContract;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractKind::parse(s).ok_or_else(|| UnknownContract(s.to_string()))
    }
}

impl ContractKind {
    /// Position of the LLM call in the pipeline.
    pub fn exchange(&self) -> u8 {
        match self {
            ContractKind::Recommendations => 1,
            ContractKind::Quantitative => 2,
            ContractKind::Qualitative | ContractKind::QualitativeV1 => 3,
        }
    }

    pub fn root_schema(&self) -> RootSchema {
        match self {
            ContractKind::Recommendations => CareerRecommendationsOutput::root_schema(),
            ContractKind::Quantitative => CareerQuantitativeOutput::root_schema(),
            ContractKind::Qualitative => CareerQualitativeOutput::root_schema(),
            ContractKind::QualitativeV1 => CareerQualitativeOutputV1::root_schema(),
        }
    }

    pub fn validate(
        &self,
        value: &Value,
        options: &ValidationOptions,
    ) -> Result<ContractOutput, SchemaValidationError> {
        Ok(match self {
            ContractKind::Recommendations => {
                ContractOutput::Recommendations(CareerRecommendationsOutput::validate_with(value, options)?)
            }
            ContractKind::Quantitative => {
                ContractOutput::Quantitative(CareerQuantitativeOutput::validate_with(value, options)?)
            }
            ContractKind::Qualitative => {
                ContractOutput::Qualitative(CareerQualitativeOutput::validate_with(value, options)?)
            }
            ContractKind::QualitativeV1 => {
                ContractOutput::QualitativeV1(CareerQualitativeOutputV1::validate_with(value, options)?)
            }
        })
    }
}

/// Any validated root record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContractOutput {
    Recommendations(CareerRecommendationsOutput),
    Quantitative(CareerQuantitativeOutput),
    Qualitative(CareerQualitativeOutput),
    QualitativeV1(CareerQualitativeOutputV1),
}

impl ContractOutput {
    pub fn kind(&self) -> ContractKind {
        match self {
            ContractOutput::Recommendations(_) => ContractKind::Recommendations,
            ContractOutput::Quantitative(_) => ContractKind::Quantitative,
            ContractOutput::Qualitative(_) => ContractKind::Qualitative,
            ContractOutput::QualitativeV1(_) => ContractKind::QualitativeV1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use crate::schemas::fixtures;
    use serde_json::json;

    fn fixture(kind: ContractKind) -> Value {
        match kind {
            ContractKind::Recommendations => fixtures::recommendations(),
            ContractKind::Quantitative => fixtures::quantitative(),
            ContractKind::Qualitative => fixtures::qualitative(),
            ContractKind::QualitativeV1 => fixtures::qualitative_v1(),
        }
    }

    fn round_trip<T: OutputContract + PartialEq + std::fmt::Debug>(value: &Value) {
        let first = T::validate(value).unwrap();
        let reserialized = serde_json::to_value(&first).unwrap();
        let second = T::validate(&reserialized).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_is_stable_for_every_contract() {
        round_trip::<CareerRecommendationsOutput>(&fixtures::recommendations());
        round_trip::<CareerQuantitativeOutput>(&fixtures::quantitative());
        round_trip::<CareerQualitativeOutput>(&fixtures::qualitative());
        round_trip::<CareerQualitativeOutputV1>(&fixtures::qualitative_v1());
    }

    #[test]
    fn test_round_trip_with_absent_optionals() {
        let mut v = fixtures::qualitative();
        v["career_pathway"]
            .as_object_mut()
            .unwrap()
            .remove("user_current_state");
        round_trip::<CareerQualitativeOutput>(&v);

        let mut v = fixtures::quantitative();
        v["salary_progression"]
            .as_object_mut()
            .unwrap()
            .remove("executive");
        round_trip::<CareerQuantitativeOutput>(&v);
    }

    #[test]
    fn test_names_match_kinds() {
        assert_eq!(CareerRecommendationsOutput::NAME, CareerRecommendationsOutput::KIND.as_str());
        assert_eq!(CareerQuantitativeOutput::NAME, CareerQuantitativeOutput::KIND.as_str());
        assert_eq!(CareerQualitativeOutput::NAME, CareerQualitativeOutput::KIND.as_str());
        assert_eq!(CareerQualitativeOutputV1::NAME, CareerQualitativeOutputV1::KIND.as_str());
    }

    #[test]
    fn test_kind_dispatch_validates_each_fixture() {
        for kind in ContractKind::MEMBERS {
            let out = kind.validate(&fixture(*kind), &ValidationOptions::strict()).unwrap();
            assert_eq!(out.kind(), *kind);
            let serialized = serde_json::to_value(&out).unwrap();
            assert_eq!(serialized, serde_json::to_value(kind.validate(&serialized, &Default::default()).unwrap()).unwrap());
        }
    }

    #[test]
    fn test_kind_rejects_other_contracts_payload() {
        let err = ContractKind::Quantitative
            .validate(&fixtures::recommendations(), &ValidationOptions::default())
            .unwrap_err();
        assert_eq!(err.schema, "career_quantitative");
        assert!(err.has("career_title", ViolationKind::MissingRequired));
        assert!(err.has("demand_forecast", ViolationKind::MissingRequired));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "career_qualitative_v1".parse::<ContractKind>().unwrap(),
            ContractKind::QualitativeV1
        );
        assert_eq!(ContractKind::Qualitative.exchange(), 3);
        assert_eq!(ContractKind::Recommendations.exchange(), 1);
        let err = "career_pathway".parse::<ContractKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown contract 'career_pathway'");
    }

    #[test]
    fn test_serde_deserialize_goes_through_validation() {
        let text = fixtures::quantitative().to_string();
        let out: CareerQuantitativeOutput = serde_json::from_str(&text).unwrap();
        assert_eq!(out.career_title, "Film and Video Editor");

        let mut bad = fixtures::quantitative();
        bad["demand_forecast"]["current_demand"] = json!(9);
        let err = serde_json::from_str::<CareerQuantitativeOutput>(&bad.to_string()).unwrap_err();
        assert!(err.to_string().contains("demand_forecast.current_demand"));
    }

    #[test]
    fn test_parallel_validation_shares_nothing() {
        let payloads: Vec<(ContractKind, Value)> = ContractKind::MEMBERS
            .iter()
            .map(|k| (*k, fixture(*k)))
            .collect();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let (kind, value) = &payloads[i % payloads.len()];
                    scope.spawn(move || kind.validate(value, &ValidationOptions::default()))
                })
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });
    }

    #[test]
    fn test_json_schema_carries_bounds_and_members() {
        let schema = serde_json::to_value(CareerRecommendationsOutput::root_schema()).unwrap();
        let strength = &schema["definitions"]["RiasecType"]["properties"]["strength"];
        assert_eq!(strength["minimum"], json!(1.0));
        assert_eq!(strength["maximum"], json!(5.0));
        let codes = schema["definitions"]["RiasecCode"]["enum"].as_array().unwrap();
        assert_eq!(codes.len(), 6);

        let schema = serde_json::to_value(ContractKind::Quantitative.root_schema()).unwrap();
        assert!(schema["definitions"]["Outlook"]["enum"]
            .as_array()
            .unwrap()
            .contains(&json!("High Growth")));
    }

    #[test]
    fn test_json_schema_marks_optionals_not_required() {
        let schema = serde_json::to_value(CareerQualitativeOutput::root_schema()).unwrap();
        let required = schema["definitions"]["CareerPathway"]["required"]
            .as_array()
            .unwrap();
        assert!(required.contains(&json!("roadmap")));
        assert!(!required.contains(&json!("user_current_state")));

        let importance = &schema["definitions"]["KnowledgeItem"]["properties"]["importance"];
        assert_eq!(importance["maximum"], json!(5.0));

        let v1 = serde_json::to_value(CareerQualitativeOutputV1::root_schema()).unwrap();
        let required = v1["definitions"]["CareerPathway"]["required"].as_array().unwrap();
        assert!(required.contains(&json!("userCurrentState")));
    }

    /// `Owner.field` for every object property in the schema without a description.
    fn undescribed_properties(schema: &Value) -> Vec<String> {
        let mut objects = vec![("<root>".to_string(), schema)];
        if let Some(definitions) = schema["definitions"].as_object() {
            objects.extend(definitions.iter().map(|(name, def)| (name.clone(), def)));
        }
        let mut missing = Vec::new();
        for (owner, object) in objects {
            let Some(properties) = object["properties"].as_object() else {
                continue;
            };
            for (field, property) in properties {
                let described = property["description"]
                    .as_str()
                    .is_some_and(|text| !text.is_empty());
                if !described {
                    missing.push(format!("{owner}.{field}"));
                }
            }
        }
        missing
    }

    #[test]
    fn test_json_schema_describes_every_field() {
        for kind in [
            ContractKind::Recommendations,
            ContractKind::Quantitative,
            ContractKind::Qualitative,
        ] {
            let schema = serde_json::to_value(kind.root_schema()).unwrap();
            assert_eq!(undescribed_properties(&schema), Vec::<String>::new(), "{kind}");
        }

        let schema = serde_json::to_value(CareerQualitativeOutput::root_schema()).unwrap();
        let readiness = &schema["definitions"]["CurrentState"]["properties"]["readiness_score"];
        assert_eq!(
            readiness["description"],
            json!("1-5 readiness scale; default to 3 if no user data.")
        );
        let education = &schema["definitions"]["Resources"]["properties"]["education"];
        assert!(education["description"]
            .as_str()
            .unwrap()
            .contains("inferred from KNOWLEDGE and SKILLS"));
    }
}
