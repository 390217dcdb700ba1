//! Output contract for LLM call #1: career path recommendations derived from a
//! user's personality and interest profile.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::contract::{deserialize_contract, ContractKind, OutputContract};
use crate::error::ViolationKind;
use crate::validate::{closed_set, ClosedSet, FieldPath, Validate, Validator};

closed_set! {
    /// Holland RIASEC interest category.
    pub enum RiasecCode {
        Realistic => "R",
        Investigative => "I",
        Artistic => "A",
        Social => "S",
        Enterprising => "E",
        Conventional => "C",
    }
}

impl RiasecCode {
    pub fn name(&self) -> &'static str {
        match self {
            RiasecCode::Realistic => "Realistic",
            RiasecCode::Investigative => "Investigative",
            RiasecCode::Artistic => "Artistic",
            RiasecCode::Social => "Social",
            RiasecCode::Enterprising => "Enterprising",
            RiasecCode::Conventional => "Conventional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RiasecType {
    /// RIASEC letter.
    pub code: RiasecCode,
    /// Full type name, e.g. 'Artistic'.
    pub name: String,
    /// What this type means for the user.
    pub description: String,
    /// How strongly the user shows this type, 1-5.
    #[schemars(range(min = 1, max = 5))]
    pub strength: u8,
}

impl Validate for RiasecType {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let code = f.enumerated("code");
            let name = f.string("name");
            let description = f.string("description");
            let strength = f.rating("strength");
            Some(Self {
                code: code?,
                name: name?,
                description: description?,
                strength: strength?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct UserPersonality {
    /// Brief personality summary.
    pub summary: String,
    /// Dominant interest types, most relevant first.
    pub riasec_types: Vec<RiasecType>,
}

impl Validate for UserPersonality {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let summary = f.string("summary");
            let riasec_types = f.list("riasec_types");
            Some(Self {
                summary: summary?,
                riasec_types: riasec_types?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct PotentialSalary {
    /// e.g. "after 5 years"
    pub timeframe: String,
    /// Annual salary, USD by convention.
    pub amount: i64,
}

impl Validate for PotentialSalary {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let timeframe = f.string("timeframe");
            let amount = f.integer("amount");
            Some(Self {
                timeframe: timeframe?,
                amount: amount?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MatchingInterests {
    /// RIASEC letters this career matches.
    pub riasec_codes: Vec<String>,
    /// Overall interest match, 1-5.
    #[schemars(range(min = 1, max = 5))]
    pub match_strength: u8,
}

impl Validate for MatchingInterests {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let riasec_codes: Option<Vec<String>> = f.list("riasec_codes");
            let match_strength = f.rating("match_strength");

            if let Some(codes) = &riasec_codes {
                if f.options().enforce_riasec_codes {
                    for (i, code) in codes.iter().enumerate() {
                        if RiasecCode::parse(code).is_none() {
                            let path = f.child("riasec_codes").index(i);
                            f.report(
                                &path,
                                ViolationKind::NotInEnumeration,
                                RiasecCode::expected(),
                                Some(&Value::String(code.clone())),
                            );
                        }
                    }
                }
            }

            Some(Self {
                riasec_codes: riasec_codes?,
                match_strength: match_strength?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CareerPath {
    /// Stable identifier for the path.
    pub id: String,
    /// Career title.
    pub title: String,
    /// O*NET-SOC code, e.g. "27-2011.00".
    pub onet_code: String,
    /// Two or three sentences.
    pub short_description: String,
    /// Expected salary after a stated timeframe.
    pub potential_salary: PotentialSalary,
    /// Which interests this career matches and how well.
    pub matching_interests: MatchingInterests,
    /// Why this career matches the user.
    pub match_reasoning: String,
}

impl Validate for CareerPath {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let id = f.string("id");
            let title = f.string("title");
            let onet_code = f.onet_code("onet_code");
            let short_description = f.string("short_description");
            let potential_salary = f.record("potential_salary");
            let matching_interests = f.record("matching_interests");
            let match_reasoning = f.string("match_reasoning");
            Some(Self {
                id: id?,
                title: title?,
                onet_code: onet_code?,
                short_description: short_description?,
                potential_salary: potential_salary?,
                matching_interests: matching_interests?,
                match_reasoning: match_reasoning?,
            })
        })
    }
}

/// Root output of the recommendations call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CareerRecommendationsOutput {
    /// Personality profile derived from the assessment.
    pub user_personality: UserPersonality,
    /// Recommended careers, best match first.
    pub career_paths: Vec<CareerPath>,
}

impl Validate for CareerRecommendationsOutput {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let user_personality = f.record("user_personality");
            let career_paths: Option<Vec<CareerPath>> = f.list("career_paths");
            f.non_empty("career_paths", career_paths.as_deref());
            Some(Self {
                user_personality: user_personality?,
                career_paths: career_paths?,
            })
        })
    }
}

impl OutputContract for CareerRecommendationsOutput {
    const NAME: &'static str = "career_recommendations";
    const KIND: ContractKind = ContractKind::Recommendations;
}

impl<'de> Deserialize<'de> for CareerRecommendationsOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_contract(deserializer)
    }
}
