//! The earlier qualitative contract, kept for callers that still target it.
//!
//! Wire names are camelCase, apart from `industry_recognition` which was
//! always snake_case on the wire. There is no O*NET extraction block, the user's
//! current state is mandatory and alternative careers always carry a code.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::qualitative::{
    check_roadmap, Difficulty, EducationResource, NetworkingResource, PathwayStep,
    TransitionDifficulty, WorkerTestimonial,
};
use crate::contract::{deserialize_contract, ContractKind, OutputContract};
use crate::validate::{FieldPath, Validate, Validator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub typical_day: String,
    pub work_environment: String,
    pub challenges: Vec<String>,
    pub rewards: Vec<String>,
    pub testimonials: Vec<WorkerTestimonial>,
}

impl Validate for WorkExperience {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let typical_day = f.string("typicalDay");
            let work_environment = f.string("workEnvironment");
            let challenges = f.list("challenges");
            let rewards = f.list("rewards");
            let testimonials = f.list("testimonials");
            Some(Self {
                typical_day: typical_day?,
                work_environment: work_environment?,
                challenges: challenges?,
                rewards: rewards?,
                testimonials: testimonials?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentState {
    pub relevant_experience: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub strengths: Vec<String>,
    #[schemars(range(min = 1, max = 5))]
    pub readiness_score: u8,
}

impl Validate for CurrentState {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let relevant_experience = f.list("relevantExperience");
            let skill_gaps = f.list("skillGaps");
            let strengths = f.list("strengths");
            let readiness_score = f.rating("readinessScore");
            Some(Self {
                relevant_experience: relevant_experience?,
                skill_gaps: skill_gaps?,
                strengths: strengths?,
                readiness_score: readiness_score?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathway {
    pub user_current_state: CurrentState,
    pub roadmap: Vec<PathwayStep>,
    pub timeline: String,
}

impl Validate for CareerPathway {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let user_current_state = f.record("userCurrentState");
            let roadmap: Option<Vec<PathwayStep>> = f.list("roadmap");
            let timeline = f.string("timeline");
            check_roadmap(f, "roadmap", roadmap.as_deref());
            Some(Self {
                user_current_state: user_current_state?,
                roadmap: roadmap?,
                timeline: timeline?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationResource {
    pub name: String,
    pub provider: String,
    pub difficulty: Difficulty,
    pub time_to_complete: String,
    #[serde(rename = "industry_recognition")]
    #[schemars(range(min = 1, max = 5))]
    pub industry_recognition: u8,
}

impl Validate for CertificationResource {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let name = f.string("name");
            let provider = f.string("provider");
            let difficulty = f.enumerated("difficulty");
            let time_to_complete = f.string("timeToComplete");
            let industry_recognition = f.rating("industry_recognition");
            Some(Self {
                name: name?,
                provider: provider?,
                difficulty: difficulty?,
                time_to_complete: time_to_complete?,
                industry_recognition: industry_recognition?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub education: Vec<EducationResource>,
    pub certifications: Vec<CertificationResource>,
    pub networking: Vec<NetworkingResource>,
    pub job_boards: Vec<String>,
}

impl Validate for Resources {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let education = f.list("education");
            let certifications = f.list("certifications");
            let networking = f.list("networking");
            let job_boards = f.list("jobBoards");
            Some(Self {
                education: education?,
                certifications: certifications?,
                networking: networking?,
                job_boards: job_boards?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeCareer {
    pub title: String,
    pub onet_code: String,
    pub similarity_reason: String,
    pub transition_difficulty: TransitionDifficulty,
}

impl Validate for AlternativeCareer {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let title = f.string("title");
            let onet_code = f.onet_code("onetCode");
            let similarity_reason = f.string("similarityReason");
            let transition_difficulty = f.enumerated("transitionDifficulty");
            Some(Self {
                title: title?,
                onet_code: onet_code?,
                similarity_reason: similarity_reason?,
                transition_difficulty: transition_difficulty?,
            })
        })
    }
}

/// Root output of the earlier qualitative call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareerQualitativeOutputV1 {
    pub career_title: String,
    pub onet_code: String,
    pub summary: String,
    pub work_experience: WorkExperience,
    pub career_pathway: CareerPathway,
    pub resources: Resources,
    pub alternative_careers: Vec<AlternativeCareer>,
}

impl Validate for CareerQualitativeOutputV1 {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let career_title = f.string("careerTitle");
            let onet_code = f.onet_code("onetCode");
            let summary = f.string("summary");
            let work_experience = f.record("workExperience");
            let career_pathway = f.record("careerPathway");
            let resources = f.record("resources");
            let alternative_careers = f.list("alternativeCareers");
            Some(Self {
                career_title: career_title?,
                onet_code: onet_code?,
                summary: summary?,
                work_experience: work_experience?,
                career_pathway: career_pathway?,
                resources: resources?,
                alternative_careers: alternative_careers?,
            })
        })
    }
}

impl OutputContract for CareerQualitativeOutputV1 {
    const NAME: &'static str = "career_qualitative_v1";
    const KIND: ContractKind = ContractKind::QualitativeV1;
}

impl<'de> Deserialize<'de> for CareerQualitativeOutputV1 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_contract(deserializer)
    }
}
