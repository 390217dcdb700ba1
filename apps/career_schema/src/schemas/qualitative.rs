//! Output contract for LLM call #3: qualitative career data and a personalised
//! pathway, with a structured extraction of the O*NET sections given as input.
//!
//! This is the canonical (revised) form. Compared with the earlier contract in
//! `qualitative_v1` it adds `onet_data`, technology skills and tools under
//! `resources`, makes `career_pathway.user_current_state` optional and makes
//! `alternative_careers[].onet_code` optional.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::contract::{deserialize_contract, ContractKind, OutputContract};
use crate::validate::{closed_set, FieldPath, Fields, Validate, Validator};

/// O*NET importance scale.
pub const IMPORTANCE_RANGE: (f64, f64) = (1.0, 5.0);
/// O*NET level scale.
pub const LEVEL_RANGE: (f64, f64) = (0.0, 7.0);

closed_set! {
    pub enum Sentiment {
        Positive => "positive",
        Neutral => "neutral",
        Negative => "negative",
    }
}

closed_set! {
    pub enum Priority {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

closed_set! {
    pub enum EducationType {
        Degree => "degree",
        Bootcamp => "bootcamp",
        OnlineCourse => "online-course",
        Certification => "certification",
    }
}

closed_set! {
    pub enum Difficulty {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

closed_set! {
    pub enum NetworkingType {
        ProfessionalOrg => "professional-org",
        Conference => "conference",
        OnlineCommunity => "online-community",
    }
}

closed_set! {
    /// Ease of moving over from the main career.
    pub enum TransitionDifficulty {
        Easy => "easy",
        Moderate => "moderate",
        Difficult => "difficult",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// O*NET extraction
// ────────────────────────────────────────────────────────────────────────────

/// One entry of the TASKS section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Task {
    /// Task description from the TASKS section.
    pub description: String,
}

impl Validate for Task {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let description = f.string("description");
            Some(Self {
                description: description?,
            })
        })
    }
}

/// A KNOWLEDGE area with its O*NET ratings.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct KnowledgeItem {
    /// Knowledge area name.
    pub name: String,
    /// Importance rating (1-5).
    #[schemars(range(min = 1.0, max = 5.0))]
    pub importance: f64,
    /// Level rating (0-7).
    #[schemars(range(min = 0.0, max = 7.0))]
    pub level: f64,
}

impl Validate for KnowledgeItem {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let (name, importance, level) = rated_item(f);
            Some(Self {
                name: name?,
                importance: importance?,
                level: level?,
            })
        })
    }
}

/// A SKILLS entry with its O*NET ratings.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SkillItem {
    /// Skill name.
    pub name: String,
    /// Importance rating (1-5).
    #[schemars(range(min = 1.0, max = 5.0))]
    pub importance: f64,
    /// Level rating (0-7).
    #[schemars(range(min = 0.0, max = 7.0))]
    pub level: f64,
}

impl Validate for SkillItem {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let (name, importance, level) = rated_item(f);
            Some(Self {
                name: name?,
                importance: importance?,
                level: level?,
            })
        })
    }
}

fn rated_item(f: &mut Fields<'_, '_, '_>) -> (Option<String>, Option<f64>, Option<f64>) {
    let name = f.string("name");
    let importance = f.number_in("importance", IMPORTANCE_RANGE.0, IMPORTANCE_RANGE.1);
    let level = f.number_in("level", LEVEL_RANGE.0, LEVEL_RANGE.1);
    (name, importance, level)
}

/// A WORK CONTEXT attribute, e.g. "Contact With Others" → "Constant contact with others".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WorkContextItem {
    /// Work context key, e.g. 'Contact With Others'.
    pub key: String,
    /// Corresponding value, e.g. 'Constant contact with others'.
    pub value: String,
}

impl Validate for WorkContextItem {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let key = f.string("key");
            let value = f.string("value");
            Some(Self {
                key: key?,
                value: value?,
            })
        })
    }
}

/// RIASEC interest labels in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Interests {
    /// Primary RIASEC interest.
    pub primary: String,
    /// Secondary RIASEC interest.
    pub secondary: Option<String>,
    /// Tertiary RIASEC interest.
    pub tertiary: Option<String>,
}

impl Validate for Interests {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let primary = f.string("primary");
            let secondary = f.optional("secondary");
            let tertiary = f.optional("tertiary");
            Some(Self {
                primary: primary?,
                secondary: secondary?,
                tertiary: tertiary?,
            })
        })
    }
}

/// Structured extraction of the O*NET source sections.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OnetData {
    /// Full DESCRIPTION text.
    pub description: String,
    /// List of tasks.
    pub tasks: Vec<Task>,
    /// Structured knowledge areas.
    pub knowledge: Vec<KnowledgeItem>,
    /// Structured skills.
    pub skills: Vec<SkillItem>,
    /// Key-value pairs from WORK CONTEXT.
    pub work_context: Vec<WorkContextItem>,
    /// RIASEC interests.
    pub interests: Interests,
    /// List of related occupation titles.
    pub related_occupations: Vec<String>,
}

impl Validate for OnetData {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let description = f.string("description");
            let tasks = f.list("tasks");
            let knowledge = f.list("knowledge");
            let skills = f.list("skills");
            let work_context = f.list("work_context");
            let interests = f.record("interests");
            let related_occupations = f.list("related_occupations");
            Some(Self {
                description: description?,
                tasks: tasks?,
                knowledge: knowledge?,
                skills: skills?,
                work_context: work_context?,
                interests: interests?,
                related_occupations: related_occupations?,
            })
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WorkerTestimonial {
    /// A direct or synthesized quote from a worker in this field.
    pub quote: String,
    /// Overall sentiment of the testimonial.
    pub sentiment: Sentiment,
    /// Key theme, e.g. 'work-life balance', 'creative fulfillment'.
    pub theme: String,
}

impl Validate for WorkerTestimonial {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let quote = f.string("quote");
            let sentiment = f.enumerated("sentiment");
            let theme = f.string("theme");
            Some(Self {
                quote: quote?,
                sentiment: sentiment?,
                theme: theme?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WorkExperience {
    /// Description of a typical day, inferred from TASKS and DESCRIPTION.
    pub typical_day: String,
    /// Overview of the work setting, drawn from WORK CONTEXT.
    pub work_environment: String,
    /// Potential challenges, inferred from TASKS and WORK CONTEXT.
    pub challenges: Vec<String>,
    /// Potential rewards, inferred from DESCRIPTION and INTERESTS.
    pub rewards: Vec<String>,
    /// Generated or sourced testimonials based on the occupation.
    pub testimonials: Vec<WorkerTestimonial>,
}

impl Validate for WorkExperience {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let typical_day = f.string("typical_day");
            let work_environment = f.string("work_environment");
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

// ────────────────────────────────────────────────────────────────────────────
// Pathway
// ────────────────────────────────────────────────────────────────────────────

/// Where the user stands today. Only present when user-specific input was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CurrentState {
    /// User's relevant experiences; empty if no user data provided.
    pub relevant_experience: Vec<String>,
    /// Identified gaps based on SKILLS and KNOWLEDGE; general if no user data.
    pub skill_gaps: Vec<String>,
    /// User's strengths aligning with the occupation; general if no user data.
    pub strengths: Vec<String>,
    /// 1-5 readiness scale; default to 3 if no user data.
    #[schemars(range(min = 1, max = 5))]
    pub readiness_score: u8,
}

impl Validate for CurrentState {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let relevant_experience = f.list("relevant_experience");
            let skill_gaps = f.list("skill_gaps");
            let strengths = f.list("strengths");
            let readiness_score = f.rating("readiness_score");
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
pub struct PathwayStep {
    /// Sequential step number.
    pub step: i64,
    /// Short title for the step.
    pub title: String,
    /// Detailed action or milestone.
    pub description: String,
    /// Estimated timeframe, e.g. '3-6 months'.
    pub timeframe: String,
    /// Priority level.
    pub priority: Priority,
    /// Recommended resources for this step.
    pub resources: Vec<String>,
}

impl Validate for PathwayStep {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let step = f.integer("step");
            let title = f.string("title");
            let description = f.string("description");
            let timeframe = f.string("timeframe");
            let priority = f.enumerated("priority");
            let resources = f.list("resources");
            Some(Self {
                step: step?,
                title: title?,
                description: description?,
                timeframe: timeframe?,
                priority: priority?,
                resources: resources?,
            })
        })
    }
}

/// Roadmap checks shared by both qualitative contracts.
pub(crate) fn check_roadmap(f: &mut Fields<'_, '_, '_>, key: &str, roadmap: Option<&[PathwayStep]>) {
    f.non_empty(key, roadmap);
    if let Some(steps) = roadmap {
        if f.options().enforce_step_sequence {
            let numbers: Vec<i64> = steps.iter().map(|s| s.step).collect();
            f.strictly_increasing(key, "step", &numbers, Some(1));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CareerPathway {
    /// Optional; omit if no user-specific input.
    pub user_current_state: Option<CurrentState>,
    /// Step-by-step career roadmap, generated from the O*NET data.
    pub roadmap: Vec<PathwayStep>,
    /// Overall estimated timeline to enter or advance in the career.
    pub timeline: String,
}

impl Validate for CareerPathway {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let user_current_state = f.optional("user_current_state");
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

// ────────────────────────────────────────────────────────────────────────────
// Resources
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EducationResource {
    /// Type of educational resource.
    #[serde(rename = "type")]
    pub kind: EducationType,
    /// Name of the program or course.
    pub name: String,
    /// Provider or institution.
    pub provider: String,
    /// Estimated duration.
    pub duration: String,
    /// Cost range, e.g. 'Free', '$1,000-5,000'.
    pub cost: String,
    /// Relevance to the occupation on a 1-5 scale.
    #[schemars(range(min = 1, max = 5))]
    pub relevance: u8,
}

impl Validate for EducationResource {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let kind = f.enumerated("type");
            let name = f.string("name");
            let provider = f.string("provider");
            let duration = f.string("duration");
            let cost = f.string("cost");
            let relevance = f.rating("relevance");
            Some(Self {
                kind: kind?,
                name: name?,
                provider: provider?,
                duration: duration?,
                cost: cost?,
                relevance: relevance?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CertificationResource {
    /// Certification name.
    pub name: String,
    /// Issuing organization.
    pub provider: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Time to complete.
    pub time_to_complete: String,
    /// Recognition level on a 1-5 scale.
    #[schemars(range(min = 1, max = 5))]
    pub industry_recognition: u8,
}

impl Validate for CertificationResource {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let name = f.string("name");
            let provider = f.string("provider");
            let difficulty = f.enumerated("difficulty");
            let time_to_complete = f.string("time_to_complete");
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
pub struct NetworkingResource {
    /// Type of networking resource.
    #[serde(rename = "type")]
    pub kind: NetworkingType,
    /// Name of the group, event or community.
    pub name: String,
    /// Brief description.
    pub description: String,
    /// Associated cost, if any.
    pub cost: String,
}

impl Validate for NetworkingResource {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let kind = f.enumerated("type");
            let name = f.string("name");
            let description = f.string("description");
            let cost = f.string("cost");
            Some(Self {
                kind: kind?,
                name: name?,
                description: description?,
                cost: cost?,
            })
        })
    }
}

/// From TECHNOLOGY SKILLS & TOOLS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TechSkill {
    /// Name of the technology skill or software.
    pub name: String,
    /// Category, e.g. 'Video creation and editing software'.
    pub tech_type: String,
}

impl Validate for TechSkill {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let name = f.string("name");
            let tech_type = f.string("tech_type");
            Some(Self {
                name: name?,
                tech_type: tech_type?,
            })
        })
    }
}

/// From TOOLS USED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ToolUsed {
    /// Name of the tool.
    pub name: String,
    /// Category, e.g. 'Digital cameras'.
    pub tool_type: String,
}

impl Validate for ToolUsed {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let name = f.string("name");
            let tool_type = f.string("tool_type");
            Some(Self {
                name: name?,
                tool_type: tool_type?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Resources {
    /// Recommended education paths, inferred from KNOWLEDGE and SKILLS.
    pub education: Vec<EducationResource>,
    /// Relevant certifications.
    pub certifications: Vec<CertificationResource>,
    /// Networking opportunities.
    pub networking: Vec<NetworkingResource>,
    /// Recommended job boards or sites.
    pub job_boards: Vec<String>,
    /// Extracted from TECHNOLOGY SKILLS & TOOLS.
    pub technology_skills: Vec<TechSkill>,
    /// Extracted from TOOLS USED.
    pub tools_used: Vec<ToolUsed>,
}

impl Validate for Resources {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let education = f.list("education");
            let certifications = f.list("certifications");
            let networking = f.list("networking");
            let job_boards = f.list("job_boards");
            let technology_skills = f.list("technology_skills");
            let tools_used = f.list("tools_used");
            Some(Self {
                education: education?,
                certifications: certifications?,
                networking: networking?,
                job_boards: job_boards?,
                technology_skills: technology_skills?,
                tools_used: tools_used?,
            })
        })
    }
}

/// A related occupation worth considering instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AlternativeCareer {
    /// Career title from RELATED OCCUPATIONS.
    pub title: String,
    /// O*NET-SOC code if available.
    pub onet_code: Option<String>,
    /// Reason for similarity, e.g. 'Shared artistic interests'.
    pub similarity_reason: String,
    /// Ease of transitioning from the main career.
    pub transition_difficulty: TransitionDifficulty,
}

impl Validate for AlternativeCareer {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let title = f.string("title");
            let onet_code = f.optional_onet_code("onet_code");
            let similarity_reason = f.string("similarity_reason");
            let transition_difficulty = f.enumerated("transition_difficulty");
            Some(Self {
                title: title?,
                onet_code: onet_code?,
                similarity_reason: similarity_reason?,
                transition_difficulty: transition_difficulty?,
            })
        })
    }
}

/// Root output of the qualitative call.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CareerQualitativeOutput {
    /// Job title from the input.
    pub career_title: String,
    /// O*NET-SOC code.
    pub onet_code: String,
    /// Comprehensive overview based on all O*NET sections.
    pub summary: String,
    /// Structured extraction of the O*NET data in the input.
    pub onet_data: OnetData,
    /// Qualitative work experience insights.
    pub work_experience: WorkExperience,
    /// Generated career pathway.
    pub career_pathway: CareerPathway,
    /// Resources, including O*NET technology skills and tools.
    pub resources: Resources,
    /// Alternatives based on RELATED OCCUPATIONS.
    pub alternative_careers: Vec<AlternativeCareer>,
}

impl Validate for CareerQualitativeOutput {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let career_title = f.string("career_title");
            let onet_code = f.onet_code("onet_code");
            let summary = f.string("summary");
            let onet_data = f.record("onet_data");
            let work_experience = f.record("work_experience");
            let career_pathway = f.record("career_pathway");
            let resources = f.record("resources");
            let alternative_careers = f.list("alternative_careers");
            Some(Self {
                career_title: career_title?,
                onet_code: onet_code?,
                summary: summary?,
                onet_data: onet_data?,
                work_experience: work_experience?,
                career_pathway: career_pathway?,
                resources: resources?,
                alternative_careers: alternative_careers?,
            })
        })
    }
}

impl OutputContract for CareerQualitativeOutput {
    const NAME: &'static str = "career_qualitative";
    const KIND: ContractKind = ContractKind::Qualitative;
}

impl<'de> Deserialize<'de> for CareerQualitativeOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_contract(deserializer)
    }
}
