//! Output contract for LLM call #2: labor-market numbers for one selected career.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::contract::{deserialize_contract, ContractKind, OutputContract};
use crate::error::ViolationKind;
use crate::validate::{closed_set, FieldPath, Validate, Validator};

closed_set! {
    pub enum Outlook {
        Declining => "Declining",
        Stable => "Stable",
        Growing => "Growing",
        HighGrowth => "High Growth",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ForecastPoint {
    /// Calendar year of the projection.
    pub year: i64,
    /// Projected demand, 1-5.
    #[schemars(range(min = 1, max = 5))]
    pub demand_level: u8,
    /// Confidence in the projection, 1-5.
    #[schemars(range(min = 1, max = 5))]
    pub confidence: u8,
}

impl Validate for ForecastPoint {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let year = f.integer("year");
            let demand_level = f.rating("demand_level");
            let confidence = f.rating("confidence");
            Some(Self {
                year: year?,
                demand_level: demand_level?,
                confidence: confidence?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DemandForecast {
    /// Demand today, 1-5.
    #[schemars(range(min = 1, max = 5))]
    pub current_demand: u8,
    /// Forecast points, chronological by convention.
    pub projected_growth: Vec<ForecastPoint>,
    /// Overall direction of demand.
    pub outlook: Outlook,
    /// Why this forecast.
    pub reasoning: String,
}

impl Validate for DemandForecast {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let current_demand = f.rating("current_demand");
            let projected_growth: Option<Vec<ForecastPoint>> = f.list("projected_growth");
            let outlook = f.enumerated("outlook");
            let reasoning = f.string("reasoning");

            if let Some(points) = &projected_growth {
                if f.options().enforce_forecast_chronology {
                    let years: Vec<i64> = points.iter().map(|p| p.year).collect();
                    f.strictly_increasing("projected_growth", "year", &years, None);
                }
            }

            Some(Self {
                current_demand: current_demand?,
                projected_growth: projected_growth?,
                outlook: outlook?,
                reasoning: reasoning?,
            })
        })
    }
}

/// Salary band for one experience level. `low <= median <= high` is expected
/// but only checked under `enforce_salary_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SalaryPoint {
    /// e.g. "0-2 years"
    pub experience: String,
    /// Low end of the band, USD per year.
    pub low: i64,
    /// Median, USD per year.
    pub median: i64,
    /// High end of the band, USD per year.
    pub high: i64,
}

impl Validate for SalaryPoint {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let experience = f.string("experience");
            let low = f.integer("low");
            let median = f.integer("median");
            let high = f.integer("high");

            if f.options().enforce_salary_order {
                if let (Some(low), Some(median)) = (low, median) {
                    if median < low {
                        let path = f.child("median");
                        f.report(
                            &path,
                            ViolationKind::OrderingViolated,
                            format!("at least low ({low})"),
                            Some(&Value::from(median)),
                        );
                    }
                }
                if let (Some(median), Some(high)) = (median, high) {
                    if high < median {
                        let path = f.child("high");
                        f.report(
                            &path,
                            ViolationKind::OrderingViolated,
                            format!("at least median ({median})"),
                            Some(&Value::from(high)),
                        );
                    }
                }
            }

            Some(Self {
                experience: experience?,
                low: low?,
                median: median?,
                high: high?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SalaryProgression {
    /// Entry-level band.
    pub entry: SalaryPoint,
    /// Mid-career band.
    pub mid: SalaryPoint,
    /// Senior band.
    pub senior: SalaryPoint,
    /// Absent for careers without an executive tier.
    pub executive: Option<SalaryPoint>,
}

impl Validate for SalaryProgression {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let entry = f.record("entry");
            let mid = f.record("mid");
            let senior = f.record("senior");
            let executive = f.optional("executive");
            Some(Self {
                entry: entry?,
                mid: mid?,
                senior: senior?,
                executive: executive?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GeographicSalary {
    /// US state name.
    pub state: String,
    /// Average annual salary in the state, USD.
    pub average_salary: i64,
    /// Demand in the state, 1-5.
    #[schemars(range(min = 1, max = 5))]
    pub demand_level: u8,
}

impl Validate for GeographicSalary {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let state = f.string("state");
            let average_salary = f.integer("average_salary");
            let demand_level = f.rating("demand_level");
            Some(Self {
                state: state?,
                average_salary: average_salary?,
                demand_level: demand_level?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GeographicData {
    /// Highest-ranked states first.
    pub top_states: Vec<GeographicSalary>,
    /// National average annual salary, USD.
    pub national_average: i64,
}

impl Validate for GeographicData {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let top_states = f.list("top_states");
            let national_average = f.integer("national_average");
            Some(Self {
                top_states: top_states?,
                national_average: national_average?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Education {
    /// Minimum education to enter the career.
    pub minimum_required: String,
    /// Education level employers prefer.
    pub preferred_level: String,
    /// Commonly requested certifications.
    pub certifications: Vec<String>,
}

impl Validate for Education {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let minimum_required = f.string("minimum_required");
            let preferred_level = f.string("preferred_level");
            let certifications = f.list("certifications");
            Some(Self {
                minimum_required: minimum_required?,
                preferred_level: preferred_level?,
                certifications: certifications?,
            })
        })
    }
}

/// Root output of the quantitative call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CareerQuantitativeOutput {
    /// Job title from the input.
    pub career_title: String,
    /// O*NET-SOC code.
    pub onet_code: String,
    /// Current and projected demand.
    pub demand_forecast: DemandForecast,
    /// Salary bands by experience level.
    pub salary_progression: SalaryProgression,
    /// Salary and demand by state.
    pub geographic_data: GeographicData,
    /// Education requirements.
    pub education: Education,
}

impl Validate for CareerQuantitativeOutput {
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        cx.object(value, path, |f| {
            let career_title = f.string("career_title");
            let onet_code = f.onet_code("onet_code");
            let demand_forecast = f.record("demand_forecast");
            let salary_progression = f.record("salary_progression");
            let geographic_data = f.record("geographic_data");
            let education = f.record("education");
            Some(Self {
                career_title: career_title?,
                onet_code: onet_code?,
                demand_forecast: demand_forecast?,
                salary_progression: salary_progression?,
                geographic_data: geographic_data?,
                education: education?,
            })
        })
    }
}

impl OutputContract for CareerQuantitativeOutput {
    const NAME: &'static str = "career_quantitative";
    const KIND: ContractKind = ContractKind::Quantitative;
}

impl<'de> Deserialize<'de> for CareerQuantitativeOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_contract(deserializer)
    }
}
