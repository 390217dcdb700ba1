// One module per LLM exchange. The revised qualitative contract is canonical;
// `qualitative_v1` is kept as a separately named contract for older callers.

pub mod qualitative;
pub mod qualitative_v1;
pub mod quantitative;
pub mod recommendations;

#[cfg(test)]
pub(crate) mod fixtures;

pub use qualitative::CareerQualitativeOutput;
pub use qualitative_v1::CareerQualitativeOutputV1;
pub use quantitative::CareerQuantitativeOutput;
pub use recommendations::CareerRecommendationsOutput;
