//! Search-grounded real-estate reports: prompt building, the Gemini
//! generation client, and extraction of typed fields from the returned text.

pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod oracle;
pub mod report;

pub use config::Config;
pub use error::OracleError;
pub use gemini::{GeminiClient, GenerationClient};
pub use models::{
    Bhk, ChartPoint, CityGuide, CityTrend, Condition, GroundingSource, NearbyLocality,
    PredictionResult, PropertyType, Query,
};
pub use oracle::MarketOracle;
