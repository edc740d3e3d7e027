use crate::error::OracleError;
use crate::gemini::{
    extract_grounding_sources, GenerateContentResponse, GenerationClient, GenerationError,
    GenerationOptions,
};
use crate::models::{CityGuide, CityTrend, PredictionResult, Query};
use crate::report::{city_guide_prompt, market_trends_prompt, parse_report, valuation_prompt};
use chrono::Utc;
use tracing::{error, info};

pub const NO_DATA_REPORT: &str = "No data returned.";
pub const TRENDS_UNAVAILABLE_REPORT: &str = "Trends report currently unavailable.";
pub const GUIDE_UNAVAILABLE_REPORT: &str = "City guide currently unavailable.";

/// Shown as the estimate when the report does not state one
pub const DEFAULT_ESTIMATED_PRICE: &str = "Market Inquiry";
pub const DEFAULT_CONFIDENCE_SCORE: u64 = 85;

/// Search-grounded market reports for valuations, city trends and guides.
///
/// Each call is one independent round-trip; nothing is shared between calls.
pub struct MarketOracle<C> {
    client: C,
    model: String,
}

impl<C: GenerationClient> MarketOracle<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, GenerationError> {
        self.client
            .generate(prompt, &self.model, GenerationOptions::default())
            .await
    }

    /// Estimate a property's value from live listings
    pub async fn predict_house_price(
        &self,
        query: &Query,
    ) -> Result<PredictionResult, OracleError> {
        info!(
            "Requesting valuation for {} {} in {}, {} via {}",
            query.bhk,
            query.property_type,
            query.locality,
            query.city,
            self.client.backend_name()
        );

        let response = self
            .generate(&valuation_prompt(query))
            .await
            .map_err(|e| {
                error!("Valuation request failed: {}", e);
                OracleError::prediction(e)
            })?;

        let report = response
            .text()
            .unwrap_or_else(|| NO_DATA_REPORT.to_string());
        let grounding_sources = extract_grounding_sources(&response);
        let parsed = parse_report(&report);

        info!(
            "Valuation ready: {} sources, {} nearby localities, {} chart points",
            grounding_sources.len(),
            parsed.nearby_localities.len(),
            parsed.chart_data.len()
        );

        Ok(PredictionResult {
            report,
            estimated_price: Some(
                parsed
                    .estimated_price
                    .unwrap_or_else(|| DEFAULT_ESTIMATED_PRICE.to_string()),
            ),
            confidence_score: Some(parsed.confidence_score.unwrap_or(DEFAULT_CONFIDENCE_SCORE)),
            grounding_sources,
            nearby_localities: parsed.nearby_localities,
            chart_data: parsed.chart_data,
            generated_at: Utc::now(),
        })
    }

    /// Current market trends report for a city
    pub async fn fetch_market_trends(&self, city: &str) -> Result<CityTrend, OracleError> {
        info!("Loading market trends for {}", city);

        let response = self
            .generate(&market_trends_prompt(city))
            .await
            .map_err(|e| {
                error!("Trends request for {} failed: {}", city, e);
                OracleError::trends(city, e)
            })?;

        Ok(CityTrend {
            city: city.to_string(),
            report: response
                .text()
                .unwrap_or_else(|| TRENDS_UNAVAILABLE_REPORT.to_string()),
            grounding_sources: extract_grounding_sources(&response),
            generated_at: Utc::now(),
        })
    }

    /// Investor guide for a city
    pub async fn fetch_city_guide(&self, city: &str) -> Result<CityGuide, OracleError> {
        info!("Loading investor guide for {}", city);

        let response = self
            .generate(&city_guide_prompt(city))
            .await
            .map_err(|e| {
                error!("Guide request for {} failed: {}", city, e);
                OracleError::guide(city, e)
            })?;

        Ok(CityGuide {
            city_name: city.to_string(),
            report: response
                .text()
                .unwrap_or_else(|| GUIDE_UNAVAILABLE_REPORT.to_string()),
            grounding_sources: extract_grounding_sources(&response),
            generated_at: Utc::now(),
        })
    }
}
