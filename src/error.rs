use thiserror::Error;

/// Shown when a failed valuation carries no message of its own
pub const PREDICTION_FALLBACK_MESSAGE: &str = "Could not fetch real-time data for this locality.";

/// Caller-facing failure of an oracle operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OracleError {
    #[error("{0}")]
    Prediction(String),

    #[error("Trends loading failed for {city}: {message}")]
    Trends { city: String, message: String },

    #[error("Guide loading failed for {city}: {message}")]
    Guide { city: String, message: String },
}

impl OracleError {
    pub fn prediction(upstream: impl ToString) -> Self {
        Self::Prediction(message_or(upstream, PREDICTION_FALLBACK_MESSAGE))
    }

    pub fn trends(city: &str, upstream: impl ToString) -> Self {
        Self::Trends {
            city: city.to_string(),
            message: message_or(upstream, "Unknown Error"),
        }
    }

    pub fn guide(city: &str, upstream: impl ToString) -> Self {
        Self::Guide {
            city: city.to_string(),
            message: message_or(upstream, "Unknown Error"),
        }
    }
}

fn message_or(upstream: impl ToString, fallback: &str) -> String {
    let message = upstream.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_uses_upstream_message() {
        assert_eq!(
            OracleError::prediction("API key not valid").to_string(),
            "API key not valid"
        );
        assert_eq!(
            OracleError::prediction("").to_string(),
            "Could not fetch real-time data for this locality."
        );
    }

    #[test]
    fn city_variants_name_city_and_cause() {
        assert_eq!(
            OracleError::trends("Pune", "quota exceeded").to_string(),
            "Trends loading failed for Pune: quota exceeded"
        );
        assert_eq!(
            OracleError::guide("Mumbai", "").to_string(),
            "Guide loading failed for Mumbai: Unknown Error"
        );
    }

    #[test]
    fn only_an_empty_message_is_replaced() {
        assert_eq!(OracleError::prediction(" ").to_string(), " ");
        assert_eq!(
            OracleError::trends("Pune", " ").to_string(),
            "Trends loading failed for Pune:  "
        );
    }
}
