//! Extraction of structured fields from a free-text valuation report.
//!
//! The model is asked to follow a line-oriented micro-format but compliance is
//! never guaranteed, so nothing here fails: missing or malformed markers leave
//! the field empty and a short chart series is replaced by [`fallback_chart_series`].

use crate::models::{ChartPoint, NearbyLocality};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Fewer parsed chart points than this and the fallback series is used
pub const MIN_CHART_POINTS: usize = 3;

lazy_static! {
    /// First `ESTIMATED VALUE:` anywhere in the text, rest of that line
    static ref ESTIMATED_VALUE: Regex =
        Regex::new(r"(?i)ESTIMATED VALUE:\s*([^\n\r]+)").unwrap();

    /// `CONFIDENCE SCORE: 90%`
    static ref CONFIDENCE_SCORE: Regex =
        Regex::new(r"(?i)CONFIDENCE SCORE:\s*([0-9]+)%").unwrap();

    /// `NEARBY: <name>, PRICE: <price>` on one line
    static ref NEARBY: Regex =
        Regex::new(r"(?i)NEARBY:\s*(.*?),\s*PRICE:\s*(.*)").unwrap();

    /// `CHART: <label>, VALUE: <number>` on one line
    static ref CHART: Regex =
        Regex::new(r"(?i)CHART:\s*(.*?),\s*VALUE:\s*([0-9,.]+)").unwrap();
}

/// Fields recovered from one report
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub estimated_price: Option<String>,
    pub confidence_score: Option<u64>,
    pub nearby_localities: Vec<NearbyLocality>,
    /// Always at least [`MIN_CHART_POINTS`] long
    pub chart_data: Vec<ChartPoint>,
}

/// Built-in series shown when the report carries too few chart points
pub fn fallback_chart_series() -> Vec<ChartPoint> {
    [
        ("Q1 24", 4500.0),
        ("Q2 24", 4800.0),
        ("Q3 24", 5200.0),
        ("Q4 24", 5800.0),
        ("Live 25", 6200.0),
    ]
    .into_iter()
    .map(|(label, value)| ChartPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}

/// Parse a report. Pure; safe to call from any number of tasks at once.
pub fn parse_report(text: &str) -> ParsedReport {
    let estimated_price = ESTIMATED_VALUE
        .captures(text)
        .map(|caps| caps[1].trim().to_string());

    // Digit runs too long for u64 are treated as absent; no range check otherwise.
    let confidence_score = CONFIDENCE_SCORE
        .captures(text)
        .and_then(|caps| caps[1].parse::<u64>().ok());

    let mut nearby_localities = Vec::new();
    let mut chart_data = Vec::new();

    for line in text.split('\n') {
        if let Some(caps) = NEARBY.captures(line) {
            nearby_localities.push(NearbyLocality {
                name: caps[1].trim().to_string(),
                price: caps[2].trim().to_string(),
            });
        }

        if let Some(caps) = CHART.captures(line) {
            if let Some(value) = parse_chart_value(&caps[2]) {
                chart_data.push(ChartPoint {
                    label: caps[1].trim().to_string(),
                    value,
                });
            }
        }
    }

    if chart_data.len() < MIN_CHART_POINTS {
        debug!(
            "Report had {} chart points, using fallback series",
            chart_data.len()
        );
        chart_data = fallback_chart_series();
    }

    ParsedReport {
        estimated_price,
        confidence_score,
        nearby_localities,
        chart_data,
    }
}

/// Numeric chart token with thousands separators. Reads the longest
/// `digits[.digits]` prefix, so `1.2.3` is 1.2 and `.` alone is rejected.
fn parse_chart_value(token: &str) -> Option<f64> {
    let cleaned: String = token.chars().filter(|c| *c != ',').collect();

    let end = match cleaned.find('.') {
        Some(first) => cleaned[first + 1..]
            .find('.')
            .map_or(cleaned.len(), |second| first + 1 + second),
        None => cleaned.len(),
    };

    cleaned[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
