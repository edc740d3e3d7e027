use crate::models::Query;

/// Prompt for a single-property valuation.
///
/// Asks for live search and the line markers the report parser reads back:
/// `ESTIMATED VALUE:`, `CONFIDENCE SCORE:`, `NEARBY:`/`PRICE:` and `CHART:`/`VALUE:`.
pub fn valuation_prompt(query: &Query) -> String {
    format!(
        r#"PROPERTY VALUATION REPORT REQUEST:
Locality: {locality}
City: {city}
Configuration: {bhk}
Total Area: {area} sq ft
Type: {property_type}
Status: {condition}

ROLE: Chief Data Scientist at BharatProp.
TASK: Use Google Search to find current property listings and trends.

INSTRUCTIONS:
- Provide a detailed narrative report.
- Start with a clear "ESTIMATED VALUE: [Value in Lakhs/Crores]" line.
- Include a "CONFIDENCE SCORE: [Percentage]%" line.
- List 3-4 NEARBY LOCALITIES with their average rate in this exact format: "NEARBY: [Locality Name], PRICE: [Avg Price]"
- Provide 5 historical or projected data points for a price chart in this format: "CHART: [Year/Quarter], VALUE: [Numerical Price per SqFt]"
- Explain reasoning and sentiment.
"#,
        locality = query.locality,
        city = query.city,
        bhk = query.bhk,
        area = query.area,
        property_type = query.property_type,
        condition = query.condition,
    )
}

pub fn market_trends_prompt(city: &str) -> String {
    format!(
        "Search for current real estate market trends for {city}, India in 2025. \
         Provide report on price per Sq Ft, growth, and status."
    )
}

pub fn city_guide_prompt(city: &str) -> String {
    format!("Create a 2025 Real Estate Investor Guide for {city}, India. Best spots, infra, yield.")
}
