pub mod parser;
pub mod prompts;

pub use parser::{fallback_chart_series, parse_report, ParsedReport};
pub use prompts::{city_guide_prompt, market_trends_prompt, valuation_prompt};
