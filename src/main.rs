use anyhow::Result;
use clap::{Parser, Subcommand};
use housing_oracle::models::{GroundingSource, GUIDE_CITIES, TREND_CITIES};
use housing_oracle::{Bhk, Condition, Config, GeminiClient, MarketOracle, PropertyType, Query};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "housing-oracle", version, about = "Search-grounded Indian real-estate reports")]
struct Cli {
    /// Also write the result as pretty JSON to this file
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the value of a property
    Predict {
        #[arg(long, value_parser = non_blank)]
        city: String,
        #[arg(long, value_parser = non_blank)]
        locality: String,
        #[arg(long, default_value = "2 BHK")]
        bhk: Bhk,
        /// Built-up area in sq ft
        #[arg(long, value_parser = area_sq_ft)]
        area: String,
        #[arg(long, default_value = "Apartment")]
        property_type: PropertyType,
        #[arg(long, default_value = "New")]
        condition: Condition,
    },
    /// Current market trends for a city
    Trends {
        #[arg(value_parser = non_blank)]
        city: String,
    },
    /// Investor guide for a city
    Guide {
        #[arg(value_parser = non_blank)]
        city: String,
    },
    /// List the cities offered for trends and guides
    Cities,
}

/// Required text field; surrounding whitespace is dropped
fn non_blank(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    Ok(value.to_string())
}

/// Area in sq ft: a positive number, kept as typed
fn area_sq_ft(value: &str) -> Result<String, String> {
    let value = value.trim();
    match value.parse::<f64>() {
        Ok(area) if area.is_finite() && area > 0.0 => Ok(value.to_string()),
        _ => Err(format!("'{}' is not a positive number of sq ft", value)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!("🏠 Housing Oracle ({})", config.model);

    let oracle = MarketOracle::new(GeminiClient::new(&config)?, config.model.clone());

    match cli.command {
        Command::Predict {
            city,
            locality,
            bhk,
            area,
            property_type,
            condition,
        } => {
            let query = Query {
                city,
                locality,
                bhk,
                area,
                property_type,
                condition,
            };
            let result = oracle.predict_house_price(&query).await?;

            println!(
                "Estimated value: {}",
                result.estimated_price.as_deref().unwrap_or_default()
            );
            if let Some(score) = result.confidence_score {
                println!("Confidence: {}%", score);
            }
            println!();
            for (i, nearby) in result.nearby_localities.iter().enumerate() {
                println!("{}. {} ({})", i + 1, nearby.name, nearby.price);
            }
            println!();
            for point in &result.chart_data {
                println!("   {:<10} {:>10.0}", point.label, point.value);
            }
            println!();
            println!("{}", result.report);
            print_sources(&result.grounding_sources);

            save(cli.output.as_deref(), &result).await?;
        }
        Command::Trends { city } => {
            let trend = oracle.fetch_market_trends(&city).await?;
            println!("{}", trend.report);
            print_sources(&trend.grounding_sources);

            save(cli.output.as_deref(), &trend).await?;
        }
        Command::Guide { city } => {
            let guide = oracle.fetch_city_guide(&city).await?;
            println!("{}", guide.report);
            print_sources(&guide.grounding_sources);

            save(cli.output.as_deref(), &guide).await?;
        }
        Command::Cities => {
            println!("Trends: {}", TREND_CITIES.join(", "));
            println!("Guides: {}", GUIDE_CITIES.join(", "));
        }
    }

    Ok(())
}

fn print_sources(sources: &[GroundingSource]) {
    if sources.is_empty() {
        return;
    }
    println!();
    println!("Sources:");
    for (i, source) in sources.iter().enumerate() {
        println!("{}. {}", i + 1, source.title);
        println!("   {}", source.uri);
    }
}

async fn save<T: Serialize>(path: Option<&Path>, value: &T) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    info!("💾 Saved result to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("housing-oracle").chain(args.iter().copied()))
    }

    #[test]
    fn predict_accepts_a_complete_query() {
        let cli = parse(&[
            "predict",
            "--city",
            " Pune ",
            "--locality",
            "Baner",
            "--area",
            "1250.5",
            "--bhk",
            "3 bhk",
            "--property-type",
            "villa",
        ])
        .unwrap();

        match cli.command {
            Command::Predict {
                city,
                locality,
                bhk,
                area,
                property_type,
                condition,
            } => {
                assert_eq!(city, "Pune");
                assert_eq!(locality, "Baner");
                assert_eq!(area, "1250.5");
                assert_eq!(bhk, Bhk::Three);
                assert_eq!(property_type, PropertyType::Villa);
                assert_eq!(condition, Condition::New);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn predict_rejects_blank_city_and_locality() {
        let blank_city = ["predict", "--city", "", "--locality", "Baner", "--area", "900"];
        assert!(parse(&blank_city).is_err());

        let blank_locality = ["predict", "--city", "Pune", "--locality", "  ", "--area", "900"];
        assert!(parse(&blank_locality).is_err());
    }

    #[test]
    fn predict_rejects_non_numeric_area() {
        for area in ["", "large", "-40", "0", "NaN"] {
            let args = ["predict", "--city", "Pune", "--locality", "Baner", "--area", area];
            assert!(parse(&args).is_err(), "area {:?} accepted", area);
        }
    }

    #[test]
    fn city_commands_reject_blank_city() {
        assert!(parse(&["trends", ""]).is_err());
        assert!(parse(&["guide", " "]).is_err());
        assert!(parse(&["guide", "Chennai"]).is_ok());
    }
}
