use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cities offered on the market trends view
pub const TREND_CITIES: [&str; 10] = [
    "Ahmedabad",
    "Bangalore",
    "Chennai",
    "Delhi NCR",
    "Gurugram",
    "Hyderabad",
    "Kolkata",
    "Mumbai",
    "Noida",
    "Pune",
];

/// Cities offered on the investor guide view
pub const GUIDE_CITIES: [&str; 8] = [
    "Ahmedabad",
    "Bangalore",
    "Chennai",
    "Delhi NCR",
    "Hyderabad",
    "Kolkata",
    "Mumbai",
    "Pune",
];

/// Room configuration of the property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Bhk {
    #[serde(rename = "1 BHK")]
    One,
    #[serde(rename = "2 BHK")]
    Two,
    #[serde(rename = "3 BHK")]
    Three,
    #[serde(rename = "4 BHK")]
    Four,
    #[serde(rename = "5+ BHK")]
    FivePlus,
}

impl Bhk {
    pub const ALL: [Bhk; 5] = [Bhk::One, Bhk::Two, Bhk::Three, Bhk::Four, Bhk::FivePlus];

    pub fn label(&self) -> &'static str {
        match self {
            Bhk::One => "1 BHK",
            Bhk::Two => "2 BHK",
            Bhk::Three => "3 BHK",
            Bhk::Four => "4 BHK",
            Bhk::FivePlus => "5+ BHK",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    Villa,
    Plot,
    #[serde(rename = "Independent House")]
    IndependentHouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Plot,
        PropertyType::IndependentHouse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Plot => "Plot",
            PropertyType::IndependentHouse => "Independent House",
        }
    }
}

/// Construction / ownership status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    New,
    Resale,
    #[serde(rename = "Under Construction")]
    UnderConstruction,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::New,
        Condition::Resale,
        Condition::UnderConstruction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Resale => "Resale",
            Condition::UnderConstruction => "Under Construction",
        }
    }
}

macro_rules! label_impls {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let options: Vec<&str> = $ty::ALL.iter().map(|v| v.label()).collect();
                        format!(
                            "unknown {} '{}' (expected one of: {})",
                            $what,
                            s,
                            options.join(", ")
                        )
                    })
            }
        }
    };
}

label_impls!(Bhk, "room configuration");
label_impls!(PropertyType, "property type");
label_impls!(Condition, "condition");

/// Parameters of a single valuation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub city: String,
    pub locality: String,
    pub bhk: Bhk,
    /// Built-up area in sq ft, kept as entered
    pub area: String,
    pub property_type: PropertyType,
    pub condition: Condition,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            city: String::new(),
            locality: String::new(),
            bhk: Bhk::Two,
            area: String::new(),
            property_type: PropertyType::Apartment,
            condition: Condition::New,
        }
    }
}

/// A web citation backing the generated report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// A comparable locality and its price as written in the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyLocality {
    pub name: String,
    pub price: String,
}

/// One point of the price series shown on the chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<u64>,
    pub grounding_sources: Vec<GroundingSource>,
    pub nearby_localities: Vec<NearbyLocality>,
    pub chart_data: Vec<ChartPoint>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityTrend {
    pub city: String,
    pub report: String,
    pub grounding_sources: Vec<GroundingSource>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityGuide {
    pub city_name: String,
    pub report: String,
    pub grounding_sources: Vec<GroundingSource>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("5+ bhk".parse::<Bhk>().unwrap(), Bhk::FivePlus);
        assert_eq!(
            "independent house".parse::<PropertyType>().unwrap(),
            PropertyType::IndependentHouse
        );
        assert_eq!(
            " Under Construction ".parse::<Condition>().unwrap(),
            Condition::UnderConstruction
        );
    }

    #[test]
    fn unknown_label_lists_options() {
        let err = "Castle".parse::<PropertyType>().unwrap_err();
        assert!(err.contains("Apartment, Villa, Plot, Independent House"));
    }

    #[test]
    fn query_serializes_with_form_labels() {
        let query = Query {
            locality: "Whitefield".to_string(),
            ..Query::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["bhk"], "2 BHK");
        assert_eq!(value["propertyType"], "Apartment");
        assert_eq!(value["condition"], "New");
        assert_eq!(value["city"], "");
        assert_eq!(value["area"], "");
    }

    #[test]
    fn city_lists_are_sorted() {
        let mut trends = TREND_CITIES.to_vec();
        trends.sort();
        assert_eq!(trends, TREND_CITIES.to_vec());

        let mut guides = GUIDE_CITIES.to_vec();
        guides.sort();
        assert_eq!(guides, GUIDE_CITIES.to_vec());
    }
}
