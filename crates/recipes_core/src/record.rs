use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One recipe as served by the collection endpoint.
///
/// Every attribute is optional on the wire; absent values render blank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i64>,
    pub cook_time: Option<i64>,
    pub total_time: Option<i64>,
    pub description: Option<String>,
    pub serves: Option<String>,
    pub nutrients: Option<BTreeMap<String, NutrientValue>>,
}

/// Nutrient amounts arrive as plain numbers or labelled strings ("389 kcal").
/// The importer stores the map untyped, so anything else (`null`, booleans) is
/// kept as raw JSON rather than failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientValue::Number(value) => f.write_str(&format_number(*value)),
            NutrientValue::Text(text) => f.write_str(text),
            NutrientValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Response body shared by the list and search endpoints.
///
/// Missing fields default at settlement instead of failing the fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Option<Vec<Record>>,
}

/// Collection-wide figures from the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub total_recipes: u64,
    pub recipes_by_cuisine: BTreeMap<String, u64>,
    pub average_rating: f64,
    pub average_total_time: f64,
}

/// Formats a number the way the table shows it: integral values without a fraction.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
