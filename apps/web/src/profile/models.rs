//! Ideal customer profile, as returned by the completion model.
//!
//! Every field defaults to empty so a partial or oddly-typed answer still
//! formats. Scalars accept strings, numbers or booleans; a section of the
//! wrong shape reads as empty without affecting its siblings.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealCustomerProfile {
    #[serde(deserialize_with = "section")]
    pub demographic_data: DemographicData,
    #[serde(deserialize_with = "section")]
    pub main_problem: MainProblem,
    #[serde(deserialize_with = "section")]
    pub other_solutions: OtherSolutions,
    #[serde(deserialize_with = "section")]
    pub primary_transformation: PrimaryTransformation,
    #[serde(deserialize_with = "section")]
    pub market_specifics: MarketSpecifics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicData {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub age: String,
    #[serde(deserialize_with = "text")]
    pub brief_description: String,
    #[serde(deserialize_with = "text")]
    pub target_market: String,
    #[serde(deserialize_with = "text")]
    pub avatar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainProblem {
    #[serde(deserialize_with = "text")]
    pub primary_issue: String,
    /// 5 items
    #[serde(deserialize_with = "text_list")]
    pub secondary_issues: Vec<String>,
    #[serde(deserialize_with = "section")]
    pub emotional_aspects: EmotionalAspects,
    #[serde(deserialize_with = "section")]
    pub relationship_impact: RelationshipImpact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionalAspects {
    /// 5 items
    #[serde(deserialize_with = "text_list")]
    pub primary_emotions: Vec<String>,
    /// 5 items
    #[serde(deserialize_with = "text_list")]
    pub fears: Vec<String>,
    /// 4 items
    #[serde(deserialize_with = "text_list")]
    pub secret_desires: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipImpact {
    /// 5 items
    #[serde(deserialize_with = "text_list")]
    pub fear_effects: Vec<String>,
    /// 5 items
    #[serde(deserialize_with = "text_list")]
    pub trigger_phrases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherSolutions {
    /// 4 items
    #[serde(deserialize_with = "text_list")]
    pub past_attempts: Vec<String>,
    /// 3 items
    #[serde(deserialize_with = "text_list")]
    pub unwanted_solutions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryTransformation {
    #[serde(deserialize_with = "text")]
    pub perfect_solution: String,
    #[serde(deserialize_with = "text")]
    pub relationship_effects: String,
    #[serde(deserialize_with = "text")]
    pub transformed_identity: String,
    #[serde(deserialize_with = "text")]
    pub future_success: String,
    #[serde(deserialize_with = "section")]
    pub benefits: Benefits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benefits {
    #[serde(deserialize_with = "text_list")]
    pub practical: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub emotional: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSpecifics {
    #[serde(deserialize_with = "text")]
    pub success_foundation: String,
    #[serde(deserialize_with = "section")]
    pub objections: Objections,
    #[serde(deserialize_with = "section")]
    pub powerful_language: PowerfulLanguage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objections {
    /// 5 items
    #[serde(deserialize_with = "text_list")]
    pub market: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub practical: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub emotional: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerfulLanguage {
    #[serde(deserialize_with = "text_list")]
    pub words: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub phrases: Vec<String>,
}

impl IdealCustomerProfile {
    /// Reads a profile out of arbitrary JSON. Anything that is not an object
    /// yields the empty profile.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        Value::Null => Vec::new(),
        single => vec![value_to_text(single)],
    })
}

fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}
