// =============================================================================
// Talevo Web - Positions API
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Positions API Functions
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use super::{ApiClient, ApiError};

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Open position as published by the CRM.
///
/// The CRM has shipped both `uuid`/`id` and `required_skills`/`skills`
/// over time, so every variant is kept and resolved through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub title: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub required_skills: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Position {
    /// Identifier posted with an application: `uuid`, else `id`.
    pub fn identifier(&self) -> &str {
        non_empty(&self.uuid)
            .or_else(|| non_empty(&self.id))
            .unwrap_or_default()
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company_name)
    }

    pub fn department(&self) -> Option<&str> {
        non_empty(&self.department)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn experience_level(&self) -> Option<&str> {
        non_empty(&self.experience_level)
    }

    pub fn urgency(&self) -> Option<&str> {
        non_empty(&self.urgency)
    }

    pub fn created_at(&self) -> Option<&str> {
        non_empty(&self.created_at)
    }

    /// Raw comma-separated skill list, preferring `required_skills`.
    pub fn skill_list(&self) -> &str {
        non_empty(&self.required_skills)
            .or_else(|| non_empty(&self.skills))
            .unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Accepts `"42"` and `42` alike.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Listing body: either `{ "positions": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PositionsPayload {
    Envelope { positions: Vec<Position> },
    List(Vec<Position>),
}

impl PositionsPayload {
    pub fn into_positions(self) -> Vec<Position> {
        match self {
            PositionsPayload::Envelope { positions } => positions,
            PositionsPayload::List(positions) => positions,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Positions API Functions
// -----------------------------------------------------------------------------

/// Fetch every open position.
pub async fn list_positions(client: &ApiClient) -> Result<Vec<Position>, ApiError> {
    let payload: PositionsPayload = client.get("/positions/").await?;
    Ok(payload.into_positions())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<Position> {
        serde_json::from_str::<PositionsPayload>(body)
            .unwrap()
            .into_positions()
    }

    #[test]
    fn test_envelope_and_bare_list_are_both_accepted() {
        let wrapped = parse(r#"{"positions": [{"uuid": "a", "title": "Muhasebeci"}]}"#);
        let bare = parse(r#"[{"uuid": "a", "title": "Muhasebeci"}]"#);
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped[0].title, "Muhasebeci");
    }

    #[test]
    fn test_empty_envelope() {
        assert!(parse(r#"{"positions": []}"#).is_empty());
    }

    #[test]
    fn test_numeric_id_is_normalised() {
        let positions = parse(r#"[{"id": 17, "title": "Şoför"}]"#);
        assert_eq!(positions[0].id.as_deref(), Some("17"));
        assert_eq!(positions[0].identifier(), "17");
    }

    #[test]
    fn test_uuid_preferred_over_id() {
        let positions = parse(r#"[{"id": 3, "uuid": "9f1c", "title": "Satış"}]"#);
        assert_eq!(positions[0].identifier(), "9f1c");

        let blank_uuid = parse(r#"[{"id": 3, "uuid": "", "title": "Satış"}]"#);
        assert_eq!(blank_uuid[0].identifier(), "3");
    }

    #[test]
    fn test_legacy_skills_field() {
        let positions = parse(r#"[{"title": "Garson", "skills": "Servis, İngilizce"}]"#);
        assert_eq!(positions[0].skill_list(), "Servis, İngilizce");

        let both = parse(r#"[{"title": "Aşçı", "required_skills": "Mutfak", "skills": "Eski"}]"#);
        assert_eq!(both[0].skill_list(), "Mutfak");
    }

    #[test]
    fn test_missing_and_null_fields_are_tolerated() {
        let positions = parse(r#"[{"title": null, "company_name": null}, {}]"#);
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].title, "");
        assert_eq!(positions[0].company(), None);
        assert_eq!(positions[1].identifier(), "");
        assert_eq!(positions[1].skill_list(), "");
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let positions = parse(r#"[{"title": "Depo Sorumlusu", "department": "", "urgency": ""}]"#);
        assert_eq!(positions[0].department(), None);
        assert_eq!(positions[0].urgency(), None);
    }
}
