// =============================================================================
// Talevo Web - Position Card View-Model
// =============================================================================
// Table of Contents:
// 1. Escaped Text
// 2. Card Parts
// 3. Card Builder
// =============================================================================

use std::fmt;

use chrono::{Local, TimeZone};

use crate::api::Position;
use crate::utils::{escape_html, format_tr_date};

/// Skill tags shown per card.
pub const MAX_SKILL_TAGS: usize = 4;

// -----------------------------------------------------------------------------
// 1. Escaped Text
// -----------------------------------------------------------------------------

/// CRM-sourced text that has already been HTML-escaped.
///
/// The only constructor escapes, so anything rendered through `as_html`
/// cannot inject markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedText(String);

impl EscapedText {
    pub fn escape(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn into_html(self) -> String {
        self.0
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// -----------------------------------------------------------------------------
// 2. Card Parts
// -----------------------------------------------------------------------------

/// Urgency badge level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// `None` when the position has no urgency; unknown values read as low.
    pub fn from_field(raw: Option<&str>) -> Option<Self> {
        raw.map(|value| match value {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Acil",
            Self::Medium => "Normal",
            Self::Low => "Düşük",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::High => "urgency-high",
            Self::Medium => "urgency-medium",
            Self::Low => "urgency-low",
        }
    }
}

/// Which metadata line a row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    Location,
    Department,
    Experience,
}

impl MetaKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Location => "bi bi-geo-alt",
            Self::Department => "bi bi-building",
            Self::Experience => "bi bi-briefcase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRow {
    pub kind: MetaKind,
    pub text: EscapedText,
}

/// Everything the apply modal needs about the chosen position.
///
/// Values stay raw: the modal renders them as text nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyTarget {
    pub position_id: String,
    pub title: String,
    pub company: String,
}

impl ApplyTarget {
    pub fn for_position(position: &Position) -> Self {
        Self {
            position_id: position.identifier().to_string(),
            title: position.title.clone(),
            company: position.company().unwrap_or_default().to_string(),
        }
    }
}

/// Display-ready card for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCard {
    pub title: EscapedText,
    pub urgency: Option<Urgency>,
    pub company: Option<EscapedText>,
    pub meta: Vec<MetaRow>,
    pub skills: Vec<EscapedText>,
    pub date: String,
    pub target: ApplyTarget,
}

// -----------------------------------------------------------------------------
// 3. Card Builder
// -----------------------------------------------------------------------------

/// Split a comma-separated skill list into at most `MAX_SKILL_TAGS` tags.
pub fn skill_tags(raw: &str) -> Vec<EscapedText> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SKILL_TAGS)
        .map(EscapedText::escape)
        .collect()
}

/// Build a card with dates shown in the browser's local time.
pub fn build_card(position: &Position) -> PositionCard {
    build_card_in(position, &Local)
}

pub fn build_card_in<Tz>(position: &Position, tz: &Tz) -> PositionCard
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let meta = [
        (MetaKind::Location, position.location()),
        (MetaKind::Department, position.department()),
        (MetaKind::Experience, position.experience_level()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| {
        value.map(|v| MetaRow {
            kind,
            text: EscapedText::escape(v),
        })
    })
    .collect();

    let date = position
        .created_at()
        .and_then(|raw| format_tr_date(raw, tz))
        .unwrap_or_default();

    PositionCard {
        title: EscapedText::escape(&position.title),
        urgency: Urgency::from_field(position.urgency()),
        company: position.company().map(EscapedText::escape),
        meta,
        skills: skill_tags(position.skill_list()),
        date,
        target: ApplyTarget::for_position(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn position(title: &str) -> Position {
        Position {
            uuid: Some("p-1".into()),
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_urgency_no_badge() {
        let card = build_card_in(&position("Kasiyer"), &Utc);
        assert_eq!(card.urgency, None);
    }

    #[test]
    fn test_urgency_mapping() {
        let mut p = position("Kasiyer");
        p.urgency = Some("high".into());
        let card = build_card_in(&p, &Utc);
        let badge = card.urgency.unwrap();
        assert_eq!(badge.label(), "Acil");
        assert_eq!(badge.class(), "urgency-high");

        assert_eq!(Urgency::from_field(Some("medium")), Some(Urgency::Medium));
        assert_eq!(Urgency::from_field(Some("low")), Some(Urgency::Low));
        assert_eq!(Urgency::from_field(Some("critical")), Some(Urgency::Low));
        assert_eq!(Urgency::Medium.label(), "Normal");
        assert_eq!(Urgency::Low.label(), "Düşük");
    }

    #[test]
    fn test_skill_tags_are_capped_and_trimmed() {
        let tags = skill_tags(" Rust ,Go,  SQL, Docker, Kubernetes, AWS, Linux");
        let tags: Vec<_> = tags.iter().map(EscapedText::as_html).collect();
        assert_eq!(tags, vec!["Rust", "Go", "SQL", "Docker"]);

        assert!(skill_tags("").is_empty());
        assert_eq!(skill_tags("Excel,, ,Word").len(), 2);
    }

    #[test]
    fn test_external_text_is_escaped() {
        let p = Position {
            title: "<script>alert(1)</script>".into(),
            company_name: Some("A&B <Ltd>".into()),
            location: Some("\"Bursa\"".into()),
            required_skills: Some("<b>C#</b>".into()),
            ..position("")
        };
        let card = build_card_in(&p, &Utc);

        assert_eq!(card.title.as_html(), "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(card.company.unwrap().as_html(), "A&amp;B &lt;Ltd&gt;");
        assert_eq!(card.meta[0].text.as_html(), "&quot;Bursa&quot;");
        assert_eq!(card.skills[0].as_html(), "&lt;b&gt;C#&lt;/b&gt;");
        // Modal context is rendered as text, so it keeps the raw value
        assert_eq!(card.target.title, "<script>alert(1)</script>");
    }

    #[test]
    fn test_meta_rows_omitted_independently() {
        let mut p = position("Teknisyen");
        p.department = Some("Bakım".into());
        let card = build_card_in(&p, &Utc);
        assert_eq!(card.meta.len(), 1);
        assert_eq!(card.meta[0].kind, MetaKind::Department);
        assert_eq!(card.meta[0].kind.icon(), "bi bi-building");

        p.location = Some("Kocaeli".into());
        p.experience_level = Some("Orta (3-5 yıl)".into());
        let kinds: Vec<_> = build_card_in(&p, &Utc).meta.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MetaKind::Location, MetaKind::Department, MetaKind::Experience]);
    }

    #[test]
    fn test_company_and_date_optional() {
        let card = build_card_in(&position("Stajyer"), &Utc);
        assert!(card.company.is_none());
        assert_eq!(card.date, "");
        assert_eq!(card.target.company, "");

        let mut dated = position("Stajyer");
        dated.created_at = Some("2026-02-09T12:00:00Z".into());
        assert_eq!(build_card_in(&dated, &Utc).date, "09.02.2026");
    }

    #[test]
    fn test_apply_target_carries_identity() {
        let p = Position {
            id: Some("12".into()),
            uuid: None,
            title: "Lojistik Uzmanı".into(),
            company_name: Some("Nakliyat A.Ş.".into()),
            ..Default::default()
        };
        let target = build_card_in(&p, &Utc).target;
        assert_eq!(
            target,
            ApplyTarget {
                position_id: "12".into(),
                title: "Lojistik Uzmanı".into(),
                company: "Nakliyat A.Ş.".into(),
            }
        );
    }
}
