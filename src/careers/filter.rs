// =============================================================================
// Talevo Web - Position Filters
// =============================================================================
// Table of Contents:
// 1. Filter Options
// 2. Filter Criteria
// =============================================================================

use crate::api::Position;

// -----------------------------------------------------------------------------
// 1. Filter Options
// -----------------------------------------------------------------------------

/// Dropdown values derived from the loaded list, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<String>,
}

impl FilterOptions {
    pub fn from_positions(positions: &[Position]) -> Self {
        Self {
            departments: distinct(positions.iter().map(Position::department)),
            locations: distinct(positions.iter().map(Position::location)),
            experience_levels: distinct(positions.iter().map(Position::experience_level)),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.flatten() {
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

// -----------------------------------------------------------------------------
// 2. Filter Criteria
// -----------------------------------------------------------------------------

/// Current value of the four filter controls. Empty means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub department: String,
    pub location: String,
    pub experience: String,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.department.is_empty()
            && self.location.is_empty()
            && self.experience.is_empty()
            && self.search.is_empty()
    }

    pub fn matches(&self, position: &Position) -> bool {
        if !self.department.is_empty() && position.department() != Some(self.department.as_str()) {
            return false;
        }
        if !self.location.is_empty() && position.location() != Some(self.location.as_str()) {
            return false;
        }
        if !self.experience.is_empty()
            && position.experience_level() != Some(self.experience.as_str())
        {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = position.title.to_lowercase().contains(&needle);
            let in_company = position
                .company()
                .is_some_and(|c| c.to_lowercase().contains(&needle));
            if !in_title && !in_company {
                return false;
            }
        }
        true
    }
}

/// Narrow the full list. The source slice is never modified.
pub fn filter_positions(positions: &[Position], criteria: &FilterCriteria) -> Vec<Position> {
    positions
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::demo_positions;

    fn position(title: &str, company: Option<&str>, department: Option<&str>, location: Option<&str>) -> Position {
        Position {
            title: title.into(),
            company_name: company.map(Into::into),
            department: department.map(Into::into),
            location: location.map(Into::into),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Position> {
        vec![
            position("Backend Geliştirici", Some("Yazılım Evi"), Some("Teknoloji"), Some("İstanbul")),
            position("Muhasebe Uzmanı", Some("Holding A.Ş."), Some("Finans"), Some("Ankara")),
            position("Frontend Geliştirici", None, Some("Teknoloji"), Some("İzmir")),
            position("Satış Temsilcisi", Some("Perakende"), None, Some("İstanbul")),
            position("Veri Analisti", Some("Holding A.Ş."), Some("Finans"), Some("")),
        ]
    }

    #[test]
    fn test_options_are_distinct_in_first_seen_order() {
        let options = FilterOptions::from_positions(&sample());
        assert_eq!(options.departments, vec!["Teknoloji", "Finans"]);
        assert_eq!(options.locations, vec!["İstanbul", "Ankara", "İzmir"]);
        assert!(options.experience_levels.is_empty());
    }

    #[test]
    fn test_options_from_demo_data() {
        let options = FilterOptions::from_positions(&demo_positions());
        assert_eq!(options.departments.len(), 4);
        assert_eq!(options.locations, vec!["İstanbul", "Ankara", "İzmir"]);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let all = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_positions(&all, &criteria), all);
    }

    #[test]
    fn test_criteria_are_anded() {
        let all = sample();
        let criteria = FilterCriteria {
            department: "Teknoloji".into(),
            location: "İstanbul".into(),
            ..Default::default()
        };
        let filtered = filter_positions(&all, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Backend Geliştirici");
    }

    #[test]
    fn test_exact_match_only() {
        let criteria = FilterCriteria {
            department: "Tekno".into(),
            ..Default::default()
        };
        assert!(filter_positions(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_search_covers_title_and_company_case_insensitively() {
        let all = sample();
        let criteria = FilterCriteria {
            search: "holding".into(),
            ..Default::default()
        };
        let titles: Vec<_> = filter_positions(&all, &criteria)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Muhasebe Uzmanı", "Veri Analisti"]);

        let by_title = FilterCriteria {
            search: "GELIŞTIRICI".into(),
            ..Default::default()
        };
        assert_eq!(filter_positions(&all, &by_title).len(), 2);
    }

    #[test]
    fn test_turkish_search_over_demo_data() {
        let all = demo_positions();
        let criteria = FilterCriteria {
            search: "Yazılım".into(),
            ..Default::default()
        };
        let filtered = filter_positions(&all, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Senior Yazılım Mühendisi");
    }

    #[test]
    fn test_result_is_subset_and_source_untouched() {
        let all = sample();
        let before = all.clone();
        let combos = [
            FilterCriteria { department: "Finans".into(), ..Default::default() },
            FilterCriteria { location: "İstanbul".into(), search: "a".into(), ..Default::default() },
            FilterCriteria { experience: "Kıdemli".into(), ..Default::default() },
            FilterCriteria { search: "zzz".into(), ..Default::default() },
        ];
        for criteria in &combos {
            for p in filter_positions(&all, criteria) {
                assert!(all.contains(&p));
            }
        }
        assert_eq!(all, before);
    }
}
