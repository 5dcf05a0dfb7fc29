// =============================================================================
// Talevo Web - Careers Board
// =============================================================================
// Table of Contents:
// 1. View Binding
// 2. Count Message
// 3. Careers Board
// =============================================================================

use crate::api::{ApiError, Position};
use super::card::{build_card, PositionCard};
use super::demo::demo_positions;
use super::filter::{filter_positions, FilterCriteria, FilterOptions};

// -----------------------------------------------------------------------------
// 1. View Binding
// -----------------------------------------------------------------------------

/// The parts of the careers page the board drives.
///
/// Maps onto `positionsLoading`, `positionsEmpty`, `positionsCount`, the three
/// filter dropdowns and `positionsGrid`.
pub trait PositionsView {
    fn set_loading(&mut self, loading: bool);
    fn set_empty(&mut self, visible: bool);
    fn set_count(&mut self, message: CountMessage);
    /// Called once per load; the "all" entry belongs to the view.
    fn set_filter_options(&mut self, options: FilterOptions);
    fn set_cards(&mut self, cards: Vec<PositionCard>);
}

// -----------------------------------------------------------------------------
// 2. Count Message
// -----------------------------------------------------------------------------

/// Status line above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMessage {
    Found(usize),
    NoMatches,
    Demo,
}

impl CountMessage {
    pub fn text(&self) -> String {
        match self {
            CountMessage::Found(n) => format!("{} açık pozisyon bulundu", n),
            CountMessage::NoMatches => "Filtrelere uygun pozisyon bulunamadı".to_string(),
            CountMessage::Demo => {
                "Demo veri gösteriliyor — CRM API bağlantısı bekleniyor".to_string()
            }
        }
    }

    /// Demo data must stand out from a normal count.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, CountMessage::Demo)
    }
}

// -----------------------------------------------------------------------------
// 3. Careers Board
// -----------------------------------------------------------------------------

/// Where the current list came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PositionSource {
    #[default]
    Pending,
    Live,
    Demo,
}

/// Owns the loaded position list for the session.
#[derive(Debug, Clone, Default)]
pub struct CareersBoard {
    positions: Vec<Position>,
    source: PositionSource,
}

impl CareersBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn source(&self) -> PositionSource {
        self.source
    }

    /// Apply the result of `GET /positions/`, falling back to demo data.
    pub fn load<V: PositionsView>(&mut self, fetched: Result<Vec<Position>, ApiError>, view: &mut V) {
        view.set_loading(false);

        match fetched {
            Ok(positions) => {
                log::info!("Loaded {} positions from CRM", positions.len());
                self.positions = positions;
                self.source = PositionSource::Live;

                if self.positions.is_empty() {
                    view.set_empty(true);
                    return;
                }

                view.set_filter_options(FilterOptions::from_positions(&self.positions));
                Self::render(&self.positions, view);
            }
            Err(e) => {
                log::error!("API Error: {}", e);
                self.positions = demo_positions();
                self.source = PositionSource::Demo;

                view.set_filter_options(FilterOptions::from_positions(&self.positions));
                Self::render(&self.positions, view);
                view.set_count(CountMessage::Demo);
            }
        }
    }

    /// Re-render from the full list for the current control values.
    pub fn apply_filter<V: PositionsView>(&self, criteria: &FilterCriteria, view: &mut V) {
        let filtered = filter_positions(&self.positions, criteria);
        Self::render(&filtered, view);
    }

    fn render<V: PositionsView>(positions: &[Position], view: &mut V) {
        if positions.is_empty() {
            view.set_cards(Vec::new());
            view.set_empty(true);
            view.set_count(CountMessage::NoMatches);
            return;
        }

        view.set_empty(false);
        view.set_count(CountMessage::Found(positions.len()));
        view.set_cards(positions.iter().map(build_card).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        loading: Option<bool>,
        empty: bool,
        count: Option<CountMessage>,
        options: Vec<FilterOptions>,
        cards: Vec<PositionCard>,
    }

    impl PositionsView for RecordingView {
        fn set_loading(&mut self, loading: bool) {
            self.loading = Some(loading);
        }
        fn set_empty(&mut self, visible: bool) {
            self.empty = visible;
        }
        fn set_count(&mut self, message: CountMessage) {
            self.count = Some(message);
        }
        fn set_filter_options(&mut self, options: FilterOptions) {
            self.options.push(options);
        }
        fn set_cards(&mut self, cards: Vec<PositionCard>) {
            self.cards = cards;
        }
    }

    fn live(titles: &[&str]) -> Vec<Position> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Position {
                id: Some(i.to_string()),
                title: title.to_string(),
                department: Some(if i % 2 == 0 { "Satış" } else { "Üretim" }.to_string()),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_count_messages() {
        assert_eq!(CountMessage::Found(3).text(), "3 açık pozisyon bulundu");
        assert_eq!(CountMessage::NoMatches.text(), "Filtrelere uygun pozisyon bulunamadı");
        assert!(CountMessage::Demo.text().starts_with("Demo veri"));
        assert!(CountMessage::Demo.is_highlighted());
        assert!(!CountMessage::Found(1).is_highlighted());
    }

    #[test]
    fn test_live_load_renders_everything() {
        let mut board = CareersBoard::new();
        let mut view = RecordingView::default();
        board.load(Ok(live(&["Satış Müdürü", "Operatör", "Bölge Temsilcisi"])), &mut view);

        assert_eq!(board.source(), PositionSource::Live);
        assert_eq!(view.loading, Some(false));
        assert!(!view.empty);
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.count, Some(CountMessage::Found(3)));
        assert_eq!(view.options.len(), 1);
        assert_eq!(view.options[0].departments, vec!["Satış", "Üretim"]);
    }

    #[test]
    fn test_empty_listing_shows_empty_state_only() {
        let mut board = CareersBoard::new();
        let mut view = RecordingView::default();
        board.load(Ok(Vec::new()), &mut view);

        assert!(view.empty);
        assert!(view.cards.is_empty());
        assert!(view.options.is_empty());
        assert_eq!(view.count, None);
    }

    #[test]
    fn test_failure_falls_back_to_demo() {
        let mut board = CareersBoard::new();
        let mut view = RecordingView::default();
        board.load(Err(ApiError::Network("Failed to fetch".into())), &mut view);

        assert_eq!(board.source(), PositionSource::Demo);
        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.count, Some(CountMessage::Demo));
        assert_eq!(view.options.len(), 1);
        assert!(!view.empty);
    }

    #[test]
    fn test_filtering_always_starts_from_full_list() {
        let mut board = CareersBoard::new();
        let mut view = RecordingView::default();
        board.load(Ok(live(&["A", "B", "C", "D"])), &mut view);

        let narrow = FilterCriteria { department: "Üretim".into(), ..Default::default() };
        board.apply_filter(&narrow, &mut view);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.count, Some(CountMessage::Found(2)));

        // Widening again must not be limited by the previous result
        board.apply_filter(&FilterCriteria::default(), &mut view);
        assert_eq!(view.cards.len(), 4);
        assert_eq!(board.positions().len(), 4);
    }

    #[test]
    fn test_no_matches() {
        let mut board = CareersBoard::new();
        let mut view = RecordingView::default();
        board.load(Ok(live(&["A", "B"])), &mut view);

        let criteria = FilterCriteria { search: "yok".into(), ..Default::default() };
        board.apply_filter(&criteria, &mut view);
        assert!(view.cards.is_empty());
        assert!(view.empty);
        assert_eq!(view.count, Some(CountMessage::NoMatches));

        board.apply_filter(&FilterCriteria::default(), &mut view);
        assert!(!view.empty);
    }
}
