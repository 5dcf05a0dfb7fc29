// =============================================================================
// Talevo Web - Careers Board Core
// =============================================================================
// View-model layer for the careers page. Nothing in here touches the DOM:
// the Leptos page binds signals to `PositionsView` and renders `ApplyModal`,
// and tests drive the same types with recording fakes.
//
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// =============================================================================

pub mod apply;
pub mod board;
pub mod card;
pub mod demo;
pub mod filter;

pub use apply::{ApplyModal, BUSY_LABEL, SUBMIT_LABEL};
pub use board::{CareersBoard, CountMessage, PositionSource, PositionsView};
pub use card::{build_card, build_card_in, ApplyTarget, EscapedText, MetaRow, PositionCard, Urgency};
pub use demo::demo_positions;
pub use filter::{filter_positions, FilterCriteria, FilterOptions};
