// =============================================================================
// Talevo Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Site Chrome (nav, footer)
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod nav;

pub use common::{EmptyState, LoadingSpinner, StatCounter};
pub use footer::Footer;
pub use forms::{FileField, FilterSelect, FormField};
pub use nav::SiteNav;
