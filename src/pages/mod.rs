// =============================================================================
// Talevo Web - Page Components
// =============================================================================

pub mod careers;
pub mod home;
pub mod not_found;

pub use careers::CareersPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
