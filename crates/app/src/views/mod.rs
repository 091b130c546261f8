pub mod dashboard;
pub mod hero_detail;
pub mod hero_search;
pub mod heroes;
pub mod messages;

pub use dashboard::DashboardView;
pub use hero_detail::HeroDetailView;
pub use hero_search::HeroSearchView;
pub use heroes::HeroesView;
pub use messages::MessagesView;
