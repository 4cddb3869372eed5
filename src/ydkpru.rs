pub mod resolver;
pub mod validator;
pub mod sort;
pub mod import;
pub mod check;
pub mod config;

pub use resolver::CardResolver;
pub use resolver::CardCatalog;
pub use validator::can_add;
pub use validator::PlacementContext;
pub use validator::Rejection;
pub use sort::sort_cards;
pub use import::ImportReport;
pub use check::check_deck;
pub use check::Violation;
pub use config::get_configuration;
