pub mod case_card;
pub mod item_card;
pub mod nav_bar;
pub mod roulette_modal;

pub use case_card::CaseCard;
pub use item_card::{ItemCard, RarityBadge};
pub use nav_bar::NavBar;
pub use roulette_modal::RouletteModal;
