pub mod catalog;
pub mod constants;
pub mod error;
pub mod inventory;
pub mod rarity;
pub mod reward;
pub mod shared_case_game;

pub use catalog::{Case, CaseDefinition, CaseId, Catalog, CatalogDefinition, Item, ItemId};
pub use error::{CatalogError, OpeningError};
pub use inventory::SessionInventory;
pub use rarity::Rarity;
pub use shared_case_game::{CaseOpening, OpenTicket, OpeningPhase, OPEN_DURATION_MS};
