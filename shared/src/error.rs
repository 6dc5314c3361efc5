use thiserror::Error;

use crate::catalog::{CaseId, ItemId};
use crate::shared_case_game::OpenTicket;

/// Malformed catalog data. Always fatal: a host that gets one of these refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("item id {0} is defined more than once")]
    DuplicateItem(ItemId),
    #[error("case id {0} is defined more than once")]
    DuplicateCase(CaseId),
    #[error("case {case} references unknown item {item}")]
    UnknownItem { case: CaseId, item: ItemId },
    #[error("case {0} has no items")]
    EmptyCase(CaseId),
    #[error("case {0} must have a positive price")]
    ZeroPrice(CaseId),
}

/// Operations invoked out of sequence or with bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpeningError {
    #[error("no case with id {0}")]
    UnknownCase(CaseId),
    #[error("case {0} has an empty item pool")]
    EmptyPool(CaseId),
    #[error("no opening is pending")]
    NotPending,
    #[error("ticket {got} does not match the pending opening {expected}")]
    StaleTicket { expected: OpenTicket, got: OpenTicket },
}
