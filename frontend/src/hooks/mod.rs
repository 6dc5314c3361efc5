pub mod use_case_opening;

pub use use_case_opening::*;
