pub mod borrower;
pub mod classify;
pub mod error;
pub mod evaluate;
pub mod registry;
pub mod scoring;
pub mod types;

#[cfg(feature = "generator")]
pub mod generator;

pub use error::CreditEvalError;
pub use types::*;

/// Standard result type for all credit-eval operations
pub type CreditEvalResult<T> = Result<T, CreditEvalError>;
