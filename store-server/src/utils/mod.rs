//! Utility module: logging, input validation and money rounding

pub mod logger;
pub mod money;
pub mod validation;
