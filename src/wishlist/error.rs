//! Fatal extraction errors.
//!
//! Any of these aborts the whole run; the partially assembled list is
//! discarded with the builder.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("item count \"{value}\" is not a number: {source}")]
    CountParse {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("item id not found for row {position}")]
    MissingIdentifier { position: usize },

    #[error("invalid selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("{0}")]
    Blocked(&'static str),
}
