//! Endpoint naming and query matching
//!
//! Every communication endpoint is addressed by a three-part name: service,
//! instance, event. Queries use the same three parts but may leave any of
//! them unspecified, turning that part into a wildcard.

pub mod error;
pub mod query;
pub mod triple;

pub use error::IdentError;
pub use query::ServiceQuery;
pub use triple::{ServiceTriple, MAX_IDENT_LEN};
