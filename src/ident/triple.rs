//! Three-part endpoint names
//!
//! A `ServiceTriple` names exactly one typed data endpoint. The three parts
//! are validated at construction and never change afterwards, so a triple
//! held anywhere in the process is always a well-formed name.

use std::fmt;

use super::error::IdentError;

/// Maximum length of a single identifier field, in bytes
pub const MAX_IDENT_LEN: usize = 100;

/// Separator used when rendering names; rejected inside fields
pub(crate) const SEPARATOR: char = '/';

/// Validate one identifier field
///
/// Enforces the bounded length and keeps the rendering separator and NUL
/// out of field values.
pub(crate) fn validate_ident(field: &'static str, value: &str) -> Result<(), IdentError> {
    if value.len() > MAX_IDENT_LEN {
        return Err(IdentError::TooLong {
            field,
            len: value.len(),
        });
    }

    if let Some(ch) = value.chars().find(|&c| c == SEPARATOR || c == '\0') {
        return Err(IdentError::InvalidCharacter { field, ch });
    }

    Ok(())
}

/// Immutable three-part name of a communication endpoint
///
/// Ordering is field-wise lexicographic (service, instance, event), which
/// gives deterministic display and sort order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceTriple {
    service: String,
    instance: String,
    event: String,
}

impl ServiceTriple {
    /// Create a new triple from three validated fields
    pub fn new(
        service: impl Into<String>,
        instance: impl Into<String>,
        event: impl Into<String>,
    ) -> Result<Self, IdentError> {
        let service = service.into();
        let instance = instance.into();
        let event = event.into();

        validate_ident("service", &service)?;
        validate_ident("instance", &instance)?;
        validate_ident("event", &event)?;

        Ok(Self {
            service,
            instance,
            event,
        })
    }

    /// Get the service field
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Get the instance field
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Get the event field
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl fmt::Display for ServiceTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.service,
            self.instance,
            self.event,
            sep = SEPARATOR
        )
    }
}
