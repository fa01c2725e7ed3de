//! Partially-wildcarded endpoint queries

use std::fmt;

use super::error::IdentError;
use super::triple::{validate_ident, ServiceTriple, SEPARATOR};

/// A query over endpoint names
///
/// Each field is optional: an absent field is a wildcard matching any
/// concrete value. The all-wildcard query matches every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceQuery {
    service: Option<String>,
    instance: Option<String>,
    event: Option<String>,
}

impl ServiceQuery {
    /// Create the all-wildcard query
    pub fn any() -> Self {
        Self::default()
    }

    /// Create a query from three optional fields
    ///
    /// Concrete fields validate with the same rules as triple fields.
    pub fn new(
        service: Option<String>,
        instance: Option<String>,
        event: Option<String>,
    ) -> Result<Self, IdentError> {
        if let Some(ref service) = service {
            validate_ident("service", service)?;
        }
        if let Some(ref instance) = instance {
            validate_ident("instance", instance)?;
        }
        if let Some(ref event) = event {
            validate_ident("event", event)?;
        }

        Ok(Self {
            service,
            instance,
            event,
        })
    }

    /// Fix the service field
    pub fn service(mut self, service: impl Into<String>) -> Result<Self, IdentError> {
        let service = service.into();
        validate_ident("service", &service)?;
        self.service = Some(service);
        Ok(self)
    }

    /// Fix the instance field
    pub fn instance(mut self, instance: impl Into<String>) -> Result<Self, IdentError> {
        let instance = instance.into();
        validate_ident("instance", &instance)?;
        self.instance = Some(instance);
        Ok(self)
    }

    /// Fix the event field
    pub fn event(mut self, event: impl Into<String>) -> Result<Self, IdentError> {
        let event = event.into();
        validate_ident("event", &event)?;
        self.event = Some(event);
        Ok(self)
    }

    /// Check whether a triple matches this query
    ///
    /// Field-wise: a wildcard matches any value, a concrete field matches
    /// iff equal. Pure, no side effects.
    pub fn matches(&self, triple: &ServiceTriple) -> bool {
        fn field_matches(pattern: &Option<String>, value: &str) -> bool {
            match pattern {
                Some(p) => p == value,
                None => true,
            }
        }

        field_matches(&self.service, triple.service())
            && field_matches(&self.instance, triple.instance())
            && field_matches(&self.event, triple.event())
    }
}

impl fmt::Display for ServiceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part<'a>(pattern: &'a Option<String>) -> &'a str {
            pattern.as_deref().unwrap_or("*")
        }

        write!(
            f,
            "{}{sep}{}{sep}{}",
            part(&self.service),
            part(&self.instance),
            part(&self.event),
            sep = SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(service: &str, instance: &str, event: &str) -> ServiceTriple {
        ServiceTriple::new(service, instance, event).unwrap()
    }

    #[test]
    fn test_any_matches_everything() {
        let query = ServiceQuery::any();

        assert!(query.matches(&triple("nav", "front", "pose")));
        assert!(query.matches(&triple("lidar", "top", "scan")));
        assert!(query.matches(&triple("", "", "")));
    }

    #[test]
    fn test_service_only() {
        let query = ServiceQuery::any().service("nav").unwrap();

        // Matches every instance/event under the service
        assert!(query.matches(&triple("nav", "front", "pose")));
        assert!(query.matches(&triple("nav", "rear", "twist")));
        assert!(!query.matches(&triple("lidar", "front", "pose")));
    }

    #[test]
    fn test_fully_concrete() {
        let query = ServiceQuery::any()
            .service("nav")
            .unwrap()
            .instance("front")
            .unwrap()
            .event("pose")
            .unwrap();

        assert!(query.matches(&triple("nav", "front", "pose")));
        assert!(!query.matches(&triple("nav", "front", "twist")));
        assert!(!query.matches(&triple("nav", "rear", "pose")));
    }

    #[test]
    fn test_new_from_options() {
        let query =
            ServiceQuery::new(Some("nav".to_string()), None, Some("pose".to_string())).unwrap();

        assert!(query.matches(&triple("nav", "front", "pose")));
        assert!(query.matches(&triple("nav", "rear", "pose")));
        assert!(!query.matches(&triple("nav", "front", "twist")));
    }

    #[test]
    fn test_invalid_field_rejected() {
        let result = ServiceQuery::any().service("na/v");

        assert_eq!(
            result,
            Err(IdentError::InvalidCharacter {
                field: "service",
                ch: '/'
            })
        );
    }

    #[test]
    fn test_display_wildcards() {
        let query = ServiceQuery::any().service("nav").unwrap();
        assert_eq!(query.to_string(), "nav/*/*");

        assert_eq!(ServiceQuery::any().to_string(), "*/*/*");
    }
}
