//! Boundary validation for entity construction
//!
//! Entities are validated once, before anything is written to disk. The
//! rule functions can then assume well-formed records.

use thiserror::Error;

use crate::entities::engineer::Engineer;
use crate::entities::project::Project;
use crate::entities::request::EngineerRequest;

/// A malformed entity field, with the specific reason
#[derive(Debug, Error)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|part| !part.is_empty())
}

/// Validate a project before it is saved
pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.name.trim().len() < 2 {
        return Err(ValidationError::new(
            "name",
            "must be at least 2 characters",
        ));
    }
    if let (Some(start), Some(end)) = (project.start_date, project.end_date) {
        if end < start {
            return Err(ValidationError::new(
                "end_date",
                format!("{} is before start date {}", end, start),
            ));
        }
    }
    Ok(())
}

/// Validate an engineer before it is saved
///
/// `existing_emails` supports the workspace-wide uniqueness check.
pub fn validate_engineer(
    engineer: &Engineer,
    existing_emails: &[String],
) -> Result<(), ValidationError> {
    if engineer.name.trim().len() < 2 {
        return Err(ValidationError::new(
            "name",
            "must be at least 2 characters",
        ));
    }
    if !is_plausible_email(&engineer.email) {
        return Err(ValidationError::new(
            "email",
            format!("'{}' is not a valid email address", engineer.email),
        ));
    }
    if existing_emails
        .iter()
        .any(|e| e.eq_ignore_ascii_case(&engineer.email))
    {
        return Err(ValidationError::new(
            "email",
            format!("'{}' is already registered", engineer.email),
        ));
    }
    let current_count = engineer.designations.iter().filter(|d| d.is_current).count();
    if current_count > 1 {
        return Err(ValidationError::new(
            "designations",
            format!("{} designations marked current; at most one allowed", current_count),
        ));
    }
    Ok(())
}

/// Validate a staffing request before it is saved
pub fn validate_request(request: &EngineerRequest) -> Result<(), ValidationError> {
    if request.quantity < 1 {
        return Err(ValidationError::new("quantity", "must be at least 1"));
    }
    if request.role.trim().is_empty() {
        return Err(ValidationError::new("role", "must not be empty"));
    }
    if request.justification.trim().is_empty() {
        return Err(ValidationError::new("justification", "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{EntityId, EntityPrefix};
    use crate::entities::engineer::Designation;
    use crate::entities::request::Requester;
    use chrono::{NaiveDate, Utc};

    fn engineer(name: &str, email: &str) -> Engineer {
        Engineer::new(name.to_string(), email.to_string(), "test".to_string(), Utc::now())
    }

    #[test]
    fn test_project_name_too_short() {
        let p = Project::new("X".to_string(), 3, "test".to_string(), Utc::now());
        let err = validate_project(&p).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_project_dates_ordered() {
        let p = Project::new("Portal".to_string(), 3, "test".to_string(), Utc::now()).with_dates(
            NaiveDate::from_ymd_opt(2024, 6, 1),
            NaiveDate::from_ymd_opt(2024, 5, 1),
        );
        let err = validate_project(&p).unwrap_err();
        assert_eq!(err.field, "end_date");

        let p = Project::new("Portal".to_string(), 3, "test".to_string(), Utc::now()).with_dates(
            NaiveDate::from_ymd_opt(2024, 5, 1),
            NaiveDate::from_ymd_opt(2024, 6, 1),
        );
        assert!(validate_project(&p).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_engineer(&engineer("Priya Sharma", "priya@example.com"), &[]).is_ok());

        for bad in ["priya", "priya@", "@example.com", "priya@example", "a b@example.com"] {
            let err = validate_engineer(&engineer("Priya Sharma", bad), &[]).unwrap_err();
            assert_eq!(err.field, "email", "expected {} to be rejected", bad);
        }
    }

    #[test]
    fn test_duplicate_email_rejected_case_insensitively() {
        let existing = vec!["priya@example.com".to_string()];
        let err =
            validate_engineer(&engineer("Priya Sharma", "PRIYA@example.com"), &existing)
                .unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_multiple_current_designations_rejected() {
        let designation = |current| Designation {
            name: "Developer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: None,
            is_current: current,
        };
        let eng = engineer("Priya Sharma", "priya@example.com")
            .with_designations(vec![designation(true), designation(true)]);

        let err = validate_engineer(&eng, &[]).unwrap_err();
        assert_eq!(err.field, "designations");
    }

    #[test]
    fn test_request_quantity_and_fields() {
        let mut req = EngineerRequest::new(
            EntityId::new(EntityPrefix::Prj),
            Requester {
                id: "lead-1".to_string(),
                name: "John".to_string(),
                role: "Project Lead".to_string(),
            },
            "Backend Developer".to_string(),
            0,
            "Need help".to_string(),
            Utc::now(),
        );
        assert_eq!(validate_request(&req).unwrap_err().field, "quantity");

        req.quantity = 1;
        req.role = "  ".to_string();
        assert_eq!(validate_request(&req).unwrap_err().field, "role");

        req.role = "Backend Developer".to_string();
        req.justification = String::new();
        assert_eq!(validate_request(&req).unwrap_err().field, "justification");

        req.justification = "Scaling".to_string();
        assert!(validate_request(&req).is_ok());
    }
}
