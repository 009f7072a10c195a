//! Request lifecycle - state transitions for staffing requests
//!
//! Pending requests can be approved or rejected exactly once; both outcomes
//! are terminal. The unread flag is orthogonal and can be cleared at any
//! point without touching the status.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::team::Actor;
use crate::entities::request::{DecisionRecord, EngineerRequest, RequestStatus};

/// Errors from request lifecycle transitions
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Request {id} has already been {status}")]
    AlreadyProcessed { id: String, status: RequestStatus },

    #[error("{actor} ({role}) is not authorized to decide requests (requires hr)")]
    Unauthorized { actor: String, role: String },
}

fn check_decidable(request: &EngineerRequest, actor: &Actor) -> Result<(), LifecycleError> {
    if !actor.role.can_decide_requests() {
        return Err(LifecycleError::Unauthorized {
            actor: actor.name.clone(),
            role: actor.role.to_string(),
        });
    }
    if request.status.is_terminal() {
        return Err(LifecycleError::AlreadyProcessed {
            id: request.id.to_string(),
            status: request.status,
        });
    }
    Ok(())
}

/// Approve a pending request
///
/// Clears the unread flag and stamps the decision record. Fails with
/// `AlreadyProcessed` on a terminal request rather than silently
/// overwriting the earlier decision.
pub fn approve(
    request: &mut EngineerRequest,
    actor: &Actor,
    note: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), LifecycleError> {
    check_decidable(request, actor)?;

    request.status = RequestStatus::Approved;
    request.is_new = false;
    request.decision = Some(DecisionRecord {
        decided_by: actor.name.clone(),
        decided_at: now,
        note,
    });
    Ok(())
}

/// Reject a pending request
pub fn reject(
    request: &mut EngineerRequest,
    actor: &Actor,
    reason: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), LifecycleError> {
    check_decidable(request, actor)?;

    request.status = RequestStatus::Rejected;
    request.is_new = false;
    request.decision = Some(DecisionRecord {
        decided_by: actor.name.clone(),
        decided_at: now,
        note: reason,
    });
    Ok(())
}

/// Clear the unread flag without changing the workflow status
///
/// Idempotent; valid in any state.
pub fn mark_read(request: &mut EngineerRequest) {
    request.is_new = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{EntityId, EntityPrefix};
    use crate::core::team::Role;
    use crate::entities::request::Requester;

    fn test_request() -> EngineerRequest {
        EngineerRequest::new(
            EntityId::new(EntityPrefix::Prj),
            Requester {
                id: "lead-1".to_string(),
                name: "Sarah Wilson".to_string(),
                role: "Project Manager".to_string(),
            },
            "DevOps Engineer".to_string(),
            1,
            "Infrastructure scaling".to_string(),
            Utc::now(),
        )
    }

    fn hr() -> Actor {
        Actor::new("hr-admin", Role::Hr)
    }

    #[test]
    fn test_approve_pending() {
        let mut req = test_request();
        approve(&mut req, &hr(), None, Utc::now()).unwrap();

        assert_eq!(req.status, RequestStatus::Approved);
        assert!(!req.is_new);
        let decision = req.decision.unwrap();
        assert_eq!(decision.decided_by, "hr-admin");
    }

    #[test]
    fn test_reject_pending_with_reason() {
        let mut req = test_request();
        reject(&mut req, &hr(), Some("No budget".to_string()), Utc::now()).unwrap();

        assert_eq!(req.status, RequestStatus::Rejected);
        assert!(!req.is_new);
        assert_eq!(req.decision.unwrap().note.as_deref(), Some("No budget"));
    }

    #[test]
    fn test_double_approve_fails() {
        let mut req = test_request();
        approve(&mut req, &hr(), None, Utc::now()).unwrap();

        let err = approve(&mut req, &hr(), None, Utc::now()).unwrap_err();
        assert!(matches!(err, LifecycleError::AlreadyProcessed { .. }));
        // First decision is untouched
        assert_eq!(req.status, RequestStatus::Approved);
    }

    #[test]
    fn test_reject_after_approve_fails() {
        let mut req = test_request();
        approve(&mut req, &hr(), None, Utc::now()).unwrap();

        let err = reject(&mut req, &hr(), None, Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::AlreadyProcessed {
                status: RequestStatus::Approved,
                ..
            }
        ));
        assert_eq!(req.status, RequestStatus::Approved);
    }

    #[test]
    fn test_non_hr_cannot_decide() {
        let mut req = test_request();
        let lead = Actor::new("John Doe", Role::ProjectLead);

        let err = approve(&mut req, &lead, None, Utc::now()).unwrap_err();
        assert!(matches!(err, LifecycleError::Unauthorized { .. }));
        assert_eq!(req.status, RequestStatus::Pending);

        let err = reject(&mut req, &lead, None, Utc::now()).unwrap_err();
        assert!(matches!(err, LifecycleError::Unauthorized { .. }));
    }

    #[test]
    fn test_mark_read_is_idempotent_and_orthogonal() {
        let mut req = test_request();
        assert!(req.is_new);

        mark_read(&mut req);
        assert!(!req.is_new);
        assert_eq!(req.status, RequestStatus::Pending);

        mark_read(&mut req);
        assert!(!req.is_new);

        // Still decidable after being read
        approve(&mut req, &hr(), None, Utc::now()).unwrap();
        assert_eq!(req.status, RequestStatus::Approved);

        // And readable after being decided
        mark_read(&mut req);
        assert_eq!(req.status, RequestStatus::Approved);
    }
}
