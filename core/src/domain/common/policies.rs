use std::fmt;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::UserType,
};

/// Operations gated by the clinic policy. Variants that touch a single
/// patient's records carry that patient's id so ownership can be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ManagePatients,
    RecordSymptom,
    ViewSymptoms { patient_id: Uuid },
    DeleteSymptom { patient_id: Uuid },
    GeneratePrediction,
    ViewPrediction { patient_id: Uuid },
    ViewOwnDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessReason {
    Staff,
    OwnRecord,
    StaffOnly,
    NotRecordOwner,
    PatientOnly,
}

impl fmt::Display for AccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AccessReason::Staff => "staff member",
            AccessReason::OwnRecord => "patient accessing own record",
            AccessReason::StaffOnly => "access denied, admin only",
            AccessReason::NotRecordOwner => "access denied, record belongs to another patient",
            AccessReason::PatientOnly => "access denied, patient only",
        };

        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: AccessReason,
}

impl AccessDecision {
    fn allow(reason: AccessReason) -> Self {
        Self {
            allowed: true,
            reason,
        }
    }

    fn deny(reason: AccessReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

pub trait Policy: Send + Sync {
    fn authorize(&self, identity: &Identity, action: &Action) -> AccessDecision;
}

/// Single role rule set: staff manage everything except the patient
/// dashboard, patients only touch records they own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicPolicy;

impl Policy for ClinicPolicy {
    fn authorize(&self, identity: &Identity, action: &Action) -> AccessDecision {
        match (identity.user_type(), action) {
            (UserType::Admin, Action::ViewOwnDashboard) => {
                AccessDecision::deny(AccessReason::PatientOnly)
            }
            (UserType::Admin, _) => AccessDecision::allow(AccessReason::Staff),

            (UserType::Patient, Action::ViewOwnDashboard) => {
                AccessDecision::allow(AccessReason::OwnRecord)
            }
            (
                UserType::Patient,
                Action::ViewSymptoms { patient_id }
                | Action::DeleteSymptom { patient_id }
                | Action::ViewPrediction { patient_id },
            ) => {
                if *patient_id == identity.id() {
                    AccessDecision::allow(AccessReason::OwnRecord)
                } else {
                    AccessDecision::deny(AccessReason::NotRecordOwner)
                }
            }
            (
                UserType::Patient,
                Action::ManagePatients | Action::RecordSymptom | Action::GeneratePrediction,
            ) => AccessDecision::deny(AccessReason::StaffOnly),
        }
    }
}

pub fn ensure_policy(decision: AccessDecision) -> Result<(), CoreError> {
    if decision.allowed {
        return Ok(());
    }

    warn!("policy denied request: {}", decision.reason);
    Err(CoreError::Forbidden(decision.reason.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_utils::{admin_user, patient_user};

    #[test]
    fn test_admin_is_allowed_staff_actions() {
        let identity = Identity::new(admin_user());
        let policy = ClinicPolicy;

        for action in [
            Action::ManagePatients,
            Action::RecordSymptom,
            Action::GeneratePrediction,
            Action::ViewSymptoms {
                patient_id: Uuid::new_v4(),
            },
            Action::DeleteSymptom {
                patient_id: Uuid::new_v4(),
            },
            Action::ViewPrediction {
                patient_id: Uuid::new_v4(),
            },
        ] {
            let decision = policy.authorize(&identity, &action);
            assert!(decision.allowed, "admin denied {action:?}");
            assert_eq!(decision.reason, AccessReason::Staff);
        }
    }

    #[test]
    fn test_admin_has_no_patient_dashboard() {
        let decision = ClinicPolicy.authorize(
            &Identity::new(admin_user()),
            &Action::ViewOwnDashboard,
        );

        assert!(!decision.allowed);
        assert_eq!(decision.reason, AccessReason::PatientOnly);
    }

    #[test]
    fn test_patient_is_denied_staff_actions() {
        let identity = Identity::new(patient_user());

        for action in [
            Action::ManagePatients,
            Action::RecordSymptom,
            Action::GeneratePrediction,
        ] {
            let decision = ClinicPolicy.authorize(&identity, &action);
            assert!(!decision.allowed);
            assert_eq!(decision.reason, AccessReason::StaffOnly);
        }
    }

    #[test]
    fn test_patient_only_reaches_own_records() {
        let patient = patient_user();
        let identity = Identity::new(patient.clone());

        let own = ClinicPolicy.authorize(
            &identity,
            &Action::ViewPrediction {
                patient_id: patient.id,
            },
        );
        assert!(own.allowed);
        assert_eq!(own.reason, AccessReason::OwnRecord);

        let other = ClinicPolicy.authorize(
            &identity,
            &Action::DeleteSymptom {
                patient_id: Uuid::new_v4(),
            },
        );
        assert!(!other.allowed);
        assert_eq!(other.reason, AccessReason::NotRecordOwner);
    }

    #[test]
    fn test_ensure_policy_maps_denial_to_forbidden() {
        let decision = ClinicPolicy.authorize(
            &Identity::new(patient_user()),
            &Action::GeneratePrediction,
        );

        assert_eq!(
            ensure_policy(decision),
            Err(CoreError::Forbidden(
                "access denied, admin only".to_string()
            ))
        );
    }
}
