//! Lead intake service: validation, creation, notification.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use lifesecure_shared::constants::{MAX_LEAD_AGE, MIN_LEAD_AGE, MOBILE_DIGITS};
use lifesecure_shared::mask_email;

use crate::domain::customer::age_on;
use crate::domain::{Customer, NewCustomer};
use crate::error::{DomainError, FieldErrors};
use crate::notifier::LeadNotifier;
use crate::repositories::CustomerRepository;

/// Raw lead form input, exactly as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// `YYYY-MM-DD`
    pub dob: String,
}

pub struct IntakeService {
    customers: Arc<dyn CustomerRepository>,
    notifier: Arc<dyn LeadNotifier>,
}

impl IntakeService {
    pub fn new(customers: Arc<dyn CustomerRepository>, notifier: Arc<dyn LeadNotifier>) -> Self {
        Self { customers, notifier }
    }

    /// Validate and persist a new lead, then fire the notification sink.
    /// Validation collects every violated rule before failing; a notifier
    /// failure is logged and swallowed, never rolling back the creation.
    pub async fn submit(&self, submission: LeadSubmission) -> Result<Customer, DomainError> {
        let today = Utc::now().date_naive();
        let fields = validate_submission(&submission, today)?;

        let customer = self.customers.create(&fields).await?;
        info!(
            customer_id = %customer.id,
            email = %mask_email(&customer.email),
            "new lead registered"
        );

        if let Err(e) = self.notifier.lead_created(&customer).await {
            warn!(customer_id = %customer.id, "failed to send lead notifications: {}", e);
        }

        Ok(customer)
    }
}

/// Check all intake rules against `today`, returning either the cleaned
/// fields or the full list of field violations.
pub fn validate_submission(
    submission: &LeadSubmission,
    today: NaiveDate,
) -> Result<NewCustomer, DomainError> {
    let mut errors = FieldErrors::new();

    let name = submission.name.trim();
    if name.is_empty() {
        errors.push("name", "Name is required");
    }

    if submission.email.is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(&submission.email) {
        errors.push("email", "Please enter a valid email address");
    }

    let digits: String = submission.mobile.chars().filter(|c| c.is_ascii_digit()).collect();
    if submission.mobile.is_empty() {
        errors.push("mobile", "Mobile number is required");
    } else if digits.len() != MOBILE_DIGITS {
        errors.push("mobile", "Please enter a valid 10-digit mobile number");
    }

    let dob = if submission.dob.is_empty() {
        errors.push("dob", "Date of birth is required");
        None
    } else {
        match NaiveDate::parse_from_str(&submission.dob, "%Y-%m-%d") {
            Ok(dob) => {
                let age = age_on(dob, today);
                if !(MIN_LEAD_AGE..=MAX_LEAD_AGE).contains(&age) {
                    errors.push(
                        "dob",
                        format!("Age must be between {} and {} years", MIN_LEAD_AGE, MAX_LEAD_AGE),
                    );
                    None
                } else {
                    Some(dob)
                }
            }
            Err(_) => {
                errors.push("dob", "Please enter a valid date of birth");
                None
            }
        }
    };

    match dob {
        Some(dob) if errors.is_empty() => Ok(NewCustomer {
            name: name.to_string(),
            email: submission.email.clone(),
            mobile: submission.mobile.clone(),
            dob,
        }),
        _ => Err(DomainError::Validation(errors)),
    }
}

/// Basic `local@domain` shape: exactly one `@`, non-empty segments, and a
/// dot somewhere in the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn submission(name: &str, email: &str, mobile: &str, dob: &str) -> LeadSubmission {
        LeadSubmission {
            name: name.to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
            dob: dob.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn dob_for_age(age: i32) -> String {
        let t = today();
        NaiveDate::from_ymd_opt(t.year() - age, t.month(), t.day())
            .unwrap()
            .format("%Y-%m-%d")
            .to_string()
    }

    #[test]
    fn test_valid_submission_passes() {
        let s = submission("  Priya Sharma  ", "priya@example.com", "987-654-3210", "1990-03-02");
        let fields = validate_submission(&s, today()).unwrap();
        assert_eq!(fields.name, "Priya Sharma");
        // Mobile is kept raw; only the digit count is validated.
        assert_eq!(fields.mobile, "987-654-3210");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("space in@mail.com"));
    }

    #[test]
    fn test_all_violations_collected_together() {
        let s = submission("Ravi", "not-an-email", "12345", dob_for_age(30).as_str());
        let err = validate_submission(&s, today()).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_field("email"));
                assert!(errors.contains_field("mobile"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let s = submission("   ", "", "", "");
        let err = validate_submission(&s, today()).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                for field in ["name", "email", "mobile", "dob"] {
                    assert!(errors.contains_field(field), "missing error for {}", field);
                }
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_age_exactly_18_passes() {
        let s = submission("Asha", "asha@example.com", "9876543210", &dob_for_age(18));
        assert!(validate_submission(&s, today()).is_ok());
    }

    #[test]
    fn test_day_before_18th_birthday_fails() {
        // Birthday is tomorrow, so only 17 completed years today.
        let t = today();
        let dob = NaiveDate::from_ymd_opt(t.year() - 18, t.month(), t.day() + 1)
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();
        let s = submission("Asha", "asha@example.com", "9876543210", &dob);
        let err = validate_submission(&s, t).unwrap_err();
        match err {
            DomainError::Validation(errors) => assert!(errors.contains_field("dob")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_age_exactly_80_passes() {
        let s = submission("Gopal", "gopal@example.com", "9876543210", &dob_for_age(80));
        assert!(validate_submission(&s, today()).is_ok());
    }

    #[test]
    fn test_age_81_fails() {
        let s = submission("Gopal", "gopal@example.com", "9876543210", &dob_for_age(81));
        let err = validate_submission(&s, today()).unwrap_err();
        match err {
            DomainError::Validation(errors) => assert!(errors.contains_field("dob")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_creates_registered_lead_and_notifies() {
        use crate::domain::{Customer, LeadStatus};
        use crate::notifier::MockLeadNotifier;
        use crate::repositories::customer_repository::MockCustomerRepository;
        use chrono::Utc;
        use uuid::Uuid;

        let mut repo = MockCustomerRepository::new();
        repo.expect_create().times(1).returning(|fields| {
            let now = Utc::now();
            Ok(Customer {
                id: Uuid::new_v4(),
                name: fields.name.clone(),
                email: fields.email.clone(),
                mobile: fields.mobile.clone(),
                dob: fields.dob,
                status: LeadStatus::Registered,
                appointment: None,
                submitted_at: now,
                updated_at: now,
            })
        });
        let mut notifier = MockLeadNotifier::new();
        notifier.expect_lead_created().times(1).returning(|_| Ok(()));

        let service = IntakeService::new(Arc::new(repo), Arc::new(notifier));
        let customer = service
            .submit(submission("Priya", "priya@example.com", "9876543210", "1990-03-02"))
            .await
            .unwrap();
        assert_eq!(customer.status, LeadStatus::Registered);
        assert!(customer.appointment.is_none());
    }

    #[tokio::test]
    async fn test_submit_accepts_accented_email() {
        use crate::domain::{Customer, LeadStatus};
        use crate::notifier::MockLeadNotifier;
        use crate::repositories::customer_repository::MockCustomerRepository;
        use chrono::Utc;
        use uuid::Uuid;

        let mut repo = MockCustomerRepository::new();
        repo.expect_create().times(1).returning(|fields| {
            let now = Utc::now();
            Ok(Customer {
                id: Uuid::new_v4(),
                name: fields.name.clone(),
                email: fields.email.clone(),
                mobile: fields.mobile.clone(),
                dob: fields.dob,
                status: LeadStatus::Registered,
                appointment: None,
                submitted_at: now,
                updated_at: now,
            })
        });
        let mut notifier = MockLeadNotifier::new();
        notifier.expect_lead_created().times(1).returning(|_| Ok(()));

        // Multi-byte local parts must survive intake, including the masked
        // log line written after creation.
        let service = IntakeService::new(Arc::new(repo), Arc::new(notifier));
        let customer = service
            .submit(submission("René", "rené@example.com", "9876543210", "1990-03-02"))
            .await
            .unwrap();
        assert_eq!(customer.email, "rené@example.com");
    }

    #[tokio::test]
    async fn test_submit_swallows_notifier_failure() {
        use crate::domain::{Customer, LeadStatus};
        use crate::notifier::MockLeadNotifier;
        use crate::repositories::customer_repository::MockCustomerRepository;
        use chrono::Utc;
        use uuid::Uuid;

        let mut repo = MockCustomerRepository::new();
        repo.expect_create().returning(|fields| {
            let now = Utc::now();
            Ok(Customer {
                id: Uuid::new_v4(),
                name: fields.name.clone(),
                email: fields.email.clone(),
                mobile: fields.mobile.clone(),
                dob: fields.dob,
                status: LeadStatus::Registered,
                appointment: None,
                submitted_at: now,
                updated_at: now,
            })
        });
        let mut notifier = MockLeadNotifier::new();
        notifier
            .expect_lead_created()
            .returning(|_| Err(DomainError::Internal("smtp down".into())));

        let service = IntakeService::new(Arc::new(repo), Arc::new(notifier));
        let result = service
            .submit(submission("Priya", "priya@example.com", "9876543210", "1990-03-02"))
            .await;
        assert!(result.is_ok(), "notification failure must not fail the intake");
    }

    #[tokio::test]
    async fn test_submit_does_not_touch_store_on_invalid_input() {
        use crate::notifier::MockLeadNotifier;
        use crate::repositories::customer_repository::MockCustomerRepository;

        let mut repo = MockCustomerRepository::new();
        repo.expect_create().times(0);
        let mut notifier = MockLeadNotifier::new();
        notifier.expect_lead_created().times(0);

        let service = IntakeService::new(Arc::new(repo), Arc::new(notifier));
        let result = service
            .submit(submission("", "bad", "123", "1990-03-02"))
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_unparseable_dob_rejected() {
        let s = submission("Asha", "asha@example.com", "9876543210", "15-06-1990");
        let err = validate_submission(&s, today()).unwrap_err();
        match err {
            DomainError::Validation(errors) => assert!(errors.contains_field("dob")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
