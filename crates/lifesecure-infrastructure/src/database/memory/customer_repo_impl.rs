//! In-memory customer repository (fallback store)

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use lifesecure_core::domain::{AppointmentDetails, Customer, LeadStatus, NewCustomer};
use lifesecure_core::error::DomainError;
use lifesecure_core::repositories::CustomerRepository;

/// Process-local store with the same contract as the PostgreSQL adapter.
/// Contents are lost on restart; that is acceptable for demo mode.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, fields: &NewCustomer) -> Result<Customer, DomainError> {
        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            mobile: fields.mobile.clone(),
            dob: fields.dob,
            status: LeadStatus::Registered,
            appointment: None,
            submitted_at: now,
            updated_at: now,
        };
        self.customers
            .write()
            .expect("customer store lock poisoned")
            .push(customer.clone());
        Ok(customer)
    }

    async fn list_all(&self) -> Result<Vec<Customer>, DomainError> {
        let mut all = self
            .customers
            .read()
            .expect("customer store lock poisoned")
            .clone();
        all.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(all)
    }

    async fn update_status(
        &self,
        id: &Uuid,
        status: LeadStatus,
        appointment: Option<AppointmentDetails>,
    ) -> Result<Customer, DomainError> {
        let mut customers = self
            .customers
            .write()
            .expect("customer store lock poisoned");
        let customer = customers
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or(DomainError::CustomerNotFound(*id))?;

        customer.status = status;
        if appointment.is_some() {
            customer.appointment = appointment;
        } else if status != LeadStatus::AppointmentScheduled {
            // Clear stale details so they never linger under another status.
            customer.appointment = None;
        }
        customer.updated_at = Utc::now();

        Ok(customer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "9876543210".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    fn details() -> AppointmentDetails {
        AppointmentDetails {
            date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            time: "10:30".to_string(),
            place: "Branch office".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_registered_status() {
        let repo = InMemoryCustomerRepository::new();
        let customer = repo.create(&fields("Priya")).await.unwrap();
        assert_eq!(customer.status, LeadStatus::Registered);
        assert!(customer.appointment.is_none());
        assert_eq!(customer.submitted_at, customer.updated_at);
    }

    #[tokio::test]
    async fn test_list_all_most_recent_first() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo.create(&fields("First")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = repo.create(&fields("Second")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_status_stores_appointment() {
        let repo = InMemoryCustomerRepository::new();
        let customer = repo.create(&fields("Priya")).await.unwrap();

        let updated = repo
            .update_status(&customer.id, LeadStatus::AppointmentScheduled, Some(details()))
            .await
            .unwrap();
        assert_eq!(updated.status, LeadStatus::AppointmentScheduled);
        assert_eq!(updated.appointment, Some(details()));
        assert!(updated.updated_at >= customer.updated_at);
    }

    #[tokio::test]
    async fn test_transition_away_clears_appointment() {
        let repo = InMemoryCustomerRepository::new();
        let customer = repo.create(&fields("Priya")).await.unwrap();
        repo.update_status(&customer.id, LeadStatus::AppointmentScheduled, Some(details()))
            .await
            .unwrap();

        let updated = repo
            .update_status(&customer.id, LeadStatus::Meeting, None)
            .await
            .unwrap();
        assert_eq!(updated.status, LeadStatus::Meeting);
        assert!(updated.appointment.is_none());
    }

    #[tokio::test]
    async fn test_reselect_without_details_keeps_appointment() {
        let repo = InMemoryCustomerRepository::new();
        let customer = repo.create(&fields("Priya")).await.unwrap();
        repo.update_status(&customer.id, LeadStatus::AppointmentScheduled, Some(details()))
            .await
            .unwrap();

        let updated = repo
            .update_status(&customer.id, LeadStatus::AppointmentScheduled, None)
            .await
            .unwrap();
        assert_eq!(updated.appointment, Some(details()));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryCustomerRepository::new();
        let id = Uuid::new_v4();
        let err = repo
            .update_status(&id, LeadStatus::Meeting, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CustomerNotFound(found) if found == id));
    }
}
