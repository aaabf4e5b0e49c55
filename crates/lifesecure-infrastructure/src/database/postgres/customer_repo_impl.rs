//! PostgreSQL customer repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use lifesecure_core::domain::{AppointmentDetails, Customer, LeadStatus, NewCustomer};
use lifesecure_core::error::DomainError;
use lifesecure_core::repositories::CustomerRepository;

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping; appointment details are stored flat.
#[derive(Debug, FromRow)]
struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: NaiveDate,
    pub status: String,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<String>,
    pub appointment_place: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, DomainError> {
        // The status column carries a CHECK constraint; an unknown value means
        // the schema and the code disagree, which must surface, not default.
        let status = LeadStatus::from_str(&row.status).ok_or_else(|| {
            error!(customer_id = %row.id, status = %row.status, "unrecognized status in customers row");
            DomainError::Internal(format!("unrecognized customer status: {}", row.status))
        })?;
        let appointment = match (row.appointment_date, row.appointment_time, row.appointment_place)
        {
            (Some(date), Some(time), Some(place)) => {
                Some(AppointmentDetails { date, time, place })
            }
            _ => None,
        };
        Ok(Customer {
            id: row.id,
            name: row.name,
            email: row.email,
            mobile: row.mobile,
            dob: row.dob,
            status,
            appointment,
            submitted_at: row.submitted_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, fields: &NewCustomer) -> Result<Customer, DomainError> {
        let row: CustomerRow = sqlx::query_as(
            r#"
            INSERT INTO customers (id, name, email, mobile, dob, status, submitted_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING
                id, name, email, mobile, dob, status,
                appointment_date, appointment_time, appointment_place,
                submitted_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.mobile)
        .bind(fields.dob)
        .bind(LeadStatus::Registered.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating customer: {}", e);
            DomainError::BackendUnavailable(e.to_string())
        })?;

        row.try_into()
    }

    async fn list_all(&self) -> Result<Vec<Customer>, DomainError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT
                id, name, email, mobile, dob, status,
                appointment_date, appointment_time, appointment_place,
                submitted_at, updated_at
            FROM customers
            ORDER BY submitted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing customers: {}", e);
            DomainError::BackendUnavailable(e.to_string())
        })?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn update_status(
        &self,
        id: &Uuid,
        status: LeadStatus,
        appointment: Option<AppointmentDetails>,
    ) -> Result<Customer, DomainError> {
        // Keeping details without supplying new ones only happens in the
        // degenerate re-select of Appointment Scheduled. Every other path
        // writes the appointment columns, clearing stale details explicitly.
        let keep_existing = appointment.is_none() && status == LeadStatus::AppointmentScheduled;

        let result = if keep_existing {
            sqlx::query_as(
                r#"
                UPDATE customers
                SET status = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING
                    id, name, email, mobile, dob, status,
                    appointment_date, appointment_time, appointment_place,
                    submitted_at, updated_at
                "#,
            )
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await
        } else {
            let (date, time, place) = match &appointment {
                Some(a) => (Some(a.date), Some(a.time.clone()), Some(a.place.clone())),
                None => (None, None, None),
            };
            sqlx::query_as(
                r#"
                UPDATE customers
                SET status = $2,
                    appointment_date = $3,
                    appointment_time = $4,
                    appointment_place = $5,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING
                    id, name, email, mobile, dob, status,
                    appointment_date, appointment_time, appointment_place,
                    submitted_at, updated_at
                "#,
            )
            .bind(id)
            .bind(status.as_str())
            .bind(date)
            .bind(time)
            .bind(place)
            .fetch_optional(&self.pool)
            .await
        };

        let row: Option<CustomerRow> = result.map_err(|e: sqlx::Error| {
            error!("Database error updating customer status: {}", e);
            DomainError::BackendUnavailable(e.to_string())
        })?;

        match row {
            Some(row) => row.try_into(),
            None => Err(DomainError::CustomerNotFound(*id)),
        }
    }
}
