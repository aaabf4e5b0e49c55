//! Customer domain entity and the lead status pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lead pipeline status. A closed enumeration; the serialized strings are
/// part of the persisted schema and the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    Registered,
    #[serde(rename = "Appointment Scheduled")]
    AppointmentScheduled,
    Meeting,
    Closure,
    #[serde(rename = "Not Interested")]
    NotInterested,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::Registered,
        LeadStatus::AppointmentScheduled,
        LeadStatus::Meeting,
        LeadStatus::Closure,
        LeadStatus::NotInterested,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Registered => "Registered",
            LeadStatus::AppointmentScheduled => "Appointment Scheduled",
            LeadStatus::Meeting => "Meeting",
            LeadStatus::Closure => "Closure",
            LeadStatus::NotInterested => "Not Interested",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Registered" => Some(LeadStatus::Registered),
            "Appointment Scheduled" => Some(LeadStatus::AppointmentScheduled),
            "Meeting" => Some(LeadStatus::Meeting),
            "Closure" => Some(LeadStatus::Closure),
            "Not Interested" => Some(LeadStatus::NotInterested),
            _ => None,
        }
    }

    /// Closure and Not Interested are treated as inactive for aggregate
    /// counts. The field itself still permits further transition.
    pub fn is_inactive(&self) -> bool {
        matches!(self, LeadStatus::Closure | LeadStatus::NotInterested)
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::Registered
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment details collected when a lead moves into
/// `Appointment Scheduled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetails {
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
}

/// Intake fields for a new lead. Mobile is stored exactly as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: NaiveDate,
    pub status: LeadStatus,

    /// Present iff `status == AppointmentScheduled`. Both store backends
    /// clear it explicitly on any transition away.
    pub appointment: Option<AppointmentDetails>,

    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Completed-years age on the given date: calendar-year difference,
    /// minus one if the birthday has not occurred yet that year.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.dob, today)
    }
}

pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    use chrono::Datelike;
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(LeadStatus::from_str("Signed"), None);
    }

    #[test]
    fn test_status_wire_strings() {
        let json = serde_json::to_string(&LeadStatus::AppointmentScheduled).unwrap();
        assert_eq!(json, "\"Appointment Scheduled\"");
        let json = serde_json::to_string(&LeadStatus::NotInterested).unwrap();
        assert_eq!(json, "\"Not Interested\"");
    }

    #[test]
    fn test_inactive_statuses() {
        assert!(LeadStatus::Closure.is_inactive());
        assert!(LeadStatus::NotInterested.is_inactive());
        assert!(!LeadStatus::Registered.is_inactive());
        assert!(!LeadStatus::Meeting.is_inactive());
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        // Day before the birthday: 34 completed years.
        let before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(age_on(dob, before), 34);
        // On the birthday itself: 35.
        let on = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(age_on(dob, on), 35);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let dob = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        // In a non-leap year the birthday counts as completed on Mar 1.
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()), 24);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), 25);
    }
}
