use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled)
    }
}

/// A scheduled session between a client and a counselor profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub counselor_id: String,
    pub client_id: String,
    pub client_name: String,
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
}

/// Input for booking; the store assigns the id and returns it so the
/// booking flow can reference the record immediately.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub counselor_id: String,
    pub client_id: String,
    pub client_name: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
}
