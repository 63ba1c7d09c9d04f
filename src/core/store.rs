//! The record store.
//!
//! Owns the in-memory snapshot of every entity collection and funnels all
//! mutation through its named operations. Callers never get a mutable
//! handle to a collection; they read slices and submit changes here.
//!
//! Persistence is an explicit step: each mutation ends with a
//! full-collection write-back of the touched collection to its durable
//! key. There is no diffing and no batching, so after any operation the
//! database holds exactly what memory holds.

use uuid::Uuid;

use crate::core::seed;
use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::models::counselor::{Counselor, NewCounselor};
use crate::models::invoice::{Invoice, NewInvoice};
use crate::models::message::Message;

pub struct Store {
    pool: DbPool,
    counselors: Vec<Counselor>,
    appointments: Vec<Appointment>,
    messages: Vec<Message>,
    invoices: Vec<Invoice>,
}

impl Store {
    /// Load every collection from durable storage. A collection whose key
    /// is absent is seeded with the built-in sample dataset and the seeds
    /// are persisted immediately, so a fresh database is browsable.
    pub fn open(pool: DbPool) -> AppResult<Self> {
        let counselors = match kv::load_json(&pool.conn, kv::KEY_COUNSELORS)? {
            Some(list) => list,
            None => {
                let seeds = seed::sample_counselors();
                kv::store_json(&pool.conn, kv::KEY_COUNSELORS, &seeds)?;
                seeds
            }
        };
        let appointments = match kv::load_json(&pool.conn, kv::KEY_APPOINTMENTS)? {
            Some(list) => list,
            None => {
                let seeds = seed::sample_appointments();
                kv::store_json(&pool.conn, kv::KEY_APPOINTMENTS, &seeds)?;
                seeds
            }
        };
        let messages = match kv::load_json(&pool.conn, kv::KEY_MESSAGES)? {
            Some(list) => list,
            None => {
                let seeds = seed::sample_messages();
                kv::store_json(&pool.conn, kv::KEY_MESSAGES, &seeds)?;
                seeds
            }
        };
        let invoices = match kv::load_json(&pool.conn, kv::KEY_INVOICES)? {
            Some(list) => list,
            None => {
                let seeds = seed::sample_invoices();
                kv::store_json(&pool.conn, kv::KEY_INVOICES, &seeds)?;
                seeds
            }
        };

        Ok(Self {
            pool,
            counselors,
            appointments,
            messages,
            invoices,
        })
    }

    /// Borrow the underlying pool, e.g. for internal logging alongside a
    /// store mutation.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    // ---------------------------
    // Snapshots
    // ---------------------------

    pub fn counselors(&self) -> &[Counselor] {
        &self.counselors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn counselor_by_id(&self, id: &str) -> Option<&Counselor> {
        self.counselors.iter().find(|c| c.id == id)
    }

    /// Display name for a counselor id. Missing ids render as a
    /// placeholder instead of failing; profiles are never deleted, but a
    /// foreign database may hold references this one does not know.
    pub fn counselor_name(&self, id: &str) -> String {
        self.counselor_by_id(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown counselor".to_string())
    }

    pub fn appointment_by_id(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn invoice_by_id(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    pub fn message_by_id(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    // ---------------------------
    // Counselors
    // ---------------------------

    /// Append a new counselor profile and return its generated id.
    pub fn add_counselor(&mut self, new: NewCounselor) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        self.counselors.push(Counselor {
            id: id.clone(),
            name: new.name,
            title: new.title,
            credentials: new.credentials,
            denomination: new.denomination,
            image_url: new.image_url,
            specialties: new.specialties,
            location: new.location,
            bio: new.bio,
            email: new.email,
            paypal_link: new.paypal_link,
            availability: new.availability,
            hourly_rate: new.hourly_rate,
            education: new.education,
            accreditation: new.accreditation,
            gender: new.gender,
            years_experience: new.years_experience,
            accepting_clients: new.accepting_clients,
        });
        self.save_counselors()?;
        Ok(id)
    }

    // ---------------------------
    // Appointments
    // ---------------------------

    /// Append a new appointment (created `scheduled`) and return its
    /// generated id so the booking flow can reference it immediately.
    pub fn add_appointment(&mut self, new: NewAppointment) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        self.appointments.push(Appointment {
            id: id.clone(),
            counselor_id: new.counselor_id,
            client_id: new.client_id,
            client_name: new.client_name,
            date: new.date,
            status: AppointmentStatus::Scheduled,
            notes: new.notes,
            meeting_link: new.meeting_link,
        });
        self.save_appointments()?;
        Ok(id)
    }

    /// Replace the appointment whose id matches, whole-record. When no id
    /// matches this is a silent no-op: the collection is left unmodified.
    pub fn update_appointment(&mut self, appointment: Appointment) -> AppResult<()> {
        for a in &mut self.appointments {
            if a.id == appointment.id {
                *a = appointment;
                break;
            }
        }
        self.save_appointments()
    }

    // ---------------------------
    // Messages
    // ---------------------------

    /// Append a message (timestamped now, unread) and return its id.
    pub fn add_message(
        &mut self,
        sender_id: &str,
        sender_name: &str,
        receiver_id: &str,
        content: &str,
    ) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        self.messages.push(Message {
            id: id.clone(),
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            timestamp: chrono::Utc::now(),
            read: false,
        });
        self.save_messages()?;
        Ok(id)
    }

    /// Flip the read flag to true. Idempotent; an unknown id is a silent
    /// no-op and the flag never moves back to false.
    pub fn mark_message_as_read(&mut self, message_id: &str) -> AppResult<()> {
        for m in &mut self.messages {
            if m.id == message_id {
                m.read = true;
                break;
            }
        }
        self.save_messages()
    }

    // ---------------------------
    // Invoices
    // ---------------------------

    /// Append a new invoice and return its generated id.
    pub fn add_invoice(&mut self, new: NewInvoice) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        self.invoices.push(Invoice {
            id: id.clone(),
            counselor_id: new.counselor_id,
            amount: new.amount,
            date: new.date,
            due_date: new.due_date,
            status: new.status,
            description: new.description,
        });
        self.save_invoices()?;
        Ok(id)
    }

    /// Replace the invoice whose id matches, whole-record. When no id
    /// matches this is a silent no-op: the collection is left unmodified.
    pub fn update_invoice(&mut self, invoice: Invoice) -> AppResult<()> {
        for i in &mut self.invoices {
            if i.id == invoice.id {
                *i = invoice;
                break;
            }
        }
        self.save_invoices()
    }

    // ---------------------------
    // Persistence
    // ---------------------------

    fn save_counselors(&self) -> AppResult<()> {
        kv::store_json(&self.pool.conn, kv::KEY_COUNSELORS, &self.counselors)
    }

    fn save_appointments(&self) -> AppResult<()> {
        kv::store_json(&self.pool.conn, kv::KEY_APPOINTMENTS, &self.appointments)
    }

    fn save_messages(&self) -> AppResult<()> {
        kv::store_json(&self.pool.conn, kv::KEY_MESSAGES, &self.messages)
    }

    fn save_invoices(&self) -> AppResult<()> {
        kv::store_json(&self.pool.conn, kv::KEY_INVOICES, &self.invoices)
    }
}
