//! Registration service implementation

use crate::database::repositories::{EventRepository, RegistrationRepository, StudentRepository};
use crate::models::registration::{RegisterStudentRequest, Registrant, Registration};
use crate::services::{ensure_event_and_student, validation};
use crate::utils::errors::{CampusError, DuplicateKind, Result};
use crate::utils::logging::{log_participation_write, log_rejected_write};

#[derive(Debug, Clone)]
pub struct RegistrationService {
    events: EventRepository,
    students: StudentRepository,
    registrations: RegistrationRepository,
}

impl RegistrationService {
    pub fn new(events: EventRepository, students: StudentRepository, registrations: RegistrationRepository) -> Self {
        Self {
            events,
            students,
            registrations,
        }
    }

    /// Register a student for an event.
    ///
    /// Checks, in order: payload, event exists, student exists, not yet registered.
    pub async fn register_student(&self, event_id: i64, request: RegisterStudentRequest) -> Result<Registration> {
        let student_id = validation::validate_registration(request)?;
        ensure_event_and_student(&self.events, &self.students, event_id, student_id).await?;

        if self.registrations.exists(student_id, event_id).await? {
            log_rejected_write("register", student_id, event_id, "already registered");
            return Err(CampusError::AlreadyExists {
                kind: DuplicateKind::Registration,
                student_id,
                event_id,
            });
        }

        let registration = self.registrations.create(student_id, event_id).await?;
        log_participation_write("register", student_id, event_id, registration.reg_id);

        Ok(registration)
    }

    /// Everyone registered for an event
    pub async fn list_registrations(&self, event_id: i64) -> Result<Vec<Registrant>> {
        self.registrations.list_for_event(event_id).await
    }
}
