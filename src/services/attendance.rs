//! Attendance service implementation

use crate::database::repositories::{AttendanceRepository, EventRepository, StudentRepository};
use crate::models::attendance::{AttendanceEntry, AttendanceRecord, MarkAttendanceRequest};
use crate::services::{ensure_event_and_student, validation};
use crate::utils::errors::{CampusError, DuplicateKind, Result};
use crate::utils::logging::{log_participation_write, log_rejected_write};

#[derive(Debug, Clone)]
pub struct AttendanceService {
    events: EventRepository,
    students: StudentRepository,
    attendance: AttendanceRepository,
}

impl AttendanceService {
    pub fn new(events: EventRepository, students: StudentRepository, attendance: AttendanceRepository) -> Self {
        Self {
            events,
            students,
            attendance,
        }
    }

    /// Mark a student present or absent at an event; one mark per pair
    pub async fn mark_attendance(&self, event_id: i64, request: MarkAttendanceRequest) -> Result<AttendanceRecord> {
        let (student_id, status) = validation::validate_attendance(request)?;
        ensure_event_and_student(&self.events, &self.students, event_id, student_id).await?;

        if self.attendance.exists(student_id, event_id).await? {
            log_rejected_write("attendance", student_id, event_id, "already marked");
            return Err(CampusError::AlreadyExists {
                kind: DuplicateKind::Attendance,
                student_id,
                event_id,
            });
        }

        let record = self.attendance.create(student_id, event_id, status).await?;
        log_participation_write("attendance", student_id, event_id, record.att_id);

        Ok(record)
    }

    pub async fn list_attendance(&self, event_id: i64) -> Result<Vec<AttendanceEntry>> {
        self.attendance.list_for_event(event_id).await
    }
}
