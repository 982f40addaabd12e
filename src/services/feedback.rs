//! Feedback service implementation

use crate::database::repositories::{EventRepository, FeedbackRepository, StudentRepository};
use crate::models::feedback::{Feedback, FeedbackSummary, SubmitFeedbackRequest};
use crate::services::{ensure_event_and_student, validation};
use crate::utils::errors::{CampusError, DuplicateKind, Result};
use crate::utils::helpers::average_rating;
use crate::utils::logging::{log_participation_write, log_rejected_write};

#[derive(Debug, Clone)]
pub struct FeedbackService {
    events: EventRepository,
    students: StudentRepository,
    feedback: FeedbackRepository,
}

impl FeedbackService {
    pub fn new(events: EventRepository, students: StudentRepository, feedback: FeedbackRepository) -> Self {
        Self {
            events,
            students,
            feedback,
        }
    }

    /// Store a 1-5 rating; each student rates an event at most once
    pub async fn submit_feedback(&self, event_id: i64, request: SubmitFeedbackRequest) -> Result<Feedback> {
        let (student_id, rating) = validation::validate_feedback(request)?;
        ensure_event_and_student(&self.events, &self.students, event_id, student_id).await?;

        if self.feedback.exists(student_id, event_id).await? {
            log_rejected_write("feedback", student_id, event_id, "already submitted");
            return Err(CampusError::AlreadyExists {
                kind: DuplicateKind::Feedback,
                student_id,
                event_id,
            });
        }

        let feedback = self.feedback.create(student_id, event_id, rating).await?;
        log_participation_write("feedback", student_id, event_id, feedback.feedback_id);

        Ok(feedback)
    }

    /// All feedback for an event with the mean rating
    pub async fn list_feedback(&self, event_id: i64) -> Result<FeedbackSummary> {
        let feedback = self.feedback.list_for_event(event_id).await?;
        let ratings: Vec<i64> = feedback.iter().map(|entry| entry.rating).collect();

        Ok(FeedbackSummary {
            average_rating: average_rating(&ratings),
            total_responses: feedback.len() as i64,
            feedback,
        })
    }
}
