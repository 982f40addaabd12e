//! Event service implementation
//!
//! Creation and lookup of events. An event always belongs to an existing college.

use tracing::{debug, info};

use crate::database::repositories::{CollegeRepository, EventRepository};
use crate::models::event::{CreateEventRequest, Event, EventDetails};
use crate::services::validation;
use crate::utils::errors::{CampusError, Result};

#[derive(Debug, Clone)]
pub struct EventService {
    events: EventRepository,
    colleges: CollegeRepository,
}

impl EventService {
    pub fn new(events: EventRepository, colleges: CollegeRepository) -> Self {
        Self { events, colleges }
    }

    /// Validate and store a new event
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let new_event = validation::validate_new_event(request)?;

        if !self.colleges.exists(new_event.college_id).await? {
            return Err(CampusError::CollegeNotFound {
                college_id: new_event.college_id,
            });
        }

        let event = self.events.create(new_event).await?;
        info!(event_id = event.event_id, college_id = event.college_id, title = %event.title, "Event created");

        Ok(event)
    }

    /// All events, most recent date first
    pub async fn list_events(&self) -> Result<Vec<EventDetails>> {
        let events = self.events.list().await?;
        debug!(count = events.len(), "Listed events");
        Ok(events)
    }

    /// One event with its college name
    pub async fn get_event(&self, event_id: i64) -> Result<EventDetails> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(CampusError::EventNotFound { event_id })
    }
}
