//! Report service implementation

use crate::config::ReportsConfig;
use crate::database::repositories::ReportRepository;
use crate::models::report::{EventPopularity, Overview, StudentParticipation, TopStudent};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::log_report;

#[derive(Debug, Clone)]
pub struct ReportService {
    reports: ReportRepository,
    config: ReportsConfig,
}

impl ReportService {
    pub fn new(reports: ReportRepository, config: ReportsConfig) -> Self {
        Self { reports, config }
    }

    pub async fn popularity(&self) -> Result<Vec<EventPopularity>> {
        let rows = self.reports.popularity().await?;
        log_report("popularity", rows.len());
        Ok(rows)
    }

    pub async fn student_participation(&self, student_id: i64) -> Result<StudentParticipation> {
        let row = self
            .reports
            .student_participation(student_id)
            .await?
            .ok_or(CampusError::StudentNotFound { student_id })?;
        log_report("student_participation", 1);
        Ok(row)
    }

    /// Most present students; `limit` falls back to the configured default
    pub async fn top_students(&self, limit: Option<i64>) -> Result<Vec<TopStudent>> {
        let limit = self.resolve_limit(limit);
        let rows = self.reports.top_students(limit).await?;
        log_report("top_students", rows.len());
        Ok(rows)
    }

    pub async fn overview(&self) -> Result<Overview> {
        let overview = self.reports.overview().await?;
        log_report("overview", 1);
        Ok(overview)
    }

    fn resolve_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.config.top_students_limit)
            .clamp(1, self.config.max_top_students)
    }
}
