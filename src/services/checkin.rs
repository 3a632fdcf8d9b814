//! Checkin service implementation
//!
//! This service enforces the attendance caps: at most one check-in per
//! student per local calendar day, and at most five within the trailing
//! seven days. The daily cap runs on calendar-day boundaries; the weekly cap
//! is a rolling window ending at the instant of the call.

use chrono::Utc;
use tracing::{debug, info};

use crate::database::repositories::{CheckinRepository, StudentRepository};
use crate::models::checkin::{Checkin, CheckinView};
use crate::utils::dates;
use crate::utils::errors::{GymBuddyError, Result};
use crate::utils::logging::log_rule_decision;

/// Maximum check-ins inside the rolling window
pub const ROLLING_CHECKIN_LIMIT: i64 = 5;

/// Length of the rolling window in days
pub const ROLLING_WINDOW_DAYS: i64 = 7;

/// Checkin service for attendance management
#[derive(Debug, Clone)]
pub struct CheckinService {
    checkins: CheckinRepository,
    students: StudentRepository,
}

impl CheckinService {
    /// Create a new CheckinService instance
    pub fn new(checkins: CheckinRepository, students: StudentRepository) -> Self {
        Self { checkins, students }
    }

    /// Record a check-in for a student
    pub async fn check_in(&self, student_id: i64) -> Result<Checkin> {
        debug!(student_id = student_id, "Processing check-in");

        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound { student_id })?;

        let now = Utc::now();

        let (day_start, day_end) = dates::local_day_bounds(now);
        if self
            .checkins
            .find_in_range(student_id, day_start, day_end)
            .await?
            .is_some()
        {
            log_rule_decision(student_id, "one_checkin_per_day", false);
            return Err(GymBuddyError::AlreadyCheckedInToday);
        }

        let window_start = dates::rolling_window_start(now, ROLLING_WINDOW_DAYS);
        let recent = self
            .checkins
            .count_in_window(student_id, window_start, now)
            .await?;
        if recent >= ROLLING_CHECKIN_LIMIT {
            log_rule_decision(student_id, "rolling_weekly_cap", false);
            return Err(GymBuddyError::TooManyCheckins);
        }

        let checkin = self.checkins.create(student_id).await?;
        info!(
            checkin_id = checkin.id,
            student_id = student_id,
            recent_count = recent + 1,
            "Check-in recorded"
        );

        Ok(checkin)
    }

    /// A student's check-in history, newest first
    pub async fn history(&self, student_id: i64) -> Result<Vec<CheckinView>> {
        let rows = self.checkins.history_with_student(student_id).await?;

        if rows.is_empty() {
            return Err(GymBuddyError::NoCheckinsFound { student_id });
        }

        Ok(rows.into_iter().map(CheckinView::from).collect())
    }
}
