//! Help order service implementation
//!
//! This service records student questions and staff answers. An order is
//! answered at most once; the owning student is notified by mail when the
//! answer lands.

use chrono::Utc;
use tracing::{debug, info};

use crate::database::repositories::{HelpOrderRepository, StudentRepository};
use crate::models::help_order::{
    AnswerHelpOrderRequest, AskHelpOrderRequest, HelpOrder, HelpOrderView,
};
use crate::services::mailer::MailerService;
use crate::utils::errors::{GymBuddyError, Result};

/// Help order service for the question/answer workflow
#[derive(Debug, Clone)]
pub struct HelpOrderService {
    help_orders: HelpOrderRepository,
    students: StudentRepository,
    mailer: MailerService,
}

impl HelpOrderService {
    /// Create a new HelpOrderService instance
    pub fn new(
        help_orders: HelpOrderRepository,
        students: StudentRepository,
        mailer: MailerService,
    ) -> Self {
        Self {
            help_orders,
            students,
            mailer,
        }
    }

    /// Record a student question
    pub async fn ask(&self, student_id: i64, request: AskHelpOrderRequest) -> Result<HelpOrder> {
        debug!(student_id = student_id, "Recording help order");

        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound { student_id })?;

        let question = request
            .question
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| GymBuddyError::Validation("A question is required".to_string()))?;

        let order = self.help_orders.create(student_id, question).await?;
        info!(order_id = order.id, student_id = student_id, "Help order created");

        Ok(order)
    }

    /// Answer an open help order
    ///
    /// The open -> answered transition is one-way; answering twice fails.
    pub async fn answer(&self, order_id: i64, request: AnswerHelpOrderRequest) -> Result<HelpOrder> {
        debug!(order_id = order_id, "Answering help order");

        let order = self
            .help_orders
            .find_by_id(order_id)
            .await?
            .ok_or(GymBuddyError::HelpOrderNotFound { order_id })?;

        let answer = request
            .answer
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| GymBuddyError::Validation("An answer is required".to_string()))?;

        if order.is_answered() {
            return Err(GymBuddyError::Validation(
                "Help order already answered".to_string(),
            ));
        }

        let student = self
            .students
            .find_by_id(order.student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound {
                student_id: order.student_id,
            })?;

        let updated = self
            .help_orders
            .set_answer(order.id, answer, Utc::now())
            .await?;
        info!(order_id = updated.id, student_id = student.id, "Help order answered");

        self.mailer
            .deliver_help_order_answer(&student, &updated.question, answer)
            .await;

        Ok(updated)
    }

    /// All unanswered orders, newest first
    pub async fn list_unanswered(&self) -> Result<Vec<HelpOrderView>> {
        let rows = self.help_orders.list_unanswered().await?;

        Ok(rows.into_iter().map(HelpOrderView::from).collect())
    }

    /// All of a student's orders, answered or not, newest first
    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<HelpOrderView>> {
        let rows = self.help_orders.list_for_student(student_id).await?;

        Ok(rows.into_iter().map(HelpOrderView::from).collect())
    }
}
