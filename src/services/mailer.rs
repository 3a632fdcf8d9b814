//! Mailer service implementation
//!
//! This service renders message templates and hands the result to an
//! external mail gateway over HTTP. Delivery failures are logged and never
//! propagated to the request that triggered them.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::MailerConfig;
use crate::models::student::Student;
use crate::utils::errors::{GymBuddyError, Result};

/// Structured outbound message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    pub template: String,
    pub context: HashMap<String, String>,
}

/// JSON body accepted by the mail gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayPayload {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub template: String,
    pub body: String,
}

/// Mailer service for outbound notifications
#[derive(Debug, Clone)]
pub struct MailerService {
    client: Client,
    config: MailerConfig,
    templates: HashMap<String, String>,
}

impl MailerService {
    /// Create a new MailerService instance
    pub fn new(config: MailerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("GymBuddy/1.0")
            .build()
            .map_err(GymBuddyError::Mail)?;

        Ok(Self {
            client,
            config,
            templates: Self::load_default_templates(),
        })
    }

    /// Send a message through the gateway
    pub async fn send(&self, message: &OutboundMessage) -> Result<()> {
        debug!(to = %message.to_email, template = %message.template, "Sending mail");

        let payload = GatewayPayload {
            from: format!("{} <{}>", self.config.sender_name, self.config.sender_email),
            to: format!("{} <{}>", message.to_name, message.to_email),
            subject: message.subject.clone(),
            template: message.template.clone(),
            body: self.render(&message.template, &message.context)?,
        };

        self.client
            .post(&self.config.api_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        info!(to = %message.to_email, template = %message.template, "Mail sent successfully");
        Ok(())
    }

    /// Send a message, swallowing delivery failures
    ///
    /// Delivery is best-effort: the triggering request must not fail because
    /// the gateway is down.
    pub async fn deliver(&self, message: OutboundMessage) {
        if let Err(e) = self.send(&message).await {
            warn!(to = %message.to_email, template = %message.template, error = %e, "Failed to send mail");
        }
    }

    /// Welcome mail for a new registration
    pub async fn deliver_registration_welcome(
        &self,
        student: &Student,
        plan_title: &str,
        plan_duration: i32,
        end_date: &str,
        total_price: f64,
    ) {
        let message = OutboundMessage {
            to_name: student.name.clone(),
            to_email: student.email.clone(),
            subject: "Welcome to GymBuddy".to_string(),
            template: "registration_welcome".to_string(),
            context: HashMap::from([
                ("student_name".to_string(), student.name.clone()),
                ("plan_title".to_string(), plan_title.to_string()),
                ("plan_duration".to_string(), plan_duration.to_string()),
                ("end_date".to_string(), end_date.to_string()),
                ("total_price".to_string(), format!("{total_price:.2}")),
            ]),
        };

        self.deliver(message).await;
    }

    /// Update mail for an amended registration
    pub async fn deliver_registration_update(
        &self,
        student: &Student,
        plan_title: &str,
        plan_duration: i32,
        end_date: &str,
        total_price: f64,
    ) {
        let message = OutboundMessage {
            to_name: student.name.clone(),
            to_email: student.email.clone(),
            subject: "Your membership was updated".to_string(),
            template: "registration_update".to_string(),
            context: HashMap::from([
                ("student_name".to_string(), student.name.clone()),
                ("plan_title".to_string(), plan_title.to_string()),
                ("plan_duration".to_string(), plan_duration.to_string()),
                ("end_date".to_string(), end_date.to_string()),
                ("total_price".to_string(), format!("{total_price:.2}")),
            ]),
        };

        self.deliver(message).await;
    }

    /// Answer mail for a help order
    pub async fn deliver_help_order_answer(&self, student: &Student, question: &str, answer: &str) {
        let message = OutboundMessage {
            to_name: student.name.clone(),
            to_email: student.email.clone(),
            subject: "Your question was answered".to_string(),
            template: "help_order_answer".to_string(),
            context: HashMap::from([
                ("student_name".to_string(), student.name.clone()),
                ("question".to_string(), question.to_string()),
                ("answer".to_string(), answer.to_string()),
            ]),
        };

        self.deliver(message).await;
    }

    /// Render a template with `{placeholder}` substitution
    fn render(&self, template_key: &str, context: &HashMap<String, String>) -> Result<String> {
        let template = self.templates.get(template_key).ok_or_else(|| {
            GymBuddyError::Validation(format!("Template not found: {template_key}"))
        })?;

        let mut rendered = template.clone();
        for (key, value) in context {
            let placeholder = format!("{{{key}}}");
            rendered = rendered.replace(&placeholder, value);
        }

        Ok(rendered)
    }

    /// Load default message templates
    fn load_default_templates() -> HashMap<String, String> {
        let mut templates = HashMap::new();

        templates.insert(
            "registration_welcome".to_string(),
            "Welcome to the gym, {student_name}!\n\n\
             Your {plan_title} membership is active for {plan_duration} months.\n\
             It runs until {end_date} and the total price is ${total_price}."
                .to_string(),
        );

        templates.insert(
            "registration_update".to_string(),
            "Hi {student_name}, your membership was updated.\n\n\
             You are now on the {plan_title} plan for {plan_duration} months, \
             running until {end_date}. Total price: ${total_price}."
                .to_string(),
        );

        templates.insert(
            "help_order_answer".to_string(),
            "Hi {student_name}, your question was answered.\n\n\
             Question: {question}\n\
             Answer: {answer}"
                .to_string(),
        );

        templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> MailerService {
        MailerService::new(MailerConfig {
            api_url: "http://localhost:8025/api/send".to_string(),
            sender_name: "GymBuddy Team".to_string(),
            sender_email: "noreply@gymbuddy.local".to_string(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let service = test_service();

        let context = HashMap::from([
            ("student_name".to_string(), "John".to_string()),
            ("plan_title".to_string(), "Gold".to_string()),
            ("plan_duration".to_string(), "3".to_string()),
            ("end_date".to_string(), "April 10, 2024".to_string()),
            ("total_price".to_string(), "300.00".to_string()),
        ]);

        let rendered = service.render("registration_welcome", &context).unwrap();
        assert!(rendered.contains("John"));
        assert!(rendered.contains("Gold"));
        assert!(rendered.contains("April 10, 2024"));
        assert!(rendered.contains("$300.00"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let service = test_service();
        let result = service.render("no_such_template", &HashMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_answer_template_carries_question_and_answer() {
        let service = test_service();

        let context = HashMap::from([
            ("student_name".to_string(), "Ada".to_string()),
            ("question".to_string(), "Can I freeze my plan?".to_string()),
            ("answer".to_string(), "Yes, at the front desk.".to_string()),
        ]);

        let rendered = service.render("help_order_answer", &context).unwrap();
        assert!(rendered.contains("Can I freeze my plan?"));
        assert!(rendered.contains("Yes, at the front desk."));
    }
}
