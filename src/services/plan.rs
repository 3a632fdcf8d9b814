//! Plan service implementation
//!
//! Staff-facing plan administration. Registrations snapshot a plan's terms
//! at enrollment time, so editing a plan never rewrites existing
//! registrations.

use tracing::{debug, info};

use crate::database::repositories::PlanRepository;
use crate::models::plan::{CreatePlanRequest, Plan, UpdatePlanRequest};
use crate::utils::errors::{GymBuddyError, Result};

/// Plan service for membership plan management
#[derive(Debug, Clone)]
pub struct PlanService {
    plans: PlanRepository,
}

impl PlanService {
    /// Create a new PlanService instance
    pub fn new(plans: PlanRepository) -> Self {
        Self { plans }
    }

    /// Create a new plan
    pub async fn create(&self, request: CreatePlanRequest) -> Result<Plan> {
        debug!(title = %request.title, "Creating plan");

        validate_terms(&request.title, request.duration, request.price)?;

        let plan = self.plans.create(request).await?;
        info!(plan_id = plan.id, "Plan created");

        Ok(plan)
    }

    /// Update a plan's terms
    pub async fn update(&self, plan_id: i64, request: UpdatePlanRequest) -> Result<Plan> {
        debug!(plan_id = plan_id, "Updating plan");

        let existing = self
            .plans
            .find_by_id(plan_id)
            .await?
            .ok_or(GymBuddyError::PlanNotFound { plan_id })?;

        validate_terms(
            request.title.as_deref().unwrap_or(&existing.title),
            request.duration.unwrap_or(existing.duration),
            request.price.unwrap_or(existing.price),
        )?;

        let plan = self.plans.update(plan_id, request).await?;
        info!(plan_id = plan.id, "Plan updated");

        Ok(plan)
    }

    /// Remove a plan (hard delete)
    pub async fn remove(&self, plan_id: i64) -> Result<()> {
        let plan = self
            .plans
            .find_by_id(plan_id)
            .await?
            .ok_or(GymBuddyError::PlanNotFound { plan_id })?;

        self.plans.delete(plan.id).await?;
        info!(plan_id = plan.id, "Plan removed");

        Ok(())
    }

    /// List all plans, shortest duration first
    pub async fn list(&self) -> Result<Vec<Plan>> {
        self.plans.list().await
    }
}

fn validate_terms(title: &str, duration: i32, price: f64) -> Result<()> {
    if title.trim().is_empty() {
        return Err(GymBuddyError::Validation("A title is required".to_string()));
    }

    if duration <= 0 {
        return Err(GymBuddyError::Validation(
            "Duration must be at least one month".to_string(),
        ));
    }

    if price < 0.0 {
        return Err(GymBuddyError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_terms() {
        assert!(validate_terms("Gold", 3, 100.0).is_ok());
        assert!(validate_terms("", 3, 100.0).is_err());
        assert!(validate_terms("Gold", 0, 100.0).is_err());
        assert!(validate_terms("Gold", 3, -5.0).is_err());
    }
}
