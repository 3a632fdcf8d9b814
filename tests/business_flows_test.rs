//! End-to-end business rule tests
//!
//! These exercise the full service stack against a real database and a
//! mocked mail gateway. They skip when TEST_DATABASE_URL is not set.

mod helpers;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use serial_test::serial;

use GymBuddy::models::help_order::{AnswerHelpOrderRequest, AskHelpOrderRequest};
use GymBuddy::models::registration::{CreateRegistrationRequest, UpdateRegistrationRequest};
use GymBuddy::utils::dates;
use GymBuddy::GymBuddyError;

use helpers::TestContext;

macro_rules! require_db {
    () => {
        match TestContext::new().await {
            Some(ctx) => ctx,
            None => {
                eprintln!("TEST_DATABASE_URL not set, skipping");
                return;
            }
        }
    };
}

#[tokio::test]
#[serial]
async fn test_enroll_computes_schedule_and_blocks_duplicates() {
    let ctx = require_db!();

    let student = ctx.create_student("Ada Lovelace", "ada@example.com").await;
    let plan = ctx.create_plan("Gold", 3, 100.0).await;
    let other_plan = ctx.create_plan("Silver", 1, 50.0).await;

    let start = Utc::now() + Duration::hours(2);
    let registration = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: student.id,
            plan_id: plan.id,
            start_date: start,
        })
        .await
        .expect("Enrollment should succeed");

    let expected_start = dates::start_of_hour(start);
    assert_eq!(registration.start_date, expected_start);
    assert_eq!(
        registration.end_date,
        dates::add_months(expected_start, 3).unwrap()
    );
    assert_eq!(registration.price, 300.0);

    // Any prior registration blocks a second one, even on another plan
    let err = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: student.id,
            plan_id: other_plan.id,
            start_date: start,
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::AlreadyRegistered { .. });

    let mails = ctx.sent_mails().await;
    assert!(mails
        .iter()
        .any(|m| m["template"] == "registration_welcome"));
}

#[tokio::test]
#[serial]
async fn test_enroll_rejects_past_dates_and_missing_entities() {
    let ctx = require_db!();

    let future = Utc::now() + Duration::hours(2);

    let err = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: 9999,
            plan_id: 1,
            start_date: future,
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::StudentNotFound { .. });

    let student = ctx.create_student("Grace Hopper", "grace@example.com").await;

    let err = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: student.id,
            plan_id: 9999,
            start_date: future,
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::PlanNotFound { .. });

    let plan = ctx.create_plan("Gold", 3, 100.0).await;
    let err = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: student.id,
            plan_id: plan.id,
            start_date: Utc::now() - Duration::hours(2),
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::PastStartDate);
}

#[tokio::test]
#[serial]
async fn test_amend_rules() {
    let ctx = require_db!();

    let student = ctx.create_student("Ada Lovelace", "ada@example.com").await;
    let gold = ctx.create_plan("Gold", 3, 100.0).await;
    let diamond = ctx.create_plan("Diamond", 6, 90.0).await;

    // A registration whose plan already started; written directly because
    // enroll refuses past start dates
    let past = Utc::now() - Duration::days(10);
    let started_id: i64 = sqlx::query_scalar(
        "INSERT INTO registrations (student_id, plan_id, start_date, end_date, price) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(student.id)
    .bind(gold.id)
    .bind(past)
    .bind(dates::add_months(past, 3).unwrap())
    .bind(300.0)
    .fetch_one(&ctx.pool)
    .await
    .unwrap();

    let err = ctx
        .services
        .registrations
        .amend(UpdateRegistrationRequest {
            id: started_id,
            plan_id: diamond.id,
            start_date: Utc::now() + Duration::days(1),
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::AlreadyStarted);

    // A future-dated registration can be amended, but not into the past
    let other = ctx.create_student("Grace Hopper", "grace@example.com").await;
    let registration = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: other.id,
            plan_id: gold.id,
            start_date: Utc::now() + Duration::hours(2),
        })
        .await
        .unwrap();

    let err = ctx
        .services
        .registrations
        .amend(UpdateRegistrationRequest {
            id: registration.id,
            plan_id: diamond.id,
            start_date: Utc::now() - Duration::hours(2),
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::PastStartDate);

    let new_start = Utc::now() + Duration::days(2);
    let amended = ctx
        .services
        .registrations
        .amend(UpdateRegistrationRequest {
            id: registration.id,
            plan_id: diamond.id,
            start_date: new_start,
        })
        .await
        .unwrap();

    let expected_start = dates::start_of_hour(new_start);
    assert_eq!(amended.plan_id, diamond.id);
    assert_eq!(amended.start_date, expected_start);
    assert_eq!(amended.end_date, dates::add_months(expected_start, 6).unwrap());
    assert_eq!(amended.price, 540.0);

    let err = ctx
        .services
        .registrations
        .amend(UpdateRegistrationRequest {
            id: 9999,
            plan_id: gold.id,
            start_date: new_start,
        })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::RegistrationNotFound { .. });
}

#[tokio::test]
#[serial]
async fn test_registration_listing_and_removal() {
    let ctx = require_db!();

    let ada = ctx.create_student("Ada Lovelace", "ada@example.com").await;
    let grace = ctx.create_student("Grace Hopper", "grace@example.com").await;
    let plan = ctx.create_plan("Gold", 3, 100.0).await;

    let first = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: ada.id,
            plan_id: plan.id,
            start_date: Utc::now() + Duration::hours(2),
        })
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let second = ctx
        .services
        .registrations
        .enroll(CreateRegistrationRequest {
            student_id: grace.id,
            plan_id: plan.id,
            start_date: Utc::now() + Duration::hours(3),
        })
        .await
        .unwrap();

    let listed = ctx.services.registrations.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    // Newest created first, with embedded summaries
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[0].student.name, "Grace Hopper");
    assert_eq!(listed[0].plan.title, "Gold");
    assert_eq!(listed[1].id, first.id);

    ctx.services.registrations.remove(first.id).await.unwrap();
    assert_eq!(ctx.services.registrations.list().await.unwrap().len(), 1);

    let err = ctx.services.registrations.remove(first.id).await.unwrap_err();
    assert_matches!(err, GymBuddyError::RegistrationNotFound { .. });
}

#[tokio::test]
#[serial]
async fn test_daily_checkin_cap() {
    let ctx = require_db!();

    let student = ctx.create_student("Ada Lovelace", "ada@example.com").await;

    let err = ctx.services.checkins.check_in(9999).await.unwrap_err();
    assert_matches!(err, GymBuddyError::StudentNotFound { .. });

    let err = ctx.services.checkins.history(student.id).await.unwrap_err();
    assert_matches!(err, GymBuddyError::NoCheckinsFound { .. });

    ctx.services.checkins.check_in(student.id).await.unwrap();

    let err = ctx.services.checkins.check_in(student.id).await.unwrap_err();
    assert_matches!(err, GymBuddyError::AlreadyCheckedInToday);

    let history = ctx.services.checkins.history(student.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].student.email, "ada@example.com");
}

#[tokio::test]
#[serial]
async fn test_rolling_window_checkin_cap() {
    let ctx = require_db!();

    let capped = ctx.create_student("Ada Lovelace", "ada@example.com").await;
    let rested = ctx.create_student("Grace Hopper", "grace@example.com").await;

    // Five check-ins on five distinct days inside the trailing week
    for days_ago in 1..=5 {
        sqlx::query("INSERT INTO checkins (student_id, created_at) VALUES ($1, $2)")
            .bind(capped.id)
            .bind(Utc::now() - Duration::days(days_ago))
            .execute(&ctx.pool)
            .await
            .unwrap();
    }

    let err = ctx.services.checkins.check_in(capped.id).await.unwrap_err();
    assert_matches!(err, GymBuddyError::TooManyCheckins);

    // Five check-ins that have all aged out of the window
    for days_ago in 8..=12 {
        sqlx::query("INSERT INTO checkins (student_id, created_at) VALUES ($1, $2)")
            .bind(rested.id)
            .bind(Utc::now() - Duration::days(days_ago))
            .execute(&ctx.pool)
            .await
            .unwrap();
    }

    ctx.services
        .checkins
        .check_in(rested.id)
        .await
        .expect("Check-ins outside the window must not count");
}

#[tokio::test]
#[serial]
async fn test_help_order_workflow() {
    let ctx = require_db!();

    let student = ctx.create_student("Ada Lovelace", "ada@example.com").await;

    let err = ctx
        .services
        .help_orders
        .ask(student.id, AskHelpOrderRequest { question: None })
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::Validation(_));

    let order = ctx
        .services
        .help_orders
        .ask(
            student.id,
            AskHelpOrderRequest {
                question: Some("Can I freeze my plan?".to_string()),
            },
        )
        .await
        .unwrap();
    assert!(order.answer.is_none());

    assert_eq!(ctx.services.help_orders.list_unanswered().await.unwrap().len(), 1);

    let err = ctx
        .services
        .help_orders
        .answer(
            9999,
            AnswerHelpOrderRequest {
                answer: Some("hello".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::HelpOrderNotFound { .. });

    let answered = ctx
        .services
        .help_orders
        .answer(
            order.id,
            AnswerHelpOrderRequest {
                answer: Some("Yes, at the front desk.".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(answered.answer.as_deref(), Some("Yes, at the front desk."));
    assert!(answered.answered_at.is_some());

    // Answered exactly once; the transition is one-way
    let err = ctx
        .services
        .help_orders
        .answer(
            order.id,
            AnswerHelpOrderRequest {
                answer: Some("Again".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, GymBuddyError::Validation(_));

    assert!(ctx.services.help_orders.list_unanswered().await.unwrap().is_empty());

    let student_orders = ctx
        .services
        .help_orders
        .list_for_student(student.id)
        .await
        .unwrap();
    assert_eq!(student_orders.len(), 1);
    assert_eq!(student_orders[0].student.name, "Ada Lovelace");

    let mails = ctx.sent_mails().await;
    assert!(mails.iter().any(|m| m["template"] == "help_order_answer"));
}
