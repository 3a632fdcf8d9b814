//! Shared test infrastructure
//!
//! Database-backed tests run only when TEST_DATABASE_URL points at a
//! disposable Postgres database; they skip silently otherwise. The mail
//! gateway is always a local wiremock server.

use sqlx::PgPool;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use GymBuddy::config::Settings;
use GymBuddy::database::DatabaseService;
use GymBuddy::models::plan::{CreatePlanRequest, Plan};
use GymBuddy::models::student::{CreateStudentRequest, Student};
use GymBuddy::services::ServiceFactory;

pub struct TestContext {
    pub pool: PgPool,
    pub services: ServiceFactory,
    pub mail_server: MockServer,
}

impl TestContext {
    /// Connect, migrate and truncate; None when no test database is configured
    pub async fn new() -> Option<Self> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = PgPool::connect(&url).await.ok()?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        sqlx::query(
            "TRUNCATE checkins, help_orders, registrations, students, plans RESTART IDENTITY CASCADE",
        )
        .execute(&pool)
        .await
        .expect("Failed to truncate tables");

        let mail_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mail_server)
            .await;

        let mut settings = Settings::default();
        settings.mailer.api_url = format!("{}/api/send", mail_server.uri());

        let services = ServiceFactory::new(DatabaseService::new(pool.clone()), settings)
            .expect("Failed to build services");

        Some(Self {
            pool,
            services,
            mail_server,
        })
    }

    pub async fn create_student(&self, name: &str, email: &str) -> Student {
        self.services
            .students
            .create(CreateStudentRequest {
                name: name.to_string(),
                email: email.to_string(),
                age: 28,
                weight: 72.5,
                height: 1.78,
            })
            .await
            .expect("Failed to create student")
    }

    pub async fn create_plan(&self, title: &str, duration: i32, price: f64) -> Plan {
        self.services
            .plans
            .create(CreatePlanRequest {
                title: title.to_string(),
                duration,
                price,
            })
            .await
            .expect("Failed to create plan")
    }

    /// Mail gateway bodies received so far
    pub async fn sent_mails(&self) -> Vec<serde_json::Value> {
        self.mail_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| r.body_json().ok())
            .collect()
    }
}
