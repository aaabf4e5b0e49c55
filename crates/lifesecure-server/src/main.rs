use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use lifesecure_api::{build_router, AppState};
use lifesecure_core::notifier::LeadNotifier;
use lifesecure_core::repositories::{AdminRepository, CustomerRepository};
use lifesecure_core::services::{AuthService, IntakeService, SessionManager, WorkflowService};
use lifesecure_infrastructure::database::connection;
use lifesecure_infrastructure::{
    EmailLeadNotifier, InMemoryAdminRepository, InMemoryCustomerRepository, LogMailer, Mailer,
    PgAdminRepository, PgCustomerRepository, SmtpMailer,
};
use lifesecure_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    lifesecure_shared::telemetry::init_telemetry();

    info!("LifeSecure server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Select storage backends once, from configuration presence.
    let (customers, admins): (Arc<dyn CustomerRepository>, Arc<dyn AdminRepository>) =
        if config.database.is_configured() {
            info!("Connecting to database...");
            let pool =
                connection::create_pool(&config.database.url, config.database.max_connections)
                    .await?;
            info!("Database connection established.");
            (
                Arc::new(PgCustomerRepository::new(pool.clone())),
                Arc::new(PgAdminRepository::new(pool)),
            )
        } else {
            info!("No database configured; using in-memory demo store.");
            (
                Arc::new(InMemoryCustomerRepository::new()),
                Arc::new(InMemoryAdminRepository::new()),
            )
        };

    // Notification sink: SMTP when configured, log-only otherwise.
    let mailer: Arc<dyn Mailer> = if config.email.is_configured() {
        Arc::new(SmtpMailer::new(&config.email.smtp_url, &config.email.from_address)?)
    } else {
        info!("No SMTP configured; lead emails will be logged only.");
        Arc::new(LogMailer::new())
    };
    let notifier: Arc<dyn LeadNotifier> =
        Arc::new(EmailLeadNotifier::new(mailer, &config.email.admin_address));

    let state = AppState {
        customers: customers.clone(),
        intake: Arc::new(IntakeService::new(customers.clone(), notifier)),
        workflow: Arc::new(WorkflowService::new(customers)),
        auth: Arc::new(AuthService::new(admins)),
        sessions: Arc::new(SessionManager::new()),
    };

    let app = build_router(state);

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
