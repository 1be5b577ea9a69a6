mod config;
mod employees;

pub use crate::config::{CONFIG, Config};
pub use crate::employees::{EMPLOYEE_CLIENT, EmployeeClient};

/// Install the global tracing subscriber. Call once at startup.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Validate the environment eagerly so a bad deployment fails at
/// startup instead of on the first request.
pub async fn init() -> eyre::Result<()> {
    let config = Config::from_env()?;
    tracing::info!(employees_url = %config.employees_url, "employee service configured");
    Ok(())
}
