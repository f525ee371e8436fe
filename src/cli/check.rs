//! `--check`: ping the backend and print its status.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::backend::BackendClient;
use crate::models::{ApiInfo, ServiceState, SystemStatus};
use crate::startup::DashboardConfig;

use super::version::version_line;

fn service_label(state: ServiceState) -> &'static str {
    match state {
        ServiceState::Active => "active",
        ServiceState::Inactive => "inactive",
        ServiceState::Unknown => "unknown",
    }
}

/// Plain-text report printed by `--check`.
pub fn format_check_report(backend_url: &str, info: &ApiInfo, status: &SystemStatus) -> String {
    let mut lines = vec![
        version_line(),
        format!("backend   {}", backend_url),
        format!("api       {} (version {})", info.message, info.version),
        format!("status    {}", status.status),
        format!(
            "services  {}/{} active",
            status.active_count(),
            status.services.len()
        ),
    ];
    let name_width = status.services.keys().map(String::len).max().unwrap_or(0);
    for (name, state) in &status.services {
        lines.push(format!(
            "  {:width$}  {}",
            name,
            service_label(*state),
            width = name_width
        ));
    }
    for (label, at) in [
        ("last trends", &status.last_trends_collection),
        ("last content", &status.last_content_generation),
        ("last publish", &status.last_publication),
    ] {
        if let Some(at) = at {
            lines.push(format!("{:<12}  {}", label, at));
        }
    }
    lines.join("\n")
}

pub async fn handle_check_command(config: &DashboardConfig) -> Result<()> {
    let backend = BackendClient::from_config(config);

    let info = backend
        .ping()
        .await
        .wrap_err_with(|| format!("backend at {} is not reachable", config.backend_url))?;
    let status = backend
        .fetch_system_status()
        .await
        .wrap_err("could not fetch system status")?;

    println!("{}", format_check_report(&config.backend_url, &info, &status));
    Ok(())
}
