//! View command - fetch audit events and open the table.

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use tfaudit::{AuditTrailClient, ClientConfig, viewer, window};
use tfaudit_config::TfauditConfig;

use crate::style::print_info;

pub fn run(token: Option<&str>, since_days: Option<u32>) -> Result<()> {
    // An explicit empty flag fails before the config is read.
    if token == Some("") {
        bail!("organization token must be provided");
    }
    let config = TfauditConfig::load()?;

    let token = resolve_token(token, &config)?;
    let days = since_days.unwrap_or(config.query.since_days);
    let since = window::since_timestamp(Utc::now(), days)
        .ok_or_else(|| anyhow!("look-back window of {days} days is out of range"))?;

    let client_config = ClientConfig {
        endpoint: config.api.endpoint,
        ..ClientConfig::default()
    };
    let client =
        AuditTrailClient::new(token, client_config).context("failed to fetch audit events")?;

    print_info("Fetching audit events...");
    let envelope = client
        .fetch(&since)
        .context("failed to fetch audit events")?;

    if envelope.data.is_empty() {
        print_info("No audit events found");
        return Ok(());
    }

    tracing::debug!(events = envelope.data.len(), days, "opening viewer");
    viewer::display(&envelope.data).context("terminal application failed")
}

/// Picks the token: the flag wins, even when empty; otherwise the config.
fn resolve_token(flag: Option<&str>, config: &TfauditConfig) -> Result<String> {
    match flag.or_else(|| config.token()) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => bail!("organization token must be provided"),
    }
}
