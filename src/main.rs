//! Lease Leads - command line entry point
//!
//! Reads one lead form record as JSON from stdin, validates it, and
//! either prints the localized field → message error map (exit code 1)
//! or submits the lead to the configured intake API and prints the
//! receipt.

use anyhow::Result;
use lease_leads::{validate, Config, LeadClient, LeadForm};
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Initialize logging (stderr only, stdout carries the result)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let form: LeadForm = serde_json::from_str(&input)?;

    if let Err(report) = validate(&form) {
        info!(fields = report.len(), "lead rejected by validation");
        let errors = report.localized(config.default_locale);
        println!("{}", serde_json::to_string_pretty(&errors)?);
        return Ok(ExitCode::FAILURE);
    }

    let client = LeadClient::new(&config);
    let receipt = client.submit_lead(&form)?;

    info!(id = %receipt.id, "lead accepted");
    println!(
        "{}",
        serde_json::json!({ "id": receipt.id, "status": receipt.status })
    );
    Ok(ExitCode::SUCCESS)
}
