// src/bin/migrate_profile.rs
//! Re-encrypt a browser profile copied from macOS so the Linux build can read it

use anyhow::{bail, Context, Result};
use browser_secret_migrate::aliases::Credential;
use browser_secret_migrate::{
    check_credential_format, credential_from_input, discover_profiles, load_config,
    run_migration, MigrationContext, MigrationKeys,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CREDENTIAL_ENV: &str = "BSM_SOURCE_CREDENTIAL";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config().context("Failed to load configuration")?;
    let local_state = config.local_state_path();
    let profiles = discover_profiles(&local_state)
        .with_context(|| format!("Failed to read profiles from {}", local_state.display()))?;
    info!("Found {} profile(s): {profiles:?}", profiles.len());

    let credential = read_credential()?;
    if let Some(warning) = check_credential_format(&credential) {
        warn!("{warning}");
    }

    let keys = MigrationKeys::derive(&credential).context("Failed to derive keys")?;
    drop(credential);

    let ctx = MigrationContext::new(keys, &config);
    let outcomes = run_migration(&ctx, &profiles, &config.targets())
        .context("Migration aborted — the failing table was left untouched")?;

    let rows: usize = outcomes.iter().map(|o| o.report.rows).sum();
    info!("=== MIGRATION COMPLETE ===");
    info!("Tables re-encrypted: {}", outcomes.len());
    info!("Rows re-encrypted: {rows}");
    info!("Originals were kept as <table>_backup in each database");

    Ok(())
}

fn read_credential() -> Result<Credential> {
    // rpassword already drops the line ending; the env value is taken verbatim
    let input = match std::env::var(CREDENTIAL_ENV) {
        Ok(value) => value,
        Err(_) => rpassword::prompt_password(
            "Enter your Chrome Safe Storage key from macOS Keychain: ",
        )?,
    };

    match credential_from_input(input) {
        Some(credential) => Ok(credential),
        None => bail!("Password required"),
    }
}
