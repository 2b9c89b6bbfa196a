// src/migrate.rs
//! Top-level workflow: every target, across every profile, one table at a time

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Config;
use crate::db::{open_profile_db, reencrypt_table, RewriteReport};
use crate::error::MigrateError;
use crate::key_ops::MigrationKeys;
use crate::targets::Target;
use crate::Result;

/// Everything a run needs, passed explicitly instead of living in globals
#[derive(Debug)]
pub struct MigrationContext {
    pub keys: MigrationKeys,
    pub profile_root: PathBuf,
    pub skip_missing_databases: bool,
}

impl MigrationContext {
    pub fn new(keys: MigrationKeys, config: &Config) -> Self {
        Self {
            keys,
            profile_root: config.paths.profile_root.clone(),
            skip_missing_databases: config.options.skip_missing_databases,
        }
    }
}

/// Committed rewrite of one table in one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub profile: String,
    pub database: String,
    pub report: RewriteReport,
}

/// Stops at the first failure; tables committed before it stay committed
pub fn run_migration(
    ctx: &MigrationContext,
    profiles: &[String],
    targets: &[Target],
) -> Result<Vec<TableOutcome>> {
    let mut outcomes = Vec::new();

    for target in targets {
        for profile in profiles {
            let db_path = ctx.profile_root.join(profile).join(&target.database);
            info!(
                "[{profile}] Processing table {:?} in {}",
                target.table, target.database
            );

            let mut conn = match open_profile_db(&db_path) {
                Ok(conn) => conn,
                Err(MigrateError::DatabaseMissing(path)) if ctx.skip_missing_databases => {
                    warn!("[{profile}] skipping missing database {}", path.display());
                    continue;
                }
                Err(err) => return Err(in_target(profile, &target.database, err)),
            };

            let report = reencrypt_table(&mut conn, &target.table, &target.column, &ctx.keys)
                .map_err(|err| in_target(profile, &target.database, err))?;
            outcomes.push(TableOutcome {
                profile: profile.clone(),
                database: target.database.clone(),
                report,
            });
        }
    }

    Ok(outcomes)
}

fn in_target(profile: &str, database: &str, source: MigrateError) -> MigrateError {
    MigrateError::Target {
        profile: profile.to_string(),
        database: database.to_string(),
        source: Box::new(source),
    }
}
