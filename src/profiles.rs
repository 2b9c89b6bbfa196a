// src/profiles.rs
//! Profile discovery from the browser's `Local State` document

use std::path::Path;

use serde::Deserialize;

use crate::error::MigrateError;
use crate::Result;

#[derive(Debug, Deserialize)]
struct LocalState {
    profile: Option<ProfileSection>,
}

#[derive(Debug, Deserialize)]
struct ProfileSection {
    profiles_order: Option<Vec<String>>,
}

/// Ordered profile directory names, e.g. `["Default", "Profile 1"]`
///
/// Every failure here is fatal: nothing has been touched yet.
pub fn discover_profiles(local_state: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(local_state).map_err(|err| {
        MigrateError::ProfileDiscovery(format!("cannot read {}: {err}", local_state.display()))
    })?;
    parse_profiles(&content)
}

pub fn parse_profiles(content: &str) -> Result<Vec<String>> {
    let state: LocalState = serde_json::from_str(content)?;

    let profiles = state
        .profile
        .and_then(|section| section.profiles_order)
        .ok_or_else(|| {
            MigrateError::ProfileDiscovery("missing profile.profiles_order".to_string())
        })?;

    if profiles.is_empty() {
        return Err(MigrateError::ProfileDiscovery(
            "didn't find any user profiles in Local State".to_string(),
        ));
    }

    Ok(profiles)
}
