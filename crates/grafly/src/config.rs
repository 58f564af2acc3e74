//! CLI configuration: thin wrapper around `grafly_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--url, --user, --password, --insecure, --timeout).

use std::time::Duration;

use secrecy::SecretString;

use grafly_core::{SessionConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use grafly_config::{
    Config, Defaults, Profile, config_path, load_config, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `SessionConfig` from the config file, profile, and CLI overrides.
pub fn build_session_config(global: &GlobalOpts) -> Result<SessionConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, &cfg.defaults, global);
    }

    // An explicitly requested profile must exist.
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound { name: profile_name });
    }

    // No profile: build from flags / env alone.
    let url_str = global.url.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let url = grafly_config::parse_url(url_str)?;

    let (Some(user), Some(password)) = (global.user.clone(), global.password.clone()) else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    let mut config = SessionConfig::new(url, user, SecretString::from(password));
    config.tls = if global.insecure || cfg.defaults.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };
    config.timeout = Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout));
    Ok(config)
}

/// Translate a `Profile` + global flags into a `SessionConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<SessionConfig, CliError> {
    let url = grafly_config::parse_url(global.url.as_deref().unwrap_or(&profile.url))?;

    let no_credentials = || CliError::NoCredentials {
        profile: profile_name.to_owned(),
    };
    let user = global
        .user
        .clone()
        .or_else(|| grafly_config::resolve_user(profile))
        .ok_or_else(no_credentials)?;
    let password = global
        .password
        .clone()
        .map(SecretString::from)
        .or_else(|| grafly_config::resolve_password(profile))
        .ok_or_else(no_credentials)?;

    let mut config = SessionConfig::new(url, user, password);
    config.tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        grafly_config::tls_for(profile, defaults)
    };
    config.timeout = Duration::from_secs(
        global
            .timeout
            .or(profile.timeout)
            .unwrap_or(defaults.timeout),
    );
    Ok(config)
}
