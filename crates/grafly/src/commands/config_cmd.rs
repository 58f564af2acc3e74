//! Config subcommand handlers.

use dialoguer::{Input, Password, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

/// Format config for display, masking passwords.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "url = \"{}\"", p.url);
        if let Some(ref u) = p.user {
            let _ = writeln!(out, "user = \"{u}\"");
        }
        if p.password.is_some() {
            let _ = writeln!(out, "password = \"****\"");
        }
        if let Some(ref env) = p.password_env {
            let _ = writeln!(out, "password_env = \"{env}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}

fn init() -> Result<(), CliError> {
    let config_path = config::config_path();
    eprintln!("grafly configuration wizard");
    eprintln!("Config path: {}\n", config_path.display());

    let mut cfg = config::load_config()?;

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()?;

    let url: String = Input::new()
        .with_prompt("Grafana URL")
        .default("http://localhost:3000".into())
        .validate_with(|input: &String| {
            grafly_config::parse_url(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let user: String = Input::new()
        .with_prompt("User")
        .default("admin".into())
        .interact_text()?;

    let storage = Select::new()
        .with_prompt("Where should the password come from?")
        .items(&[
            "Environment variable (recommended)",
            "Config file (plaintext)",
        ])
        .default(0)
        .interact()?;

    let (password, password_env) = if storage == 0 {
        let env: String = Input::new()
            .with_prompt("Variable name")
            .default(grafly_config::PASSWORD_ENV.into())
            .interact_text()?;
        (None, Some(env))
    } else {
        let pw = Password::new().with_prompt("Password").interact()?;
        if pw.is_empty() {
            return Err(CliError::Validation {
                field: "password".into(),
                reason: "password cannot be empty".into(),
            });
        }
        (Some(pw), None)
    };

    let insecure = url.starts_with("https://")
        && dialoguer::Confirm::new()
            .with_prompt("Accept self-signed certificates?")
            .default(false)
            .interact()?;

    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            url,
            user: Some(user),
            password,
            password_env,
            insecure: insecure.then_some(true),
            ..Profile::default()
        },
    );
    if cfg.profiles.len() == 1 {
        cfg.default_profile = Some(profile_name.clone());
    }

    let path = config::save_config(&cfg)?;
    eprintln!("\nProfile '{profile_name}' saved to {}", path.display());
    Ok(())
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(),

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            output::print_output(format_config_redacted(&cfg).trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
