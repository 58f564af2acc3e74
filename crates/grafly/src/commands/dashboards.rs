//! Dashboard command handlers.

use grafly_core::{CoreError, Dashboard, DashboardResult, Session, convert_template};

use crate::cli::{DashboardsArgs, DashboardsCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(result: &DashboardResult) -> String {
    let dashboard = &result.model;
    output::detail(&[
        ("Title", dashboard.title.clone()),
        ("Slug", result.meta.slug.clone()),
        ("Version", dashboard.version.to_string()),
        ("Rows", dashboard.rows.len().to_string()),
        ("Panels", dashboard.panels().count().to_string()),
        ("Time", format!("{} .. {}", dashboard.time.from, dashboard.time.to)),
        ("Created", result.meta.created.clone()),
    ])
}

/// A converted dashboard has no table view; table mode prints JSON.
fn render_dashboard(format: &OutputFormat, dashboard: &Dashboard) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => output::render_json(dashboard, false),
        other => output::render_single(other, dashboard, |_| String::new(), |d| d.title.clone()),
    }
}

pub async fn handle(
    session: &Session,
    args: DashboardsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    match args.command {
        DashboardsCommand::Get { slug } => {
            let result = client.get_dashboard(&slug).await.map_err(CoreError::from)?;
            let out = output::render_single(&global.output, &result, detail, |r| {
                r.meta.slug.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DashboardsCommand::Upload {
            template,
            overwrite,
        } => {
            let dashboard = session.upload_template(&template, overwrite).await?;
            if !global.quiet {
                eprintln!(
                    "Dashboard '{}' uploaded ({} panels)",
                    dashboard.title,
                    dashboard.panels().count()
                );
            }
            Ok(())
        }

        DashboardsCommand::Delete { slug } => {
            if !util::confirm(&format!("Delete dashboard '{slug}'?"), global.yes)? {
                return Ok(());
            }
            client.delete_dashboard(&slug).await.map_err(CoreError::from)?;
            if !global.quiet {
                eprintln!("Dashboard '{slug}' deleted");
            }
            Ok(())
        }

        // Dispatched without a session in main.
        DashboardsCommand::Convert { template } => convert(&template, global),
    }
}

/// Expand a template locally and print it.
pub fn convert(template: &std::path::Path, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = convert_template(template)?;
    let out = render_dashboard(&global.output, &dashboard)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
