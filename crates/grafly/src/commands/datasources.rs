//! Datasource command handlers.

use grafly_core::{CoreError, DataSource, Session};
use tabled::Tabled;

use crate::cli::{DatasourcesArgs, DatasourcesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DataSourceRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Database")]
    database: String,
    #[tabled(rename = "Default")]
    default: String,
}

impl From<&DataSource> for DataSourceRow {
    fn from(ds: &DataSource) -> Self {
        Self {
            id: ds.id,
            name: ds.name.clone(),
            kind: ds.kind.clone(),
            url: ds.url.clone(),
            database: ds.database.clone(),
            default: if ds.is_default { "*".into() } else { String::new() },
        }
    }
}

fn detail(ds: &DataSource) -> String {
    output::detail(&[
        ("ID", ds.id.to_string()),
        ("Name", ds.name.clone()),
        ("Type", ds.kind.clone()),
        ("Access", ds.access.clone()),
        ("URL", ds.url.clone()),
        ("Database", ds.database.clone()),
        ("User", ds.user.clone()),
        ("Basic auth", ds.basic_auth.to_string()),
        ("Default", ds.is_default.to_string()),
    ])
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: DatasourcesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    match args.command {
        DatasourcesCommand::List => {
            let sources = client.list_data_sources().await.map_err(CoreError::from)?;
            let out = output::render_list(
                &global.output,
                &sources,
                |ds| DataSourceRow::from(ds),
                |ds| ds.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DatasourcesCommand::Get { name } => {
            let ds = client.get_data_source(&name).await.map_err(CoreError::from)?;
            let out = output::render_single(&global.output, &ds, detail, |ds| ds.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DatasourcesCommand::Create { from_file } => {
            let ds: DataSource = util::read_json_file(&from_file)?;
            client.create_data_source(&ds).await.map_err(CoreError::from)?;
            if !global.quiet {
                eprintln!("Datasource '{}' created", ds.name);
            }
            Ok(())
        }

        DatasourcesCommand::Delete { name } => {
            let ds = client.get_data_source(&name).await.map_err(CoreError::from)?;
            if !util::confirm(&format!("Delete datasource '{name}'?"), global.yes)? {
                return Ok(());
            }
            client.delete_data_source(&ds).await.map_err(CoreError::from)?;
            if !global.quiet {
                eprintln!("Datasource '{name}' deleted");
            }
            Ok(())
        }
    }
}
