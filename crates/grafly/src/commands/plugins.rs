//! Plugin command handlers.

use grafly_core::{CoreError, DataSourcePlugin, Plugin, Session};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{GlobalOpts, PluginsArgs, PluginsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct PluginRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Enabled")]
    enabled: bool,
}

impl From<&Plugin> for PluginRow {
    fn from(p: &Plugin) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            kind: p.kind.clone(),
            version: p.info.version.clone(),
            enabled: p.enabled,
        }
    }
}

/// Datasource plugin flattened with its map key.
#[derive(Serialize)]
struct KeyedPlugin {
    key: String,
    #[serde(flatten)]
    plugin: DataSourcePlugin,
}

#[derive(Tabled)]
struct DataSourcePluginRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Module")]
    module: String,
}

pub async fn handle(
    session: &Session,
    args: PluginsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    match args.command {
        PluginsCommand::List { plugin_type } => {
            let plugins = client.plugins(&plugin_type).await.map_err(CoreError::from)?;
            let out = output::render_list(
                &global.output,
                &plugins,
                |p| PluginRow::from(p),
                |p| p.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PluginsCommand::Datasources => {
            let plugins: Vec<KeyedPlugin> = client
                .data_source_plugins()
                .await
                .map_err(CoreError::from)?
                .into_iter()
                .map(|(key, plugin)| KeyedPlugin { key, plugin })
                .collect();
            let out = output::render_list(
                &global.output,
                &plugins,
                |p| DataSourcePluginRow {
                    key: p.key.clone(),
                    name: p.plugin.name.clone(),
                    module: p.plugin.module.clone(),
                },
                |p| p.key.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
