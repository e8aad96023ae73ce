use crate::args::{Cli, Commands};
use crate::config::{self, Config};
use crate::handlers;
use anyhow::Result;
use gridview_prefs::SqliteStore;
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::List {
            file,
            entity,
            search,
            filters,
            sort,
            desc,
            view,
            page,
            page_size,
            width,
        } => {
            let store = SqliteStore::open(&prefs_db_path(&data_dir))?;
            let file_config = Config::load_from(&data_dir.join("config.toml"))?;

            handlers::list::handle(
                &store,
                &file_config,
                &file,
                &entity,
                search,
                &filters,
                sort,
                desc,
                view,
                page,
                page_size,
                width,
                cli.format,
            )
        }

        Commands::Options { file, entity, field } => {
            handlers::options::handle(&file, &entity, &field, cli.format)
        }

        Commands::Export {
            file,
            entity,
            output,
            out,
            search,
            filters,
            sort,
            desc,
        } => {
            let file_config = Config::load_from(&data_dir.join("config.toml"))?;

            handlers::export::handle(
                &file_config,
                &file,
                &entity,
                output,
                out.as_deref(),
                search,
                &filters,
                sort,
                desc,
            )
        }

        Commands::Prefs { command } => {
            let store = SqliteStore::open(&prefs_db_path(&data_dir))?;
            handlers::prefs::handle(&store, command, cli.format)
        }

        Commands::Entities => handlers::entities::handle(cli.format),
    }
}

fn prefs_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("prefs.db")
}
