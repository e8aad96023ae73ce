use crate::args::PrefsCommand;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use gridview_types::{
    DEFAULT_PREFIX, Density, PrefStore, SETTING_DENSITY, SETTING_VIEW_MODE, ViewMode, pref_key,
};

pub fn handle(store: &dyn PrefStore, command: PrefsCommand, format: OutputFormat) -> Result<()> {
    match command {
        PrefsCommand::Show { entity } => {
            let view_model = presenters::present_prefs(&entity, store);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view_model)?),
                OutputFormat::Plain => {
                    println!("{}", view_model.entity);
                    println!(
                        "  view-mode: {}{}",
                        view_model.view_mode,
                        default_marker(view_model.view_mode_persisted)
                    );
                    println!(
                        "  density:   {}{}",
                        view_model.density,
                        default_marker(view_model.density_persisted)
                    );
                }
            }
        }

        PrefsCommand::SetView { entity, mode } => {
            let key = pref_key(DEFAULT_PREFIX, &entity, SETTING_VIEW_MODE);
            store.set(&key, &mode.to_string());
            println!("Saved view mode '{}' for {}", mode, entity);
        }

        PrefsCommand::SetDensity { entity, density } => {
            let key = pref_key(DEFAULT_PREFIX, &entity, SETTING_DENSITY);
            store.set(&key, &density.to_string());
            println!("Saved density '{}' for {}", density, entity);
        }

        PrefsCommand::Reset { entity } => {
            let view_key = pref_key(DEFAULT_PREFIX, &entity, SETTING_VIEW_MODE);
            let density_key = pref_key(DEFAULT_PREFIX, &entity, SETTING_DENSITY);
            store.set(&view_key, ViewMode::default().as_str());
            store.set(&density_key, Density::default().as_str());
            println!(
                "Reset {} preferences to {} / {}",
                entity,
                ViewMode::default(),
                Density::default()
            );
        }
    }

    Ok(())
}

fn default_marker(persisted: bool) -> &'static str {
    if persisted { "" } else { " (default)" }
}
