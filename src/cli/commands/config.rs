use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info};
use std::fs;
use std::process::Command as ProcessCommand;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "No configuration file found at {:?}; run `eldview init` first",
                    path
                )));
            }
            let content = fs::read_to_string(&path)?;
            println!("{}", content);
            return Ok(());
        }

        if *edit_config {
            return open_editor(editor.as_deref());
        }

        info("Nothing to do: use --print or --edit.");
    }
    Ok(())
}

fn open_editor(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "No configuration file found at {:?}; run `eldview init` first",
            path
        )));
    }

    let chosen = editor
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let status = ProcessCommand::new(&chosen).arg(&path).status()?;
    if !status.success() {
        error(format!("Editor '{}' exited with an error", chosen));
    }
    Ok(())
}
