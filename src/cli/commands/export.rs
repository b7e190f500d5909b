use crate::cli::commands::load_response;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        date,
        force,
    } = cmd
    {
        let response = load_response(cfg)?;
        ExportLogic::export(&response, format.clone(), out, date, *force)?;
    }
    Ok(())
}
