use crate::cli::commands::load_response;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compliance::report;
use crate::errors::AppResult;
use crate::render::summary_view::render_compliance;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compliance = cmd {
        let response = load_response(cfg)?;
        let rep = report(&response.compliance);
        println!("{}", render_compliance(&rep, &response.compliance, cfg.use_colors));
    }
    Ok(())
}
