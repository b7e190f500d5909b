use crate::cli::commands::{load_response, require_log};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::render::summary_view::render_totals;
use crate::utils::date::parse_required_date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date } = cmd {
        parse_required_date(date)?;

        let response = load_response(cfg)?;
        let log = require_log(&response, date)?;
        let view = Core::build_day_view(log);

        println!("{}", bold(&format!("=== {} ({}) ===", log.date, log.driver)));
        println!("Entries: {}\n", view.entry_count);
        println!("{}", render_totals(&view.totals, cfg.use_colors));
    }
    Ok(())
}
