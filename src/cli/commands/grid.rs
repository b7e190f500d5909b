use crate::cli::commands::{load_response, require_log};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::scatter;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::render::grid_view::{legend, render_matrix, render_occupancy};
use crate::utils::date::parse_required_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { date, points } = cmd {
        parse_required_date(date)?;

        let response = load_response(cfg)?;
        let log = require_log(&response, date)?;

        println!("Duty grid for {} ({})\n", log.date, log.driver);

        if *points {
            let matrix = scatter(&log.grid_points);
            println!("{}", render_matrix(&matrix, cfg.use_colors));
        } else {
            let view = Core::build_day_view(log);
            println!(
                "{}",
                render_occupancy(&view.occupancy, &cfg.grid_cell_char, cfg.use_colors)
            );
        }

        println!("{}", legend(cfg.use_colors));
    }
    Ok(())
}
