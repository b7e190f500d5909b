use crate::cli::commands::load_response;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::utils::colors::colorize_optional;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, details } = cmd {
        let response = load_response(cfg)?;

        let logs: Vec<&DailyLog> = match date {
            Some(d) => response.logs.iter().filter(|l| &l.date == d).collect(),
            None => response.logs.iter().collect(),
        };

        if logs.is_empty() {
            println!("No daily logs found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "DATE".to_string(),
                width: 10,
            },
            Column {
                header: "DRIVER".to_string(),
                width: 18,
            },
            Column {
                header: "ENTRIES".to_string(),
                width: 7,
            },
            Column {
                header: "DRIVING".to_string(),
                width: 9,
            },
            Column {
                header: "ON DUTY".to_string(),
                width: 9,
            },
            Column {
                header: "CERTIFIED".to_string(),
                width: 9,
            },
        ]);

        for log in &logs {
            let view = Core::build_day_view(log);
            table.add_row(vec![
                log.date.clone(),
                log.driver.clone(),
                view.entry_count.to_string(),
                mins2readable(view.totals.driving_minutes, true),
                mins2readable(view.totals.on_duty_minutes, true),
                if log.certified { "yes" } else { "no" }.to_string(),
            ]);
        }

        println!("{}", table.render());

        if *details {
            for log in &logs {
                print_entries(log);
            }
        }
    }
    Ok(())
}

fn print_entries(log: &DailyLog) {
    println!("=== {} ({}) ===", log.date, log.driver);
    for entry in &log.entries {
        println!(
            "- #{} {} → {} | {} | {}",
            entry.id,
            entry.start_time,
            entry.end_time,
            entry.duty_status.ds_as_str(),
            colorize_optional(entry.location.as_deref().unwrap_or("--")),
        );
    }
}
