use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::token_colour;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::bold;
use crate::utils::time::format_minutes;

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let (_pool, store) = open_store(cfg)?;
        let ev = store
            .get(id)
            .ok_or_else(|| AppError::EventNotFound(id.clone()))?;

        let stamp = format!("{} {}", cfg.date_format, cfg.time_format);
        let kind = if ev.kind_str().is_empty() {
            colorize_optional("")
        } else {
            token_colour(ev.color_token())
                .paint(ev.kind_str())
                .to_string()
        };

        println!("{}", bold(&format!("#{} {}", ev.id, ev.name)));
        println!("  Start    : {}", ev.start_time.format(&stamp));
        println!("  End      : {}", ev.end_time.format(&stamp));
        println!("  Duration : {}", format_minutes(ev.duration_minutes()));
        println!("  Type     : {}", kind);

        match ev.description.as_deref().filter(|d| !d.is_empty()) {
            Some(desc) => {
                println!("  Description:");
                for line in textwrap::wrap(desc, WRAP_WIDTH) {
                    println!("    {}", line);
                }
            }
            None => println!("  Description: {}", colorize_optional("")),
        }
    }
    Ok(())
}
