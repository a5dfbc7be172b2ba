use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const OP_MAX_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "move" => Colour::Cyan,
        "recover" => Colour::Purple,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)` with only the operation coloured, cut to
/// `OP_MAX_WIDTH` visible characters.
fn format_operation(entry: &LogEntry) -> String {
    let colour = color_for_operation(&entry.operation);

    let visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if visible.chars().count() > OP_MAX_WIDTH {
        let mut s: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
        None => colour.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (date, format_operation(e))
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, op)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        println!("📜 Internal log:\n");

        for (entry, (date, op)) in entries.iter().zip(rendered.iter()) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                op,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
