//! Line-oriented console front end over [`crate::commands`].

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    commands,
    db::{CatalogRow, RecordRow, SaveOutcome},
    log_error,
    selection::{ClearOutcome, SearchOutcome},
    AppState,
};

const ENABLE_LOGS: bool = true;

const HELP: &str = "\
Commands:
  find <text>         suggest food names containing <text>
  add <grams> <name>  select a food with the eaten mass
  list                show unsaved selections
  clear               drop unsaved selections
  save                append selections to the record file
  records             show saved records
  stats               nutrient totals of the last recorded day
  help                show this text
  quit                leave";

/// Read commands from `input` until EOF or `quit`, writing replies to `out`.
pub fn run_shell<R: BufRead, W: Write>(state: &mut AppState, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        let (command, rest) = line
            .trim()
            .split_once(' ')
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line.trim(), ""));

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "find" => find(state, rest, &mut out)?,
            "add" => add(state, rest, &mut out)?,
            "list" => print_rows(commands::selections(state), "No food options selected", &mut out)?,
            "clear" => match commands::clear_selections(state) {
                ClearOutcome::Cleared(count) => writeln!(out, "Cleared {count} selected options")?,
                ClearOutcome::AlreadyEmpty => writeln!(out, "Selected options are already cleared")?,
            },
            "save" => save(state, &mut out)?,
            "records" => records(state, &mut out)?,
            "stats" => stats(state, &mut out)?,
            other => writeln!(out, "Unknown command '{other}'; type 'help'")?,
        }
    }

    Ok(())
}

fn find<W: Write>(state: &AppState, text: &str, out: &mut W) -> Result<()> {
    match commands::search_food_name(state, text) {
        SearchOutcome::EmptyInput => writeln!(out, "No food option selected")?,
        SearchOutcome::Found(row) => {
            let id = state.catalog().row(row).and_then(CatalogRow::id).unwrap_or_default();
            writeln!(out, "Exact match at catalog row {row} (id {id})")?;
        }
        SearchOutcome::NotFound => {
            let suggestions = commands::complete_food_name(state, text);
            if suggestions.is_empty() {
                writeln!(out, "Food option not found")?;
            }
            for name in suggestions {
                writeln!(out, "  {name}")?;
            }
        }
    }
    Ok(())
}

fn add<W: Write>(state: &mut AppState, rest: &str, out: &mut W) -> Result<()> {
    let (mass, name) = rest.split_once(' ').unwrap_or((rest, ""));
    match commands::add_selection(state, name.trim(), mass) {
        Ok(row) => writeln!(
            out,
            "Selected {} g of {}",
            row.mass_grams().unwrap_or_default(),
            row.name().unwrap_or_default()
        )?,
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

fn save<W: Write>(state: &mut AppState, out: &mut W) -> Result<()> {
    match commands::save_selections(state) {
        Ok(SaveOutcome::Saved(_)) => writeln!(out, "Selected options were saved")?,
        Ok(SaveOutcome::NoItemsToSave) => writeln!(out, "No food options selected")?,
        Err(err) => {
            log_error!("Saving selections failed: {err:#}");
            writeln!(out, "Error while saving data")?;
        }
    }
    Ok(())
}

// Read failures are reported and the session goes on; the unsaved batch
// must survive a bad record file.
fn records<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    match commands::load_records(state) {
        Ok(Some(log)) => print_rows(log.data_rows(), "No records found", out)?,
        Ok(None) => writeln!(out, "No records found")?,
        Err(err) => {
            log_error!("Loading records failed: {err:#}");
            writeln!(out, "Error while loading records")?;
        }
    }
    Ok(())
}

fn stats<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let day = match commands::last_day_aggregate(state) {
        Ok(Some(day)) => day,
        Ok(None) => {
            writeln!(out, "No records found")?;
            return Ok(());
        }
        Err(err) => {
            log_error!("Aggregating records failed: {err:#}");
            writeln!(out, "Error while loading records")?;
            return Ok(());
        }
    };

    writeln!(out, "{}", day.label())?;
    for (name, share) in day.totals.proportions() {
        let grams = day.totals.get(name).unwrap_or_default();
        writeln!(out, "  {name}: {grams:.6} g ({:.1}%)", share * 100.0)?;
    }
    Ok(())
}

fn print_rows<W: Write>(rows: &[RecordRow], empty_message: &str, out: &mut W) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "{empty_message}")?;
    }
    for row in rows {
        writeln!(
            out,
            "  {}  {} g  {}",
            row.date_field().unwrap_or_default(),
            row.mass_field().unwrap_or_default(),
            row.name().unwrap_or_default()
        )?;
    }
    Ok(())
}
