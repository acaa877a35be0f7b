//! Operations offered to the presentation layer.
//!
//! Each command works on the shared [`AppState`] and returns a plain value,
//! an outcome enum, or an error the caller turns into a notification.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::{
    aggregation::{self, DayAggregate},
    db::{record_header, Catalog, Database, RecordLog, RecordRow, SaveOutcome},
    selection::{self, ClearOutcome, SearchOutcome, ValidationError},
    AppState,
};

pub fn load_catalog(db: &Database) -> Result<Option<Catalog>> {
    db.load_catalog()
}

pub fn search_food_name(state: &AppState, text: &str) -> SearchOutcome {
    selection::search_food_name(&state.names, text)
}

/// Suggestions for a partially typed food name.
pub fn complete_food_name(state: &AppState, text: &str) -> Vec<String> {
    state
        .names
        .complete(text, state.completion_limit)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Add a selection stamped with today's local date.
pub fn add_selection(
    state: &mut AppState,
    name: &str,
    mass_text: &str,
) -> Result<RecordRow, ValidationError> {
    add_selection_on(state, name, mass_text, Local::now().date_naive())
}

pub fn add_selection_on(
    state: &mut AppState,
    name: &str,
    mass_text: &str,
    date: NaiveDate,
) -> Result<RecordRow, ValidationError> {
    state
        .selection
        .add(&state.catalog, &state.names, name, mass_text, date)
        .cloned()
}

/// The unsaved batch, in selection order.
pub fn selections(state: &AppState) -> &[RecordRow] {
    state.selection.batch().rows()
}

pub fn clear_selections(state: &mut AppState) -> ClearOutcome {
    state.selection.clear()
}

pub fn save_selections(state: &mut AppState) -> Result<SaveOutcome> {
    state.selection.save(&state.db, state.catalog.header())
}

/// Re-read the record file; nothing is cached between calls.
pub fn load_records(state: &AppState) -> Result<Option<RecordLog>> {
    state.db.load_records()
}

/// Column titles of the record table.
pub fn record_headers(state: &AppState) -> RecordRow {
    record_header(state.catalog.header())
}

pub fn last_day_aggregate(state: &AppState) -> Result<Option<DayAggregate>> {
    Ok(load_records(state)?
        .and_then(|log| aggregation::last_day_aggregate(&log, &state.aggregation)))
}
