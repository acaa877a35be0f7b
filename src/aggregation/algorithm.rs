use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregation::{config::AggregationConfig, units::NutrientUnit};
use crate::db::models::{record::DATE_FORMAT, RecordLog, RecordRow};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Normalized amount of one nutrient, in grams.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAmount {
    pub name: String,
    pub grams: f64,
}

/// Per-nutrient totals for one day, in header column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NutrientTotal {
    amounts: Vec<NutrientAmount>,
}

impl NutrientTotal {
    pub fn amounts(&self) -> &[NutrientAmount] {
        &self.amounts
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.amounts
            .iter()
            .find(|amount| amount.name == name)
            .map(|amount| amount.grams)
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn total_grams(&self) -> f64 {
        self.amounts.iter().map(|amount| amount.grams).sum()
    }

    /// Share of each nutrient in the day's total mass. All zero when the
    /// total is zero.
    pub fn proportions(&self) -> Vec<(&str, f64)> {
        let total = self.total_grams();
        self.amounts
            .iter()
            .map(|amount| {
                let share = if total > 0.0 { amount.grams / total } else { 0.0 };
                (amount.name.as_str(), share)
            })
            .collect()
    }

    fn add(&mut self, name: &str, grams: f64) {
        match self.amounts.iter_mut().find(|amount| amount.name == name) {
            Some(amount) => amount.grams += grams,
            None => self.amounts.push(NutrientAmount {
                name: name.to_string(),
                grams,
            }),
        }
    }
}

/// Nutrient totals of the most recently recorded day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAggregate {
    /// Raw `Date` value shared by every aggregated record.
    pub date: String,
    pub record_count: usize,
    pub totals: NutrientTotal,
}

impl DayAggregate {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Caption for the chart of this day.
    pub fn label(&self) -> String {
        format!("Pie chart corresponds to date: {}", self.date)
    }
}

/// Aggregate the records sharing the `Date` of the last line of the log.
///
/// Every record with that date counts, wherever it sits in the file. Values
/// are summed per column and mapped to nutrient names through the header;
/// each value is converted to grams by the unit in its header title.
/// Returns `None` when the log has no records.
pub fn last_day_aggregate(log: &RecordLog, config: &AggregationConfig) -> Option<DayAggregate> {
    let last_date = log.last_date()?;

    let day_rows: Vec<&RecordRow> = log
        .data_rows()
        .iter()
        .rev()
        .filter(|row| row.date_field() == Some(last_date))
        .collect();

    let width = day_rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut column_sums: Vec<Option<f64>> = vec![None; width];

    for row in &day_rows {
        for (column, raw) in row.fields().iter().enumerate() {
            if config.skips(column) {
                continue;
            }
            let Some(value) = numeric_value(raw, config) else {
                continue;
            };
            let Some(title) = log.header().field(column) else {
                log_warn!("Column {column} has no header title; value ignored");
                continue;
            };

            let grams = NutrientUnit::from_header(title).to_grams(value, config.iu_to_grams_factor);
            let sum = column_sums[column].get_or_insert(0.0);
            *sum += grams;
        }
    }

    let mut totals = NutrientTotal::default();
    for (column, sum) in column_sums.into_iter().enumerate() {
        if let (Some(sum), Some(title)) = (sum, log.header().field(column)) {
            totals.add(title, sum);
        }
    }

    log_info!(
        "Aggregated {} records for {} into {} nutrients",
        day_rows.len(),
        last_date,
        totals.len()
    );

    Some(DayAggregate {
        date: last_date.to_string(),
        record_count: day_rows.len(),
        totals,
    })
}

/// The sentinel reads as zero; anything that is not a finite number is not
/// a nutrient value.
fn numeric_value(raw: &str, config: &AggregationConfig) -> Option<f64> {
    if raw == config.null_sentinel {
        return Some(0.0);
    }
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
