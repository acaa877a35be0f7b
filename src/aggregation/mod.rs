pub mod algorithm;
pub mod config;
pub mod units;

pub use algorithm::{last_day_aggregate, DayAggregate, NutrientAmount, NutrientTotal};
pub use config::AggregationConfig;
pub use units::NutrientUnit;
