pub mod controller;
pub mod state;
pub mod validation;

pub use controller::{search_food_name, ClearOutcome, SearchOutcome, SelectionController};
pub use state::SelectionBatch;
pub use validation::{parse_mass, ValidationError};
