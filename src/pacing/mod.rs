pub mod pacing_calculator;
pub mod pacing_model;


pub use pacing_calculator::calculate_pacing;
pub use pacing_model::Pacing;
