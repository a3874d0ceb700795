pub mod goals_model;
pub mod goals_store;
pub mod goals_traits;


pub use goals_model::{Goal, NewGoal};
pub use goals_store::GoalStore;
pub use goals_traits::GoalStoreTrait;
