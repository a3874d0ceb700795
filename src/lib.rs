pub mod constants;
pub mod errors;
pub mod goals;
pub mod pacing;
pub mod storage;

pub use goals::*;
pub use pacing::*;
