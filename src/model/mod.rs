mod matchup;
mod prediction;
mod round;
mod scoring;

pub use matchup::*;
pub use prediction::*;
pub use round::*;
pub use scoring::*;
