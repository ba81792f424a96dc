// common helpers
pub mod errors;
pub mod report;
pub(crate) mod signs;

// finder and algorithms
pub mod finder;
mod bisection;
mod chord;
mod newton;
mod secant;

pub use errors::RootFindingError;
pub use finder::RootFinder;
pub use report::RootReport;
