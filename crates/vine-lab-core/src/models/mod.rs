//! Domain models for the vine-lab system.

mod range;
mod report;
mod test_type;

pub use range::*;
pub use report::*;
pub use test_type::*;
