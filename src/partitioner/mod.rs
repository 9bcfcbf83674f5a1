mod error;
mod round_robin;
mod source;
mod types;


pub use error::GenerationError;
pub use round_robin::partition;
pub use source::{RandomSource, RngSource};
pub use types::{GroupSize, InvalidGroupSize, Partition};
