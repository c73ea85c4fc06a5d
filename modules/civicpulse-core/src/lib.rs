pub mod aggregate;
pub mod lexicon;
pub mod pipeline;
pub mod rank;
pub mod sentiment;
pub mod testing;
pub mod traits;

pub use aggregate::aggregate;
pub use pipeline::{prioritize, Pipeline};
pub use rank::rank;
pub use sentiment::score;
