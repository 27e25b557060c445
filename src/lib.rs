// Library entry point to reuse the bench and listing functionality
// programmatically (and from the criterion benches)

pub mod bench;
pub mod cli;
pub mod listing;
pub mod output;

pub use bench::{fill_buffer, sum_array, sum_array_unrolled};
pub use listing::Excerpt;
pub use output::BenchReport;
