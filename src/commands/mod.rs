pub mod tally;

pub use tally::{run_tally, run_tally_impl, tally, write_output};
