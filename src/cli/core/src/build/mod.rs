/* src/cli/core/src/build/mod.rs */

mod compile;
mod context;
mod copy;
mod pipeline;


pub use context::BuildContext;
pub use pipeline::{print_summary, run_pipeline};
