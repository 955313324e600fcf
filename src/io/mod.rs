pub mod filter;
pub mod input;

pub use filter::{dedup_parallel_edges, filter_problem_text, FilterStats};
pub use input::{parse_problem, read_problem, Problem};
