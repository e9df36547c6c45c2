pub mod dataset;
pub mod builtin;

pub use dataset::{Dataset, Example};
pub use builtin::Task;
