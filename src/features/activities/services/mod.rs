pub mod activity_operations;

pub use activity_operations::*;
