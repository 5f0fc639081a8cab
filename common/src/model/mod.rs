pub mod catalog;
pub mod task;
