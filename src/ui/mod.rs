pub mod actions;
pub mod app;
pub mod cell;
pub mod insertion_input;
pub mod page;
pub mod selection;
