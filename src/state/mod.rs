pub mod cell_store;
pub mod config;
pub mod geometry;
pub mod ident;
pub mod input;
pub mod layout;
pub mod page_state;
pub mod scroll;
pub mod selection;
pub mod sizer;
