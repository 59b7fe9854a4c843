pub mod command;
pub mod event;
pub mod format;
pub mod gateway;
pub mod model;
pub mod reducer;
pub mod state;
