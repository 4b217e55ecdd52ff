pub mod cli;
mod form_view;
mod status_view;
pub mod ui;
