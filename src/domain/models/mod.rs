mod action;
mod event;
mod form;
mod generation;
mod history;
mod loading;
mod status;
mod textarea;

pub use action::*;
pub use event::*;
pub use form::*;
pub use generation::*;
pub use history::*;
pub use loading::*;
pub use status::*;
pub use textarea::*;
