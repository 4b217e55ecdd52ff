pub mod actions;
pub mod clipboard;
pub mod events;
mod export;
mod form_state;
mod history;
mod preview;
mod scheduler;
mod scroll;
mod status_state;
mod themes;

pub use export::*;
pub use form_state::*;
pub use history::*;
pub use preview::*;
pub use scheduler::*;
pub use scroll::*;
pub use status_state::*;
pub use themes::*;
