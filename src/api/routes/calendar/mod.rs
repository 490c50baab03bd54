pub mod public;
mod router;

pub use router::{calendar_handler, router};
