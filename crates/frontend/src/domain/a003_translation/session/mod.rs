pub mod controller;
pub mod error;
pub mod state;

pub use controller::{SubmitOutcome, TranslationSessionController};
pub use error::SessionError;
pub use state::{ItemState, SessionItem, TranslationSession};
