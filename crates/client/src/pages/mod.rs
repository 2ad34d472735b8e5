//! Page-level controllers.
//!
//! Controllers own the state a page renders and the flows its actions run;
//! the rendering layer supplies capabilities (confirmation prompts,
//! navigation) and reads the state back after each action.

pub mod favorites;

pub use favorites::{CartOutcome, Confirmation, ConfirmPrompt, FavoritesPage, RemoveOutcome};
