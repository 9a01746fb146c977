//! Controllers for the two screens of the app.
//!
//! They hold the screen-local state and decide when the gateway is called;
//! shared state lives in the [`SessionStore`](crate::session::SessionStore)
//! that is passed in.

mod recipe;
mod search;

pub use recipe::{InfoThread, RecipePage};
pub use search::{SearchPage, SearchView};
