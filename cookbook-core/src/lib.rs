pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod pages;
pub mod prompts;
pub mod schema;
pub mod session;
pub mod types;

pub use config::{ConfigError, GatewayConfig};
pub use error::{GatewayError, ValidationError};
pub use gateway::{GatewayResult, Outcome, RecipeGateway};
pub use llm::{FakeProvider, LlmError, LlmProvider, TogetherProvider};
pub use pages::{InfoThread, RecipePage, SearchPage, SearchView};
pub use session::{CachedResults, SessionStore};
pub use types::{InfoKey, InfoKind, Recipe, RecipeSeed, SearchQuery, SearchStyle};
