pub mod auth;
pub mod bestseller;
pub mod search;
pub mod store;

pub use auth::TokenManager;
pub use bestseller::{BestsellerCache, BestsellerResolver};
pub use search::SearchOrchestrator;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, Namespace};
