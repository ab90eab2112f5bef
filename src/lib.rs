//! Items API: REST CRUD and search over a single `items` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Item, ItemSearch, NewItem};
pub use routes::{app, common_routes, item_routes};
pub use service::ItemService;
pub use state::AppState;
pub use store::{connect, ensure_items_table, Backend};
