pub mod backend_client;
pub mod chat_session;
pub mod models;

pub use backend_client::BackendClient;
pub use chat_session::ChatSession;
pub use models::*;
