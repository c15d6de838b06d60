// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use config::{api_url, ApiConfig};
