use std::cell::RefCell;

use wasm_bindgen::prelude::*;

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Empty base: requests go to the origin that served the page, which is
    /// how the backend normally hosts this frontend.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the build-time `API_BASE_URL` variable
    pub fn new() -> Result<Self, &'static str> {
        match option_env!("API_BASE_URL") {
            Some(url) => Ok(Self::from_url(url)),
            None => Err("API_BASE_URL environment variable is not set"),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/upload`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::default());
}

/// Load the build-time base URL if one was provided; otherwise keep the
/// same-origin default.
pub fn init_api_config() {
    if let Ok(config) = ApiConfig::new() {
        set_api_config(config);
    }
}

pub fn set_api_config(config: ApiConfig) {
    API_CONFIG.with(|cell| *cell.borrow_mut() = config);
}

/// Override the API base URL from JavaScript, e.g. when the backend runs on
/// another port during development.
#[wasm_bindgen]
pub fn init_api_config_js(base_url: &str) {
    set_api_config(ApiConfig::from_url(base_url));
}

pub fn api_url(path: &str) -> String {
    API_CONFIG.with(|cell| cell.borrow().url(path))
}
