use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen]
    static EXHIBITIONS_CONFIG: JsValue;
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) refresh_url: String,
    pub(crate) exhibitions_url: String,
    pub(crate) status_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_url: "/api/refresh".to_string(),
            exhibitions_url: "/api/exhibitions".to_string(),
            status_url: "/api/status".to_string(),
        }
    }
}

impl Config {
    // Pages that don't define the global get the defaults.
    pub(crate) fn load() -> Self {
        EXHIBITIONS_CONFIG.into_serde().unwrap_or_default()
    }
}
