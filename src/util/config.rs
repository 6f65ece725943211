//! Loads editor configuration from the page.
//!
//! `index.html` may carry a
//! `<script id="polyboard-config" type="application/json">` block with a
//! partial `EditorConfig`. Missing or invalid blocks fall back to defaults.

use canvas::config::EditorConfig;

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "polyboard-config";

/// Resolve the editor configuration for this page.
pub fn load_config() -> EditorConfig {
    match read_config_block() {
        Some(raw) => config_from_block(&raw),
        None => EditorConfig::default(),
    }
}

/// Parse a config block, logging and falling back to defaults on error.
pub fn config_from_block(raw: &str) -> EditorConfig {
    if raw.trim().is_empty() {
        return EditorConfig::default();
    }
    match EditorConfig::from_json(raw) {
        Ok(config) => {
            log::info!("using page config (storage key {})", config.storage_key);
            config
        }
        Err(e) => {
            log::warn!("ignoring page config: {e}");
            EditorConfig::default()
        }
    }
}

fn read_config_block() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
