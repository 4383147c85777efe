/// Milliseconds a feedback message stays visible.
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

/// Runtime settings shared through Leptos context.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin as the page.
    pub api_base: String,
    pub message_timeout_ms: u32,
}

impl BoardConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            message_timeout_ms: MESSAGE_TIMEOUT_MS,
        }
    }

    // ACTIVITY_BOARD_API_BASE is read when the wasm bundle is built
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ACTIVITY_BOARD_API_BASE").unwrap_or(""))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin_with_five_second_messages() {
        let config = BoardConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.message_timeout_ms, 5_000);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(BoardConfig::new("http://localhost:8000/").api_base, "http://localhost:8000");
        assert_eq!(BoardConfig::new("http://localhost:8000").api_base, "http://localhost:8000");
    }
}
