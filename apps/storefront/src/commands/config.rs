//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - Startup (store name in the header)
/// - Price formatting (currency symbol)
/// - Checkout (how long the "processing" spinner runs)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            store_name: "Corner Books".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(get_config(&config).store_name, "Corner Books");
    }
}
