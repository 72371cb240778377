//! Window configuration health check

use crate::app::{AppConfig, window_attributes_from_config};
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that the effective window configuration is usable
pub struct WindowConfigCheck;

impl WindowConfigCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for WindowConfigCheck {
    fn name(&self) -> &'static str {
        "Window Config"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates window geometry and attribute translation")
    }

    fn check(&self) -> CheckResult {
        let config = AppConfig::default();
        let window = &config.window;

        let mut details = Vec::new();
        details.push(format!("  Title: {:?}", window.title));
        details.push(format!("  Size: {}x{}", window.width, window.height));
        details.push(format!(
            "  Fullscreen: {}, resizable: {}, decorated: {}, vsync: {}",
            window.fullscreen, window.resizable, window.decorated, window.vsync
        ));

        if let Err(e) = config.validate() {
            return CheckResult::fail(format!("Window config invalid: {e}"))
                .with_details(details.join("\n"));
        }

        if window.title.is_empty() {
            return CheckResult::warn("Window title is empty").with_details(details.join("\n"));
        }

        // Attribute translation must reflect the configured geometry
        let attrs = window_attributes_from_config(window);
        if attrs.inner_size.is_none() {
            return CheckResult::fail("Window attributes lost the configured size")
                .with_details(details.join("\n"));
        }
        details.push("  ✓ Window attributes translated".to_string());

        CheckResult::pass(format!("{}x{} window config valid", window.width, window.height))
            .with_details(details.join("\n"))
    }
}
