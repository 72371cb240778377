//! Shader-format preference health check

use crate::app::config::ShaderFormats;
use crate::app::{AppConfig, renderer};
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that the configured shader-format preference is satisfiable
pub struct ShaderFormatCheck;

impl ShaderFormatCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShaderFormatCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ShaderFormatCheck {
    fn name(&self) -> &'static str {
        "Shader Formats"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates the GPU shader-format preference from configuration")
    }

    fn check(&self) -> CheckResult {
        let config = AppConfig::default();
        let requested = config.gpu.formats();

        let mut details = Vec::new();
        details.push(format!("  Requested: {:?}", requested));

        if requested.is_empty() {
            return CheckResult::fail("Shader format preference is empty")
                .with_details(details.join("\n"));
        }

        // Negotiation must always land on a loadable set, even against a
        // WGSL-only adapter
        let against_wgsl_only = renderer::negotiate_formats(requested, ShaderFormats::WGSL);
        details.push(format!("  WGSL-only adapter would use: {:?}", against_wgsl_only));

        if against_wgsl_only.is_empty() {
            return CheckResult::fail("Negotiation produced an empty format set")
                .with_details(details.join("\n"));
        }

        if !against_wgsl_only.intersects(requested) {
            details.push("  WGSL fallback applies on adapters without passthrough".to_string());
        }

        CheckResult::pass(format!("{:?} preference satisfiable", requested))
            .with_details(details.join("\n"))
    }
}
