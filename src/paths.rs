//! Forward-slash path rendering for the startup banner
//!
//! The banner is part of the observable contract: one line on stdout, the
//! same path shape on every host OS.

use std::path::Path;

/// Literal prefix of the startup banner line
pub const BANNER_PREFIX: &str = "Current working dir: ";

/// Renders a path with forward-slash separators regardless of host
/// conventions
pub fn generic_display(path: &Path) -> String {
    let rendered = path.display().to_string();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Formats the startup banner line for the given working directory
pub fn banner_line(dir: &Path) -> String {
    format!("{}{}", BANNER_PREFIX, generic_display(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_generic_display_uses_forward_slashes() {
        let path = PathBuf::from("/tmp").join("demo").join("assets");
        let rendered = generic_display(&path);

        assert!(!rendered.contains('\\'));
        assert!(rendered.contains('/'));
    }

    #[test]
    fn test_generic_display_nonempty_for_absolute_path() {
        let cwd = std::env::current_dir().expect("current dir");
        assert!(!generic_display(&cwd).is_empty());
    }

    #[test]
    fn test_banner_line_has_exact_prefix() {
        let cwd = std::env::current_dir().expect("current dir");
        let line = banner_line(&cwd);

        assert!(line.starts_with("Current working dir: "));
        assert!(line.len() > BANNER_PREFIX.len());
    }
}
