//! Window configuration and management

use super::config::WindowConfig;
use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, WindowAttributes};

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    fn demo_window() -> WindowConfig {
        WindowConfig {
            title: "SDL3 C++ 23 Text".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
            vsync: true,
        }
    }

    #[test]
    fn test_attributes_carry_title_and_size() {
        let attrs = window_attributes_from_config(&demo_window());

        assert_eq!(attrs.title, "SDL3 C++ 23 Text");
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
        assert!(attrs.resizable);
        assert!(attrs.decorations);
        assert!(attrs.fullscreen.is_none());
    }

    #[test]
    fn test_attributes_reflect_fullscreen_and_borderless() {
        let mut config = demo_window();
        config.fullscreen = true;
        config.decorated = false;
        config.resizable = false;

        let attrs = window_attributes_from_config(&config);

        assert!(attrs.fullscreen.is_some());
        assert!(!attrs.decorations);
        assert!(!attrs.resizable);
    }
}
