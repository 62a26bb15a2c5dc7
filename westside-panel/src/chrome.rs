use iced::Color;

use crate::screen::Screen;

/// Label given to every entry beneath a drill-in screen.
pub const BACK_LABEL: &str = "Back";

/// Brand color of the navigation bars.
pub const PRIMARY_COLOR: Color = Color::from_rgb8(0x1f, 0x4e, 0x79);

/// Leading control shown in a navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftControl {
    /// Hamburger button that opens the side panel.
    Menu,
    /// Host default: a back button when entries lie beneath, nothing at
    /// the root.
    Default,
}

/// Colors and title shared by every navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeTheme {
    pub app_title: String,
    pub primary: Color,
    pub foreground: Color,
}

impl Default for ChromeTheme {
    fn default() -> Self {
        Self {
            app_title: String::from("Westside CME"),
            primary: PRIMARY_COLOR,
            foreground: Color::WHITE,
        }
    }
}

/// Navigation bar configuration for one stack entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeConfig {
    pub title: String,
    pub left_control: LeftControl,
    pub bar_hidden: bool,
    pub bar_tint: Color,
    pub tint: Color,
    pub title_color: Color,
}

/// Chrome for a screen becoming visible in the content stack.
pub fn content_chrome<S: Screen>(
    screen: &S,
    theme: &ChromeTheme,
) -> ChromeConfig {
    let left_control = if screen.is_directly_navigable() {
        LeftControl::Menu
    } else {
        LeftControl::Default
    };

    bar_chrome(theme.app_title.clone(), left_control, theme)
}

/// Chrome for a screen becoming visible in the menu stack.
pub fn menu_chrome<S: Screen>(screen: &S, theme: &ChromeTheme) -> ChromeConfig {
    bar_chrome(screen.title().to_string(), LeftControl::Default, theme)
}

fn bar_chrome(
    title: String,
    left_control: LeftControl,
    theme: &ChromeTheme,
) -> ChromeConfig {
    ChromeConfig {
        title,
        left_control,
        bar_hidden: false,
        bar_tint: theme.primary,
        tint: theme.foreground,
        title_color: theme.foreground,
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{ChromeTheme, LeftControl, content_chrome, menu_chrome};
    use crate::screen::Screen;

    #[derive(Debug, Clone)]
    struct Page {
        title: &'static str,
        navigable: bool,
    }

    impl Screen for Page {
        fn title(&self) -> &str {
            self.title
        }

        fn is_directly_navigable(&self) -> bool {
            self.navigable
        }
    }

    #[test]
    fn given_navigable_screen_when_shown_in_content_then_menu_control_and_app_title()
     {
        let theme = ChromeTheme::default();
        let chrome = content_chrome(
            &Page {
                title: "Events",
                navigable: true,
            },
            &theme,
        );

        assert_eq!(chrome.title, theme.app_title);
        assert_eq!(chrome.left_control, LeftControl::Menu);
        assert!(!chrome.bar_hidden);
        assert_eq!(chrome.bar_tint, theme.primary);
        assert_eq!(chrome.title_color, Color::WHITE);
    }

    #[test]
    fn given_drill_in_screen_when_shown_in_content_then_menu_control_is_stripped()
     {
        let chrome = content_chrome(
            &Page {
                title: "Detail",
                navigable: false,
            },
            &ChromeTheme::default(),
        );

        assert_eq!(chrome.left_control, LeftControl::Default);
    }

    #[test]
    fn given_menu_screen_when_shown_then_it_keeps_its_own_title() {
        let chrome = menu_chrome(
            &Page {
                title: "Menu",
                navigable: true,
            },
            &ChromeTheme::default(),
        );

        assert_eq!(chrome.title, "Menu");
        assert_eq!(chrome.left_control, LeftControl::Default);
    }
}
