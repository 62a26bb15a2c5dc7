use std::path::PathBuf;

use iced::Size;
use serde::{Deserialize, Serialize};
use westside_panel::{
    ChromeTheme, ContainerConfig, DEFAULT_PANEL_WIDTH, FormFactor,
    GestureConfig, INVISIBLE_SWIPE_ZONE_WIDTH,
};

const DEFAULT_APP_TITLE: &str = "Westside CME";

/// Persisted shell preferences.
///
/// Missing fields fall back to their defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsData {
    app_title: String,
    panel_width: f32,
    swipe_zone_width: f32,
    form_factor: FormFactor,
    events_path: Option<PathBuf>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            app_title: String::from(DEFAULT_APP_TITLE),
            panel_width: DEFAULT_PANEL_WIDTH,
            swipe_zone_width: INVISIBLE_SWIPE_ZONE_WIDTH,
            form_factor: FormFactor::default(),
            events_path: None,
        }
    }
}

impl SettingsData {
    pub(crate) fn app_title(&self) -> &str {
        &self.app_title
    }

    pub(crate) fn events_path(&self) -> Option<&PathBuf> {
        self.events_path.as_ref()
    }

    /// Build the container configuration for the current window size.
    ///
    /// Out-of-range numbers are replaced by their defaults.
    pub(crate) fn container_config(&self, view_size: Size) -> ContainerConfig {
        let panel_width =
            if self.panel_width.is_finite() && self.panel_width > 0.0 {
                self.panel_width
            } else {
                log::warn!(
                    "ignoring panel width {}, using {DEFAULT_PANEL_WIDTH}",
                    self.panel_width
                );
                DEFAULT_PANEL_WIDTH
            };
        let swipe_zone_width = if self.swipe_zone_width.is_finite()
            && self.swipe_zone_width >= 0.0
        {
            self.swipe_zone_width
        } else {
            log::warn!(
                "ignoring swipe zone width {}, using {INVISIBLE_SWIPE_ZONE_WIDTH}",
                self.swipe_zone_width
            );
            INVISIBLE_SWIPE_ZONE_WIDTH
        };

        ContainerConfig {
            panel_width,
            gesture: GestureConfig {
                swipe_zone_width,
                form_factor: self.form_factor,
            },
            chrome: ChromeTheme {
                app_title: self.app_title.clone(),
                ..ChromeTheme::default()
            },
            view_size,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_panel_width(&mut self, width: f32) {
        self.panel_width = width;
    }

    #[cfg(test)]
    pub(crate) fn set_form_factor(&mut self, form_factor: FormFactor) {
        self.form_factor = form_factor;
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use westside_panel::{DEFAULT_PANEL_WIDTH, FormFactor};

    use super::SettingsData;

    #[test]
    fn given_partial_json_when_deserialized_then_missing_fields_use_defaults() {
        let settings: SettingsData =
            serde_json::from_str(r#"{ "form_factor": "tablet" }"#)
                .expect("partial settings should parse");

        assert_eq!(settings.app_title(), "Westside CME");
        assert_eq!(settings.form_factor, FormFactor::Tablet);
        assert!(settings.events_path().is_none());
    }

    #[test]
    fn given_invalid_panel_width_when_building_config_then_default_is_used() {
        let mut settings = SettingsData::default();
        settings.set_panel_width(-12.0);

        let config = settings.container_config(Size::new(375.0, 667.0));

        assert_eq!(config.panel_width, DEFAULT_PANEL_WIDTH);
    }

    #[test]
    fn given_custom_settings_when_building_config_then_values_flow_through() {
        let mut settings = SettingsData::default();
        settings.set_panel_width(320.0);
        settings.set_form_factor(FormFactor::Tablet);

        let config = settings.container_config(Size::new(768.0, 1024.0));

        assert_eq!(config.panel_width, 320.0);
        assert_eq!(config.gesture.form_factor, FormFactor::Tablet);
        assert_eq!(config.chrome.app_title, "Westside CME");
        assert_eq!(config.view_size, Size::new(768.0, 1024.0));
    }
}
