// Persisted application settings
// Stored in <config dir>/tabulator/settings.json

use std::fs;
use std::path::{Path, PathBuf};

use gpui::{px, Bounds, Pixels, Point, Size, WindowBounds};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preferences::Preferences;
use crate::recent::RecentDocuments;

/// Visibility of the optional window chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationState {
    pub show_toolbar: bool,
    pub show_status_bar: bool,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            show_toolbar: true,
            show_status_bar: true,
        }
    }
}

/// Main window bounds in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub maximized: bool,
}

impl Geometry {
    /// Full screen is restored as maximized.
    pub fn from_window_bounds(bounds: WindowBounds) -> Self {
        let (bounds, maximized) = match bounds {
            WindowBounds::Windowed(b) => (b, false),
            WindowBounds::Maximized(b) | WindowBounds::Fullscreen(b) => (b, true),
        };
        Self {
            x: f32::from(bounds.origin.x),
            y: f32::from(bounds.origin.y),
            width: f32::from(bounds.size.width),
            height: f32::from(bounds.size.height),
            maximized,
        }
    }

    pub fn to_window_bounds(&self) -> WindowBounds {
        let bounds: Bounds<Pixels> = Bounds {
            origin: Point::new(px(self.x), px(self.y)),
            size: Size {
                width: px(self.width),
                height: px(self.height),
            },
        };
        if self.maximized {
            WindowBounds::Maximized(bounds)
        } else {
            WindowBounds::Windowed(bounds)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub preferences: Preferences,
    pub recent_documents: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_state: Option<ApplicationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_geometry: Option<Geometry>,
}

impl AppSettings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tabulator")
            .join("settings.json")
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&content)?;
        settings.preferences = settings.preferences.sanitized();
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("Wrote settings to {}", path.display());
        Ok(())
    }

    /// The recent list as stored, bounded by the stored maximum.
    pub fn recent_documents(&self) -> RecentDocuments {
        RecentDocuments::from_persisted(
            self.recent_documents.iter().cloned(),
            self.preferences.maximum_recent_documents,
        )
    }

    /// State to apply at startup, honouring the preference.
    pub fn restored_state(&self) -> ApplicationState {
        if self.preferences.restore_application_state {
            self.application_state.unwrap_or_default()
        } else {
            ApplicationState::default()
        }
    }

    pub fn restored_geometry(&self) -> Option<Geometry> {
        if self.preferences.restore_application_geometry {
            self.application_geometry
                .filter(|g| g.width > 0.0 && g.height > 0.0)
        } else {
            None
        }
    }

    /// Record what the window looks like now, dropping what the preferences say not to keep.
    /// Without a new geometry the previously recorded one is kept.
    pub fn capture(
        &mut self,
        preferences: &Preferences,
        recent: &RecentDocuments,
        state: ApplicationState,
        geometry: Option<Geometry>,
    ) {
        self.preferences = preferences.clone();
        self.recent_documents = recent.to_persisted();
        self.application_state = preferences.restore_application_state.then_some(state);
        self.application_geometry = if preferences.restore_application_geometry {
            geometry.or(self.application_geometry)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> AppSettings {
        AppSettings {
            preferences: Preferences {
                maximum_recent_documents: 2,
                ..Preferences::default()
            },
            recent_documents: vec![
                PathBuf::from("/data/a.csv"),
                PathBuf::from("/data/b.csv"),
                PathBuf::from("/data/c.csv"),
            ],
            application_state: Some(ApplicationState {
                show_toolbar: false,
                show_status_bar: true,
            }),
            application_geometry: Some(Geometry {
                x: 10.0,
                y: 20.0,
                width: 800.0,
                height: 600.0,
                maximized: false,
            }),
        }
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = sample();
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn recent_documents_stored_under_named_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["recentDocuments"][0], "/data/a.csv");
        assert_eq!(json["preferences"]["maximumRecentDocuments"], 2);
    }

    #[test]
    fn recent_documents_respect_stored_maximum() {
        let recent = sample().recent_documents();
        assert_eq!(
            recent.to_persisted(),
            vec![PathBuf::from("/data/a.csv"), PathBuf::from("/data/b.csv")]
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppSettings::load_from(&path),
            Err(crate::error::Error::Json(_))
        ));
    }

    #[test]
    fn empty_object_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), AppSettings::default());
    }

    #[test]
    fn restore_preferences_gate_state_and_geometry() {
        let mut settings = sample();
        assert_eq!(settings.restored_state().show_toolbar, false);
        assert!(settings.restored_geometry().is_some());

        settings.preferences.restore_application_state = false;
        settings.preferences.restore_application_geometry = false;
        assert_eq!(settings.restored_state(), ApplicationState::default());
        assert_eq!(settings.restored_geometry(), None);
    }

    #[test]
    fn capture_drops_geometry_when_not_restoring() {
        let mut settings = AppSettings::default();
        let prefs = Preferences {
            restore_application_geometry: false,
            ..Preferences::default()
        };
        let mut recent = RecentDocuments::new(prefs.maximum_recent_documents);
        recent.add("/x.csv", true);
        settings.capture(&prefs, &recent, ApplicationState::default(), sample().application_geometry);
        assert_eq!(settings.application_geometry, None);
        assert_eq!(settings.application_state, Some(ApplicationState::default()));
        assert_eq!(settings.recent_documents, vec![PathBuf::from("/x.csv")]);
    }

    #[test]
    fn capture_without_geometry_keeps_the_saved_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = sample();
        let saved = settings.application_geometry;
        assert!(saved.is_some());

        let recent = settings.recent_documents();
        let prefs = settings.preferences.clone();
        settings.capture(&prefs, &recent, ApplicationState::default(), None);
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.application_geometry, saved);
        assert_eq!(loaded.restored_geometry(), saved);
    }

    #[test]
    fn geometry_converts_window_bounds() {
        let bounds = Bounds {
            origin: Point::new(px(100.0), px(200.0)),
            size: Size {
                width: px(800.0),
                height: px(600.0),
            },
        };

        let geometry = Geometry::from_window_bounds(WindowBounds::Maximized(bounds));
        assert_eq!(geometry.x, 100.0);
        assert_eq!(geometry.height, 600.0);
        assert!(geometry.maximized);

        match geometry.to_window_bounds() {
            WindowBounds::Maximized(back) => {
                assert_eq!(f32::from(back.origin.y), 200.0);
                assert_eq!(f32::from(back.size.width), 800.0);
            }
            other => panic!("expected maximized bounds, got {:?}", other),
        }

        let windowed = Geometry::from_window_bounds(WindowBounds::Windowed(bounds));
        assert!(!windowed.maximized);
        assert!(matches!(windowed.to_window_bounds(), WindowBounds::Windowed(_)));
    }
}
