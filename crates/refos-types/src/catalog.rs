//! Launch catalog -- the static per-app configuration table.
//!
//! Maps every [`AppKind`] to its default window title, icon, initial
//! position, and initial size. The launch dispatcher reads this table when
//! creating windows; nothing writes it after load. Built-in defaults can be
//! overlaid from a TOML file (`[apps.<kind>]` sections).

use std::collections::HashMap;

use serde::Deserialize;

use crate::app::AppKind;
use crate::error::{RefosError, Result};
use crate::geometry::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, Point, Size};

/// Launch-time defaults for one application kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLaunchConfig {
    pub title: String,
    pub icon: String,
    pub position: Point,
    pub size: Size,
}

/// The full configuration table, one entry per [`AppKind`].
///
/// Backed by a dense array in [`AppKind::ALL`] order so lookups are total.
#[derive(Debug, Clone)]
pub struct AppCatalog {
    entries: Vec<AppLaunchConfig>,
}

impl AppCatalog {
    /// The built-in defaults.
    pub fn builtin() -> Self {
        let entries = AppKind::ALL
            .into_iter()
            .map(|kind| AppLaunchConfig {
                title: kind.default_title().to_string(),
                icon: kind.icon_id().to_string(),
                position: builtin_position(kind),
                size: builtin_size(kind),
            })
            .collect();
        Self { entries }
    }

    /// Built-in defaults with a TOML overlay applied on top.
    ///
    /// Unknown app kinds and sizes below the window minimums are rejected:
    /// the catalog is validated once at load, unlike the policy-free
    /// registry.
    pub fn from_toml_str(overlay: &str) -> Result<Self> {
        let mut catalog = Self::builtin();
        let parsed: CatalogOverlay = toml::from_str(overlay)?;
        for (name, entry) in parsed.apps {
            let kind: AppKind = name
                .parse()
                .map_err(|_| RefosError::Catalog(format!("unknown app kind: {name}")))?;
            let config = catalog.entry_mut(kind);
            if let Some(title) = entry.title {
                config.title = title;
            }
            if let Some(icon) = entry.icon {
                config.icon = icon;
            }
            if let Some(position) = entry.position {
                config.position = position;
            }
            if let Some(size) = entry.size {
                if !size.meets_min() {
                    return Err(RefosError::Catalog(format!(
                        "size for {kind} below minimum {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}",
                    )));
                }
                config.size = size;
            }
        }
        Ok(catalog)
    }

    /// Look up the launch config for a kind. Total: every kind has an entry.
    pub fn get(&self, kind: AppKind) -> &AppLaunchConfig {
        &self.entries[kind_index(kind)]
    }

    /// All entries with their kinds, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (AppKind, &AppLaunchConfig)> {
        AppKind::ALL.into_iter().zip(self.entries.iter())
    }

    fn entry_mut(&mut self, kind: AppKind) -> &mut AppLaunchConfig {
        &mut self.entries[kind_index(kind)]
    }
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn kind_index(kind: AppKind) -> usize {
    AppKind::ALL
        .into_iter()
        .position(|k| k == kind)
        .unwrap_or(0)
}

fn builtin_position(kind: AppKind) -> Point {
    match kind {
        AppKind::FileExplorer => Point::new(100, 100),
        AppKind::Notepad => Point::new(150, 150),
        AppKind::Calculator => Point::new(200, 200),
        AppKind::Settings => Point::new(250, 250),
        AppKind::Weather => Point::new(300, 150),
        AppKind::Calendar => Point::new(350, 200),
        AppKind::Browser => Point::new(400, 150),
        AppKind::Terminal => Point::new(250, 300),
        AppKind::Refy => Point::new(450, 250),
        AppKind::Movie => Point::new(500, 200),
        AppKind::Game => Point::new(300, 100),
        AppKind::Email => Point::new(150, 300),
        AppKind::Store => Point::new(200, 100),
    }
}

fn builtin_size(kind: AppKind) -> Size {
    match kind {
        AppKind::FileExplorer => Size::new(600, 400),
        AppKind::Notepad => Size::new(500, 400),
        AppKind::Calculator => Size::new(350, 450),
        AppKind::Settings => Size::new(550, 500),
        AppKind::Weather => Size::new(450, 400),
        AppKind::Calendar => Size::new(550, 500),
        AppKind::Browser => Size::new(700, 500),
        AppKind::Terminal => Size::new(600, 400),
        AppKind::Refy => Size::new(400, 550),
        AppKind::Movie => Size::new(800, 600),
        AppKind::Game => Size::new(900, 650),
        AppKind::Email => Size::new(800, 600),
        AppKind::Store => Size::new(850, 600),
    }
}

// -- TOML overlay schema ------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CatalogOverlay {
    #[serde(default)]
    apps: HashMap<String, OverlayEntry>,
}

#[derive(Debug, Deserialize)]
struct OverlayEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    position: Option<Point>,
    #[serde(default)]
    size: Option<Size>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_kind() {
        let catalog = AppCatalog::builtin();
        for kind in AppKind::ALL {
            let config = catalog.get(kind);
            assert_eq!(config.title, kind.default_title());
            assert_eq!(config.icon, kind.icon_id());
        }
    }

    #[test]
    fn builtin_notepad_defaults() {
        let catalog = AppCatalog::builtin();
        let notepad = catalog.get(AppKind::Notepad);
        assert_eq!(notepad.position, Point::new(150, 150));
        assert_eq!(notepad.size, Size::new(500, 400));
    }

    #[test]
    fn builtin_sizes_meet_minimums() {
        let catalog = AppCatalog::builtin();
        for (kind, config) in catalog.iter() {
            assert!(config.size.meets_min(), "{kind} default size too small");
        }
    }

    #[test]
    fn overlay_overrides_selected_fields() {
        let toml = r#"
            [apps.notepad]
            title = "Notes"
            position = { x = 10, y = 20 }

            [apps.browser]
            size = { width = 640, height = 480 }
        "#;
        let catalog = AppCatalog::from_toml_str(toml).unwrap();
        let notepad = catalog.get(AppKind::Notepad);
        assert_eq!(notepad.title, "Notes");
        assert_eq!(notepad.position, Point::new(10, 20));
        // Untouched fields keep their builtin values.
        assert_eq!(notepad.size, Size::new(500, 400));
        assert_eq!(catalog.get(AppKind::Browser).size, Size::new(640, 480));
    }

    #[test]
    fn overlay_rejects_unknown_kind() {
        let toml = r#"
            [apps.solitaire]
            title = "Solitaire"
        "#;
        let err = AppCatalog::from_toml_str(toml).unwrap_err();
        assert!(format!("{err}").contains("unknown app kind"));
    }

    #[test]
    fn overlay_rejects_degenerate_size() {
        let toml = r#"
            [apps.notepad]
            size = { width = 50, height = 50 }
        "#;
        let err = AppCatalog::from_toml_str(toml).unwrap_err();
        assert!(format!("{err}").contains("below minimum"));
    }

    #[test]
    fn overlay_rejects_invalid_toml() {
        assert!(AppCatalog::from_toml_str("not [[[ toml").is_err());
    }

    #[test]
    fn empty_overlay_equals_builtin() {
        let catalog = AppCatalog::from_toml_str("").unwrap();
        let builtin = AppCatalog::builtin();
        for kind in AppKind::ALL {
            assert_eq!(catalog.get(kind), builtin.get(kind));
        }
    }

    #[test]
    fn iter_yields_thirteen_entries() {
        assert_eq!(AppCatalog::builtin().iter().count(), 13);
    }
}
