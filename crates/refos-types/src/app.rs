//! The closed set of hosted application kinds.
//!
//! The window core never looks inside an app; a kind is just the key the
//! launch catalog and the content registry are indexed by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies which logical application a window instance hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    FileExplorer,
    Notepad,
    Calculator,
    Settings,
    Weather,
    Calendar,
    Browser,
    Terminal,
    Refy,
    Movie,
    Game,
    Email,
    Store,
}

impl AppKind {
    /// All kinds, in catalog order.
    pub const ALL: [AppKind; 13] = [
        AppKind::FileExplorer,
        AppKind::Notepad,
        AppKind::Calculator,
        AppKind::Settings,
        AppKind::Weather,
        AppKind::Calendar,
        AppKind::Browser,
        AppKind::Terminal,
        AppKind::Refy,
        AppKind::Movie,
        AppKind::Game,
        AppKind::Email,
        AppKind::Store,
    ];

    /// Default window title when no override is supplied.
    pub fn default_title(self) -> &'static str {
        match self {
            AppKind::FileExplorer => "File Explorer",
            AppKind::Notepad => "Notepad",
            AppKind::Calculator => "Calculator",
            AppKind::Settings => "Settings",
            AppKind::Weather => "Weather",
            AppKind::Calendar => "Calendar",
            AppKind::Browser => "Web Browser",
            AppKind::Terminal => "Terminal",
            AppKind::Refy => "Refy Assistant",
            AppKind::Movie => "RefMovies",
            AppKind::Game => "RefGames",
            AppKind::Email => "RefMail",
            AppKind::Store => "Ref Store",
        }
    }

    /// Icon identifier for the taskbar / start menu.
    pub fn icon_id(self) -> &'static str {
        match self {
            AppKind::FileExplorer => "folder",
            AppKind::Notepad => "file-text",
            AppKind::Calculator => "calculator",
            AppKind::Settings => "settings",
            AppKind::Weather => "cloud",
            AppKind::Calendar => "calendar",
            AppKind::Browser => "globe",
            AppKind::Terminal => "terminal",
            AppKind::Refy => "bot",
            AppKind::Movie => "youtube",
            AppKind::Game => "gamepad",
            AppKind::Email => "mail",
            AppKind::Store => "store",
        }
    }

    /// Stable kebab-case name (also the TOML catalog section key).
    pub fn as_str(self) -> &'static str {
        match self {
            AppKind::FileExplorer => "file-explorer",
            AppKind::Notepad => "notepad",
            AppKind::Calculator => "calculator",
            AppKind::Settings => "settings",
            AppKind::Weather => "weather",
            AppKind::Calendar => "calendar",
            AppKind::Browser => "browser",
            AppKind::Terminal => "terminal",
            AppKind::Refy => "refy",
            AppKind::Movie => "movie",
            AppKind::Game => "game",
            AppKind::Email => "email",
            AppKind::Store => "store",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized app-kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown app kind: {0}")]
pub struct UnknownAppKind(pub String);

impl FromStr for AppKind {
    type Err = UnknownAppKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownAppKind(s.to_string()))
    }
}
