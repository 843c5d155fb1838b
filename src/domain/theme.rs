use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Storage key the theme preference persists under.
pub const THEME_STORAGE_KEY: &str = "calculatorTheme";

/// Value Object - cosmetic theme for the calculator shell
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Arcade,
    Cyberpunk,
    Matrix,
}

impl Theme {
    /// Cycle order: arcade -> cyberpunk -> matrix -> arcade.
    pub fn next(self) -> Self {
        match self {
            Self::Arcade => Self::Cyberpunk,
            Self::Cyberpunk => Self::Matrix,
            Self::Matrix => Self::Arcade,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Arcade => "🎮",
            Self::Cyberpunk => "🌆",
            Self::Matrix => "💻",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Arcade => "ARCADE",
            Self::Cyberpunk => "CYBER",
            Self::Matrix => "MATRIX",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Arcade => "ARCADE CALC",
            Self::Cyberpunk => "CYBER CALC",
            Self::Matrix => "MATRIX CALC",
        }
    }
}

/// Injected key-value store for UI preferences. `localStorage` in the
/// browser, an in-memory map in tests; the shell never touches a global.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Resolve the theme to hand the rendering layer at initialization.
/// Unknown or absent stored values fall back to the default.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store.get(THEME_STORAGE_KEY).and_then(|raw| raw.parse().ok()).unwrap_or_default()
}

/// Persist a switched theme for the next session.
pub fn store_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.set(THEME_STORAGE_KEY, theme.as_ref());
}
