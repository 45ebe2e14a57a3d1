//! Persisted light/dark theme toggle.
//!
//! The starting mode is resolved once, in priority order:
//! 1. the value persisted under the preference key (if it is `"light"` or `"dark"`),
//! 2. the system `prefers-color-scheme: dark` signal,
//! 3. [`ThemeMode::Light`].
//!
//! The system signal is only consulted when nothing usable is stored. Every
//! toggle writes the new mode back to the store immediately.

use std::fmt;

use crate::config::ThemeConfig;
use crate::patch::{ARIA_PRESSED, DomPatch, Target};
use crate::storage::PreferenceStore;

/// Toggle label while dark mode is active.
pub const LABEL_WHEN_DARK: &str = "☀️ Disable Dark Mode";
/// Toggle label while light mode is active.
pub const LABEL_WHEN_LIGHT: &str = "🌙 Enable Dark Mode";

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The literal persisted for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted literal. Anything else is treated as absent, so a
    /// corrupted value defers to the system signal instead of forcing light.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label for the toggle control while this mode is applied.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => LABEL_WHEN_LIGHT,
            Self::Dark => LABEL_WHEN_DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the starting mode from a stored literal and a lazily-read system signal.
#[must_use]
pub fn resolve_initial_mode(stored: Option<&str>, prefers_dark: impl FnOnce() -> bool) -> ThemeMode {
    if let Some(mode) = stored.and_then(ThemeMode::parse) {
        return mode;
    }
    if prefers_dark() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Owns the applied mode and the store it is persisted in.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    config: ThemeConfig,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Determine the starting mode and return the patches that apply it.
    ///
    /// A failed storage read is treated as "nothing stored".
    pub fn initialize(
        store: S,
        config: ThemeConfig,
        prefers_dark: impl FnOnce() -> bool,
    ) -> (Self, Vec<DomPatch>) {
        let stored = match store.get(&config.preference_key) {
            Ok(value) => value,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(store = store.name(), error = %_err, "theme preference unreadable");
                None
            }
        };
        let mode = resolve_initial_mode(stored.as_deref(), prefers_dark);

        #[cfg(feature = "tracing")]
        tracing::debug!(%mode, stored = stored.is_some(), "theme initialized");

        let controller = Self {
            store,
            config,
            mode,
        };
        let patches = controller.render();
        (controller, patches)
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the mode, persist it, and return the patches that apply it.
    ///
    /// A failed write does not prevent the visual change.
    pub fn toggle(&mut self) -> Vec<DomPatch> {
        self.mode = self.mode.toggled();
        if let Err(_err) = self
            .store
            .set(&self.config.preference_key, self.mode.as_str())
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(store = self.store.name(), error = %_err, "failed to persist theme");
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(mode = %self.mode, "theme toggled");

        self.render()
    }

    /// Root class, toggle label and pressed state for the current mode.
    #[must_use]
    pub fn render(&self) -> Vec<DomPatch> {
        let toggle = Target::id(self.config.toggle_id.as_str());
        vec![
            DomPatch::class(Target::Root, self.config.dark_class.as_str(), self.mode.is_dark()),
            DomPatch::text(toggle.clone(), self.mode.toggle_label()),
            DomPatch::flag(toggle, ARIA_PRESSED, self.mode.is_dark()),
        ]
    }
}
