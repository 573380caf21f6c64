//! Current location and page navigation.

use std::sync::{Mutex, PoisonError};

/// Access to the active path and full-page navigation.
pub trait Navigator: Send + Sync {
    /// Path of the page currently shown, e.g. `/orders`.
    fn current_path(&self) -> String;

    /// Navigate by reloading the application at `path`, discarding all
    /// in-memory state. Not an in-app route transition.
    fn hard_navigate(&self, path: &str);
}

#[derive(Debug)]
struct Location {
    path: String,
    history: Vec<String>,
}

/// Navigator without a browser: tracks the path and records every hard
/// navigation. Used by the CLI and in tests.
#[derive(Debug)]
pub struct MemoryNavigator {
    location: Mutex<Location>,
}

impl MemoryNavigator {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            location: Mutex::new(Location {
                path: initial_path.into(),
                history: Vec::new(),
            }),
        }
    }

    /// Every path passed to [`Navigator::hard_navigate`], oldest first.
    pub fn history(&self) -> Vec<String> {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .clone()
    }

    pub fn navigations(&self) -> usize {
        self.location.lock().unwrap_or_else(PoisonError::into_inner).history.len()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.location.lock().unwrap_or_else(PoisonError::into_inner).path.clone()
    }

    fn hard_navigate(&self, path: &str) {
        let mut location = self.location.lock().unwrap_or_else(PoisonError::into_inner);
        location.path = path.to_string();
        location.history.push(path.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::BrowserNavigator;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Navigator;

    /// `window.location` of the running page.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserNavigator;

    impl Navigator for BrowserNavigator {
        fn current_path(&self) -> String {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }

        fn hard_navigate(&self, path: &str) {
            let Some(window) = web_sys::window() else {
                tracing::warn!("no window object; cannot navigate to {path}");
                return;
            };
            if let Err(e) = window.location().set_href(path) {
                tracing::warn!("navigation to {path} failed: {e:?}");
            }
        }
    }
}
