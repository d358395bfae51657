use gloo::events::EventListener;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use web_sys::wasm_bindgen::JsCast;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

/// Theme preference: explicit, or follow the system.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

/// Handle returned by `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    /// User's stored preference
    pub theme: Theme,
    /// Preference with `Auto` resolved against the system
    pub effective_theme: Theme,
    pub toggle: Callback<()>,
}

/// Custom hook for theme management
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_theme_preference().unwrap_or(Theme::Auto));
    let system_preference = use_state(detect_system_preference);

    let effective_theme = match *theme {
        Theme::Auto => *system_preference,
        other => other,
    };

    // Effect: Apply theme to DOM
    use_effect_with(effective_theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    // Effect: Listen to system preference changes
    {
        let system_preference = system_preference.clone();
        use_effect_with((), move |_| {
            let listener = setup_media_query_listener(system_preference.setter());
            move || drop(listener)
        });
    }

    // Effect: Persist theme preference
    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            save_theme_preference(*theme);
            || ()
        });
    }

    // Toggle switches between explicit Light and Dark
    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let new_theme = match *theme {
                Theme::Dark => Theme::Light,
                _ => Theme::Dark,
            };
            theme.set(new_theme);
        })
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
    }
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

/// Apply theme by setting the data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let theme_str = match theme {
            Theme::Dark => "dark",
            // Auto is resolved before reaching here
            Theme::Light | Theme::Auto => "light",
        };
        let _ = html.set_attribute("data-theme", theme_str);
    }
}

fn load_theme_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_theme_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, theme) {
        web_sys::console::warn_1(&format!("Failed to save theme: {e:?}").into());
    }
}

/// Setup MediaQueryList event listener for system preference changes
fn setup_media_query_listener(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .and_then(|mq| {
            let target = mq.dyn_into::<web_sys::EventTarget>().ok()?;
            Some(EventListener::new(&target, "change", move |_event| {
                setter.set(detect_system_preference());
            }))
        })
}
