use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// How the invoice panel lays its records out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// Handle returned by `use_view_mode` hook
#[derive(Clone, PartialEq)]
pub struct ViewModeHandle {
    pub mode: ViewMode,
    pub set_mode: Callback<ViewMode>,
}

/// Custom hook for the list/grid preference with localStorage persistence
#[hook]
pub fn use_view_mode() -> ViewModeHandle {
    let mode = use_state(|| load_view_mode().unwrap_or_default());

    // Effect: Persist preference on change
    {
        let mode_value = *mode;
        use_effect_with(mode_value, move |mode| {
            save_view_mode(*mode);
            || ()
        });
    }

    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |new_mode| mode.set(new_mode))
    };

    ViewModeHandle {
        mode: *mode,
        set_mode,
    }
}

fn load_view_mode() -> Option<ViewMode> {
    gloo_storage::LocalStorage::get("view-mode").ok()
}

fn save_view_mode(mode: ViewMode) {
    if let Err(e) = gloo_storage::LocalStorage::set("view-mode", mode) {
        web_sys::console::warn_1(&format!("Failed to save view mode: {e:?}").into());
    }
}
