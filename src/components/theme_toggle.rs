use yew::prelude::*;

use crate::hooks::use_theme::{Theme, use_theme};

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme_handle = use_theme();

    let (icon, label) = match theme_handle.effective_theme {
        Theme::Dark => ("☀️", "Ativar modo claro"),
        Theme::Light => ("🌙", "Ativar modo escuro"),
        // Exhaustive match: effective_theme is already resolved
        Theme::Auto => ("🌓", "Tema automático"),
    };

    let onclick = {
        let toggle = theme_handle.toggle;
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
