use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::theme_toggle::ThemeToggle;
use crate::models::notification::{mock_notifications, unread_count};

/// Sticky dashboard header: title, theme toggle and the notification bell.
#[function_component(DashboardHeader)]
pub fn dashboard_header() -> Html {
    let unread = unread_count(&mock_notifications());

    html! {
        <header class="app-header">
            <div class="header-row">
                <Link<Route> to={Route::Dashboard} classes="header-title">
                    <h1>{"Gerenciador de Faturas"}</h1>
                </Link<Route>>
                <div class="header-actions">
                    <ThemeToggle />
                    <Link<Route> to={Route::Notifications} classes="header-bell">
                        {"🔔"}
                        if unread > 0 {
                            <span class="badge">{unread}</span>
                        }
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}
