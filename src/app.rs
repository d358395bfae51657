use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::ToastHost;
use crate::hooks::use_toast::{ToastContext, ToastState};
use crate::pages::add_invoice::AddInvoicePage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::profile::ProfilePage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/add")]
    AddInvoice,
    #[at("/dashboard/analytics")]
    Analytics,
    #[at("/dashboard/notifications")]
    Notifications,
    #[at("/dashboard/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters accepted by the dashboard route: `tab` preselects the
/// status tab, `filter` (today/upcoming) opens the advanced filters with a
/// pre-filled due date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl DashboardQuery {
    pub fn with_tab(tab: &str) -> Self {
        Self {
            tab: Some(tab.to_string()),
            filter: None,
        }
    }

    pub fn with_filter(filter: &str) -> Self {
        Self {
            tab: None,
            filter: Some(filter.to_string()),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::AddInvoice => html! { <AddInvoicePage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Notifications => html! { <NotificationsPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Página não encontrada"}</h1>
                <Link<Route> to={Route::Dashboard}>{"Voltar ao painel"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toasts}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <ToastHost />
            </BrowserRouter>

            <style>
                {include_str!("style.css")}
            </style>
        </ContextProvider<ToastContext>>
    }
}
