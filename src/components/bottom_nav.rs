use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

struct NavItem {
    route: Route,
    icon: &'static str,
    label: &'static str,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        route: Route::Dashboard,
        icon: "🏠",
        label: "Início",
    },
    NavItem {
        route: Route::Analytics,
        icon: "📊",
        label: "Análise",
    },
    NavItem {
        route: Route::AddInvoice,
        icon: "➕",
        label: "Adicionar",
    },
    NavItem {
        route: Route::Notifications,
        icon: "🔔",
        label: "Avisos",
    },
    NavItem {
        route: Route::Profile,
        icon: "👤",
        label: "Perfil",
    },
];

/// Fixed bottom navigation bar shown on every dashboard route.
#[function_component(BottomNavigation)]
pub fn bottom_navigation() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="bottom-nav">
            {
                NAV_ITEMS.iter().map(|item| {
                    let active = current == Some(item.route);
                    let class = if active { "nav-item active" } else { "nav-item" };
                    html! {
                        <Link<Route> to={item.route} classes={class}>
                            <span class="nav-icon">{item.icon}</span>
                            <span class="nav-label">{item.label}</span>
                        </Link<Route>>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
