use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{BottomNavigation, DashboardHeader, ThemeToggle};

/// Profile page: mock account card and local preferences. There is no real
/// account behind this; "sair" just returns to the landing page.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let navigator = use_navigator().expect("navigator not available");

    let on_logout = Callback::from(move |_| navigator.push(&Route::Home));

    html! {
        <div class="page">
            <DashboardHeader />

            <main class="page-body">
                <h1>{"Perfil"}</h1>

                <div class="profile-card">
                    <span class="profile-avatar">{"👤"}</span>
                    <div>
                        <h3>{"Usuário"}</h3>
                        <p class="muted">{"usuario@exemplo.com"}</p>
                    </div>
                </div>

                <section class="profile-section">
                    <h2 class="section-title">{"Preferências"}</h2>
                    <div class="profile-row">
                        <span>{"Tema"}</span>
                        <ThemeToggle />
                    </div>
                </section>

                <section class="profile-section">
                    <h2 class="section-title">{"Conta"}</h2>
                    <button class="btn-secondary wide" onclick={on_logout}>
                        {"Sair"}
                    </button>
                </section>
            </main>

            <BottomNavigation />
        </div>
    }
}
