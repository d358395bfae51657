use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::ThemeToggle;
use crate::models::invoice::InvoiceStatus;
use crate::models::mock::mock_invoices;
use crate::utils::format::format_currency;

/// Landing page: product pitch plus a live preview of the mock numbers.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let invoices = mock_invoices();
    let pending: Vec<_> = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Pending)
        .collect();
    let pending_amount: f64 = pending.iter().map(|inv| inv.amount).sum();

    html! {
        <div class="page landing">
            <header class="app-header">
                <div class="header-row">
                    <h1>{"Gerenciador de Faturas"}</h1>
                    <ThemeToggle />
                </div>
            </header>

            <main class="page-body">
                <section class="hero">
                    <h2>{"Todas as suas contas em um só lugar"}</h2>
                    <p class="muted">
                        {"Escaneie boletos, importe faturas do e-mail e acompanhe \
                          vencimentos sem esforço."}
                    </p>
                    <Link<Route> to={Route::Dashboard} classes="btn-primary wide">
                        {"Acessar Painel ›"}
                    </Link<Route>>
                </section>

                <section class="hero-stats">
                    <div class="stat-card stat-pending">
                        <span class="stat-title">{"Pendente"}</span>
                        <span class="stat-value">{format_currency(pending_amount)}</span>
                        <span class="stat-caption">{format!("{} faturas", pending.len())}</span>
                    </div>
                </section>

                <section class="feature-list">
                    <div class="feature">{"📷 Escaneie códigos de barras e QR Codes PIX"}</div>
                    <div class="feature">{"📤 Envie PDFs e fotos de contas"}</div>
                    <div class="feature">{"✉️ Importe faturas do Gmail e do WhatsApp"}</div>
                    <div class="feature">{"📊 Acompanhe gastos com relatórios"}</div>
                </section>
            </main>
        </div>
    }
}
