use chrono::Local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::DashboardQuery;
use crate::components::invoice_panel::{InvoiceAction, InvoicePanel};
use crate::components::quick_actions::QuickActions;
use crate::components::stats_carousel::StatsCarousel;
use crate::components::{BottomNavigation, DashboardHeader, WelcomeBanner};
use crate::hooks::use_invoices::use_invoices;
use crate::hooks::use_toast::use_toast;
use crate::models::filter::{DatePreset, StatusTab};
use crate::models::stats::DashboardStats;

/// Main dashboard: banner, stats, quick actions and the invoice panel.
///
/// Owns the working set for the session; the panel reports mutations back up
/// through one action callback.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let handle = use_invoices();
    let toasts = use_toast();

    // Soft initial state from the URL: ?tab= preselects, ?filter= pre-fills.
    let query = use_location()
        .and_then(|location| location.query::<DashboardQuery>().ok())
        .unwrap_or_default();
    let initial_tab = query.tab.as_deref().and_then(|t| t.parse::<StatusTab>().ok());
    let date_preset = query
        .filter
        .as_deref()
        .and_then(|f| f.parse::<DatePreset>().ok());

    let today = Local::now().date_naive();
    let stats = DashboardStats::compute(&handle.invoices, today);

    let on_action = {
        let mark_paid = handle.mark_paid.clone();
        let delete = handle.delete.clone();
        let toasts = toasts.clone();
        Callback::from(move |action: InvoiceAction| match action {
            InvoiceAction::MarkPaid(id) => {
                mark_paid.emit(id);
                toasts.success("Fatura paga", "A fatura foi marcada como paga.");
            }
            InvoiceAction::Delete(id) => {
                delete.emit(id);
                toasts.info("Fatura excluída", "A fatura foi removida da sua lista.");
            }
            InvoiceAction::Edit(_) => toasts.info(
                "Edição de faturas",
                "A edição de faturas será implementada em breve.",
            ),
        })
    };

    html! {
        <div class="page">
            <DashboardHeader />

            <main class="page-body">
                <WelcomeBanner invoices={handle.invoices.clone()} />

                <section>
                    <h2 class="section-title">{"Resumo Financeiro"}</h2>
                    <StatsCarousel stats={stats} invoices={handle.invoices.clone()} />
                </section>

                <section>
                    <h2 class="section-title">{"Ações Rápidas"}</h2>
                    <QuickActions />
                </section>

                <section>
                    <h2 class="section-title">{"Suas Faturas"}</h2>
                    <InvoicePanel
                        invoices={handle.invoices.clone()}
                        {on_action}
                        {initial_tab}
                        {date_preset}
                    />
                </section>
            </main>

            <BottomNavigation />
        </div>
    }
}
