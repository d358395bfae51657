use std::rc::Rc;
use yew::prelude::*;

use crate::components::charts::{MonthlyChart, StatusChart};
use crate::components::{BottomNavigation, DashboardHeader};
use crate::models::mock::mock_invoices;
use crate::models::stats::{average_amount, total_amount};
use crate::utils::format::format_currency;

/// Analytics page: totals plus the monthly and per-status charts.
#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let invoices: Rc<Vec<_>> = use_memo((), |_| mock_invoices());

    let total = total_amount(&invoices);
    let average = average_amount(&invoices);

    html! {
        <div class="page">
            <DashboardHeader />

            <main class="page-body">
                <h1>{"Análise Financeira"}</h1>

                <div class="analytics-cards">
                    <div class="stat-card">
                        <span class="stat-title">{"Total"}</span>
                        <span class="stat-value">{format_currency(total)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-title">{"Média"}</span>
                        <span class="stat-value">{format_currency(average)}</span>
                    </div>
                </div>

                <section class="chart-section">
                    <MonthlyChart invoices={invoices.clone()} />
                </section>

                <section class="chart-section">
                    <StatusChart invoices={invoices.clone()} />
                </section>
            </main>

            <BottomNavigation />
        </div>
    }
}
