use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{DashboardQuery, Route};
use crate::models::invoice::Invoice;
use crate::models::stats::due_today;
use crate::utils::format::{format_currency, greeting, long_date_pt};

#[derive(Properties, PartialEq)]
pub struct WelcomeBannerProps {
    pub invoices: Rc<Vec<Invoice>>,
}

/// Greeting line plus, when anything falls due today, an urgency card that
/// jumps straight to the pre-filtered panel.
#[function_component(WelcomeBanner)]
pub fn welcome_banner(props: &WelcomeBannerProps) -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let today = Local::now().date_naive();

    let due = due_today(&props.invoices, today);
    let due_amount: f64 = due.iter().map(|inv| inv.amount).sum();

    let on_view = Callback::from(move |_| {
        let _ = navigator.push_with_query(&Route::Dashboard, &DashboardQuery::with_filter("today"));
    });

    html! {
        <div class="welcome-banner">
            <div>
                <h1>{format!("{}!", greeting())}</h1>
                <p class="banner-date">{long_date_pt(today)}</p>
            </div>

            if !due.is_empty() {
                <div class="due-today-card">
                    <div>
                        <span class="due-today-label">{"📅 Vence hoje"}</span>
                        <p class="due-today-amount">{format_currency(due_amount)}</p>
                        <p class="due-today-count">
                            {format!("{} faturas para pagar hoje", due.len())}
                        </p>
                    </div>
                    <button class="btn-secondary" onclick={on_view}>{"Ver ›"}</button>
                </div>
            }
        </div>
    }
}
