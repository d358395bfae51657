use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::models::stats::DashboardStats;
use crate::utils::format::format_currency;

const CARD_COUNT: usize = 5;

#[derive(Properties, PartialEq)]
pub struct StatsCarouselProps {
    pub stats: DashboardStats,
    pub invoices: Rc<Vec<Invoice>>,
}

/// Auto-advancing carousel of the five summary cards.
#[function_component(StatsCarousel)]
pub fn stats_carousel(props: &StatsCarouselProps) -> Html {
    let active = use_state(|| 0usize);

    // Advance on a fixed interval. Keying the effect on the current index
    // rebuilds the timer after every step (or manual dot click), so each card
    // gets a full interval on screen.
    {
        let active = active.clone();
        use_effect_with(*active, move |current| {
            let next = (*current + 1) % CARD_COUNT;
            let interval = Interval::new(Config::CAROUSEL_MS, move || {
                active.set(next);
            });
            move || drop(interval)
        });
    }

    let invoices = &props.invoices;
    let stats = &props.stats;
    let count = |status| DashboardStats::count_with_status(invoices, status);

    let cards = [
        card(
            "Pendente",
            format_currency(stats.pending),
            format!("📅 {} faturas", count(InvoiceStatus::Pending)),
            "stat-pending",
        ),
        card(
            "Vencido",
            format_currency(stats.overdue),
            format!("⚠️ {} faturas", count(InvoiceStatus::Overdue)),
            "stat-overdue",
        ),
        card(
            "Pago",
            format_currency(stats.paid),
            format!("⬆️ {} faturas", count(InvoiceStatus::Paid)),
            "stat-paid",
        ),
        card(
            "Vence hoje",
            stats.due_today.to_string(),
            "⏰ Ação urgente".to_string(),
            "stat-due-today",
        ),
        card(
            "Próximos dias",
            stats.due_soon.to_string(),
            "📈 Planejamento".to_string(),
            "stat-due-soon",
        ),
    ];

    let offset = format!("transform: translateX(-{}%);", *active * 100);

    html! {
        <div class="stats-carousel">
            <div class="carousel-track" style={offset}>
                { cards.into_iter().collect::<Html>() }
            </div>

            <div class="carousel-dots">
                {
                    (0..CARD_COUNT).map(|index| {
                        let class = if index == *active { "dot active" } else { "dot" };
                        let active = active.clone();
                        let onclick = Callback::from(move |_| active.set(index));
                        html! { <button {class} {onclick} aria-label={format!("Cartão {}", index + 1)} /> }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn card(title: &str, value: String, caption: String, class: &'static str) -> Html {
    html! {
        <div class={classes!("stat-card", class)}>
            <span class="stat-title">{title.to_string()}</span>
            <span class="stat-value">{value}</span>
            <span class="stat-caption">{caption}</span>
        </div>
    }
}
