use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{DashboardQuery, Route};
use crate::hooks::use_toast::use_toast;

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuickAction {
    AddInvoice,
    DueToday,
    Overdue,
    Reports,
    AllInvoices,
    Upcoming,
    Wallet,
}

impl QuickAction {
    fn icon(self) -> &'static str {
        match self {
            Self::AddInvoice => "➕",
            Self::DueToday => "⏰",
            Self::Overdue => "⚠️",
            Self::Reports => "📊",
            Self::AllInvoices => "📄",
            Self::Upcoming => "📅",
            Self::Wallet => "👛",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AddInvoice => "Nova Fatura",
            Self::DueToday => "Vence Hoje",
            Self::Overdue => "Vencidas",
            Self::Reports => "Relatórios",
            Self::AllInvoices => "Todas Faturas",
            Self::Upcoming => "Próximas",
            Self::Wallet => "Carteira",
        }
    }
}

const ACTIONS: [QuickAction; 7] = [
    QuickAction::AddInvoice,
    QuickAction::DueToday,
    QuickAction::Overdue,
    QuickAction::Reports,
    QuickAction::AllInvoices,
    QuickAction::Upcoming,
    QuickAction::Wallet,
];

/// Horizontal strip of shortcut buttons. Most route into the dashboard with
/// pre-seeded query parameters; unbuilt features answer with a toast.
#[function_component(QuickActions)]
pub fn quick_actions() -> Html {
    let navigator = use_navigator().expect("navigator not available");
    let toasts = use_toast();

    let on_action = {
        Callback::from(move |action: QuickAction| match action {
            QuickAction::AddInvoice => navigator.push(&Route::AddInvoice),
            QuickAction::Reports => navigator.push(&Route::Analytics),
            QuickAction::DueToday => {
                let _ = navigator
                    .push_with_query(&Route::Dashboard, &DashboardQuery::with_filter("today"));
            }
            QuickAction::Upcoming => {
                let _ = navigator
                    .push_with_query(&Route::Dashboard, &DashboardQuery::with_filter("upcoming"));
            }
            QuickAction::Overdue => {
                let _ = navigator
                    .push_with_query(&Route::Dashboard, &DashboardQuery::with_tab("overdue"));
            }
            QuickAction::AllInvoices => {
                let _ =
                    navigator.push_with_query(&Route::Dashboard, &DashboardQuery::with_tab("all"));
            }
            QuickAction::Wallet => toasts.info(
                "Carteira Digital",
                "Funcionalidade de carteira será implementada em breve.",
            ),
        })
    };

    html! {
        <div class="quick-actions">
            {
                ACTIONS.iter().map(|action| {
                    let action = *action;
                    let on_action = on_action.clone();
                    let onclick = Callback::from(move |_| on_action.emit(action));
                    html! {
                        <button class="quick-action" {onclick}>
                            <span class="quick-action-icon">{action.icon()}</span>
                            <span class="quick-action-label">{action.label()}</span>
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
