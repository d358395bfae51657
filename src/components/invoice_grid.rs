use yew::prelude::*;

use crate::components::invoice_panel::InvoiceAction;
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::utils::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct InvoiceGridProps {
    pub invoices: Vec<Invoice>,
    pub on_action: Callback<InvoiceAction>,
}

/// Two-column compact card rendering of an invoice array.
#[function_component(InvoiceGrid)]
pub fn invoice_grid(props: &InvoiceGridProps) -> Html {
    if props.invoices.is_empty() {
        return html! {
            <div class="empty-state">
                <span class="empty-icon">{"💸"}</span>
                <p>{"Nenhuma fatura encontrada."}</p>
            </div>
        };
    }

    html! {
        <div class="invoice-grid">
            {
                props.invoices.iter().map(|invoice| {
                    grid_card(invoice, &props.on_action)
                }).collect::<Html>()
            }
        </div>
    }
}

fn grid_card(invoice: &Invoice, on_action: &Callback<InvoiceAction>) -> Html {
    let action = |make: fn(String) -> InvoiceAction| {
        let id = invoice.id.clone();
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(make(id.clone())))
    };

    html! {
        <div class={classes!("invoice-card", "grid", invoice.status.css_class())} key={invoice.id.clone()}>
            <div class="card-header">
                <div>
                    <h3>{&invoice.creditor}</h3>
                    <span class="muted">{format!("📅 {}", invoice.due_date)}</span>
                </div>
                <span class={classes!("status-badge", invoice.status.css_class())}>
                    {invoice.status.label()}
                </span>
            </div>

            <div class="card-body">
                <p class="card-amount">{format_currency(invoice.amount)}</p>
                <span class="muted">{invoice.payment_method.short_label()}</span>
            </div>

            <div class="card-actions">
                <button class="card-action" onclick={action(InvoiceAction::Edit)}>
                    {"✎ Editar"}
                </button>
                if invoice.status == InvoiceStatus::Paid {
                    <button class="card-action delete" onclick={action(InvoiceAction::Delete)}>
                        {"🗑 Excluir"}
                    </button>
                } else {
                    <button class="card-action pay" onclick={action(InvoiceAction::MarkPaid)}>
                        {"✓ Pagar"}
                    </button>
                }
            </div>
        </div>
    }
}
