use std::collections::HashSet;
use yew::prelude::*;

use crate::components::invoice_panel::InvoiceAction;
use crate::models::invoice::{Invoice, InvoiceStatus, PaymentMethod};
use crate::utils::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct InvoiceListProps {
    pub invoices: Vec<Invoice>,
    pub on_action: Callback<InvoiceAction>,
}

/// Card list rendering of an invoice array, with per-card actions and a
/// session-local selection.
#[function_component(InvoiceList)]
pub fn invoice_list(props: &InvoiceListProps) -> Html {
    let selected = use_state(HashSet::<String>::new);

    if props.invoices.is_empty() {
        return html! {
            <div class="empty-state">
                <span class="empty-icon">{"💸"}</span>
                <p>{"Nenhuma fatura encontrada."}</p>
            </div>
        };
    }

    let toggle_selected = {
        let selected = selected.clone();
        Callback::from(move |id: String| {
            let mut set = (*selected).clone();
            if !set.remove(&id) {
                set.insert(id);
            }
            selected.set(set);
        })
    };

    html! {
        <div class="invoice-list">
            {
                props.invoices.iter().map(|invoice| {
                    html! {
                        <InvoiceListItem
                            key={invoice.id.clone()}
                            invoice={invoice.clone()}
                            checked={selected.contains(&invoice.id)}
                            on_toggle={toggle_selected.clone()}
                            on_action={props.on_action.clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct InvoiceListItemProps {
    invoice: Invoice,
    checked: bool,
    on_toggle: Callback<String>,
    on_action: Callback<InvoiceAction>,
}

#[function_component(InvoiceListItem)]
fn invoice_list_item(props: &InvoiceListItemProps) -> Html {
    let invoice = &props.invoice;

    let onchange = {
        let id = invoice.id.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(id.clone()))
    };

    let action = |make: fn(String) -> InvoiceAction| {
        let id = invoice.id.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(make(id.clone())))
    };

    html! {
        <div class={classes!("invoice-card", invoice.status.css_class())}>
            <div class="card-header">
                <label class="card-select">
                    <input type="checkbox" checked={props.checked} {onchange} />
                    <div>
                        <h3>{&invoice.creditor}</h3>
                        <span class="muted">{format!("📅 {}", invoice.due_date)}</span>
                    </div>
                </label>
                <span class={classes!("status-badge", invoice.status.css_class())}>
                    {invoice.status.label()}
                </span>
            </div>

            <div class="card-body">
                <p class="muted">{&invoice.description}</p>
                <div class="card-amount-row">
                    <span class="muted">{payment_icon(invoice.payment_method)}{" "}{invoice.payment_method.short_label()}</span>
                    <span class="card-amount">{format_currency(invoice.amount)}</span>
                </div>
            </div>

            <div class="card-actions">
                if invoice.status != InvoiceStatus::Paid {
                    <button class="card-action pay" onclick={action(InvoiceAction::MarkPaid)}>
                        {"✓ Pagar"}
                    </button>
                }
                <button class="card-action" onclick={action(InvoiceAction::Edit)}>
                    {"✎ Editar"}
                </button>
                <button class="card-action delete" onclick={action(InvoiceAction::Delete)}>
                    {"🗑 Excluir"}
                </button>
            </div>
        </div>
    }
}

fn payment_icon(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::CreditCard => "💳",
        PaymentMethod::Pix => "⚡",
        PaymentMethod::Boleto | PaymentMethod::Other => "🧾",
    }
}
