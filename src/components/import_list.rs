use std::collections::HashSet;
use yew::prelude::*;

use crate::models::invoice::InvoiceDraft;
use crate::utils::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct ImportListProps {
    pub title: String,
    pub drafts: Vec<InvoiceDraft>,
    pub on_import: Callback<Vec<InvoiceDraft>>,
}

/// Selectable list of invoice drafts found by an import flow.
///
/// Drafts carry no id yet, so selection is positional.
#[function_component(ImportList)]
pub fn import_list(props: &ImportListProps) -> Html {
    let selected = use_state(HashSet::<usize>::new);

    let toggle = {
        let selected = selected.clone();
        Callback::from(move |index: usize| {
            let mut set = (*selected).clone();
            if !set.remove(&index) {
                set.insert(index);
            }
            selected.set(set);
        })
    };

    let on_import = {
        let drafts = props.drafts.clone();
        let selected = selected.clone();
        let on_import = props.on_import.clone();
        Callback::from(move |_| {
            let picked: Vec<InvoiceDraft> = drafts
                .iter()
                .enumerate()
                .filter(|(i, _)| selected.contains(i))
                .map(|(_, d)| d.clone())
                .collect();
            on_import.emit(picked);
        })
    };

    html! {
        <div class="import-list">
            <div class="import-list-header">
                <h3>{&props.title}</h3>
                <button
                    class="btn-primary"
                    disabled={selected.is_empty()}
                    onclick={on_import}
                >
                    {format!("Importar Selecionadas ({})", selected.len())}
                </button>
            </div>

            {
                props.drafts.iter().enumerate().map(|(index, draft)| {
                    let onchange = {
                        let toggle = toggle.clone();
                        Callback::from(move |_| toggle.emit(index))
                    };
                    html! {
                        <label class="import-item" key={index}>
                            <input
                                type="checkbox"
                                checked={selected.contains(&index)}
                                {onchange}
                            />
                            <div class="import-item-body">
                                <div class="import-item-row">
                                    <h4>{&draft.creditor}</h4>
                                    <span class="card-amount">{format_currency(draft.amount)}</span>
                                </div>
                                <p class="muted">{&draft.description}</p>
                                <div class="import-item-row">
                                    <span class="muted">{format!("Vencimento: {}", draft.due_date)}</span>
                                    <span class="muted">{draft.payment_method.label()}</span>
                                </div>
                            </div>
                        </label>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
