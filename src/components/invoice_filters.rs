use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::filter::FilterCriteria;
use crate::models::invoice::InvoiceStatus;

#[derive(Properties, PartialEq)]
pub struct InvoiceFiltersProps {
    pub criteria: FilterCriteria,
    pub on_apply: Callback<FilterCriteria>,
    pub on_clear: Callback<()>,
}

/// Advanced filter form: creditor substring, amount range, exact due date and
/// a status override. Values only reach the panel on "Aplicar".
#[function_component(InvoiceFilters)]
pub fn invoice_filters(props: &InvoiceFiltersProps) -> Html {
    let creditor = use_state(|| props.criteria.creditor.clone());
    let min_amount = use_state(|| amount_field(props.criteria.min_amount));
    let max_amount = use_state(|| amount_field(props.criteria.max_amount));
    let due_date = use_state(|| props.criteria.due_date.clone().unwrap_or_default());
    let status = use_state(|| props.criteria.status);

    // Pick up criteria written by the panel itself (query-parameter presets).
    {
        let creditor = creditor.clone();
        let min_amount = min_amount.clone();
        let max_amount = max_amount.clone();
        let due_date = due_date.clone();
        let status = status.clone();
        use_effect_with(props.criteria.clone(), move |criteria| {
            creditor.set(criteria.creditor.clone());
            min_amount.set(amount_field(criteria.min_amount));
            max_amount.set(amount_field(criteria.max_amount));
            due_date.set(criteria.due_date.clone().unwrap_or_default());
            status.set(criteria.status);
            || ()
        });
    }

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(select.value().parse::<InvoiceStatus>().ok());
        })
    };

    let on_apply = {
        let creditor = creditor.clone();
        let min_amount = min_amount.clone();
        let max_amount = max_amount.clone();
        let due_date = due_date.clone();
        let status = status.clone();
        let apply = props.on_apply.clone();
        Callback::from(move |_| {
            let due = due_date.trim().to_string();
            apply.emit(FilterCriteria {
                creditor: creditor.trim().to_string(),
                min_amount: min_amount.trim().parse().ok(),
                max_amount: max_amount.trim().parse().ok(),
                due_date: (!due.is_empty()).then_some(due),
                status: *status,
            });
        })
    };

    let on_clear = {
        let clear = props.on_clear.clone();
        Callback::from(move |_| clear.emit(()))
    };

    html! {
        <div class="invoice-filters">
            <h3>{"Filtros"}</h3>
            <div class="filters-grid">
                <label>
                    {"Credor"}
                    <input
                        type="text"
                        placeholder="Nome do credor"
                        value={(*creditor).clone()}
                        oninput={text_input(&creditor)}
                    />
                </label>

                <label>
                    {"Valor"}
                    <div class="amount-range">
                        <input
                            type="number"
                            placeholder="Mínimo"
                            value={(*min_amount).clone()}
                            oninput={text_input(&min_amount)}
                        />
                        <input
                            type="number"
                            placeholder="Máximo"
                            value={(*max_amount).clone()}
                            oninput={text_input(&max_amount)}
                        />
                    </div>
                </label>

                <label>
                    {"Data de Vencimento"}
                    <input
                        type="text"
                        placeholder="DD/MM/AAAA"
                        value={(*due_date).clone()}
                        oninput={text_input(&due_date)}
                    />
                </label>

                <label>
                    {"Status"}
                    <select onchange={on_status_change}>
                        <option value="" selected={status.is_none()}>{"Todos"}</option>
                        {
                            InvoiceStatus::all().iter().map(|s| {
                                html! {
                                    <option
                                        value={s.to_string()}
                                        selected={*status == Some(*s)}
                                    >
                                        {s.label()}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </label>
            </div>

            <div class="filters-actions">
                <button class="btn-secondary" onclick={on_clear}>{"Limpar"}</button>
                <button class="btn-primary" onclick={on_apply}>{"Aplicar Filtros"}</button>
            </div>
        </div>
    }
}

fn amount_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
