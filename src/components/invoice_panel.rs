use chrono::Local;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::invoice_filters::InvoiceFilters;
use crate::components::invoice_grid::InvoiceGrid;
use crate::components::invoice_list::InvoiceList;
use crate::hooks::use_view_mode::{ViewMode, use_view_mode};
use crate::models::filter::{DatePreset, FilterCriteria, StatusTab, filter_invoices};
use crate::models::invoice::Invoice;

/// Mutation requested from inside the panel; the owner of the working set
/// decides what to do with it.
#[derive(Clone, Debug, PartialEq)]
pub enum InvoiceAction {
    MarkPaid(String),
    Delete(String),
    Edit(String),
}

#[derive(Properties, PartialEq)]
pub struct InvoicePanelProps {
    pub invoices: Rc<Vec<Invoice>>,
    pub on_action: Callback<InvoiceAction>,
    /// Tab preselected by the `tab` query parameter.
    #[prop_or_default]
    pub initial_tab: Option<StatusTab>,
    /// Due-date preset carried by the `filter` query parameter; opens the
    /// advanced filters pre-filled.
    #[prop_or_default]
    pub date_preset: Option<DatePreset>,
}

/// Owns the visible subset of the working set: free-text query, status tab
/// and advanced criteria. The subset is recomputed in full on every change;
/// there is no incremental diffing.
#[function_component(InvoicePanel)]
pub fn invoice_panel(props: &InvoicePanelProps) -> Html {
    let tab = use_state(|| props.initial_tab.unwrap_or_default());
    let query = use_state(String::new);
    let criteria = use_state(FilterCriteria::default);
    let show_filters = use_state(|| props.date_preset.is_some());
    let view_mode = use_view_mode();

    // Re-apply the soft initial state whenever the query parameters change,
    // e.g. a quick action navigating within the dashboard.
    {
        let tab = tab.clone();
        let criteria = criteria.clone();
        let show_filters = show_filters.clone();
        use_effect_with(
            (props.initial_tab, props.date_preset),
            move |(initial_tab, date_preset)| {
                if let Some(initial) = initial_tab {
                    tab.set(*initial);
                }
                if let Some(preset) = date_preset {
                    let today = Local::now().date_naive();
                    criteria.set(FilterCriteria {
                        due_date: Some(preset.due_date(today)),
                        ..(*criteria).clone()
                    });
                    show_filters.set(true);
                }
                || ()
            },
        );
    }

    let filtered = use_memo(
        (
            props.invoices.clone(),
            *tab,
            (*query).clone(),
            (*criteria).clone(),
        ),
        |(invoices, tab, query, criteria)| filter_invoices(invoices, *tab, query, criteria),
    );

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(!*show_filters))
    };

    let on_apply = {
        let criteria = criteria.clone();
        Callback::from(move |new_criteria| criteria.set(new_criteria))
    };

    let on_clear = {
        let criteria = criteria.clone();
        Callback::from(move |()| criteria.set(FilterCriteria::default()))
    };

    let set_view = |mode: ViewMode| {
        let set_mode = view_mode.set_mode.clone();
        Callback::from(move |_| set_mode.emit(mode))
    };

    let view_class = |mode: ViewMode| {
        if view_mode.mode == mode {
            "icon-btn active"
        } else {
            "icon-btn"
        }
    };

    html! {
        <section class="invoice-panel">
            <div class="panel-header">
                <h2>{"Gerenciamento de Faturas"}</h2>
                <div class="panel-tools">
                    <button
                        class={view_class(ViewMode::List)}
                        onclick={set_view(ViewMode::List)}
                        title="Visualizar em lista"
                    >
                        {"☰"}
                    </button>
                    <button
                        class={view_class(ViewMode::Grid)}
                        onclick={set_view(ViewMode::Grid)}
                        title="Visualizar em grade"
                    >
                        {"▦"}
                    </button>
                    <button
                        class={if *show_filters { "icon-btn active" } else { "icon-btn" }}
                        onclick={on_toggle_filters}
                        title="Filtros avançados"
                    >
                        {"⚙"}
                    </button>
                </div>
            </div>

            <div class="panel-search">
                <input
                    type="search"
                    placeholder="Buscar faturas..."
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>

            <div class="panel-tabs" role="tablist">
                {
                    StatusTab::all().iter().map(|t| {
                        let t = *t;
                        let tab = tab.clone();
                        let class = if *tab == t { "tab active" } else { "tab" };
                        let onclick = Callback::from(move |_| tab.set(t));
                        html! {
                            <button {class} role="tab" {onclick}>{t.label()}</button>
                        }
                    }).collect::<Html>()
                }
            </div>

            if *show_filters {
                <InvoiceFilters
                    criteria={(*criteria).clone()}
                    {on_apply}
                    {on_clear}
                />
            }

            {
                match view_mode.mode {
                    ViewMode::List => html! {
                        <InvoiceList
                            invoices={(*filtered).clone()}
                            on_action={props.on_action.clone()}
                        />
                    },
                    ViewMode::Grid => html! {
                        <InvoiceGrid
                            invoices={(*filtered).clone()}
                            on_action={props.on_action.clone()}
                        />
                    },
                }
            }

            <div class="panel-footer">
                <span class="muted">
                    {format!("Mostrando {} de {} faturas", filtered.len(), props.invoices.len())}
                </span>
            </div>
        </section>
    }
}
