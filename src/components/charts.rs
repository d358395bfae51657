use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Pie},
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::hooks::use_theme::{Theme, use_theme};
use crate::models::invoice::Invoice;
use crate::models::stats::{monthly_totals, status_totals};

const MONTHLY_CHART_ID: &str = "monthly-chart";
const STATUS_CHART_ID: &str = "status-chart";

// IBM color-blind-safe palette.
const STATUS_COLORS: [&str; 3] = ["#ffb000", "#00b4a0", "#dc267f"];

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub invoices: Rc<Vec<Invoice>>,
}

/// Bar chart of amounts grouped by due month.
#[function_component(MonthlyChart)]
pub fn monthly_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let theme = use_theme();
    let dark_mode = theme.effective_theme == Theme::Dark;
    let series = use_memo(props.invoices.clone(), |invoices| monthly_totals(invoices));

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (series, container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_into(&container, MONTHLY_CHART_ID, &build_monthly(series, *dark_mode));

                    let series = series.clone();
                    let dark_mode = *dark_mode;
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_into(&container, MONTHLY_CHART_ID, &build_monthly(&series, dark_mode));
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={MONTHLY_CHART_ID} />
        </div>
    }
}

/// Pie chart of amounts per invoice status.
#[function_component(StatusChart)]
pub fn status_chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let theme = use_theme();
    let dark_mode = theme.effective_theme == Theme::Dark;
    let totals = use_memo(props.invoices.clone(), |invoices| status_totals(invoices));

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (totals, container_ref, dark_mode),
            |(totals, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_into(&container, STATUS_CHART_ID, &build_status(totals, *dark_mode));

                    let totals = totals.clone();
                    let dark_mode = *dark_mode;
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_into(&container, STATUS_CHART_ID, &build_status(&totals, dark_mode));
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={STATUS_CHART_ID} />
        </div>
    }
}

fn render_into(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn text_colors(dark_mode: bool) -> (&'static str, &'static str, &'static str) {
    if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    }
}

fn build_monthly(series: &(Vec<String>, Vec<f64>), dark_mode: bool) -> CharmingChart {
    let (months, amounts) = series;
    let (title_color, axis_color, grid_color) = text_colors(dark_mode);

    CharmingChart::new()
        .title(
            Title::new()
                .text("Gastos por Mês")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("10%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(months.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("R$")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(amounts.clone()).bar_width("55%"))
}

fn build_status(totals: &[(f64, String)], dark_mode: bool) -> CharmingChart {
    let (title_color, axis_color, _) = text_colors(dark_mode);

    CharmingChart::new()
        .title(
            Title::new()
                .text("Distribuição por Status")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(
            Legend::new()
                .bottom("0")
                .text_style(TextStyle::new().color(axis_color)),
        )
        .color(
            STATUS_COLORS
                .iter()
                .map(|&c| Color::from(c))
                .collect::<Vec<Color>>(),
        )
        .series(
            Pie::new().radius("60%").data(
                totals
                    .iter()
                    .map(|(value, name)| (*value, name.as_str()))
                    .collect::<Vec<(f64, &str)>>(),
            ),
        )
}
