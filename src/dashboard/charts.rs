//! Chart generation and rendering for the page.
//!
//! This module creates interactive ECharts visualizations of the aggregates:
//! - **Monthly Expenses**: bar chart of the total spent per month label
//! - **Category Breakdown**: pie chart of the total spent per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, MonthTotal},
    html::HeadElement,
};

/// The colour of the monthly expense bars.
const BAR_COLOR: &str = "#8884d8";

/// The pie slice colours, cycled by category index.
const PIE_COLORS: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff7f50", "#0088fe"];

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for the charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded bg-white dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    chart.setOption({});

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        chart.setTheme(darkModeMediaQuery.matches ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    HeadElement::ScriptSource(PreEscaped(format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{script_content}\n}});"
    )))
}

pub(super) fn monthly_expenses_chart(month_totals: &[MonthTotal]) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) = month_totals
        .iter()
        .map(|total| (total.month.clone(), total.expense))
        .unzip();

    Chart::new()
        .title(Title::new().text("Monthly Expenses").left(20).top("1%"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(60)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("expense")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(values),
        )
}

/// Every category gets a slice, so the slice colours line up with the
/// category order even when some totals are zero.
pub(super) fn category_breakdown_chart(category_totals: &[CategoryTotal]) -> Chart {
    let slices: Vec<(f64, &str)> = category_totals
        .iter()
        .map(|total| (total.value, total.name.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Category Breakdown").left(20).top("1%"))
        .color(PIE_COLORS.into_iter().map(Color::from).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("1%"))
        .series(
            Pie::new()
                .name("Category Breakdown")
                .radius("60%")
                .data(slices),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        category::Category,
        dashboard::{
            aggregation::{CategoryTotal, MonthTotal},
            charts::{
                DashboardChart, category_breakdown_chart, charts_script, charts_view,
                monthly_expenses_chart,
            },
        },
        html::HeadElement,
    };

    #[test]
    fn monthly_expenses_chart_uses_labels_and_bar_colour() {
        let totals = vec![
            MonthTotal {
                month: "Jan".to_owned(),
                expense: 15.0,
            },
            MonthTotal {
                month: "Feb".to_owned(),
                expense: 20.0,
            },
        ];

        let options = monthly_expenses_chart(&totals).to_string();

        assert!(options.contains("Monthly Expenses"));
        assert!(options.contains("\"Jan\""));
        assert!(options.contains("\"Feb\""));
        assert!(options.contains("#8884d8"));
    }

    #[test]
    fn category_breakdown_chart_has_palette_and_categories() {
        let totals: Vec<_> = Category::ALL
            .into_iter()
            .map(|name| CategoryTotal { name, value: 1.0 })
            .collect();

        let options = category_breakdown_chart(&totals).to_string();

        assert!(options.contains("Category Breakdown"));
        for color in ["#8884d8", "#82ca9d", "#ffc658", "#ff7f50", "#0088fe"] {
            assert!(options.contains(color), "missing colour {color}");
        }
        for category in Category::ALL {
            assert!(
                options.contains(&format!("\"{category}\"")),
                "missing category {category}"
            );
        }
    }

    #[test]
    fn chart_containers_and_script_use_chart_ids() {
        let charts = [DashboardChart {
            id: "test-chart",
            options: "{}".to_owned(),
        }];

        let markup = charts_view(&charts).into_string();
        assert!(markup.contains("id=\"test-chart\""));

        let HeadElement::ScriptSource(script) = charts_script(&charts) else {
            panic!("want inline script");
        };
        assert!(script.0.contains("document.getElementById(\"test-chart\")"));
    }
}
