//! Page HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the single page with the form, list and charts
//! - The route handler for the JSON summary of the ledger
//! - The state used by the handlers

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::charts::{
        DashboardChart, category_breakdown_chart, charts_script, charts_view,
        monthly_expenses_chart,
    },
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    ledger::{Ledger, LedgerSummary, lock_ledger},
    transaction::{transaction_form_view, transaction_list_view},
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6/dist/echarts.min.js";

/// The state needed for displaying the page and its data.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The ledger holding the transactions and the form.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Display the page with the transaction form, the transaction list and the
/// charts.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let ledger = lock_ledger(&state.ledger)?;

    let charts = build_dashboard_charts(&ledger);
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-4" { "Personal Finance Tracker" }

            (transaction_form_view(ledger.form()))
            (transaction_list_view(ledger.store().records()))
            (charts_view(&charts))
        }
    );

    Ok(dashboard_view(&content, &charts).into_response())
}

/// Return the transactions and their aggregates as JSON.
pub async fn get_summary(State(state): State<DashboardState>) -> Result<Json<LedgerSummary>, Error> {
    let ledger = lock_ledger(&state.ledger)?;

    Ok(Json(ledger.summary()))
}

/// Creates the charts from the ledger's aggregates.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(ledger: &Ledger) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "monthly-expenses-chart",
            options: monthly_expenses_chart(&ledger.month_totals()).to_string(),
        },
        DashboardChart {
            id: "category-breakdown-chart",
            options: category_breakdown_chart(&ledger.category_totals()).to_string(),
        },
    ]
}

fn dashboard_view(content: &Markup, charts: &[DashboardChart]) -> Markup {
    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
        dollar_input_styles(),
    ];

    base("Transactions", &head_elements, content)
}
