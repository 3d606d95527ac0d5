//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    dashboard::{get_dashboard_page, get_summary},
    endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    transaction::{
        cancel_edit_endpoint, create_transaction_endpoint, delete_transaction_endpoint,
        edit_transaction_endpoint, update_form_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    // These routes respond with an HX-Redirect back to the page on success
    // and an alert fragment on failure.
    let api_routes = Router::new()
        .route(endpoints::FORM_API, put(update_form_endpoint))
        .route(endpoints::CANCEL_EDIT_API, post(cancel_edit_endpoint))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_API,
            post(edit_transaction_endpoint),
        )
        .route(endpoints::SUMMARY_API, get(get_summary));

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
