use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use time::macros::date;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use pocketbook::{
    AppState, Category, Ledger, Transaction, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for pocketbook.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The IP address to serve the app from.
    #[arg(long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// File path to write debug level logs to.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start with a handful of example transactions.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(args.log_file.as_ref());

    let addr = SocketAddr::new(args.address, args.port);

    let ledger = if args.demo {
        tracing::info!("Starting with demo transactions");
        demo_ledger()
    } else {
        Ledger::new()
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(AppState::new(ledger))
        .layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{addr}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("The server exited with an error");
}

fn setup_logging(log_file: Option<&PathBuf>) {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_filter(
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
    );

    let debug_log = log_file.map(|path| {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap_or_else(|error| panic!("Could not open log file {path:?}: {error}"));

        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are handled, so skip the default 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}

fn demo_ledger() -> Ledger {
    Ledger::with_transactions([
        Transaction::new(4.5, "Flat white", date!(2024 - 01 - 03), Category::Food),
        Transaction::new(1450.0, "Rent", date!(2024 - 01 - 05), Category::Bills),
        Transaction::new(32.0, "Bus pass top up", date!(2024 - 01 - 12), Category::Transport),
        Transaction::new(18.5, "Cinema tickets", date!(2024 - 02 - 02), Category::Entertainment),
        Transaction::new(86.2, "Groceries", date!(2024 - 02 - 09), Category::Food),
        Transaction::new(120.0, "Power bill", date!(2024 - 02 - 20), Category::Bills),
        Transaction::new(25.0, "Birthday card and gift wrap", date!(2024 - 03 - 01), Category::Other),
        Transaction::new(55.0, "Fuel", date!(2024 - 03 - 08), Category::Transport),
    ])
}
