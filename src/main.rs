use std::{process, sync::Arc};

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

use veranda::{
    application::{
        error::AppError,
        newsletter::NewsletterService,
        posts::PostService,
        repos::{PostsRepo, SubscribersRepo},
        seed,
    },
    config,
    infra::{
        error::InfraError,
        http::{self, ApiState},
        store::MemoryRepositories,
        telemetry,
    },
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = Arc::new(MemoryRepositories::new());

    let posts_repo: Arc<dyn PostsRepo> = store.clone();
    let subscribers_repo: Arc<dyn SubscribersRepo> = store.clone();

    seed::seed_posts(posts_repo.as_ref())
        .await
        .map_err(|err| AppError::unexpected(format!("failed to seed posts: {err}")))?;

    let state = ApiState {
        posts: Arc::new(PostService::new(posts_repo)),
        newsletter: Arc::new(NewsletterService::new(subscribers_repo)),
    };
    let router = http::build_router(state);

    let listener = TcpListener::bind(settings.server.public_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "veranda::server",
        addr = %settings.server.public_addr,
        "listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
