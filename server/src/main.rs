use driver::database::{InMemoryDatabase, PostgresDatabase};
use error_stack::ResultExt;
use kernel::KernelError;
use server::config::{DatabaseBackend, ServerConfig};
use server::error::StackTrace;
use server::handler::AppModule;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let config = ServerConfig::from_env()?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,application=debug,server=debug,tower_http=debug,sqlx=info"
                            .into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let router = match config.database {
        DatabaseBackend::Postgres => {
            let database = PostgresDatabase::new().await?;
            server::router(AppModule::new(database, &config), &config)
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using the in-memory database, nothing survives a restart");
            server::router(AppModule::new(InMemoryDatabase::new(), &config), &config)
        }
    };

    let tcp = TcpListener::bind(config.bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("Listening on {}", config.bind);

    axum::serve(tcp, router.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
