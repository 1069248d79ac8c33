use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    switchkey::events::init_event_bus();

    #[cfg(target_os = "macos")]
    switchkey::macos::run();

    #[cfg(not(target_os = "macos"))]
    {
        tracing::error!("switchkey only runs on macOS");
        std::process::exit(1);
    }
}
