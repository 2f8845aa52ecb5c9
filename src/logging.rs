use tracing_subscriber::EnvFilter;

/// Inicializa el subscriber de `tracing`.
///
/// `RUST_LOG` tiene prioridad; si no está definido se usa `filtro`
/// (normalmente `Ajustes::filtro_log`). Llamarlo dos veces no falla.
pub fn init_tracing(filtro: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filtro))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
