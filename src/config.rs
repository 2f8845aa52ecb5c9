//! Ajustes de la aplicación leídos desde el entorno (y `.env` si existe).
//!
//! Sólo cubren el comportamiento de la aplicación: nivel de logs, apertura
//! del navegador y dónde escribir los HTML temporales. Las constantes del
//! gráfico no son configurables.

use std::env;
use std::path::PathBuf;

pub const ENV_LOG: &str = "MALLA_SUNBURST_LOG";
pub const ENV_NO_BROWSER: &str = "MALLA_SUNBURST_NO_BROWSER";
pub const ENV_TMPDIR: &str = "MALLA_SUNBURST_TMPDIR";
pub const ENV_SAVE_NAME: &str = "MALLA_SUNBURST_SAVE_NAME";

/// Nombre sugerido al guardar el gráfico
pub const NOMBRE_GUARDADO_POR_DEFECTO: &str = "411_10k.html";

#[derive(Debug, Clone, PartialEq)]
pub struct Ajustes {
    /// Filtro de `tracing_subscriber::EnvFilter`
    pub filtro_log: String,
    pub abrir_navegador: bool,
    /// `None` usa el directorio temporal del sistema
    pub directorio_temporal: Option<PathBuf>,
    pub nombre_guardado: String,
}

impl Default for Ajustes {
    fn default() -> Self {
        Ajustes {
            filtro_log: "info".to_string(),
            abrir_navegador: true,
            directorio_temporal: None,
            nombre_guardado: NOMBRE_GUARDADO_POR_DEFECTO.to_string(),
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Ajustes {
    /// Lee los ajustes del proceso. Un `.env` ausente no es un error.
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ajustes = Ajustes::default();

        if let Some(filtro) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            ajustes.filtro_log = filtro.trim().to_string();
        }
        if let Some(v) = lookup(ENV_NO_BROWSER) {
            ajustes.abrir_navegador = !es_verdadero(&v);
        }
        if let Some(dir) = lookup(ENV_TMPDIR).filter(|s| !s.trim().is_empty()) {
            ajustes.directorio_temporal = Some(PathBuf::from(dir.trim()));
        }
        if let Some(nombre) = lookup(ENV_SAVE_NAME).filter(|s| !s.trim().is_empty()) {
            ajustes.nombre_guardado = nombre.trim().to_string();
        }

        ajustes
    }
}

fn es_verdadero(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "si" | "sí" | "on")
}
