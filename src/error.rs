//! Errores del crate.
//!
//! Las columnas faltantes o mal escritas nunca llegan aquí: el resolver
//! siempre tiene un valor por defecto. Sólo fallan la lectura del archivo
//! y las operaciones de exportación.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorMalla {
    #[error("no se pudo abrir el libro Excel: {0}")]
    Excel(#[from] calamine::Error),

    #[error("el archivo {0:?} no contiene hojas")]
    SinHojas(PathBuf),

    /// Falla envolvente del procesamiento de un archivo, con mensaje legible
    #[error("error al procesar el archivo Excel {ruta:?}: {mensaje}")]
    Procesamiento {
        ruta: PathBuf,
        mensaje: String,
        #[source]
        fuente: Box<ErrorMalla>,
    },

    #[error("no se pudo exportar el gráfico a {ruta:?}: {fuente}")]
    Exportacion {
        ruta: PathBuf,
        #[source]
        fuente: std::io::Error,
    },

    #[error("no se pudo abrir el navegador para {ruta:?}: {mensaje}")]
    Navegador { ruta: PathBuf, mensaje: String },

    #[error("error de serialización del gráfico: {0}")]
    Serializacion(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Resultado<T> = Result<T, ErrorMalla>;
