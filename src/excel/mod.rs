//! Módulo `excel`: lectura de la hoja de cálculo de la malla.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine y normalización de encabezados
//! - `malla`: lectura de una hoja completa como `Tabla`

/// Helpers de IO y utilidades para parsing de Excel
mod io;

/// Lectura de malla curricular: `leer_tabla_excel`
mod malla;

pub use io::{cell_to_string, data_to_celda, encabezados_unicos};
pub use malla::{leer_tabla_excel, listar_hojas_malla};

/// Extensiones que `calamine::open_workbook_auto` sabe abrir
pub const EXTENSIONES_SOPORTADAS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Indica si la ruta tiene una extensión de hoja de cálculo conocida.
pub fn es_hoja_de_calculo(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONES_SOPORTADAS.iter().any(|s| e.eq_ignore_ascii_case(s)))
        .unwrap_or(false)
}
