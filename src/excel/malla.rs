use calamine::{open_workbook_auto, Reader};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ErrorMalla, Resultado};
use crate::excel::io::{data_to_celda, encabezados_unicos};
use crate::models::{Celda, Tabla};

/// Lee una hoja de una malla curricular y la devuelve como `Tabla`.
///
/// - `hoja = None` usa la primera hoja; si el nombre pedido no existe
///   también se cae a la primera.
/// - la primera fila del rango es el encabezado.
/// - las filas completamente vacías se descartan.
pub fn leer_tabla_excel<P: AsRef<Path>>(path: P, hoja: Option<&str>) -> Resultado<Tabla> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let primera = names.first().cloned().ok_or_else(|| ErrorMalla::SinHojas(path.to_path_buf()))?;

    let sheet_to_use = match hoja {
        Some(nombre) => match names.iter().find(|s| s.as_str() == nombre) {
            Some(s) => s.clone(),
            None => {
                warn!(hoja = nombre, "hoja no encontrada, se usa '{}'", primera);
                primera
            }
        },
        None => primera,
    };

    let range = workbook.worksheet_range(&sheet_to_use)?;
    let mut rows = range.rows();

    let encabezados = match rows.next() {
        Some(header_row) => encabezados_unicos(header_row),
        None => Vec::new(),
    };

    let mut filas: Vec<Vec<Celda>> = Vec::new();
    let mut descartadas = 0usize;
    for row in rows {
        let fila: Vec<Celda> = row.iter().map(data_to_celda).collect();
        if fila.iter().all(Celda::es_vacia) {
            descartadas += 1;
            continue;
        }
        filas.push(fila);
    }

    if descartadas > 0 {
        debug!(descartadas, "filas vacías descartadas");
    }

    let tabla = Tabla::desde_filas(&encabezados, filas);
    info!(
        archivo = %path.display(),
        hoja = %sheet_to_use,
        filas = tabla.num_filas(),
        columnas = tabla.num_columnas(),
        "📖 malla leída"
    );
    Ok(tabla)
}

/// Lista las hojas (sheet names) internas de un workbook de malla.
/// Devuelve los nombres de las hojas en el orden que reporta la librería.
pub fn listar_hojas_malla<P: AsRef<Path>>(path: P) -> Resultado<Vec<String>> {
    let workbook = open_workbook_auto(path)?;
    Ok(workbook.sheet_names().to_owned())
}
