//! Flujo principal: Excel -> tabla -> malla normalizada -> sunburst.

use std::error::Error;
use std::path::Path;

use tracing::error;

use crate::chart::{construir_sunburst, ChartSpec, GraficoSunburst};
use crate::error::{ErrorMalla, Resultado};
use crate::excel::leer_tabla_excel;
use crate::models::Tabla;
use crate::resolver::{normalizar_tabla, MallaNormalizada};

#[derive(Debug, Clone, PartialEq)]
pub struct ResultadoProceso {
    pub malla: MallaNormalizada,
    pub grafico: GraficoSunburst,
}

/// Normaliza una tabla ya cargada y construye su gráfico. No falla.
pub fn procesar_tabla(tabla: Tabla) -> ResultadoProceso {
    let malla = normalizar_tabla(tabla);
    let grafico = construir_sunburst(&malla.ramos, ChartSpec::default());
    ResultadoProceso { malla, grafico }
}

/// Lee el archivo y lo procesa completo.
///
/// Cualquier error de lectura se registra con su cadena de causas y se
/// devuelve envuelto en `ErrorMalla::Procesamiento`.
pub fn procesar_excel<P: AsRef<Path>>(path: P, hoja: Option<&str>) -> Resultado<ResultadoProceso> {
    let path = path.as_ref();
    match leer_tabla_excel(path, hoja) {
        Ok(tabla) => Ok(procesar_tabla(tabla)),
        Err(e) => {
            let traza = cadena_de_errores(&e);
            error!(archivo = %path.display(), causa = %traza, "❌ error al procesar el archivo Excel");
            Err(ErrorMalla::Procesamiento {
                ruta: path.to_path_buf(),
                mensaje: e.to_string(),
                fuente: Box::new(e),
            })
        }
    }
}

/// Une el error y todas sus causas en una sola línea.
pub fn cadena_de_errores(e: &dyn Error) -> String {
    let mut partes = vec![e.to_string()];
    let mut actual = e.source();
    while let Some(fuente) = actual {
        partes.push(fuente.to_string());
        actual = fuente.source();
    }
    partes.join(": ")
}
