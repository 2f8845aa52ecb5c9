//! Resolución de columnas y normalización de la malla.
//!
//! Dada una `Tabla` con encabezados arbitrarios, identifica (o sintetiza)
//! las cuatro columnas canónicas `semester`, `type`, `name` y `credits`,
//! coerciona sus valores y deriva la ruta jerárquica de cada fila.
//! Nada de esto falla: cada campo termina en una columna sintética o en
//! valores por defecto.

pub mod campos;
pub mod coercion;
pub mod estrategia;

pub use campos::Campo;
pub use coercion::{a_entero, estandarizar_tipo, CREDITOS_POR_DEFECTO, SEMESTRE_POR_DEFECTO};
pub use estrategia::{Asignaciones, Estrategia};

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Celda, Columna, RamoMalla, Tabla, TipoRamo};

/// Etiqueta raíz de la jerarquía
pub const ETIQUETA_RAIZ: &str = "Curriculum";

/// Columna derivada con la ruta jerárquica de cada fila
pub const COLUMNA_RUTA: &str = "path";

/// Cómo se resolvió un campo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolucion {
    pub campo: Campo,
    pub estrategia: Estrategia,
    /// Encabezado original de la columna (`None` si fue sintetizada)
    pub columna_original: Option<String>,
    pub indice: usize,
}

/// Resultado de normalizar una tabla.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MallaNormalizada {
    /// Tabla con las columnas canónicas coercionadas y la columna `path`
    pub tabla: Tabla,
    pub ramos: Vec<RamoMalla>,
    pub resoluciones: Vec<Resolucion>,
}

impl MallaNormalizada {
    pub fn resolucion(&self, campo: Campo) -> Option<&Resolucion> {
        self.resoluciones.iter().find(|r| r.campo == campo)
    }

    pub fn total_creditos(&self) -> i64 {
        self.ramos.iter().map(|r| r.creditos).sum()
    }
}

/// Identifica o sintetiza las cuatro columnas canónicas, en el orden
/// `semester`, `type`, `name`, `credits`.
pub fn resolver_columnas(tabla: &mut Tabla) -> Vec<Resolucion> {
    let mut asignadas = Asignaciones::default();
    let mut resoluciones = Vec::with_capacity(Campo::ORDEN.len());

    for campo in Campo::ORDEN {
        for estrategia in campo.estrategias() {
            let original: Vec<String> = tabla.columnas.iter().map(|c| c.nombre.clone()).collect();
            let Some(indice) = estrategia.aplicar(campo, tabla, &asignadas) else {
                continue;
            };

            let columna_original = match estrategia {
                Estrategia::Sintetizar => None,
                _ => original.get(indice).cloned(),
            };

            match estrategia {
                Estrategia::PorTipoDeColumna { .. } => info!(
                    campo = %campo,
                    columna = columna_original.as_deref().unwrap_or_default(),
                    "usando columna '{}' como '{}' por tipo de datos",
                    columna_original.as_deref().unwrap_or_default(),
                    campo
                ),
                _ => debug!(campo = %campo, estrategia = ?estrategia, columna = ?columna_original, "campo resuelto"),
            }

            asignadas.asignar(campo, indice);
            resoluciones.push(Resolucion {
                campo,
                estrategia: *estrategia,
                columna_original,
                indice,
            });
            break;
        }
    }

    resoluciones
}

/// Ruta jerárquica de una fila: `<raíz>/Semester N/<tipo>/<nombre>`.
pub fn ruta_jerarquica(semestre: i64, tipo: TipoRamo, nombre: &str) -> String {
    format!("{}/Semester {}/{}/{}", ETIQUETA_RAIZ, semestre, tipo, nombre)
}

/// Normaliza la tabla completa: resuelve columnas, coerciona valores y
/// agrega la columna `path`.
pub fn normalizar_tabla(mut tabla: Tabla) -> MallaNormalizada {
    let resoluciones = resolver_columnas(&mut tabla);
    let indice = |campo: Campo| {
        resoluciones
            .iter()
            .find(|r| r.campo == campo)
            .map(|r| r.indice)
    };

    let filas = tabla.num_filas();
    let semestres = coercionar_enteros(&mut tabla, indice(Campo::Semestre), SEMESTRE_POR_DEFECTO);
    let creditos = coercionar_enteros(&mut tabla, indice(Campo::Creditos), CREDITOS_POR_DEFECTO);
    let tipos = estandarizar_columna_tipo(&mut tabla, indice(Campo::Tipo));

    let nombres: Vec<String> = match indice(Campo::Nombre).and_then(|i| tabla.columnas.get(i)) {
        Some(columna) => columna.celdas.iter().map(|c| c.to_string()).collect(),
        None => vec![String::new(); filas],
    };

    let ramos: Vec<RamoMalla> = (0..filas)
        .map(|i| {
            let ruta = ruta_jerarquica(semestres[i], tipos[i], &nombres[i]);
            RamoMalla {
                semestre: semestres[i],
                tipo: tipos[i],
                nombre: nombres[i].clone(),
                creditos: creditos[i],
                ruta,
            }
        })
        .collect();

    let rutas = Columna::new(COLUMNA_RUTA, ramos.iter().map(|r| Celda::Texto(r.ruta.clone())).collect());
    match tabla.indice_de(COLUMNA_RUTA) {
        Some(i) => tabla.columnas[i] = rutas,
        None => tabla.agregar_columna(rutas),
    }

    info!(
        ramos = ramos.len(),
        creditos = ramos.iter().map(|r| r.creditos).sum::<i64>(),
        "✅ malla normalizada"
    );

    MallaNormalizada { tabla, ramos, resoluciones }
}

fn coercionar_enteros(tabla: &mut Tabla, indice: Option<usize>, defecto: i64) -> Vec<i64> {
    let filas = tabla.num_filas();
    match indice.and_then(|i| tabla.columnas.get_mut(i)) {
        Some(columna) => {
            let valores: Vec<i64> = columna.celdas.iter().map(|c| a_entero(c, defecto)).collect();
            columna.celdas = valores.iter().map(|v| Celda::Numero(*v as f64)).collect();
            valores
        }
        None => vec![defecto; filas],
    }
}

fn estandarizar_columna_tipo(tabla: &mut Tabla, indice: Option<usize>) -> Vec<TipoRamo> {
    let filas = tabla.num_filas();
    match indice.and_then(|i| tabla.columnas.get_mut(i)) {
        Some(columna) => {
            let tipos: Vec<TipoRamo> = columna.celdas.iter().map(estandarizar_tipo).collect();
            columna.celdas = tipos.iter().map(|t| Celda::Texto(t.etiqueta().to_string())).collect();
            tipos
        }
        None => vec![TipoRamo::default(); filas],
    }
}
