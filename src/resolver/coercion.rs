use crate::models::{Celda, TipoRamo};
use crate::resolver::campos::{VALORES_ELECTIVO, VALORES_OBLIGATORIO};

pub const SEMESTRE_POR_DEFECTO: i64 = 1;
pub const CREDITOS_POR_DEFECTO: i64 = 3;

/// Coerción numérica de una celda a entero.
///
/// Texto no numérico, vacíos y valores no finitos toman `defecto`; los
/// números se truncan hacia cero.
pub fn a_entero(celda: &Celda, defecto: i64) -> i64 {
    let valor = match celda {
        Celda::Numero(n) => Some(*n),
        Celda::Texto(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        Celda::Booleano(b) => Some(if *b { 1.0 } else { 0.0 }),
        Celda::Vacia | Celda::Fecha(_) => None,
    };

    match valor {
        Some(v) if v.is_finite() => v.trunc() as i64,
        _ => defecto,
    }
}

/// Estandariza el texto de la columna `type` a {Required, Elective}.
///
/// Las claves de obligatorio se revisan primero: un valor que contiene
/// claves de ambas familias queda como obligatorio.
pub fn estandarizar_tipo(celda: &Celda) -> TipoRamo {
    if celda.es_vacia() {
        return TipoRamo::Obligatorio;
    }

    let lower = celda.to_string().to_lowercase();
    if VALORES_OBLIGATORIO.iter().any(|kw| lower.contains(kw)) {
        TipoRamo::Obligatorio
    } else if VALORES_ELECTIVO.iter().any(|kw| lower.contains(kw)) {
        TipoRamo::Electivo
    } else {
        TipoRamo::Obligatorio
    }
}
