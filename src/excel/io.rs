use calamine::Data;
use std::collections::HashMap;

use crate::models::Celda;

/// Convierte un `Data` de calamine a String (versión genérica para encabezados)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

/// Convierte un `Data` de calamine a `Celda` sin perder el tipo.
///
/// Los textos vacíos (sólo espacios) y las celdas con error de fórmula se
/// tratan como celdas vacías.
pub fn data_to_celda(d: &Data) -> Celda {
    match d {
        Data::String(s) if s.trim().is_empty() => Celda::Vacia,
        Data::String(s) => Celda::Texto(s.clone()),
        Data::Float(f) => Celda::Numero(*f),
        Data::Int(i) => Celda::Numero(*i as f64),
        Data::Bool(b) => Celda::Booleano(*b),
        Data::Empty | Data::Error(_) => Celda::Vacia,
        Data::DateTime(dt) => Celda::Fecha(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Celda::Fecha(s.clone()),
    }
}

/// Construye los nombres de columna a partir de la fila de encabezado.
///
/// - encabezado vacío -> `Unnamed: {indice}`
/// - encabezado repetido -> `nombre.1`, `nombre.2`, ...
pub fn encabezados_unicos(fila: &[Data]) -> Vec<String> {
    let mut vistos: HashMap<String, usize> = HashMap::new();
    let mut nombres = Vec::with_capacity(fila.len());

    for (i, celda) in fila.iter().enumerate() {
        let base = match cell_to_string(celda) {
            s if s.is_empty() => format!("Unnamed: {}", i),
            s => s,
        };

        let mut nombre = base.clone();
        while vistos.contains_key(&nombre) {
            let contador = vistos.entry(base.clone()).or_insert(0);
            *contador += 1;
            nombre = format!("{}.{}", base, contador);
        }
        vistos.insert(nombre.clone(), 0);
        nombres.push(nombre);
    }

    nombres
}
