// Estructuras de datos principales

use serde::Serialize;
use std::fmt;

/// Valor escalar de una celda tal como llega desde la hoja de cálculo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Celda {
    Vacia,
    Texto(String),
    /// Los enteros de Excel se ensanchan a f64
    Numero(f64),
    Booleano(bool),
    /// Fechas y duraciones, conservadas como texto
    Fecha(String),
}

impl Celda {
    pub fn es_vacia(&self) -> bool {
        matches!(self, Celda::Vacia)
    }
}

impl From<&str> for Celda {
    fn from(s: &str) -> Self {
        Celda::Texto(s.to_string())
    }
}

impl From<f64> for Celda {
    fn from(n: f64) -> Self {
        Celda::Numero(n)
    }
}

impl From<i64> for Celda {
    fn from(n: i64) -> Self {
        Celda::Numero(n as f64)
    }
}

impl fmt::Display for Celda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Celda::Vacia => Ok(()),
            Celda::Texto(s) => write!(f, "{}", s),
            Celda::Numero(n) => {
                // 3.0 se muestra como "3", igual que en Excel
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Celda::Booleano(b) => write!(f, "{}", b),
            Celda::Fecha(s) => write!(f, "{}", s),
        }
    }
}

/// Tipo inferido de una columna completa.
///
/// Sigue las reglas habituales de un dataframe: una columna es numérica
/// si todas sus celdas no vacías son números (una columna con filas pero
/// sin ningún valor también cuenta como numérica), y cualquier mezcla
/// termina como `Texto`. Una columna sin filas es `Texto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipoColumna {
    Numerica,
    Texto,
    Booleana,
    Temporal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Columna {
    pub nombre: String,
    pub celdas: Vec<Celda>,
}

impl Columna {
    pub fn new(nombre: impl Into<String>, celdas: Vec<Celda>) -> Self {
        Columna { nombre: nombre.into(), celdas }
    }

    pub fn tipo(&self) -> TipoColumna {
        if self.celdas.is_empty() {
            return TipoColumna::Texto;
        }

        let valores: Vec<&Celda> = self.celdas.iter().filter(|c| !c.es_vacia()).collect();
        if valores.iter().all(|c| matches!(c, Celda::Numero(_))) {
            TipoColumna::Numerica
        } else if valores.iter().all(|c| matches!(c, Celda::Booleano(_))) {
            TipoColumna::Booleana
        } else if valores.iter().all(|c| matches!(c, Celda::Fecha(_))) {
            TipoColumna::Temporal
        } else {
            TipoColumna::Texto
        }
    }
}

/// Tabla de columnas con nombre. Todas las columnas tienen `filas` celdas.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tabla {
    pub columnas: Vec<Columna>,
    filas: usize,
}

impl Tabla {
    /// Tabla vacía con `filas` filas y sin columnas.
    pub fn new(filas: usize) -> Self {
        Tabla { columnas: Vec::new(), filas }
    }

    /// Construye la tabla desde columnas; las más cortas se rellenan con `Vacia`.
    pub fn desde_columnas(columnas: Vec<Columna>) -> Self {
        let filas = columnas.iter().map(|c| c.celdas.len()).max().unwrap_or(0);
        let mut tabla = Tabla::new(filas);
        for columna in columnas {
            tabla.agregar_columna(columna);
        }
        tabla
    }

    /// Construye la tabla desde un encabezado y filas (orientación de la hoja).
    pub fn desde_filas(encabezados: &[String], filas: Vec<Vec<Celda>>) -> Self {
        let mut columnas: Vec<Columna> = encabezados
            .iter()
            .map(|h| Columna::new(h.clone(), Vec::with_capacity(filas.len())))
            .collect();
        let total = filas.len();

        for fila in filas {
            let mut celdas = fila.into_iter();
            for columna in columnas.iter_mut() {
                columna.celdas.push(celdas.next().unwrap_or(Celda::Vacia));
            }
        }

        let mut tabla = Tabla::new(total);
        for columna in columnas {
            tabla.agregar_columna(columna);
        }
        tabla
    }

    pub fn num_filas(&self) -> usize {
        self.filas
    }

    pub fn num_columnas(&self) -> usize {
        self.columnas.len()
    }

    pub fn nombres(&self) -> Vec<&str> {
        self.columnas.iter().map(|c| c.nombre.as_str()).collect()
    }

    pub fn indice_de(&self, nombre: &str) -> Option<usize> {
        self.columnas.iter().position(|c| c.nombre == nombre)
    }

    pub fn columna(&self, nombre: &str) -> Option<&Columna> {
        self.columnas.iter().find(|c| c.nombre == nombre)
    }

    /// Agrega una columna al final ajustando su largo al número de filas.
    pub fn agregar_columna(&mut self, mut columna: Columna) {
        columna.celdas.resize(self.filas, Celda::Vacia);
        self.columnas.push(columna);
    }

    pub fn renombrar(&mut self, indice: usize, nuevo: &str) {
        if let Some(columna) = self.columnas.get_mut(indice) {
            columna.nombre = nuevo.to_string();
        }
    }
}

/// Tipo de ramo normalizado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TipoRamo {
    #[default]
    #[serde(rename = "Required")]
    Obligatorio,
    #[serde(rename = "Elective")]
    Electivo,
}

impl TipoRamo {
    pub fn etiqueta(self) -> &'static str {
        match self {
            TipoRamo::Obligatorio => "Required",
            TipoRamo::Electivo => "Elective",
        }
    }
}

impl fmt::Display for TipoRamo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiqueta())
    }
}

/// Una fila de la malla ya normalizada.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RamoMalla {
    pub semestre: i64,
    pub tipo: TipoRamo,
    pub nombre: String,
    pub creditos: i64,
    /// Etiqueta jerárquica "<raíz>/Semester N/<tipo>/<nombre>"
    pub ruta: String,
}
