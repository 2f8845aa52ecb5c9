//! Campos canónicos de la malla y sus listas de palabras clave.
//!
//! Las palabras clave se comparan como subcadenas sobre el encabezado en
//! minúsculas. El orden de cada lista no cambia el resultado (gana la
//! columna más a la izquierda), pero se mantiene estable para poder
//! inspeccionarlo en los tests.

use serde::Serialize;
use std::fmt;

use crate::models::TipoColumna;
use crate::resolver::estrategia::Estrategia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Campo {
    Semestre,
    Tipo,
    Nombre,
    Creditos,
}

/// Encabezados que cuentan como coincidencia exacta, en orden de preferencia.
/// El primero es el nombre canónico; el segundo, el encabezado habitual de
/// las mallas en vietnamita.
pub const EXACTOS_SEMESTRE: &[&str] = &["semester", "Học kỳ"];
pub const EXACTOS_TIPO: &[&str] = &["type", "Loại"];
pub const EXACTOS_NOMBRE: &[&str] = &["name", "Tên môn học"];
pub const EXACTOS_CREDITOS: &[&str] = &["credits", "Số tín chỉ"];

pub const CLAVES_SEMESTRE: &[&str] = &["kỳ", "ky", "hk", "semester", "term"];
pub const CLAVES_TIPO: &[&str] = &["loại", "loai", "type", "bắt buộc", "tự chọn", "category"];
pub const CLAVES_NOMBRE: &[&str] = &["tên", "ten", "môn", "mon", "name", "course", "subject"];
pub const CLAVES_CREDITOS: &[&str] = &["tín", "tin", "tc", "credit"];

/// Valores de la columna `type` que indican un ramo obligatorio.
/// Se revisan antes que los electivos.
pub const VALORES_OBLIGATORIO: &[&str] = &[
    "bắt buộc", "bat buoc", "bb", "bắt", "bat", "required", "compulsory", "mandatory",
];

pub const VALORES_ELECTIVO: &[&str] = &[
    "tự chọn", "tu chon", "tc", "tự", "tu", "chọn", "chon", "elective", "optional",
];

const ESTRATEGIAS_SEMESTRE: &[Estrategia] = &[
    Estrategia::NombreExacto,
    Estrategia::PalabraClave,
    Estrategia::Sintetizar,
];

const ESTRATEGIAS_TIPO: &[Estrategia] = &[
    Estrategia::NombreExacto,
    Estrategia::PalabraClave,
    Estrategia::Sintetizar,
];

const ESTRATEGIAS_NOMBRE: &[Estrategia] = &[
    Estrategia::NombreExacto,
    Estrategia::PalabraClave,
    Estrategia::PorTipoDeColumna { tipo: TipoColumna::Texto, excluir: Campo::Tipo },
    Estrategia::Sintetizar,
];

const ESTRATEGIAS_CREDITOS: &[Estrategia] = &[
    Estrategia::NombreExacto,
    Estrategia::PalabraClave,
    Estrategia::PorTipoDeColumna { tipo: TipoColumna::Numerica, excluir: Campo::Semestre },
    Estrategia::Sintetizar,
];

impl Campo {
    /// Orden de resolución: los respaldos por tipo de columna de los campos
    /// posteriores excluyen columnas ya tomadas por los anteriores.
    pub const ORDEN: [Campo; 4] = [Campo::Semestre, Campo::Tipo, Campo::Nombre, Campo::Creditos];

    pub fn canonico(self) -> &'static str {
        match self {
            Campo::Semestre => "semester",
            Campo::Tipo => "type",
            Campo::Nombre => "name",
            Campo::Creditos => "credits",
        }
    }

    pub fn nombres_exactos(self) -> &'static [&'static str] {
        match self {
            Campo::Semestre => EXACTOS_SEMESTRE,
            Campo::Tipo => EXACTOS_TIPO,
            Campo::Nombre => EXACTOS_NOMBRE,
            Campo::Creditos => EXACTOS_CREDITOS,
        }
    }

    pub fn palabras_clave(self) -> &'static [&'static str] {
        match self {
            Campo::Semestre => CLAVES_SEMESTRE,
            Campo::Tipo => CLAVES_TIPO,
            Campo::Nombre => CLAVES_NOMBRE,
            Campo::Creditos => CLAVES_CREDITOS,
        }
    }

    /// Cadena de respaldo, evaluada en orden hasta que una estrategia resuelve.
    pub fn estrategias(self) -> &'static [Estrategia] {
        match self {
            Campo::Semestre => ESTRATEGIAS_SEMESTRE,
            Campo::Tipo => ESTRATEGIAS_TIPO,
            Campo::Nombre => ESTRATEGIAS_NOMBRE,
            Campo::Creditos => ESTRATEGIAS_CREDITOS,
        }
    }

    pub(crate) fn posicion(self) -> usize {
        match self {
            Campo::Semestre => 0,
            Campo::Tipo => 1,
            Campo::Nombre => 2,
            Campo::Creditos => 3,
        }
    }

    /// Indica si el encabezado contiene alguna palabra clave del campo.
    pub fn coincide_encabezado(self, encabezado: &str) -> bool {
        let lower = encabezado.to_lowercase();
        self.palabras_clave().iter().any(|kw| lower.contains(kw))
    }
}

impl fmt::Display for Campo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonico())
    }
}
