use serde::Serialize;

use crate::resolver::{Campo, ETIQUETA_RAIZ};

/// Versión fija de Plotly.js referenciada desde el HTML
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const TITULO: &str = "E-Commerce Training Program";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margen {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

/// Especificación del gráfico sunburst. No se expone configuración:
/// todo queda fijo salvo los datos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Niveles de la jerarquía, de adentro hacia afuera
    pub niveles: [Campo; 3],
    /// Campo cuya suma define el área de cada sector
    pub valor: Campo,
    /// Campo usado para la escala de color continua
    pub color: Campo,
    pub escala_color: &'static str,
    pub ancho: u32,
    pub alto: u32,
    pub titulo: &'static str,
    pub etiqueta_raiz: &'static str,
    pub margen: Margen,
}

impl Default for ChartSpec {
    fn default() -> Self {
        ChartSpec {
            niveles: [Campo::Semestre, Campo::Tipo, Campo::Nombre],
            valor: Campo::Creditos,
            color: Campo::Semestre,
            escala_color: "Viridis",
            ancho: 1000,
            alto: 1000,
            titulo: TITULO,
            etiqueta_raiz: ETIQUETA_RAIZ,
            margen: Margen { t: 30, l: 0, r: 0, b: 0 },
        }
    }
}
