//! Gráfico sunburst de la malla.
//!
//! Submódulos:
//! - `spec`: especificación fija del gráfico (niveles, valor, color, tamaño)
//! - `sunburst`: construcción y agregación de nodos
//! - `html`: render determinista a HTML con Plotly.js
//! - `export`: escritura a disco y apertura en el navegador

pub mod export;
pub mod html;
pub mod spec;
pub mod sunburst;

pub use export::{escribir_html, escribir_html_temporal, ruta_absoluta, Navegador, NavegadorSistema, SinNavegador};
pub use html::render_html;
pub use spec::{ChartSpec, PLOTLY_CDN};
pub use sunburst::{construir_sunburst, GraficoSunburst, NodoSunburst};
