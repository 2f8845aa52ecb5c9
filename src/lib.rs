// Biblioteca raíz del crate `malla-sunburst`.
// Reexporta los módulos principales y las funciones de conveniencia
// `procesar_excel` / `procesar_tabla` que orquestan el flujo principal.
pub mod chart;
pub mod config;
pub mod error;
pub mod excel;
pub mod logging;
pub mod models;
pub mod procesar;
pub mod resolver;
pub mod sesion;

pub use config::Ajustes;
pub use error::{ErrorMalla, Resultado};
pub use procesar::{procesar_excel, procesar_tabla, ResultadoProceso};
pub use sesion::Sesion;
