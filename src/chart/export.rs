//! Exportación del gráfico: archivo HTML definitivo o temporal, y apertura
//! en el navegador del sistema.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::chart::html::render_html;
use crate::chart::sunburst::GraficoSunburst;
use crate::error::{ErrorMalla, Resultado};

/// Abre un archivo HTML para que el usuario lo vea.
pub trait Navegador {
    fn abrir(&self, ruta: &Path) -> Resultado<()>;
}

/// Navegador por defecto del sistema operativo.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavegadorSistema;

impl Navegador for NavegadorSistema {
    fn abrir(&self, ruta: &Path) -> Resultado<()> {
        let mut cmd = comando_abrir(ruta);
        debug!(comando = ?cmd, "abriendo navegador");
        cmd.spawn().map(|_| ()).map_err(|e| ErrorMalla::Navegador {
            ruta: ruta.to_path_buf(),
            mensaje: e.to_string(),
        })
    }
}

#[cfg(target_os = "macos")]
fn comando_abrir(ruta: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(ruta);
    cmd
}

#[cfg(target_os = "windows")]
fn comando_abrir(ruta: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(ruta);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn comando_abrir(ruta: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(ruta);
    cmd
}

/// No abre nada; para uso sin entorno gráfico.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinNavegador;

impl Navegador for SinNavegador {
    fn abrir(&self, ruta: &Path) -> Resultado<()> {
        info!(archivo = %ruta.display(), "navegador deshabilitado, archivo listo");
        Ok(())
    }
}

/// Escribe el HTML del gráfico en `destino`.
pub fn escribir_html(grafico: &GraficoSunburst, destino: &Path) -> Resultado<()> {
    let html = render_html(grafico)?;
    fs::write(destino, html).map_err(|fuente| ErrorMalla::Exportacion {
        ruta: destino.to_path_buf(),
        fuente,
    })?;
    info!(archivo = %destino.display(), "💾 gráfico exportado");
    Ok(())
}

/// Escribe el HTML en un archivo temporal `.html`.
///
/// El archivo se borra cuando se suelta el `NamedTempFile`; quien lo llama
/// debe mantenerlo vivo mientras el navegador lo necesite.
pub fn escribir_html_temporal(grafico: &GraficoSunburst, directorio: Option<&Path>) -> Resultado<NamedTempFile> {
    let html = render_html(grafico)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix("malla-sunburst-").suffix(".html");
    let creado = match directorio {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    };
    let destino_error = || directorio.map(Path::to_path_buf).unwrap_or_else(std::env::temp_dir);

    let mut temporal = creado.map_err(|fuente| ErrorMalla::Exportacion {
        ruta: destino_error(),
        fuente,
    })?;
    if let Err(fuente) = temporal.write_all(html.as_bytes()).and_then(|_| temporal.flush()) {
        return Err(ErrorMalla::Exportacion {
            ruta: temporal.path().to_path_buf(),
            fuente,
        });
    }

    debug!(archivo = %temporal.path().display(), "html temporal escrito");
    Ok(temporal)
}

/// Ruta absoluta para mostrar o abrir; si no se puede resolver se deja igual.
pub fn ruta_absoluta(ruta: &Path) -> PathBuf {
    fs::canonicalize(ruta).unwrap_or_else(|_| ruta.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::ChartSpec;
    use crate::chart::sunburst::construir_sunburst;

    #[test]
    fn test_temporal_se_borra_al_soltar() {
        let dir = tempfile::tempdir().unwrap();
        let g = construir_sunburst(&[], ChartSpec::default());
        let temporal = escribir_html_temporal(&g, Some(dir.path())).unwrap();
        let ruta = temporal.path().to_path_buf();

        assert!(ruta.exists());
        assert_eq!(ruta.extension().and_then(|e| e.to_str()), Some("html"));
        assert_eq!(fs::read_to_string(&ruta).unwrap(), render_html(&g).unwrap());

        drop(temporal);
        assert!(!ruta.exists());
    }

    #[test]
    fn test_escribir_html_en_directorio_inexistente_falla() {
        let dir = tempfile::tempdir().unwrap();
        let destino = dir.path().join("no-existe").join("x.html");
        let g = construir_sunburst(&[], ChartSpec::default());
        let err = escribir_html(&g, &destino).unwrap_err();
        assert!(matches!(err, ErrorMalla::Exportacion { .. }));
    }
}
