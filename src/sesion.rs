//! Estado de la "ventana": archivo elegido, resultado vigente, controles y
//! archivos temporales abiertos en el navegador.
//!
//! Tres acciones: elegir archivo, abrir en navegador y guardar. Las dos
//! últimas no hacen nada mientras los controles estén deshabilitados.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::chart::{escribir_html, escribir_html_temporal, Navegador, NavegadorSistema, SinNavegador};
use crate::config::Ajustes;
use crate::error::Resultado;
use crate::excel::es_hoja_de_calculo;
use crate::procesar::{procesar_excel, ResultadoProceso};

pub struct Sesion {
    ajustes: Ajustes,
    navegador: Box<dyn Navegador>,
    archivo: Option<PathBuf>,
    resultado: Option<ResultadoProceso>,
    controles_habilitados: bool,
    temporales: Vec<NamedTempFile>,
}

impl Sesion {
    pub fn new(ajustes: Ajustes, navegador: Box<dyn Navegador>) -> Self {
        Sesion {
            ajustes,
            navegador,
            archivo: None,
            resultado: None,
            controles_habilitados: false,
            temporales: Vec::new(),
        }
    }

    /// Sesión con el navegador que indiquen los ajustes.
    pub fn desde_ajustes(ajustes: Ajustes) -> Self {
        let navegador: Box<dyn Navegador> = if ajustes.abrir_navegador {
            Box::new(NavegadorSistema)
        } else {
            Box::new(SinNavegador)
        };
        Sesion::new(ajustes, navegador)
    }

    pub fn ajustes(&self) -> &Ajustes {
        &self.ajustes
    }

    pub fn archivo(&self) -> Option<&Path> {
        self.archivo.as_deref()
    }

    pub fn resultado(&self) -> Option<&ResultadoProceso> {
        self.resultado.as_ref()
    }

    pub fn controles_habilitados(&self) -> bool {
        self.controles_habilitados
    }

    pub fn temporales(&self) -> Vec<&Path> {
        self.temporales.iter().map(|t| t.path()).collect()
    }

    /// Carga y procesa un archivo.
    ///
    /// Si falla, el resultado anterior se conserva en memoria pero los
    /// controles quedan deshabilitados hasta la próxima carga exitosa.
    pub fn elegir_archivo(&mut self, path: &Path, hoja: Option<&str>) -> Resultado<&ResultadoProceso> {
        if !es_hoja_de_calculo(path) {
            warn!(archivo = %path.display(), "la extensión no parece de hoja de cálculo, se intenta igual");
        }
        self.archivo = Some(path.to_path_buf());

        match procesar_excel(path, hoja) {
            Ok(resultado) => {
                self.controles_habilitados = true;
                Ok(&*self.resultado.insert(resultado))
            }
            Err(e) => {
                self.controles_habilitados = false;
                Err(e)
            }
        }
    }

    fn grafico_disponible(&self) -> Option<&ResultadoProceso> {
        if !self.controles_habilitados {
            debug!("controles deshabilitados, acción ignorada");
            return None;
        }
        self.resultado.as_ref()
    }

    /// Escribe el gráfico en un HTML temporal y lo abre en el navegador.
    ///
    /// El temporal vive hasta `cerrar`. Devuelve `None` si no hay gráfico.
    pub fn abrir_en_navegador(&mut self) -> Resultado<Option<PathBuf>> {
        let Some(resultado) = self.grafico_disponible() else {
            return Ok(None);
        };

        let temporal = escribir_html_temporal(&resultado.grafico, self.ajustes.directorio_temporal.as_deref())?;
        let ruta = temporal.path().to_path_buf();
        self.temporales.push(temporal);

        self.navegador.abrir(&ruta)?;
        info!(archivo = %ruta.display(), "🌐 gráfico abierto en el navegador");
        Ok(Some(ruta))
    }

    /// Guarda el gráfico en `destino` (o en el nombre por defecto) y lo abre.
    pub fn guardar(&mut self, destino: Option<&Path>) -> Resultado<Option<PathBuf>> {
        let Some(resultado) = self.grafico_disponible() else {
            return Ok(None);
        };

        let destino = destino
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.ajustes.nombre_guardado));
        escribir_html(&resultado.grafico, &destino)?;

        self.navegador.abrir(&destino)?;
        Ok(Some(destino))
    }

    /// Libera los archivos temporales. Los errores al borrar se ignoran.
    pub fn cerrar(mut self) {
        for temporal in self.temporales.drain(..) {
            let ruta = temporal.path().to_path_buf();
            if let Err(e) = temporal.close() {
                debug!(archivo = %ruta.display(), error = %e, "no se pudo borrar el temporal");
            }
        }
    }
}
