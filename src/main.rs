// --- Malla Sunburst - Archivo principal ---

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use malla_sunburst::chart::ruta_absoluta;
use malla_sunburst::excel::listar_hojas_malla;
use malla_sunburst::logging::init_tracing;
use malla_sunburst::{Ajustes, ResultadoProceso, Sesion};

/// Visualiza una malla curricular en Excel como gráfico sunburst
/// (semestre -> tipo -> ramo).
#[derive(Parser, Debug)]
#[command(name = "malla-sunburst", version)]
struct Cli {
    /// Archivo Excel con la malla (xlsx, xls, xlsb, ods)
    archivo: Option<PathBuf>,

    /// Hoja a leer (por defecto la primera)
    #[arg(long)]
    sheet: Option<String>,

    /// Lista las hojas del archivo y termina
    #[arg(long)]
    list_sheets: bool,

    /// Abre el gráfico en el navegador
    #[arg(long)]
    open: bool,

    /// Guarda el gráfico como HTML en la ruta indicada
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Entra al modo interactivo aunque se haya dado un archivo
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    let ajustes = Ajustes::from_env();
    init_tracing(&ajustes.filtro_log);
    let cli = Cli::parse();

    if cli.list_sheets {
        let archivo = cli.archivo.as_deref().context("--list-sheets necesita un archivo")?;
        let hojas = listar_hojas_malla(archivo)
            .with_context(|| format!("no se pudieron listar las hojas de {}", archivo.display()))?;
        for hoja in hojas {
            println!("{}", hoja);
        }
        return Ok(());
    }

    let mut sesion = Sesion::desde_ajustes(ajustes);
    let interactivo = cli.archivo.is_none() || cli.interactive;

    if let Some(archivo) = cli.archivo.as_deref() {
        let fallo = match sesion.elegir_archivo(archivo, cli.sheet.as_deref()) {
            Ok(resultado) => {
                imprimir_resumen(resultado);
                None
            }
            Err(e) => Some(e),
        };
        match fallo {
            Some(e) if interactivo => println!("❌ Error: {}", e),
            Some(e) => {
                sesion.cerrar();
                return Err(e).context("no se pudo cargar la malla");
            }
            None => {}
        }
    }

    if let Some(destino) = cli.save.as_deref() {
        if let Some(ruta) = sesion.guardar(Some(destino)).context("no se pudo guardar el gráfico")? {
            println!("💾 Gráfico guardado en: {}", ruta_absoluta(&ruta).display());
        }
    }

    if cli.open {
        if let Some(ruta) = sesion.abrir_en_navegador().context("no se pudo abrir el gráfico")? {
            println!("🌐 Gráfico abierto: {}", ruta_absoluta(&ruta).display());
        }
    }

    if interactivo {
        bucle_interactivo(&mut sesion, cli.sheet.as_deref())?;
    } else if !sesion.temporales().is_empty() {
        // el temporal se borra al cerrar: esperar a que el navegador lo lea
        print!("Presione Enter para terminar...");
        io::stdout().flush()?;
        let mut linea = String::new();
        io::stdin().lock().read_line(&mut linea)?;
    }

    sesion.cerrar();
    Ok(())
}

fn imprimir_resumen(resultado: &ResultadoProceso) {
    let malla = &resultado.malla;
    println!(
        "✅ Datos procesados con éxito: {} ramos, {} créditos",
        malla.ramos.len(),
        malla.total_creditos()
    );
    for r in &malla.resoluciones {
        let origen = r.columna_original.as_deref().unwrap_or("(generada)");
        println!("   - {:<8} <- {} [{:?}]", r.campo.canonico(), origen, r.estrategia);
    }
}

const AYUDA: &str = "Comandos:
  pick <archivo>   carga un Excel y construye el gráfico
  open             abre el gráfico en el navegador
  save [ruta]      guarda el gráfico como HTML y lo abre
  help             muestra esta ayuda
  quit             termina (borra los HTML temporales)";

fn bucle_interactivo(sesion: &mut Sesion, hoja: Option<&str>) -> Result<()> {
    println!("=== Malla Sunburst ===");
    println!("{}", AYUDA);

    let stdin = io::stdin();
    let mut lineas = stdin.lock().lines();
    loop {
        let estado = if sesion.controles_habilitados() { "listo" } else { "sin gráfico" };
        print!("[{}]> ", estado);
        io::stdout().flush()?;

        let Some(linea) = lineas.next() else { break };
        let linea = linea?;
        let (comando, argumento) = match linea.trim().split_once(char::is_whitespace) {
            Some((c, a)) => (c, Some(a.trim()).filter(|a| !a.is_empty())),
            None => (linea.trim(), None),
        };

        match comando {
            "" => continue,
            "pick" | "p" => match argumento {
                Some(ruta) => match sesion.elegir_archivo(Path::new(ruta), hoja) {
                    Ok(resultado) => imprimir_resumen(resultado),
                    Err(e) => println!("❌ Error: {}", e),
                },
                None => println!("uso: pick <archivo>"),
            },
            "open" | "o" => match sesion.abrir_en_navegador() {
                Ok(Some(ruta)) => println!("🌐 Gráfico abierto: {}", ruta_absoluta(&ruta).display()),
                Ok(None) => println!("Primero cargue un archivo válido"),
                Err(e) => println!("❌ Error al abrir el gráfico: {}", e),
            },
            "save" | "s" => match sesion.guardar(argumento.map(Path::new)) {
                Ok(Some(ruta)) => println!("💾 Gráfico guardado en: {}", ruta_absoluta(&ruta).display()),
                Ok(None) => println!("Primero cargue un archivo válido"),
                Err(e) => println!("❌ Error al guardar el gráfico: {}", e),
            },
            "help" | "h" | "?" => println!("{}", AYUDA),
            "quit" | "q" | "exit" => break,
            otro => println!("comando desconocido: {} (help para ayuda)", otro),
        }
    }

    Ok(())
}
