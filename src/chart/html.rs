//! Render HTML del sunburst con Plotly.js cargado desde CDN.
//!
//! El documento es determinista: mismo gráfico, mismos bytes.

use serde::Serialize;

use crate::chart::spec::{Margen, PLOTLY_CDN};
use crate::chart::sunburst::GraficoSunburst;
use crate::error::Resultado;

const DIV_ID: &str = "malla-sunburst";

#[derive(Serialize)]
struct Titulo<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct BarraColor<'a> {
    title: Titulo<'a>,
}

#[derive(Serialize)]
struct Marcador<'a> {
    colors: Vec<f64>,
    colorscale: &'a str,
    cmin: f64,
    cmax: f64,
    showscale: bool,
    colorbar: BarraColor<'a>,
}

#[derive(Serialize)]
struct TrazaSunburst<'a> {
    #[serde(rename = "type")]
    tipo: &'static str,
    ids: Vec<&'a str>,
    labels: Vec<&'a str>,
    parents: Vec<&'a str>,
    values: Vec<i64>,
    branchvalues: &'static str,
    hovertext: Vec<&'a str>,
    hovertemplate: &'static str,
    marker: Marcador<'a>,
}

#[derive(Serialize)]
struct Layout<'a> {
    title: Titulo<'a>,
    width: u32,
    height: u32,
    margin: Margen,
}

/// Serializa a JSON apto para incrustar dentro de `<script>`.
fn json_para_script<T: Serialize>(valor: &T) -> Resultado<String> {
    Ok(serde_json::to_string(valor)?.replace("</", "<\\/"))
}

fn traza(grafico: &GraficoSunburst) -> TrazaSunburst<'_> {
    let nodos = &grafico.nodos;
    let colores: Vec<f64> = nodos.iter().map(|n| n.color).collect();
    let cmin = colores.iter().cloned().fold(f64::INFINITY, f64::min);
    let cmax = colores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (cmin, cmax) = if cmin.is_finite() && cmax.is_finite() { (cmin, cmax) } else { (0.0, 1.0) };

    TrazaSunburst {
        tipo: "sunburst",
        ids: nodos.iter().map(|n| n.id.as_str()).collect(),
        labels: nodos.iter().map(|n| n.etiqueta.as_str()).collect(),
        parents: nodos.iter().map(|n| n.padre.as_str()).collect(),
        values: nodos.iter().map(|n| n.valor).collect(),
        branchvalues: "total",
        hovertext: nodos.iter().map(|n| n.id.as_str()).collect(),
        hovertemplate: "%{hovertext}<br>credits=%{value}<extra></extra>",
        marker: Marcador {
            colors: colores,
            colorscale: grafico.spec.escala_color,
            cmin,
            cmax,
            showscale: true,
            colorbar: BarraColor { title: Titulo { text: grafico.spec.color.canonico() } },
        },
    }
}

/// Genera el documento HTML completo del gráfico.
pub fn render_html(grafico: &GraficoSunburst) -> Resultado<String> {
    let spec = &grafico.spec;
    let data = json_para_script(&[traza(grafico)])?;
    let layout = json_para_script(&Layout {
        title: Titulo { text: spec.titulo },
        width: spec.ancho,
        height: spec.alto,
        margin: spec.margen,
    })?;
    let titulo = html_escape::encode_text(spec.titulo);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{titulo}</title>
    <script src="{cdn}" charset="utf-8"></script>
</head>
<body>
    <div id="{div}" style="width:{ancho}px;height:{alto}px;"></div>
    <script type="text/javascript">
        Plotly.newPlot("{div}", {data}, {layout}, {{"responsive": true}});
    </script>
</body>
</html>
"#,
        titulo = titulo,
        cdn = PLOTLY_CDN,
        div = DIV_ID,
        ancho = spec.ancho,
        alto = spec.alto,
        data = data,
        layout = layout,
    ))
}
