//! Construcción de la jerarquía del sunburst: raíz -> semestre -> tipo -> ramo.
//!
//! Los nodos se identifican por su ruta (`Curriculum/Semester 1/Required`),
//! así que dos filas con la misma ruta se agregan en un solo sector. Con el
//! `ChartSpec` por defecto el valor de cada nodo es la suma de créditos de
//! sus filas y el color es el promedio del semestre ponderado por créditos.

use serde::Serialize;
use std::collections::HashMap;

use crate::chart::spec::ChartSpec;
use crate::models::RamoMalla;
use crate::resolver::Campo;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodoSunburst {
    pub id: String,
    pub etiqueta: String,
    /// Vacío para la raíz
    pub padre: String,
    pub valor: i64,
    pub color: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraficoSunburst {
    pub spec: ChartSpec,
    pub nodos: Vec<NodoSunburst>,
}

impl GraficoSunburst {
    pub fn nodo(&self, id: &str) -> Option<&NodoSunburst> {
        self.nodos.iter().find(|n| n.id == id)
    }

    /// Suma de créditos del sector con la ruta indicada
    pub fn valor_de(&self, id: &str) -> Option<i64> {
        self.nodo(id).map(|n| n.valor)
    }

    pub fn hojas(&self) -> impl Iterator<Item = &NodoSunburst> {
        self.nodos
            .iter()
            .filter(|n| !self.nodos.iter().any(|otro| otro.padre == n.id))
    }
}

#[derive(Default)]
struct Acumulado {
    valor: i64,
    color_ponderado: f64,
    peso: f64,
    color_simple: f64,
    filas: usize,
}

impl Acumulado {
    fn sumar(&mut self, valor: i64, color: f64) {
        self.valor += valor;
        self.color_ponderado += color * valor as f64;
        self.peso += valor as f64;
        self.color_simple += color;
        self.filas += 1;
    }

    fn color(&self) -> f64 {
        if self.peso != 0.0 {
            self.color_ponderado / self.peso
        } else if self.filas > 0 {
            self.color_simple / self.filas as f64
        } else {
            0.0
        }
    }
}

/// Etiqueta del sector de un ramo en el nivel `campo`.
fn etiqueta_de(campo: Campo, ramo: &RamoMalla) -> String {
    match campo {
        Campo::Semestre => format!("Semester {}", ramo.semestre),
        Campo::Tipo => ramo.tipo.to_string(),
        Campo::Nombre => ramo.nombre.clone(),
        Campo::Creditos => ramo.creditos.to_string(),
    }
}

/// Valor numérico de un ramo para el área o el color.
/// Los campos de texto cuentan la fila.
fn numero_de(campo: Campo, ramo: &RamoMalla) -> i64 {
    match campo {
        Campo::Semestre => ramo.semestre,
        Campo::Creditos => ramo.creditos,
        Campo::Tipo | Campo::Nombre => 1,
    }
}

/// Arma los nodos del sunburst en orden de primera aparición, con los
/// niveles, el valor y el color que indique `spec`.
pub fn construir_sunburst(ramos: &[RamoMalla], spec: ChartSpec) -> GraficoSunburst {
    // (id, etiqueta, padre) en orden de aparición + acumulados por id
    let mut orden: Vec<(String, String, String)> = Vec::new();
    let mut acumulados: HashMap<String, Acumulado> = HashMap::new();

    let raiz = spec.etiqueta_raiz.to_string();
    orden.push((raiz.clone(), raiz.clone(), String::new()));
    acumulados.insert(raiz.clone(), Acumulado::default());

    for ramo in ramos {
        let valor = numero_de(spec.valor, ramo);
        let color = numero_de(spec.color, ramo) as f64;

        let mut padre = String::new();
        let mut id = raiz.clone();
        let mut etiqueta = raiz.clone();
        let mut niveles = spec.niveles.iter();
        loop {
            let acumulado = acumulados.entry(id.clone()).or_insert_with(|| {
                orden.push((id.clone(), etiqueta.clone(), padre.clone()));
                Acumulado::default()
            });
            acumulado.sumar(valor, color);

            let Some(&campo) = niveles.next() else { break };
            etiqueta = etiqueta_de(campo, ramo);
            padre = id;
            id = format!("{}/{}", padre, etiqueta);
        }
    }

    let nodos = orden
        .into_iter()
        .map(|(id, etiqueta, padre)| {
            let (valor, color) = acumulados
                .get(&id)
                .map(|a| (a.valor, a.color()))
                .unwrap_or((0, 0.0));
            NodoSunburst { id, etiqueta, padre, valor, color }
        })
        .collect();

    GraficoSunburst { spec, nodos }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TipoRamo;
    use crate::resolver::ruta_jerarquica;

    fn ramo(semestre: i64, tipo: TipoRamo, nombre: &str, creditos: i64) -> RamoMalla {
        RamoMalla {
            semestre,
            tipo,
            nombre: nombre.to_string(),
            creditos,
            ruta: ruta_jerarquica(semestre, tipo, nombre),
        }
    }

    #[test]
    fn test_agrega_por_semestre_y_tipo() {
        let ramos = vec![
            ramo(1, TipoRamo::Obligatorio, "Algorithms", 3),
            ramo(1, TipoRamo::Electivo, "Art", 2),
            ramo(2, TipoRamo::Obligatorio, "Databases", 4),
        ];
        let g = construir_sunburst(&ramos, ChartSpec::default());

        assert_eq!(g.valor_de("Curriculum"), Some(9));
        assert_eq!(g.valor_de("Curriculum/Semester 1"), Some(5));
        assert_eq!(g.valor_de("Curriculum/Semester 1/Required"), Some(3));
        assert_eq!(g.valor_de("Curriculum/Semester 1/Elective"), Some(2));
        assert_eq!(g.valor_de("Curriculum/Semester 1/Required/Algorithms"), Some(3));

        let ids: Vec<&str> = g.nodos.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "Curriculum",
                "Curriculum/Semester 1",
                "Curriculum/Semester 1/Required",
                "Curriculum/Semester 1/Required/Algorithms",
                "Curriculum/Semester 1/Elective",
                "Curriculum/Semester 1/Elective/Art",
                "Curriculum/Semester 2",
                "Curriculum/Semester 2/Required",
                "Curriculum/Semester 2/Required/Databases",
            ]
        );
        assert_eq!(g.hojas().count(), 3);
    }

    #[test]
    fn test_rutas_duplicadas_se_suman() {
        let ramos = vec![
            ramo(1, TipoRamo::Obligatorio, "PE", 1),
            ramo(1, TipoRamo::Obligatorio, "PE", 1),
        ];
        let g = construir_sunburst(&ramos, ChartSpec::default());
        assert_eq!(g.valor_de("Curriculum/Semester 1/Required/PE"), Some(2));
        assert_eq!(g.nodos.len(), 4);
    }

    #[test]
    fn test_color_ponderado_por_creditos() {
        let ramos = vec![
            ramo(1, TipoRamo::Obligatorio, "A", 3),
            ramo(3, TipoRamo::Obligatorio, "B", 1),
        ];
        let g = construir_sunburst(&ramos, ChartSpec::default());
        let raiz = g.nodo("Curriculum").unwrap();
        assert!((raiz.color - 1.5).abs() < 1e-9);
        assert!((g.nodo("Curriculum/Semester 3").unwrap().color - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_creditos_cero_usa_promedio_simple() {
        let ramos = vec![ramo(2, TipoRamo::Electivo, "Seminar", 0)];
        let g = construir_sunburst(&ramos, ChartSpec::default());
        assert_eq!(g.nodo("Curriculum").unwrap().color, 2.0);
        assert_eq!(g.valor_de("Curriculum"), Some(0));
    }

    #[test]
    fn test_niveles_y_valor_configurables() {
        let ramos = vec![
            ramo(1, TipoRamo::Obligatorio, "A", 3),
            ramo(2, TipoRamo::Obligatorio, "B", 4),
            ramo(1, TipoRamo::Electivo, "C", 2),
        ];
        let spec = ChartSpec {
            niveles: [Campo::Tipo, Campo::Semestre, Campo::Nombre],
            valor: Campo::Nombre,
            ..ChartSpec::default()
        };
        let g = construir_sunburst(&ramos, spec);

        // con un campo de texto como valor se cuentan los ramos
        assert_eq!(g.valor_de("Curriculum"), Some(3));
        assert_eq!(g.valor_de("Curriculum/Required"), Some(2));
        assert_eq!(g.valor_de("Curriculum/Required/Semester 2/B"), Some(1));
        assert_eq!(g.nodo("Curriculum/Required/Semester 1").unwrap().padre, "Curriculum/Required");
        assert!((g.nodo("Curriculum/Required").unwrap().color - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_hojas_coinciden_con_la_ruta_de_la_malla() {
        let ramos = vec![ramo(3, TipoRamo::Electivo, "Thesis", 6)];
        let g = construir_sunburst(&ramos, ChartSpec::default());
        let hojas: Vec<&str> = g.hojas().map(|n| n.id.as_str()).collect();
        assert_eq!(hojas, vec![ramos[0].ruta.as_str()]);
        assert_eq!(g.nodo(&ramos[0].ruta).unwrap().etiqueta, "Thesis");
    }

    #[test]
    fn test_sin_ramos_solo_raiz() {
        let g = construir_sunburst(&[], ChartSpec::default());
        assert_eq!(g.nodos.len(), 1);
        assert_eq!(g.nodos[0].padre, "");
    }
}
