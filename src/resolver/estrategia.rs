use serde::Serialize;

use crate::models::{Celda, Columna, Tabla, TipoColumna};
use crate::resolver::campos::Campo;

/// Un paso de la cadena de respaldo que identifica (o crea) la columna de un campo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Estrategia {
    /// Columna cuyo encabezado es exactamente uno de `Campo::nombres_exactos`
    NombreExacto,
    /// Primera columna (de izquierda a derecha) cuyo encabezado contiene una palabra clave
    PalabraClave,
    /// Primera columna del tipo indicado que no sea la del campo `excluir`
    PorTipoDeColumna { tipo: TipoColumna, excluir: Campo },
    /// Columna nueva con valores por defecto
    Sintetizar,
}

/// Columnas ya asignadas a cada campo (índices dentro de la tabla).
///
/// Los índices son estables: durante la resolución sólo se renombran
/// columnas o se agregan al final.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Asignaciones {
    indices: [Option<usize>; 4],
}

impl Asignaciones {
    pub fn get(&self, campo: Campo) -> Option<usize> {
        self.indices[campo.posicion()]
    }

    pub fn asignar(&mut self, campo: Campo, indice: usize) {
        self.indices[campo.posicion()] = Some(indice);
    }

    /// Una columna lleva un solo nombre, así que no puede servir a dos campos.
    pub fn ocupada(&self, indice: usize) -> bool {
        self.indices.iter().any(|i| *i == Some(indice))
    }
}

impl Estrategia {
    /// Aplica la estrategia sobre la tabla.
    ///
    /// Devuelve el índice de la columna que queda asignada al campo (ya con
    /// el nombre canónico) o `None` si la estrategia no encontró nada.
    pub fn aplicar(&self, campo: Campo, tabla: &mut Tabla, asignadas: &Asignaciones) -> Option<usize> {
        let libre = |i: &usize| !asignadas.ocupada(*i);

        let elegida = match *self {
            Estrategia::NombreExacto => campo.nombres_exactos().iter().find_map(|exacto| {
                (0..tabla.num_columnas())
                    .filter(libre)
                    .find(|&i| tabla.columnas[i].nombre == *exacto)
            }),
            Estrategia::PalabraClave => (0..tabla.num_columnas())
                .filter(libre)
                .find(|&i| campo.coincide_encabezado(&tabla.columnas[i].nombre)),
            Estrategia::PorTipoDeColumna { tipo, excluir } => {
                let excluida = asignadas.get(excluir);
                (0..tabla.num_columnas())
                    .filter(libre)
                    .filter(|i| Some(*i) != excluida)
                    .find(|&i| tabla.columnas[i].tipo() == tipo)
            }
            Estrategia::Sintetizar => {
                tabla.agregar_columna(columna_sintetica(campo, tabla.num_filas()));
                return Some(tabla.num_columnas() - 1);
            }
        };

        if let Some(i) = elegida {
            tabla.renombrar(i, campo.canonico());
        }
        elegida
    }
}

/// Columna por defecto para un campo sin ninguna columna candidata.
pub fn columna_sintetica(campo: Campo, filas: usize) -> Columna {
    let celdas = match campo {
        Campo::Semestre => vec![Celda::Numero(1.0); filas],
        Campo::Tipo => vec![Celda::Texto("Required".to_string()); filas],
        Campo::Nombre => (0..filas).map(|i| Celda::Texto(format!("Course {}", i + 1))).collect(),
        Campo::Creditos => vec![Celda::Numero(3.0); filas],
    };
    Columna::new(campo.canonico(), celdas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabla(columnas: Vec<(&str, Vec<Celda>)>) -> Tabla {
        Tabla::desde_columnas(columnas.into_iter().map(|(n, c)| Columna::new(n, c)).collect())
    }

    #[test]
    fn test_palabra_clave_gana_la_columna_mas_a_la_izquierda() {
        let mut t = tabla(vec![
            ("Mã HP", vec![Celda::from("IT01")]),
            ("HK dự kiến", vec![Celda::from(1.0)]),
            ("Semester", vec![Celda::from(2.0)]),
        ]);
        let i = Estrategia::PalabraClave.aplicar(Campo::Semestre, &mut t, &Asignaciones::default());
        assert_eq!(i, Some(1));
        assert_eq!(t.nombres(), vec!["Mã HP", "semester", "Semester"]);
    }

    #[test]
    fn test_nombre_exacto_no_renombra() {
        let mut t = tabla(vec![("x", vec![Celda::Vacia]), ("credits", vec![Celda::from(4.0)])]);
        let i = Estrategia::NombreExacto.aplicar(Campo::Creditos, &mut t, &Asignaciones::default());
        assert_eq!(i, Some(1));
        assert_eq!(t.nombres(), vec!["x", "credits"]);
    }

    #[test]
    fn test_nombre_exacto_vietnamita_gana_a_la_palabra_clave() {
        let mut t = tabla(vec![
            ("Mã môn học", vec![Celda::from("EC101")]),
            ("Tên môn học", vec![Celda::from("Nhập môn TMĐT")]),
        ]);
        let i = Estrategia::NombreExacto.aplicar(Campo::Nombre, &mut t, &Asignaciones::default());
        assert_eq!(i, Some(1));
        assert_eq!(t.nombres(), vec!["Mã môn học", "name"]);
    }

    #[test]
    fn test_nombre_exacto_prefiere_el_canonico() {
        let mut t = tabla(vec![("Học kỳ", vec![Celda::from(2.0)]), ("semester", vec![Celda::from(1.0)])]);
        let i = Estrategia::NombreExacto.aplicar(Campo::Semestre, &mut t, &Asignaciones::default());
        assert_eq!(i, Some(1));
        assert_eq!(t.nombres(), vec!["Học kỳ", "semester"]);
    }

    #[test]
    fn test_por_tipo_excluye_columna_del_campo_indicado() {
        let mut t = tabla(vec![
            ("semester", vec![Celda::from(1.0)]),
            ("Hours", vec![Celda::from(45.0)]),
        ]);
        let mut asignadas = Asignaciones::default();
        asignadas.asignar(Campo::Semestre, 0);

        let estrategia = Estrategia::PorTipoDeColumna { tipo: TipoColumna::Numerica, excluir: Campo::Semestre };
        assert_eq!(estrategia.aplicar(Campo::Creditos, &mut t, &asignadas), Some(1));
        assert_eq!(t.nombres(), vec!["semester", "credits"]);
    }

    #[test]
    fn test_sintetizar_nombres_en_orden_de_fila() {
        let mut t = Tabla::new(3);
        let i = Estrategia::Sintetizar.aplicar(Campo::Nombre, &mut t, &Asignaciones::default());
        assert_eq!(i, Some(0));
        assert_eq!(
            t.columna("name").unwrap().celdas,
            vec![Celda::from("Course 1"), Celda::from("Course 2"), Celda::from("Course 3")]
        );
    }
}
