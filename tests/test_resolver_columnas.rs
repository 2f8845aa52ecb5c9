use malla_sunburst::models::{Celda, Columna, Tabla, TipoRamo};
use malla_sunburst::resolver::{normalizar_tabla, resolver_columnas, Campo, Estrategia};

fn tabla(columnas: Vec<(&str, Vec<Celda>)>) -> Tabla {
    Tabla::desde_columnas(columnas.into_iter().map(|(n, c)| Columna::new(n, c)).collect())
}

fn columnas_completas() -> Vec<(&'static str, Vec<Celda>)> {
    vec![
        ("Học kỳ", vec![Celda::from(1.0), Celda::from(2.0), Celda::from(2.0)]),
        ("Loại", vec![Celda::from("BB"), Celda::from("TC"), Celda::Vacia]),
        ("Tên môn học", vec![Celda::from("Kinh tế vi mô"), Celda::from("Marketing"), Celda::from("Logistics")]),
        ("Số tín chỉ", vec![Celda::from(3.0), Celda::from(2.0), Celda::from(4.0)]),
    ]
}

#[test]
fn test_fallback_total_para_cualquier_subconjunto_de_columnas() {
    for mascara in 0u8..16 {
        let columnas: Vec<_> = columnas_completas()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mascara & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect();
        let mut t = if columnas.is_empty() { Tabla::new(3) } else { tabla(columnas) };

        let resoluciones = resolver_columnas(&mut t);
        assert_eq!(t.num_filas(), 3, "mascara {mascara}");
        assert_eq!(resoluciones.len(), 4, "mascara {mascara}");
        for campo in Campo::ORDEN {
            let columna = t.columna(campo.canonico());
            assert!(columna.is_some(), "falta '{}' con mascara {}", campo, mascara);
            assert_eq!(columna.unwrap().celdas.len(), 3);
        }

        let malla = normalizar_tabla(t);
        assert_eq!(malla.ramos.len(), 3, "mascara {mascara}");
    }
}

#[test]
fn test_palabra_clave_izquierda_gana_y_la_otra_queda_libre() {
    let mut t = tabla(vec![
        ("HK", vec![Celda::from(1.0), Celda::from(2.0)]),
        ("Semester", vec![Celda::from(5.0), Celda::from(6.0)]),
        ("Tên", vec![Celda::from("A"), Celda::from("B")]),
    ]);
    let resoluciones = resolver_columnas(&mut t);

    // "Semester" no se toca por palabra clave, pero al ser numérica la
    // toma credits por tipo de columna
    assert_eq!(t.nombres(), vec!["semester", "credits", "name", "type"]);
    let creditos = resoluciones.iter().find(|r| r.campo == Campo::Creditos).unwrap();
    assert_eq!(creditos.columna_original.as_deref(), Some("Semester"));
    assert!(matches!(creditos.estrategia, Estrategia::PorTipoDeColumna { .. }));
}

#[test]
fn test_nombres_sintetizados_en_orden() {
    let t = tabla(vec![
        ("Học kỳ", vec![Celda::from(1.0), Celda::from(1.0), Celda::from(2.0)]),
        ("Số tín chỉ", vec![Celda::from(3.0), Celda::from(3.0), Celda::from(2.0)]),
    ]);
    let malla = normalizar_tabla(t);
    let nombres: Vec<&str> = malla.ramos.iter().map(|r| r.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Course 1", "Course 2", "Course 3"]);
    assert_eq!(malla.resolucion(Campo::Nombre).unwrap().estrategia, Estrategia::Sintetizar);
    assert_eq!(malla.ramos[2].ruta, "Curriculum/Semester 2/Required/Course 3");
}

#[test]
fn test_columnas_canonicas_exactas_no_se_renombran() {
    let t = tabla(vec![
        ("credits", vec![Celda::from(2.0)]),
        ("name", vec![Celda::from("Art")]),
        ("type", vec![Celda::from("Elective")]),
        ("semester", vec![Celda::from(3.0)]),
    ]);
    let malla = normalizar_tabla(t);

    assert!(malla.resoluciones.iter().all(|r| r.estrategia == Estrategia::NombreExacto));
    assert_eq!(malla.tabla.nombres(), vec!["credits", "name", "type", "semester", "path"]);
    let ramo = &malla.ramos[0];
    assert_eq!((ramo.semestre, ramo.tipo, ramo.creditos), (3, TipoRamo::Electivo, 2));
}

#[test]
fn test_tipo_estandarizado_en_la_tabla() {
    let t = tabla(vec![
        ("Loại", vec![Celda::from("Tự chọn"), Celda::from("bb"), Celda::Vacia, Celda::from("Bắt buộc, tự chọn")]),
    ]);
    let malla = normalizar_tabla(t);
    assert_eq!(
        malla.tabla.columna("type").unwrap().celdas,
        vec![
            Celda::from("Elective"),
            Celda::from("Required"),
            Celda::from("Required"),
            Celda::from("Required"),
        ]
    );
}

#[test]
fn test_encabezados_canonicos_vietnamitas_ganan_a_las_palabras_clave() {
    // "Mã môn học" contiene "môn" y está a la izquierda de "Tên môn học"
    let t = tabla(vec![
        ("Mã môn học", vec![Celda::from("EC101")]),
        ("Tên môn học", vec![Celda::from("Nhập môn TMĐT")]),
        ("Số tín chỉ", vec![Celda::from(3.0)]),
        ("Học kỳ", vec![Celda::from(1.0)]),
        ("Loại", vec![Celda::from("Bắt buộc")]),
    ]);
    let malla = normalizar_tabla(t);

    assert!(malla.resoluciones.iter().all(|r| r.estrategia == Estrategia::NombreExacto));
    let nombre = malla.resolucion(Campo::Nombre).unwrap();
    assert_eq!(nombre.columna_original.as_deref(), Some("Tên môn học"));
    assert_eq!(malla.ramos[0].nombre, "Nhập môn TMĐT");
    assert_eq!(malla.ramos[0].ruta, "Curriculum/Semester 1/Required/Nhập môn TMĐT");
    assert_eq!(
        malla.tabla.nombres(),
        vec!["Mã môn học", "name", "credits", "semester", "type", "path"]
    );
}

#[test]
fn test_creditos_no_toma_la_columna_tipo_aunque_sea_numerica() {
    // tipo codificado con números: la columna queda para `type`
    let t = tabla(vec![
        ("Loại", vec![Celda::from(1.0), Celda::from(2.0)]),
        ("Tên môn học", vec![Celda::from("A"), Celda::from("B")]),
        ("Giờ", vec![Celda::from(45.0), Celda::from(30.0)]),
    ]);
    let malla = normalizar_tabla(t);

    let creditos = malla.resolucion(Campo::Creditos).unwrap();
    assert_eq!(creditos.columna_original.as_deref(), Some("Giờ"));
    assert!(matches!(creditos.estrategia, Estrategia::PorTipoDeColumna { .. }));
    assert_eq!(malla.resolucion(Campo::Tipo).unwrap().columna_original.as_deref(), Some("Loại"));
    assert_eq!(
        malla.tabla.columna("type").unwrap().celdas,
        vec![Celda::from("Required"), Celda::from("Required")]
    );

    // sin otra columna numérica, credits se sintetiza y `type` sigue presente
    let t = tabla(vec![
        ("Loại", vec![Celda::from(1.0)]),
        ("Tên môn học", vec![Celda::from("A")]),
    ]);
    let malla = normalizar_tabla(t);
    assert_eq!(malla.resolucion(Campo::Creditos).unwrap().estrategia, Estrategia::Sintetizar);
    assert_eq!(malla.ramos[0].creditos, 3);
    assert!(malla.tabla.columna("type").is_some());
}
