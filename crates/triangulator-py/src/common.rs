use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use triangulator::{FormatError, Point, Triangulation, TriangulationError};

pub type PyVertices = Vec<(f64, f64)>;
pub type PyTriangles = Vec<(u32, u32, u32)>;

pub fn points_from_py(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn triangulation_from_py(
    vertices: &[(f64, f64)],
    triangles: &[(u32, u32, u32)],
) -> Triangulation {
    Triangulation::new(
        points_from_py(vertices),
        triangles.iter().map(|&(a, b, c)| [a, b, c]).collect(),
    )
}

pub fn triangulation_to_py(t: Triangulation) -> (PyVertices, PyTriangles) {
    let (vertices, triangles) = t.into_parts();
    (
        vertices.into_iter().map(|v| (v.x, v.y)).collect(),
        triangles.into_iter().map(|[a, b, c]| (a, b, c)).collect(),
    )
}

pub fn map_format_err(err: FormatError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_triangulation_err(err: TriangulationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
