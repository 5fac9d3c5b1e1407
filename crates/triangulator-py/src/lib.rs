//! PyO3 bindings for the `triangulator` kernel.
//!
//! Notes
//! - Keep bindings thin: vertices cross the boundary as `(x, y)` tuples and
//!   triangles as `(i, j, k)` tuples; payloads as `bytes`.
//! - Every core error surfaces as `ValueError` carrying the core message, so the
//!   service layer can tell "too short" / "length mismatch" / "at least 3" apart.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

mod common;

use common::{
    map_format_err, map_triangulation_err, points_from_py, triangulation_from_py,
    triangulation_to_py, PyTriangles, PyVertices,
};

/// Decode a point-set payload into `[(x, y), ...]`.
#[pyfunction]
fn decode_point_set(data: &[u8]) -> PyResult<PyVertices> {
    let pts = triangulator::decode_point_set(data).map_err(map_format_err)?;
    Ok(pts.into_iter().map(|p| (p.x, p.y)).collect())
}

/// Deduplicate, classify and fan-triangulate `[(x, y), ...]`.
#[pyfunction]
fn compute_triangulation(points: Vec<(f64, f64)>) -> PyResult<(PyVertices, PyTriangles)> {
    let t = triangulator::compute(&points_from_py(&points)).map_err(map_triangulation_err)?;
    Ok(triangulation_to_py(t))
}

#[pyfunction]
fn serialize_triangulation(
    py: Python<'_>,
    vertices: Vec<(f64, f64)>,
    triangles: Vec<(u32, u32, u32)>,
) -> Py<PyBytes> {
    let t = triangulation_from_py(&vertices, &triangles);
    PyBytes::new_bound(py, &triangulator::encode_triangulation(&t)).unbind()
}

#[pyfunction]
fn parse_triangulation(data: &[u8]) -> PyResult<(PyVertices, PyTriangles)> {
    let t = triangulator::decode_triangulation(data).map_err(map_format_err)?;
    Ok(triangulation_to_py(t))
}

#[pymodule]
fn triangulator_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode_point_set, m)?)?;
    m.add_function(wrap_pyfunction!(compute_triangulation, m)?)?;
    m.add_function(wrap_pyfunction!(serialize_triangulation, m)?)?;
    m.add_function(wrap_pyfunction!(parse_triangulation, m)?)?;
    m.add("VERSION", triangulator::VERSION)?;
    Ok(())
}
