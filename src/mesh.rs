//! Triangle meshes and the text model loader.
//!
//! The model format is line oriented with whitespace separated tokens:
//!
//! ```text
//! v <x> <y> <z>          vertex, appended to a 1-based vertex table
//! f <i1> <i2> <i3>       face by vertex index
//! f <i1/t1/n1> ...       face with texture/normal indices (discarded)
//! ```
//!
//! Blank and very short lines are skipped, unknown headers are ignored. Only
//! vertex positions survive loading; the renderer is flat shaded and untextured.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::math::vec4::Vec4;
use crate::triangle::Triangle;

/// Lines shorter than this can't hold a header and a value and are skipped.
const MIN_LINE_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read model file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: vertex needs three numeric coordinates")]
    InvalidVertex { line: usize },
    #[error("line {line}: face needs three integer vertex indices")]
    InvalidFace { line: usize },
    #[error("line {line}: unsupported face format ({slashes} slashes, expected 0, 6 or 8)")]
    UnsupportedFaceFormat { line: usize, slashes: usize },
    #[error("line {line}: vertex index {index} is outside 1..={vertex_count}")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// An immutable list of triangles loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Loads a mesh from a model file on disk.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::parse(&source)?;
        log::info!(
            "loaded {} triangles from {}",
            mesh.triangles.len(),
            path.display()
        );
        Ok(mesh)
    }

    /// Parses model text. Any malformed vertex or face line aborts the load.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut vertices: Vec<Vec4> = Vec::new();
        let mut triangles = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            if line.len() < MIN_LINE_LEN {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let vertex =
                        parse_vertex(tokens).ok_or(LoadError::InvalidVertex { line: line_no })?;
                    vertices.push(vertex);
                }
                Some("f") => {
                    let slashes = line.matches('/').count();
                    let indices = match slashes {
                        0 => parse_face(tokens, parse_bare_index),
                        6 | 8 => parse_face(tokens, parse_slashed_index),
                        _ => {
                            return Err(LoadError::UnsupportedFaceFormat {
                                line: line_no,
                                slashes,
                            })
                        }
                    }
                    .ok_or(LoadError::InvalidFace { line: line_no })?;

                    let mut points = [Vec4::ZERO; 3];
                    for (point, index) in points.iter_mut().zip(indices) {
                        *point = index
                            .checked_sub(1)
                            .and_then(|i| vertices.get(i))
                            .copied()
                            .ok_or(LoadError::IndexOutOfRange {
                                line: line_no,
                                index,
                                vertex_count: vertices.len(),
                            })?;
                    }
                    triangles.push(Triangle::new(points, 0));
                }
                // Blank lines, comments and headers we don't render (vt, vn, o, ...).
                _ => {}
            }
        }

        Ok(Self { triangles })
    }

    /// A 2x2x2 cube centred on the origin, wound so its faces point outward.
    pub fn cube() -> Self {
        let triangles = CUBE_FACES
            .iter()
            .map(|&[a, b, c]| {
                Triangle::new([CUBE_VERTICES[a], CUBE_VERTICES[b], CUBE_VERTICES[c]], 0)
            })
            .collect();
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<Vec4> {
    let mut coord = || tokens.next()?.parse::<f32>().ok();
    Some(Vec4::point(coord()?, coord()?, coord()?))
}

fn parse_face<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    parse_index: fn(&str) -> Option<usize>,
) -> Option<[usize; 3]> {
    let mut index = || parse_index(tokens.next()?);
    Some([index()?, index()?, index()?])
}

fn parse_bare_index(token: &str) -> Option<usize> {
    token.parse().ok()
}

/// `i/t/n`: keeps the vertex index, checks and discards the auxiliary ones.
/// Empty auxiliary fields (`i//n`) are accepted.
fn parse_slashed_index(token: &str) -> Option<usize> {
    let mut parts = token.split('/');
    let index = parts.next()?.parse().ok()?;
    for aux in parts.filter(|part| !part.is_empty()) {
        aux.parse::<i64>().ok()?;
    }
    Some(index)
}

const CUBE_VERTICES: [Vec4; 8] = [
    Vec4::point(-1.0, -1.0, -1.0),
    Vec4::point(-1.0, 1.0, -1.0),
    Vec4::point(1.0, 1.0, -1.0),
    Vec4::point(1.0, -1.0, -1.0),
    Vec4::point(1.0, 1.0, 1.0),
    Vec4::point(1.0, -1.0, 1.0),
    Vec4::point(-1.0, 1.0, 1.0),
    Vec4::point(-1.0, -1.0, 1.0),
];

// Zero-based indices into CUBE_VERTICES.
const CUBE_FACES: [[usize; 3]; 12] = [
    // Front face
    [0, 1, 2],
    [0, 2, 3],
    // Right face
    [3, 2, 4],
    [3, 4, 5],
    // Back face
    [5, 4, 6],
    [5, 6, 7],
    // Left face
    [7, 6, 1],
    [7, 1, 0],
    // Top face
    [1, 6, 4],
    [1, 4, 2],
    // Bottom face
    [5, 7, 0],
    [5, 0, 3],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn loads_minimal_triangle() {
        let mesh = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        assert_eq!(mesh.len(), 1);
        let [a, b, c] = mesh.triangles()[0].points;
        assert_relative_eq!(a, Vec4::point(0.0, 0.0, 0.0));
        assert_relative_eq!(b, Vec4::point(1.0, 0.0, 0.0));
        assert_relative_eq!(c, Vec4::point(0.0, 1.0, 0.0));
    }

    #[test]
    fn slashed_faces_keep_only_vertex_index() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vn 0 0 1
f 3/1/1 1/1/1 2/1/1
f 1//1 2//1 3//1
";
        let mesh = Mesh::parse(source).unwrap();

        assert_eq!(mesh.len(), 2);
        assert_relative_eq!(mesh.triangles()[0].points[0], Vec4::point(0.0, 1.0, 0.0));
        assert_relative_eq!(mesh.triangles()[1].points[2], Vec4::point(0.0, 1.0, 0.0));
    }

    #[test]
    fn eight_slash_faces_are_accepted() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1/ 2/1/1 3/1/1/\n";
        let mesh = Mesh::parse(source).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn quad_face_keeps_its_first_triangle() {
        let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1/1/1 2/2/2 3/3/3 4/4/4
";
        let mesh = Mesh::parse(source).unwrap();

        assert_eq!(mesh.len(), 1);
        let [a, b, c] = mesh.triangles()[0].points;
        assert_relative_eq!(a, Vec4::point(0.0, 0.0, 0.0));
        assert_relative_eq!(b, Vec4::point(1.0, 0.0, 0.0));
        assert_relative_eq!(c, Vec4::point(1.0, 1.0, 0.0));
    }

    #[test]
    fn blank_lines_do_not_truncate_the_mesh() {
        let source = "v 0 0 0\n\nv 1 0 0\n  \nv 0 1 0\n\nf 1 2 3\n\nf 3 2 1\n";
        let mesh = Mesh::parse(source).unwrap();
        assert_eq!(mesh.len(), 2);
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let source = "# comment\no thing\nv 0 0 0\nv 1 0 0\nv 0 1 0\ns off\nf 1 2 3\n";
        assert_eq!(Mesh::parse(source).unwrap().len(), 1);
    }

    #[test]
    fn bad_vertex_is_fatal() {
        let err = Mesh::parse("v 0 0 0\nv 1 zero 0\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidVertex { line: 2 }));
    }

    #[test]
    fn bad_face_is_fatal() {
        let err = Mesh::parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidFace { line: 3 }));

        let err = Mesh::parse("v 0 0 0\nf 1/x/1 1/1/1 1/1/1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidFace { line: 2 }));
    }

    #[test]
    fn unsupported_slash_count_is_fatal() {
        let err = Mesh::parse("v 0 0 0\nf 1/1 1/1 1/1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnsupportedFaceFormat {
                line: 2,
                slashes: 3
            }
        ));
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        let err = Mesh::parse("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::IndexOutOfRange {
                line: 3,
                index: 3,
                vertex_count: 2
            }
        ));

        let err = Mesh::parse("v 0 0 0\nf 0 1 1\n").unwrap_err();
        assert!(matches!(err, LoadError::IndexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Mesh::from_obj("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("exist.obj"));
    }

    #[test]
    fn bundled_cube_asset_matches_builtin_cube() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cube.obj");
        let loaded = Mesh::from_obj(path).unwrap();
        assert_eq!(loaded, Mesh::cube());
    }

    #[test]
    fn cube_faces_point_outward() {
        for triangle in Mesh::cube().triangles() {
            let normal = triangle.face_normal();
            let center = triangle.points.iter().fold(Vec4::ZERO, |acc, &p| acc + p) / 3.0;
            assert!(normal.dot(center) > 0.0);
        }
    }
}
