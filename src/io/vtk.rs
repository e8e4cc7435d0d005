//! Legacy VTK (`.vtk`) reader.
//!
//! # Supported format
//! - ASCII legacy files with a `POLYDATA` or `UNSTRUCTURED_GRID` dataset.
//! - `POLYDATA`: `POINTS`, `VERTICES` (ignored), `LINES`, `POLYGONS`.
//! - `UNSTRUCTURED_GRID`: `POINTS`, `CELLS`, `CELL_TYPES` with vertex (1),
//!   poly-vertex (2), line (3), polyline (4), triangle (5), polygon (7) and
//!   quad (9) cells.
//! - `POINT_DATA` with a `NORMALS` array supplies vertex normals. Other
//!   `SCALARS`, `VECTORS` and `FIELD` arrays, and all `CELL_DATA`, are skipped.
//!
//! # Edge numbering
//! Lines and polylines contribute their consecutive vertex pairs, polygons
//! their closed boundary. Edges are numbered in file order; a vertex pair
//! already seen is not added again.
//!
//! # Limitations
//! - Binary files are not supported.
//! - `TRIANGLE_STRIPS` and volume cells are rejected.

use crate::io::MeshGraphReader;
use crate::knot_error::KnotError;
use crate::mesh_graph::{MeshGraph, MeshGraphBuilder};
use std::io::Read;

/// ASCII legacy VTK reader.
#[derive(Debug, Default, Clone)]
pub struct VtkReader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dataset {
    PolyData,
    UnstructuredGrid,
}

/// Cell connectivity in file order, split by how its edges are formed.
#[derive(Debug)]
enum Cell {
    Open(Vec<usize>),
    Closed(Vec<usize>),
}

/// Upper bound on capacity reserved from a count read out of the file.
const PREALLOC_LIMIT: usize = 1 << 16;

/// `a * b` for array sizes taken from the file.
fn array_len(a: usize, b: usize, what: &str) -> Result<usize, KnotError> {
    a.checked_mul(b)
        .ok_or_else(|| KnotError::MeshIoParse(format!("{what} count overflows: {a} x {b}")))
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, what: &str) -> Result<&'a str, KnotError> {
        self.inner
            .next()
            .ok_or_else(|| KnotError::MeshIoParse(format!("missing {what}")))
    }

    fn peek_keyword(&self) -> Option<&'a str> {
        self.inner.clone().next()
    }

    fn next_usize(&mut self, what: &str) -> Result<usize, KnotError> {
        let raw = self.next(what)?;
        raw.parse()
            .map_err(|_| KnotError::MeshIoParse(format!("invalid {what}: {raw}")))
    }

    fn next_f64(&mut self, what: &str) -> Result<f64, KnotError> {
        let raw = self.next(what)?;
        raw.parse()
            .map_err(|_| KnotError::MeshIoParse(format!("invalid {what}: {raw}")))
    }

    fn vec3s(&mut self, count: usize, what: &str) -> Result<Vec<[f64; 3]>, KnotError> {
        let mut out = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            out.push([self.next_f64(what)?, self.next_f64(what)?, self.next_f64(what)?]);
        }
        Ok(out)
    }

    fn skip(&mut self, count: usize, what: &str) -> Result<(), KnotError> {
        for _ in 0..count {
            self.next(what)?;
        }
        Ok(())
    }

    /// `n size` header followed by `n` length-prefixed index lists.
    fn cell_lists(&mut self, what: &str) -> Result<Vec<Vec<usize>>, KnotError> {
        let count = self.next_usize(what)?;
        let _size = self.next_usize(what)?;
        let mut lists = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            let len = self.next_usize(what)?;
            let mut list = Vec::with_capacity(len.min(PREALLOC_LIMIT));
            for _ in 0..len {
                list.push(self.next_usize(what)?);
            }
            lists.push(list);
        }
        Ok(lists)
    }
}

impl VtkReader {
    fn parse_dataset(line: &str) -> Result<Dataset, KnotError> {
        let mut parts = line.split_whitespace();
        if parts.next() != Some("DATASET") {
            return Err(KnotError::MeshIoParse("expected DATASET line".into()));
        }
        match parts.next() {
            Some("POLYDATA") => Ok(Dataset::PolyData),
            Some("UNSTRUCTURED_GRID") => Ok(Dataset::UnstructuredGrid),
            Some(other) => Err(KnotError::MeshIoParse(format!(
                "unsupported VTK dataset {other}"
            ))),
            None => Err(KnotError::MeshIoParse("missing dataset type".into())),
        }
    }

    fn classify_cell(vtk_type: i32, conn: Vec<usize>) -> Result<Option<Cell>, KnotError> {
        match vtk_type {
            1 | 2 => Ok(None),
            3 | 4 => Ok(Some(Cell::Open(conn))),
            5 | 7 | 9 => Ok(Some(Cell::Closed(conn))),
            other => Err(KnotError::MeshIoParse(format!(
                "unsupported VTK cell type {other}"
            ))),
        }
    }

    /// Read attribute arrays following `POINT_DATA` / `CELL_DATA`, returning
    /// normals if `want_normals` and a `NORMALS` array is present.
    fn parse_attributes(
        tokens: &mut Tokens<'_>,
        count: usize,
        want_normals: bool,
    ) -> Result<Option<Vec<[f64; 3]>>, KnotError> {
        let mut normals = None;
        while let Some(keyword) = tokens.peek_keyword() {
            match keyword {
                "NORMALS" => {
                    tokens.next("NORMALS")?;
                    let _name = tokens.next("normals name")?;
                    let _ty = tokens.next("normals type")?;
                    let values = tokens.vec3s(count, "normal value")?;
                    if want_normals {
                        normals = Some(values);
                    }
                }
                "VECTORS" => {
                    tokens.next("VECTORS")?;
                    tokens.skip(2, "vectors header")?;
                    tokens.skip(array_len(3, count, "vector")?, "vector value")?;
                }
                "SCALARS" => {
                    tokens.next("SCALARS")?;
                    tokens.skip(2, "scalars header")?;
                    let mut components = 1;
                    if tokens.peek_keyword() != Some("LOOKUP_TABLE") {
                        components = tokens.next_usize("scalar component count")?;
                    }
                    if tokens.peek_keyword() == Some("LOOKUP_TABLE") {
                        tokens.skip(2, "lookup table")?;
                    }
                    tokens.skip(array_len(components, count, "scalar")?, "scalar value")?;
                }
                "FIELD" => {
                    tokens.next("FIELD")?;
                    let _name = tokens.next("field name")?;
                    let arrays = tokens.next_usize("field array count")?;
                    for _ in 0..arrays {
                        let _array = tokens.next("field array name")?;
                        let components = tokens.next_usize("field components")?;
                        let tuples = tokens.next_usize("field tuples")?;
                        let _ty = tokens.next("field type")?;
                        tokens.skip(array_len(components, tuples, "field")?, "field value")?;
                    }
                }
                _ => break,
            }
        }
        Ok(normals)
    }
}

impl MeshGraphReader for VtkReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<MeshGraph, KnotError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut lines = input.lines();
        let version = lines
            .next()
            .ok_or_else(|| KnotError::MeshIoParse("empty VTK file".into()))?;
        if !version.trim_start().starts_with("# vtk DataFile") {
            return Err(KnotError::MeshIoParse("missing VTK version header".into()));
        }
        let _title = lines.next();
        let format = lines
            .next()
            .ok_or_else(|| KnotError::MeshIoParse("missing ASCII line".into()))?;
        if format.trim() != "ASCII" {
            return Err(KnotError::MeshIoParse("VTK ASCII format required".into()));
        }
        let dataset = Self::parse_dataset(
            lines
                .next()
                .ok_or_else(|| KnotError::MeshIoParse("missing DATASET line".into()))?,
        )?;

        let remaining: String = lines.collect::<Vec<_>>().join("\n");
        let mut tokens = Tokens {
            inner: remaining.split_whitespace(),
        };

        let mut positions: Option<Vec<[f64; 3]>> = None;
        let mut normals: Option<Vec<[f64; 3]>> = None;
        let mut cells: Vec<Cell> = Vec::new();
        let mut grid_cells: Option<Vec<Vec<usize>>> = None;

        while let Some(keyword) = tokens.inner.next() {
            match (dataset, keyword) {
                (_, "POINTS") => {
                    let count = tokens.next_usize("point count")?;
                    let _ty = tokens.next("point type")?;
                    positions = Some(tokens.vec3s(count, "point value")?);
                }
                (Dataset::PolyData, "VERTICES") => {
                    tokens.cell_lists("vertex cell")?;
                }
                (Dataset::PolyData, "LINES") => {
                    cells.extend(tokens.cell_lists("line cell")?.into_iter().map(Cell::Open));
                }
                (Dataset::PolyData, "POLYGONS") => {
                    cells.extend(
                        tokens
                            .cell_lists("polygon cell")?
                            .into_iter()
                            .map(Cell::Closed),
                    );
                }
                (Dataset::UnstructuredGrid, "CELLS") => {
                    grid_cells = Some(tokens.cell_lists("cell")?);
                }
                (Dataset::UnstructuredGrid, "CELL_TYPES") => {
                    let conn = grid_cells.take().ok_or_else(|| {
                        KnotError::MeshIoParse("CELL_TYPES before CELLS".into())
                    })?;
                    let count = tokens.next_usize("cell type count")?;
                    if count != conn.len() {
                        return Err(KnotError::MeshIoParse(format!(
                            "{count} cell types for {} cells",
                            conn.len()
                        )));
                    }
                    for c in conn {
                        let raw = tokens.next("cell type")?;
                        let ty = raw.parse::<i32>().map_err(|_| {
                            KnotError::MeshIoParse(format!("invalid cell type: {raw}"))
                        })?;
                        cells.extend(Self::classify_cell(ty, c)?);
                    }
                }
                (_, "POINT_DATA") => {
                    let count = tokens.next_usize("point data count")?;
                    if let Some(n) = Self::parse_attributes(&mut tokens, count, true)? {
                        normals = Some(n);
                    }
                }
                (_, "CELL_DATA") => {
                    let count = tokens.next_usize("cell data count")?;
                    Self::parse_attributes(&mut tokens, count, false)?;
                }
                (_, other) => {
                    return Err(KnotError::MeshIoParse(format!(
                        "unsupported VTK section {other}"
                    )));
                }
            }
        }

        if grid_cells.is_some() {
            return Err(KnotError::MeshIoParse("CELLS without CELL_TYPES".into()));
        }
        let positions =
            positions.ok_or_else(|| KnotError::MeshIoParse("missing POINTS".into()))?;
        log::debug!(
            "read VTK {:?}: {} points, {} cells, normals: {}",
            dataset,
            positions.len(),
            cells.len(),
            normals.is_some()
        );

        let mut builder = MeshGraphBuilder::new(positions);
        if let Some(normals) = normals {
            builder = builder.normals(normals);
        }
        for cell in &cells {
            builder = match cell {
                Cell::Open(chain) => builder.edges(chain.windows(2).map(|w| [w[0], w[1]])),
                Cell::Closed(face) => builder.face(face),
            };
        }
        builder.build()
    }
}
