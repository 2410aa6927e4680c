//! Point grids produced by the extruders.
//!
//! Grids are row-major: row `i` is sweep step `i`, column `j` is arc sample
//! `j`. All points use the `(x, height, sweep)` axis convention.

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point3d;
use crate::operations::OperationError;

/// A dense `rows × cols` grid of mesh points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct PointGrid {
    rows: usize,
    cols: usize,
    points: Vec<Point3d>,
}

/// Unchecked wire form of a [`PointGrid`].
#[derive(Deserialize)]
struct GridData {
    rows: usize,
    cols: usize,
    points: Vec<Point3d>,
}

impl TryFrom<GridData> for PointGrid {
    type Error = OperationError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = data.rows.checked_mul(data.cols).unwrap_or(usize::MAX);
        if data.points.len() != expected {
            return Err(OperationError::SampleCountMismatch {
                field: "grid points",
                expected,
                found: data.points.len(),
            });
        }
        Ok(Self {
            rows: data.rows,
            cols: data.cols,
            points: data.points,
        })
    }
}

impl PointGrid {
    /// Build a grid from row vectors, each of which must have `cols` entries.
    ///
    /// # Errors
    ///
    /// [`OperationError::SampleCountMismatch`] for the first row of another
    /// length.
    pub fn try_from_rows(cols: usize, rows: Vec<Vec<Point3d>>) -> Result<Self, OperationError> {
        let n_rows = rows.len();
        let mut points = Vec::with_capacity(n_rows * cols);
        for row in rows {
            if row.len() != cols {
                return Err(OperationError::SampleCountMismatch {
                    field: "grid row",
                    expected: cols,
                    found: row.len(),
                });
            }
            points.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            points,
        })
    }

    /// Infallible form of [`PointGrid::try_from_rows`] for rows built to size.
    ///
    /// # Panics
    ///
    /// If any row does not have `cols` entries.
    pub fn from_rows(cols: usize, rows: Vec<Vec<Point3d>>) -> Self {
        match Self::try_from_rows(cols, rows) {
            Ok(grid) => grid,
            Err(e) => panic!("grid rows must share one length: {e}"),
        }
    }

    /// `(rows, cols)`, i.e. `(sweep_count, arc_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Point3d> {
        if row < self.rows && col < self.cols {
            self.points.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// If `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Point3d] {
        &self.points[row * self.cols..(row + 1) * self.cols]
    }

    /// Every point in arc column `col`, one per sweep step.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Point3d> + '_ {
        (0..self.rows).map(move |r| self.points[r * self.cols + col])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Point3d]> {
        // chunks(0) panics; an empty-column grid has no rows worth yielding.
        self.points.chunks(self.cols.max(1))
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }
}

/// Two-hull extrusion of a single profile.
///
/// `outer[i][j]` and `inner[i][j]` are the same sweep step and arc sample;
/// the inner point is the outer one pushed along the local cross-section
/// normal by the thickness at `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrudedMesh {
    pub outer: PointGrid,
    pub inner: PointGrid,
    /// Sweep coordinate of each row.
    pub sweep: Vec<f64>,
}

impl ExtrudedMesh {
    pub fn shape(&self) -> (usize, usize) {
        self.outer.shape()
    }
}

/// Height-only surface built from a profile sequence, one row per member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceMesh {
    pub surface: PointGrid,
    /// Sweep coordinate of each row.
    pub sweep: Vec<f64>,
    /// Progress of the member that produced each row, for colouring.
    pub progress: Vec<f64>,
}

impl SequenceMesh {
    pub fn shape(&self) -> (usize, usize) {
        self.surface.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x3() -> PointGrid {
        let rows = (0..2)
            .map(|i| (0..3).map(|j| Point3d::new(j as f64, 0.0, i as f64)).collect())
            .collect();
        PointGrid::from_rows(3, rows)
    }

    #[test]
    fn test_shape_and_indexing() {
        let g = grid_2x3();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.get(1, 2), Some(Point3d::new(2.0, 0.0, 1.0)));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 3), None);
    }

    #[test]
    fn test_rows_and_columns() {
        let g = grid_2x3();
        assert_eq!(g.row(1).len(), 3);
        assert!(g.row(1).iter().all(|p| p.z == 1.0));
        let col: Vec<Point3d> = g.column(1).collect();
        assert_eq!(col, vec![Point3d::new(1.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 1.0)]);
        assert_eq!(g.iter_rows().count(), 2);
    }

    #[test]
    #[should_panic(expected = "grid rows must share one length")]
    fn test_ragged_rows_rejected() {
        PointGrid::from_rows(2, vec![vec![Point3d::ORIGIN; 2], vec![Point3d::ORIGIN; 3]]);
    }

    #[test]
    fn test_empty_grid() {
        let g = PointGrid::from_rows(0, vec![]);
        assert!(g.is_empty());
        assert_eq!(g.shape(), (0, 0));
        assert_eq!(g.iter_rows().count(), 0);
    }

    #[test]
    fn test_try_from_rows_reports_ragged_row() {
        let err = PointGrid::try_from_rows(2, vec![vec![Point3d::ORIGIN; 2], vec![Point3d::ORIGIN; 3]])
            .unwrap_err();
        assert_eq!(
            err,
            OperationError::SampleCountMismatch {
                field: "grid row",
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_deserialize_checks_point_count() {
        let text = r#"{ "rows": 2, "cols": 2, "points": [{ "x": 0.0, "y": 0.0, "z": 0.0 }] }"#;
        let err = serde_json::from_str::<PointGrid>(text).unwrap_err();
        assert!(err.to_string().contains("grid points has 1 entries, expected 4"));

        let text = serde_json::to_string(&grid_2x3()).unwrap();
        let g: PointGrid = serde_json::from_str(&text).unwrap();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.get(1, 2), Some(Point3d::new(2.0, 0.0, 1.0)));
    }
}
