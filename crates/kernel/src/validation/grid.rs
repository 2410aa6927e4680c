//! Structural checks on extruded meshes and sequence surfaces.

use std::cmp::Ordering;

use super::types::{ErrorCode, Hull, Location, ValidationError};
use crate::mesh::PointGrid;

pub fn check_finite(grid: &PointGrid, hull: Hull, errors: &mut Vec<ValidationError>) {
    for (row, points) in grid.iter_rows().enumerate() {
        for (col, p) in points.iter().enumerate() {
            if !p.is_finite() {
                errors.push(ValidationError::error(
                    Location::GridPoint { hull, row, col },
                    ErrorCode::NonFiniteValue,
                    format!("non-finite mesh point ({}, {}, {})", p.x, p.y, p.z),
                ));
            }
        }
    }
}

pub fn check_hull_pair(outer: &PointGrid, inner: &PointGrid, errors: &mut Vec<ValidationError>) {
    if outer.shape() != inner.shape() {
        errors.push(ValidationError::error(
            Location::Whole,
            ErrorCode::HullShapeMismatch,
            format!("outer hull is {:?}, inner hull is {:?}", outer.shape(), inner.shape()),
        ));
        return;
    }
    for (row, (o_row, i_row)) in outer.iter_rows().zip(inner.iter_rows()).enumerate() {
        for (col, (o, i)) in o_row.iter().zip(i_row).enumerate() {
            if o.z != i.z && o.z.is_finite() && i.z.is_finite() {
                errors.push(
                    ValidationError::error(
                        Location::GridPoint {
                            hull: Hull::Inner,
                            row,
                            col,
                        },
                        ErrorCode::SweepCoordinateMismatch,
                        "inner point left its cross-section plane",
                    )
                    .with_value(i.z, Some(o.z)),
                );
            }
        }
    }
}

/// `values` must have one entry per grid row.
pub fn check_row_count(grid: &PointGrid, values: &[f64], what: &str, errors: &mut Vec<ValidationError>) {
    if values.len() != grid.rows() {
        errors.push(
            ValidationError::error(
                Location::Whole,
                ErrorCode::RowCountMismatch,
                format!("{} {what} values for {} rows", values.len(), grid.rows()),
            )
            .with_value(values.len() as f64, Some(grid.rows() as f64)),
        );
    }
}

pub fn check_progress_order(progress: &[f64], errors: &mut Vec<ValidationError>) {
    for (i, w) in progress.windows(2).enumerate() {
        if !matches!(w[0].partial_cmp(&w[1]), Some(Ordering::Less)) {
            errors.push(
                ValidationError::error(
                    Location::Row(i + 1),
                    ErrorCode::ProgressNotIncreasing,
                    format!("progress {} does not follow {}", w[1], w[0]),
                )
                .with_value(w[1], Some(w[0])),
            );
        }
    }
}
