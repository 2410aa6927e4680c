use tracing::{info, instrument};

use crate::geometry::point::Point3d;
use crate::mesh::{PointGrid, SequenceMesh};
use crate::operations::OperationError;
use crate::operations::extrude::sweep_positions;
use crate::sequence::ProfileSequence;

/// Sweep a profile sequence into a height-only surface.
///
/// Member `i` becomes row `i`, placed at the `i`-th of `sequence.len()`
/// sweep positions spread evenly over `[-extent/2, extent/2]`, so the sweep
/// axis doubles as the time axis. No inner hull is built in this mode.
///
/// # Errors
///
/// [`OperationError::ProfileMismatch`] if the members do not all have the
/// first member's sample count.
#[instrument(skip(sequence), fields(members = sequence.len()))]
pub fn extrude_sequence(
    sequence: &ProfileSequence,
    extent: f64,
) -> Result<SequenceMesh, OperationError> {
    let cols = sequence.first().map_or(0, |m| m.profile.len());
    for (index, member) in sequence.iter().enumerate() {
        if member.profile.len() != cols {
            return Err(OperationError::ProfileMismatch {
                index,
                expected: cols,
                found: member.profile.len(),
            });
        }
    }

    let sweep = sweep_positions(extent, sequence.len());
    let rows: Vec<Vec<Point3d>> = sequence
        .iter()
        .zip(&sweep)
        .map(|(member, &z)| member.profile.points.iter().map(|p| p.at_sweep(z)).collect())
        .collect();

    let mesh = SequenceMesh {
        surface: PointGrid::try_from_rows(cols, rows)?,
        sweep,
        progress: sequence.progress(),
    };
    info!(shape = ?mesh.shape(), extent, "swept profile sequence");
    Ok(mesh)
}
