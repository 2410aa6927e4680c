use std::collections::HashMap;

use breaker_kernel::geometry::point::Point3d;
use breaker_kernel::geometry::vector::Vec3;
use breaker_kernel::mesh::{ExtrudedMesh, PointGrid, SequenceMesh};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A triangle mesh for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: Point3d, normal: Vec3) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend([pos.x as f32, pos.y as f32, pos.z as f32]);
        self.normals.extend([normal.x as f32, normal.y as f32, normal.z as f32]);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend([i0, i1, i2]);
    }

    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|&idx| idx + offset));
    }

    /// Reverse every triangle and negate every normal.
    pub fn flip_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        for n in &mut self.normals {
            *n = -*n;
        }
    }

    pub fn flipped(mut self) -> Self {
        self.flip_winding();
        self
    }

    pub fn position(&self, index: u32) -> [f32; 3] {
        let i = index as usize * 3;
        [self.positions[i], self.positions[i + 1], self.positions[i + 2]]
    }

    pub fn normal(&self, index: u32) -> [f32; 3] {
        let i = index as usize * 3;
        [self.normals[i], self.normals[i + 1], self.normals[i + 2]]
    }
}

/// Triangulate a point grid, two triangles per cell.
///
/// Triangles are wound so their normals point along `column × row`, i.e.
/// arc direction crossed with sweep direction for a hull. Vertex normals are
/// the area-weighted average of the adjacent triangle normals; vertices with
/// no area around them get a zero normal.
pub fn tessellate_grid(grid: &PointGrid) -> TriangleMesh {
    let (rows, cols) = grid.shape();
    let mut mesh = TriangleMesh::new();
    if rows < 2 || cols < 2 {
        return mesh;
    }

    let index = |r: usize, c: usize| (r * cols + c) as u32;
    let mut triangles = Vec::with_capacity((rows - 1) * (cols - 1) * 2);
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let i00 = index(r, c);
            let i01 = index(r, c + 1);
            let i10 = index(r + 1, c);
            let i11 = index(r + 1, c + 1);
            triangles.push([i00, i01, i11]);
            triangles.push([i00, i11, i10]);
        }
    }

    let points = grid.points();
    let mut accumulated = vec![Vec3::ZERO; points.len()];
    for tri in &triangles {
        let [a, b, c] = tri.map(|i| points[i as usize]);
        let face = (b - a).cross(&(c - a));
        for &i in tri {
            accumulated[i as usize] = accumulated[i as usize] + face;
        }
    }

    for (p, n) in points.iter().zip(accumulated) {
        mesh.add_vertex(*p, n.normalized().unwrap_or(Vec3::ZERO));
    }
    for [i0, i1, i2] in triangles {
        mesh.add_triangle(i0, i1, i2);
    }
    mesh
}

/// Closed triangle shell around an extruded wave.
///
/// Made of the outer hull, the inner hull with reversed winding, side strips
/// joining the hulls along the base and tip columns, and end caps joining
/// them across the first and last sweep rows. Every part faces away from the
/// material between the hulls when the inner hull lies on the positive side
/// of the outer hull's cross-section normal. Hulls of different shapes are
/// tessellated without strips or caps.
#[instrument(skip(mesh), fields(shape = ?mesh.shape()))]
pub fn tessellate_shell(mesh: &ExtrudedMesh) -> TriangleMesh {
    let (rows, cols) = mesh.shape();
    let mut shell = tessellate_grid(&mesh.outer);
    shell.merge(&tessellate_grid(&mesh.inner).flipped());
    if rows == 0 || cols == 0 || mesh.inner.shape() != (rows, cols) {
        return shell;
    }

    let strip = |col: usize| {
        let rows = mesh
            .outer
            .column(col)
            .zip(mesh.inner.column(col))
            .map(|(o, i)| vec![o, i])
            .collect();
        tessellate_grid(&PointGrid::from_rows(2, rows))
    };
    shell.merge(&strip(0).flipped());
    shell.merge(&strip(cols - 1));

    let cap = |row: usize| {
        let rows = vec![mesh.outer.row(row).to_vec(), mesh.inner.row(row).to_vec()];
        tessellate_grid(&PointGrid::from_rows(cols, rows))
    };
    shell.merge(&cap(0).flipped());
    shell.merge(&cap(rows - 1));

    debug!(
        vertices = shell.vertex_count(),
        triangles = shell.triangle_count(),
        "tessellated shell"
    );
    shell
}

/// Triangulate a sequence surface so that it faces the positive side of each
/// profile's normal, which is up for left-to-right profiles.
#[instrument(skip(mesh), fields(shape = ?mesh.shape()))]
pub fn tessellate_sequence(mesh: &SequenceMesh) -> TriangleMesh {
    tessellate_grid(&mesh.surface).flipped()
}

/// Count of undirected edges used by exactly one triangle, matching vertices
/// by position. Zero for a closed surface.
pub fn boundary_edge_count(mesh: &TriangleMesh) -> usize {
    let key = |i: u32| mesh.position(i).map(f32::to_bits);
    let mut uses: HashMap<([u32; 3], [u32; 3]), usize> = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let (ka, kb) = (key(a), key(b));
            let edge = if ka <= kb { (ka, kb) } else { (kb, ka) };
            *uses.entry(edge).or_default() += 1;
        }
    }
    uses.values().filter(|&&n| n == 1).count()
}
