use fnv::FnvHashSet;
use glam::{Mat4, Vec3};

/// Unordered pair of vertex indices, stored as `(low, high)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// `None` for a self-loop.
    #[inline]
    pub fn new(i: usize, j: usize) -> Option<Self> {
        (i != j).then(|| Self {
            a: i.min(j),
            b: i.max(j),
        })
    }
}

/// Vertices plus a deduplicated edge list.
///
/// `connect` refuses self-loops, duplicates and indices past the vertex list,
/// so every stored edge references two distinct existing vertices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
    seen: FnvHashSet<Edge>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_vertex(&mut self, v: Vec3) -> usize {
        self.vertices.push(v);
        self.vertices.len() - 1
    }

    pub fn connect(&mut self, i: usize, j: usize) -> bool {
        let n = self.vertices.len();
        if i >= n || j >= n {
            return false;
        }
        match Edge::new(i, j) {
            Some(edge) if self.seen.insert(edge) => {
                self.edges.push(edge);
                true
            }
            _ => false,
        }
    }

    /// Connect `indices` in order and close the loop.
    pub fn close_loop(&mut self, indices: &[usize]) {
        for (k, &i) in indices.iter().enumerate() {
            let j = indices[(k + 1) % indices.len()];
            self.connect(i, j);
        }
    }

    /// Append another mesh, re-indexing its edges.
    pub fn append(&mut self, other: &Mesh) {
        let base = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        for e in &other.edges {
            self.connect(base + e.a, base + e.b);
        }
    }

    pub fn transformed(mut self, m: Mat4) -> Self {
        for v in &mut self.vertices {
            *v = m.transform_point3(*v);
        }
        self
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Largest distance of any vertex from the origin.
    pub fn radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }
}
