//! Weighted undirected graphs stored as dense symmetric matrices.
//!
//! A [`Graph`] is an immutable value: every constructor validates that the
//! matrix is square, symmetric and free of self-loops, so downstream
//! consumers such as the MST engine never need to re-check those properties.
//! A stored weight of `0` means "no edge".

use crate::{GraphError, Result};

/// Integer edge weight. `0` is reserved as the "no edge" sentinel.
pub type Weight = u32;

/// A dense, symmetric, edge-weighted undirected graph.
///
/// # Examples
/// ```
/// use arterial_core::Graph;
///
/// let graph = Graph::from_rows(&[
///     [0_u32, 4, 0],
///     [4, 0, 7],
///     [0, 7, 0],
/// ])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(1, 2), Some(7));
/// assert!(!graph.has_edge(0, 2));
/// # Ok::<(), arterial_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    weights: Vec<Weight>,
}

impl Graph {
    /// Builds a graph from a square weight matrix.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - `rows` is empty
    /// - the matrix for `rows.len()` vertices cannot be allocated
    /// - a row length differs from the number of rows
    /// - a diagonal entry is non-zero
    /// - `rows[i][j] != rows[j][i]` for some pair
    pub fn from_rows<R: AsRef<[Weight]>>(rows: &[R]) -> Result<Self> {
        let vertex_count = rows.len();
        let mut graph = Self::unconnected(vertex_count)?;
        for (row, (values, slot)) in rows
            .iter()
            .zip(graph.weights.chunks_exact_mut(vertex_count))
            .enumerate()
        {
            let values = values.as_ref();
            if values.len() != vertex_count {
                return Err(GraphError::NotSquare {
                    row,
                    len: values.len(),
                    expected: vertex_count,
                });
            }
            slot.copy_from_slice(values);
        }
        graph.validate()?;
        Ok(graph)
    }

    /// Builds a graph from `(i, j, weight)` triples.
    ///
    /// Pairs that are never mentioned stay unconnected. When a pair appears
    /// more than once the last weight wins, and a weight of `0` removes the
    /// edge again.
    ///
    /// # Errors
    ///
    /// Returns an error when `vertex_count` is zero or too large to allocate,
    /// an endpoint is out of range, or an edge joins a vertex to itself with a non-zero weight.
    ///
    /// # Examples
    /// ```
    /// use arterial_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 5), (2, 1, 3)])?;
    /// assert_eq!(graph.weight(1, 0), Some(5));
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), arterial_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::unconnected(vertex_count)?;
        for (left, right, weight) in edges {
            for vertex in [left, right] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfBounds {
                        vertex,
                        vertex_count,
                    });
                }
            }
            if left == right {
                if weight != 0 {
                    return Err(GraphError::SelfLoop {
                        vertex: left,
                        weight,
                    });
                }
                continue;
            }
            graph.set_symmetric(left, right, weight);
        }
        Ok(graph)
    }

    /// A graph with `vertex_count` vertices and no edges.
    ///
    /// Fails with [`GraphError::TooManyVertices`] when the matrix size
    /// overflows `usize` or cannot be reserved.
    pub(crate) fn unconnected(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { got: 0 });
        }
        let too_many = || GraphError::TooManyVertices { got: vertex_count };
        let cells = vertex_count.checked_mul(vertex_count).ok_or_else(too_many)?;
        let mut weights = Vec::new();
        weights.try_reserve_exact(cells).map_err(|_| too_many())?;
        weights.resize(cells, 0);
        Ok(Self {
            vertex_count,
            weights,
        })
    }

    /// Writes `weight` into both `(left, right)` and `(right, left)`.
    ///
    /// Callers guarantee both indices are in range and distinct.
    pub(crate) fn set_symmetric(&mut self, left: usize, right: usize, weight: Weight) {
        let forward = self.index(left, right);
        let backward = self.index(right, left);
        self.weights[forward] = weight;
        self.weights[backward] = weight;
    }

    fn validate(&self) -> Result<()> {
        for row in 0..self.vertex_count {
            let diagonal = self.weights[self.index(row, row)];
            if diagonal != 0 {
                return Err(GraphError::SelfLoop {
                    vertex: row,
                    weight: diagonal,
                });
            }
            for col in (row + 1)..self.vertex_count {
                let forward = self.weights[self.index(row, col)];
                let backward = self.weights[self.index(col, row)];
                if forward != backward {
                    return Err(GraphError::Asymmetric {
                        row,
                        col,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.vertex_count + col
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the weight stored between `left` and `right`.
    ///
    /// `Some(0)` means the vertices are not connected; `None` means one of
    /// the indices is out of range.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<Weight> {
        if left >= self.vertex_count || right >= self.vertex_count {
            return None;
        }
        Some(self.weights[self.index(left, right)])
    }

    /// Returns `true` when `left` and `right` are joined by an edge.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        self.weight(left, right).is_some_and(|weight| weight != 0)
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over the undirected edges as `(i, j, weight)` with `i < j`,
    /// in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.rows().enumerate().flat_map(|(row, weights)| {
            weights
                .iter()
                .enumerate()
                .skip(row + 1)
                .filter(|(_, weight)| **weight != 0)
                .map(move |(col, weight)| (row, col, *weight))
        })
    }

    /// Iterates over the matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.weights.chunks_exact(self.vertex_count)
    }

    /// Returns the weights leaving `vertex`. Callers guarantee it is in range.
    pub(crate) fn row(&self, vertex: usize) -> &[Weight] {
        let start = self.index(vertex, 0);
        &self.weights[start..start + self.vertex_count]
    }
}
