// Defaults for parameters
const START_VERTEX_DEFAULT: usize = 0;
const CHECK_SYMMETRY_DEFAULT: bool = false;

/// A wrapper around the parameters used to grow a minimum spanning tree.
/// Only use if you want to tune parameters. Otherwise use `Prim::default_params()` to
/// instantiate the tree builder with default parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimParams {
    pub(crate) start_vertex: usize,
    pub(crate) check_symmetry: bool,
}

/// Builder object to set custom parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamsBuilder {
    start_vertex: Option<usize>,
    check_symmetry: Option<bool>,
}

impl PrimParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder {
            start_vertex: None,
            check_symmetry: None,
        }
    }
}

impl ParamsBuilder {

    /// Sets the start vertex - the vertex the spanning tree is grown outwards
    /// from. For a connected network the choice changes which equal-cost tree
    /// is built, but never its total cost. A start vertex beyond the end of
    /// the matrix is reset to 0 when the tree is grown.
    /// Defaults to 0.
    ///
    /// # Parameters
    /// * start_vertex - the vertex to grow the tree from
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn start_vertex(mut self, start_vertex: usize) -> ParamsBuilder {
        self.start_vertex = Some(start_vertex);
        self
    }

    /// Sets whether the cost matrix is verified to be symmetric before the tree
    /// is grown. An undirected network needs `matrix[i][j] == matrix[j][i]`
    /// everywhere; when this is off, whichever cell the row scan reaches first
    /// decides the connection. The check is quadratic in the number of vertices.
    /// Defaults to false.
    ///
    /// # Parameters
    /// * check_symmetry - whether to verify the matrix is symmetric
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn check_symmetry(mut self, check_symmetry: bool) -> ParamsBuilder {
        self.check_symmetry = Some(check_symmetry);
        self
    }

    /// Finishes the building of the parameter configuration. A call to this method is
    /// required to exit the builder pattern and complete the construction of the
    /// parameters.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> PrimParams {
        PrimParams {
            start_vertex: self.start_vertex.unwrap_or(START_VERTEX_DEFAULT),
            check_symmetry: self.check_symmetry.unwrap_or(CHECK_SYMMETRY_DEFAULT),
        }
    }
}
