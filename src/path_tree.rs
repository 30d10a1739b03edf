use thiserror::Error;

use crate::groups::{CommutativeMonoid, NumAdditiveGroups};
use crate::hld::Hld;
use crate::segment_tree::SegmentTree;

/// Rejected input to [`PathQueryTree::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("tree must have at least one node")]
    Empty,

    #[error("parents has length {parents} but weights has length {weights}")]
    LengthMismatch { parents: usize, weights: usize },

    #[error("parents[{index}] = {parent} is not an index below {index}")]
    BadParent { index: usize, parent: i32 },
}

/// Rejected node index on the query side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("node {node} out of range for a tree of {len} nodes")]
    NodeOutOfRange { node: usize, len: usize },
}

/// Path-aggregation queries over a static rooted tree of weighted nodes.
///
/// The tree arrives as a parent array (root at index 0, every other node's
/// parent strictly below it) and a weight per node. After the O(n) build,
/// [`query`](Self::query) folds the monoid over every node on the path
/// between two nodes, endpoints and lowest common ancestor included, in
/// O(log² n): the heavy-path decomposition splits the path into O(log n)
/// contiguous ranges of the linearization, each answered by a segment tree.
///
/// Queries take `&self` and touch no shared state, so a built tree can be
/// read from many threads at once.
#[derive(Clone)]
pub struct PathQueryTree<G: CommutativeMonoid> {
    hld: Hld,
    seg: SegmentTree<G>,
}

impl<G: CommutativeMonoid + std::fmt::Debug> std::fmt::Debug for PathQueryTree<G>
where
    G::Elem: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathQueryTree")
            .field("hld", &self.hld)
            .field("seg", &self.seg)
            .finish()
    }
}

impl<G: CommutativeMonoid> PathQueryTree<G> {
    /// Validates the parent array and builds the decomposition and its range
    /// index. `parents[0]` is ignored (`-1` by convention); every other entry
    /// must point strictly below its own index.
    ///
    /// O(n)
    pub fn new(group: G, parents: &[i32], weights: Vec<G::Elem>) -> Result<Self, TreeError> {
        if parents.is_empty() {
            return Err(TreeError::Empty);
        }
        if parents.len() != weights.len() {
            return Err(TreeError::LengthMismatch {
                parents: parents.len(),
                weights: weights.len(),
            });
        }

        let n = parents.len();
        let mut par = vec![0usize; n];
        for (i, &p) in parents.iter().enumerate().skip(1) {
            if p < 0 || p as usize >= i {
                return Err(TreeError::BadParent {
                    index: i,
                    parent: p,
                });
            }
            par[i] = p as usize;
        }

        let hld = Hld::from_parents(&par);

        let mut by_pos: Vec<G::Elem> = (0..n).map(|_| group.id()).collect();
        for (u, w) in weights.into_iter().enumerate() {
            by_pos[hld.pos(u)] = w;
        }
        let seg = SegmentTree::from_iter(group, n, by_pos);

        Ok(Self { hld, seg })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hld.len()
    }

    #[inline]
    fn check(&self, node: usize) -> Result<(), QueryError> {
        if node < self.len() {
            Ok(())
        } else {
            Err(QueryError::NodeOutOfRange {
                node,
                len: self.len(),
            })
        }
    }

    /// Aggregate over the l-r path, both endpoints inclusive. Symmetric in
    /// its arguments; `query(l, l)` is node `l`'s weight alone.
    ///
    /// O(log² n)
    pub fn query(&self, l: usize, r: usize) -> Result<G::Elem, QueryError> {
        self.check(l)?;
        self.check(r)?;

        let group = self.seg.group();
        let mut acc = group.id();
        self.hld.for_each_path(l, r, |a, b| {
            acc = group.add(acc.clone(), self.seg.sum(a, b));
        });
        Ok(acc)
    }

    /// O(log n)
    pub fn lca(&self, l: usize, r: usize) -> Result<usize, QueryError> {
        self.check(l)?;
        self.check(r)?;
        Ok(self.hld.lca(l, r))
    }

    /// Reassigns one node's weight. The parent relation itself never changes
    /// after the build.
    ///
    /// O(log n)
    pub fn set_weight(&mut self, node: usize, weight: G::Elem) -> Result<(), QueryError> {
        self.check(node)?;
        self.seg.update(self.hld.pos(node), weight);
        Ok(())
    }

    /// O(1)
    pub fn weight(&self, node: usize) -> Result<&G::Elem, QueryError> {
        self.check(node)?;
        Ok(self.seg.get(self.hld.pos(node)))
    }
}

/// Path sums in `i64`: `i32` parent and weight arrays in, 64-bit totals out.
pub type PathSumTree = PathQueryTree<NumAdditiveGroups<i64>>;

impl PathSumTree {
    pub fn from_arrays(parents: &[i32], weights: &[i32]) -> Result<Self, TreeError> {
        Self::new(
            NumAdditiveGroups::new(),
            parents,
            weights.iter().map(|&w| w as i64).collect(),
        )
    }
}
