const NONE: usize = usize::MAX;

/// Heavy-path decomposition of a rooted tree.
///
/// Built from a parent array where every non-root node's parent has a lower
/// index, so sizes and depths fall out of a single reverse/forward sweep and
/// no recursion is needed. Positions (`pos`) are contiguous and increasing
/// along every heavy chain, which lets a chain segment map to one array range.
#[derive(Clone, Debug)]
pub struct Hld {
    parent: Vec<usize>,
    depth: Vec<usize>,
    head: Vec<usize>,
    pos: Vec<usize>,
}

impl Hld {
    /// `parents[i] < i` must hold for every `i >= 1`; `parents[0]` is ignored.
    ///
    /// O(n)
    pub fn from_parents(parents: &[usize]) -> Self {
        let n = parents.len();
        debug_assert!(n >= 1);
        debug_assert!((1..n).all(|i| parents[i] < i));

        let mut size = vec![1usize; n];
        for i in (1..n).rev() {
            size[parents[i]] += size[i];
        }

        let mut heavy = vec![NONE; n];
        for i in 1..n {
            let p = parents[i];
            if heavy[p] == NONE || size[heavy[p]] < size[i] {
                heavy[p] = i;
            }
        }

        let mut depth = vec![0; n];
        for i in 1..n {
            depth[i] = depth[parents[i]] + 1;
        }

        // children in compressed sparse row form
        let mut child_start = vec![0usize; n + 1];
        for i in 1..n {
            child_start[parents[i] + 1] += 1;
        }
        for u in 0..n {
            child_start[u + 1] += child_start[u];
        }
        let mut child = vec![0usize; n - 1];
        let mut cursor = child_start.clone();
        for i in 1..n {
            child[cursor[parents[i]]] = i;
            cursor[parents[i]] += 1;
        }

        // walk each chain top-down, assigning positions; light children seed
        // new chains
        let mut head = vec![0usize; n];
        let mut pos = vec![0usize; n];
        let mut order = 0;
        let mut stack = vec![0usize];
        while let Some(top) = stack.pop() {
            let mut u = top;
            loop {
                head[u] = top;
                pos[u] = order;
                order += 1;
                for &c in &child[child_start[u]..child_start[u + 1]] {
                    if c != heavy[u] {
                        stack.push(c);
                    }
                }
                if heavy[u] == NONE {
                    break;
                }
                u = heavy[u];
            }
        }

        let mut parent = vec![NONE; n];
        for i in 1..n {
            parent[i] = parents[i];
        }

        Self {
            parent,
            depth,
            head,
            pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Linearization index of `u`.
    #[inline]
    pub fn pos(&self, u: usize) -> usize {
        self.pos[u]
    }

    /// Calls `visitor(a, b)` with half-open position ranges `[a, b)` whose
    /// disjoint union is exactly the set of nodes on the u-v path.
    ///
    /// O(log n) ranges
    pub fn for_each_path<F: FnMut(usize, usize)>(&self, mut u: usize, mut v: usize, mut visitor: F) {
        debug_assert!(u < self.len() && v < self.len());
        while self.head[u] != self.head[v] {
            if self.depth[self.head[u]] < self.depth[self.head[v]] {
                std::mem::swap(&mut u, &mut v);
            }
            let top = self.head[u];
            visitor(self.pos[top], self.pos[u] + 1);
            u = self.parent[top];
        }
        if self.pos[u] > self.pos[v] {
            std::mem::swap(&mut u, &mut v);
        }
        visitor(self.pos[u], self.pos[v] + 1);
    }

    /// O(log n)
    pub fn lca(&self, mut u: usize, mut v: usize) -> usize {
        debug_assert!(u < self.len() && v < self.len());
        while self.head[u] != self.head[v] {
            if self.depth[self.head[u]] < self.depth[self.head[v]] {
                std::mem::swap(&mut u, &mut v);
            }
            u = self.parent[self.head[u]];
        }
        if self.pos[u] > self.pos[v] {
            v
        } else {
            u
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> {1, 2}, 1 -> {3, 4}
    const BRANCHY: [usize; 5] = [0, 0, 0, 1, 1];

    fn path_nodes(hld: &Hld, u: usize, v: usize) -> Vec<usize> {
        let mut inv = vec![0; hld.len()];
        for i in 0..hld.len() {
            inv[hld.pos(i)] = i;
        }
        let mut nodes = vec![];
        hld.for_each_path(u, v, |a, b| nodes.extend(inv[a..b].iter().cloned()));
        nodes.sort_unstable();
        nodes
    }

    #[test]
    fn lca_branchy() {
        let hld = Hld::from_parents(&BRANCHY);
        assert_eq!(hld.lca(3, 4), 1);
        assert_eq!(hld.lca(2, 3), 0);
        assert_eq!(hld.lca(1, 3), 1);
        assert_eq!(hld.lca(0, 4), 0);
        assert_eq!(hld.lca(2, 2), 2);
    }

    #[test]
    fn lca_line() {
        let parents: Vec<usize> = (0..6usize).map(|i| i.saturating_sub(1)).collect();
        let hld = Hld::from_parents(&parents);
        assert_eq!(hld.lca(5, 2), 2);
        assert_eq!(hld.lca(0, 5), 0);
    }

    #[test]
    fn path_ranges_cover_each_node_once() {
        let hld = Hld::from_parents(&BRANCHY);
        assert_eq!(path_nodes(&hld, 3, 4), vec![1, 3, 4]);
        assert_eq!(path_nodes(&hld, 2, 3), vec![0, 1, 2, 3]);
        assert_eq!(path_nodes(&hld, 4, 4), vec![4]);
        assert_eq!(path_nodes(&hld, 0, 2), vec![0, 2]);
    }

    #[test]
    fn positions_are_a_permutation() {
        let hld = Hld::from_parents(&BRANCHY);
        let mut seen = vec![false; hld.len()];
        for u in 0..hld.len() {
            assert!(!seen[hld.pos(u)]);
            seen[hld.pos(u)] = true;
        }
    }

    #[test]
    fn single_node() {
        let hld = Hld::from_parents(&[0]);
        assert_eq!(hld.len(), 1);
        assert_eq!(hld.lca(0, 0), 0);
        assert_eq!(path_nodes(&hld, 0, 0), vec![0]);
    }
}
