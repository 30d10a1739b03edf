use crate::groups::CommutativeMonoid;

#[derive(Clone, Debug)]
pub struct SegmentTree<G: CommutativeMonoid> {
    group: G,
    len: usize,
    data: Vec<G::Elem>,
}

impl<G: CommutativeMonoid> SegmentTree<G> {
    /// O(n)
    pub fn from_iter<Iter: IntoIterator<Item = G::Elem>>(group: G, len: usize, iter: Iter) -> Self {
        let mut data = Vec::with_capacity(2 * len);
        data.resize_with(len, || group.id());
        data.extend(iter.into_iter().take(len));
        data.resize_with(2 * len, || group.id());

        for i in (1..len).rev() {
            let l = 2 * i;
            let r = l + 1;
            data[i] = group.add(data[l].clone(), data[r].clone());
        }

        Self { group, len, data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Aggregate over the half-open range `[l, r)`.
    ///
    /// O(log n)
    pub fn sum(&self, mut l: usize, mut r: usize) -> G::Elem {
        debug_assert!(l <= r && r <= self.len);
        l += self.len;
        r += self.len;

        let mut s = self.group.id();
        while l < r {
            if l & 1 != 0 {
                s = self.group.add(s, self.data[l].clone());
                l += 1;
            }
            if r & 1 != 0 {
                r -= 1;
                s = self.group.add(s, self.data[r].clone());
            }
            l /= 2;
            r /= 2;
        }

        s
    }

    /// O(log n)
    pub fn update(&mut self, mut i: usize, x: G::Elem) {
        debug_assert!(i < self.len);
        i += self.len;
        self.data[i] = x;

        while i > 1 {
            i /= 2;

            let l = 2 * i;
            let r = l + 1;
            self.data[i] = self.group.add(self.data[l].clone(), self.data[r].clone());
        }
    }

    /// O(1)
    pub fn get(&self, i: usize) -> &G::Elem {
        &self.data[self.len + i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::NumAdditiveGroups;

    fn build(values: &[i64]) -> SegmentTree<NumAdditiveGroups<i64>> {
        SegmentTree::from_iter(
            NumAdditiveGroups::new(),
            values.len(),
            values.iter().cloned(),
        )
    }

    #[test]
    fn sums_match_naive() {
        let values = [3i64, -1, 4, 1, -5, 9, 2, 6, 5];
        let st = build(&values);

        for l in 0..=values.len() {
            for r in l..=values.len() {
                assert_eq!(st.sum(l, r), values[l..r].iter().sum::<i64>());
            }
        }
    }

    #[test]
    fn update_rebuilds_sums() {
        let mut values = vec![1i64; 7];
        let mut st = build(&values);

        st.update(3, 10);
        values[3] = 10;
        st.update(6, -2);
        values[6] = -2;

        assert_eq!(*st.get(3), 10);
        for l in 0..=values.len() {
            for r in l..=values.len() {
                assert_eq!(st.sum(l, r), values[l..r].iter().sum::<i64>());
            }
        }
    }

    #[test]
    fn single_leaf() {
        let st = build(&[42]);
        assert_eq!(st.len(), 1);
        assert_eq!(st.sum(0, 1), 42);
        assert_eq!(st.sum(0, 0), 0);
    }
}
