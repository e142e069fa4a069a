//! Unordered endpoint pairs.

use std::collections::HashSet;

use mg_core::Label;

/// The two vertex slots of an edge.
///
/// Behaves as a 2-element multiset: `(a, b)` and `(b, a)` compare equal, and a
/// self-loop is the same label stored twice.
#[derive(Debug, Clone, Eq)]
pub struct Endpoints<L>([L; 2]);

impl<L> Endpoints<L> {
    /// Pair two vertex labels.
    pub fn new(a: L, b: L) -> Self {
        Self([a, b])
    }

    /// First slot, in the order the pair was supplied.
    pub fn first(&self) -> &L {
        &self.0[0]
    }

    /// Second slot, in the order the pair was supplied.
    pub fn second(&self) -> &L {
        &self.0[1]
    }

    /// Both slots, loops included twice.
    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.0.iter()
    }

    pub fn into_array(self) -> [L; 2] {
        self.0
    }
}

impl<L: Label> Endpoints<L> {
    /// True when both slots hold the same vertex.
    pub fn is_loop(&self) -> bool {
        self.0[0] == self.0[1]
    }

    pub fn contains(&self, vertex: &L) -> bool {
        self.0[0] == *vertex || self.0[1] == *vertex
    }

    /// How many slots `vertex` occupies (0, 1 or 2).
    pub fn multiplicity(&self, vertex: &L) -> usize {
        self.0.iter().filter(|v| *v == vertex).count()
    }

    /// The opposite slot to `vertex`; a loop returns the vertex itself.
    pub fn other(&self, vertex: &L) -> Option<&L> {
        if self.0[0] == *vertex {
            Some(&self.0[1])
        } else if self.0[1] == *vertex {
            Some(&self.0[0])
        } else {
            None
        }
    }

    /// Distinct vertices: one element for a loop, two otherwise.
    pub fn to_set(&self) -> HashSet<L> {
        self.0.iter().cloned().collect()
    }
}

impl<L: PartialEq> PartialEq for Endpoints<L> {
    fn eq(&self, other: &Self) -> bool {
        let [a, b] = &self.0;
        let [c, d] = &other.0;
        (a == c && b == d) || (a == d && b == c)
    }
}

impl<L> From<(L, L)> for Endpoints<L> {
    fn from((a, b): (L, L)) -> Self {
        Self::new(a, b)
    }
}

impl<L> From<[L; 2]> for Endpoints<L> {
    fn from(pair: [L; 2]) -> Self {
        Self(pair)
    }
}

/// Fails with the original vector unless it holds exactly two labels.
impl<L> TryFrom<Vec<L>> for Endpoints<L> {
    type Error = Vec<L>;

    fn try_from(labels: Vec<L>) -> Result<Self, Self::Error> {
        <[L; 2]>::try_from(labels).map(Self)
    }
}

impl<'a, L> IntoIterator for &'a Endpoints<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
