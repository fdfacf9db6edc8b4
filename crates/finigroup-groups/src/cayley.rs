//! Cayley (multiplication) tables.

use rustc_hash::FxHashMap;

use finigroup_elements::GroupElement;

/// The full operation table of a group over its canonical element order.
///
/// Entry `(a, b)` holds `op(a, b)`.
#[derive(Clone, Debug)]
pub struct CayleyTable<E> {
    elements: Vec<E>,
    index: FxHashMap<E, usize>,
    /// Row-major, `elements.len()` squared entries.
    entries: Vec<E>,
}

impl<E: GroupElement> CayleyTable<E> {
    /// Builds the table of `op` over `elements`.
    ///
    /// With `symmetric` set only the upper triangle is evaluated and mirrored,
    /// which is valid for commutative operations only.
    pub(crate) fn build(elements: &[E], symmetric: bool, op: impl Fn(&E, &E) -> E) -> Self {
        let n = elements.len();
        let mut entries: Vec<Option<E>> = vec![None; n * n];
        for (i, a) in elements.iter().enumerate() {
            let start = if symmetric { i } else { 0 };
            for (j, b) in elements.iter().enumerate().skip(start) {
                let value = op(a, b);
                if symmetric && i != j {
                    entries[j * n + i] = Some(value.clone());
                }
                entries[i * n + j] = Some(value);
            }
        }

        Self {
            elements: elements.to_vec(),
            index: elements
                .iter()
                .enumerate()
                .map(|(i, e)| (e.clone(), i))
                .collect(),
            entries: entries.into_iter().flatten().collect(),
        }
    }

    /// Returns `op(a, b)`, or `None` if either operand is not in the table.
    #[must_use]
    pub fn get(&self, a: &E, b: &E) -> Option<&E> {
        let i = self.index.get(a)?;
        let j = self.index.get(b)?;
        self.entries.get(i * self.elements.len() + j)
    }

    /// Returns the row of `a`: `op(a, b)` for every `b` in canonical order.
    #[must_use]
    pub fn row(&self, a: &E) -> Option<&[E]> {
        let n = self.elements.len();
        let i = self.index.get(a)?;
        self.entries.get(i * n..(i + 1) * n)
    }

    /// Returns the row and column labels in canonical order.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true for the table of the empty group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over `(a, b, op(a, b))` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &E, &E)> + '_ {
        let n = self.elements.len();
        self.entries
            .iter()
            .enumerate()
            .map(move |(k, value)| (&self.elements[k / n], &self.elements[k % n], value))
    }
}
