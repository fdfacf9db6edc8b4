//! Groups generated by one or more elements.

use itertools::Itertools;
use rustc_hash::FxHashSet;

use finigroup_elements::GroupElement;
use finigroup_ops::Operation;

use crate::group::FiniteGroup;

/// Returns `g, g², g³, …` up to, not including, the first repeated power.
fn orbit<E: GroupElement>(generator: &E, op: &Operation<E>) -> Vec<E> {
    let mut seen = FxHashSet::default();
    seen.insert(generator.clone());
    let mut powers = vec![generator.clone()];
    let mut term = op.apply(generator, generator);
    while seen.insert(term.clone()) {
        powers.push(term.clone());
        term = op.apply(&term, generator);
    }
    powers
}

impl<E: GroupElement> FiniteGroup<E> {
    /// Builds the cyclic group generated by `generator`: its distinct powers
    /// in order of first appearance.
    ///
    /// The result is named `<g>` and marked abelian.
    ///
    /// # Example
    ///
    /// ```
    /// use finigroup_groups::FiniteGroup;
    /// use finigroup_ops::Operation;
    ///
    /// let g = FiniteGroup::generated(2_i64, Operation::add_mod(6, 0));
    /// assert_eq!(g.elements(), &[2, 4, 0]);
    /// assert_eq!(g.name(), Some("<2>"));
    /// ```
    pub fn generated(generator: E, op: Operation<E>) -> Self {
        let name = format!("<{generator}>");
        let elements = orbit(&generator, &op);
        Self::new(elements, op)
            .with_name(name)
            .with_abelian_hint(true)
    }

    /// Builds the group generated by several elements.
    ///
    /// Starts from the orbit of each generator, then multiplies every element
    /// on the right by every generator until nothing new appears. The result
    /// is named `<g1,g2,…>`. No generators give the empty group.
    pub fn generated_by(generators: &[E], op: Operation<E>) -> Self {
        let name = format!("<{}>", generators.iter().join(","));

        let mut seen = FxHashSet::default();
        let mut elements = Vec::new();
        for generator in generators {
            for power in orbit(generator, &op) {
                if seen.insert(power.clone()) {
                    elements.push(power);
                }
            }
        }

        let mut next = 0;
        while next < elements.len() {
            let current = elements[next].clone();
            for generator in generators {
                let product = op.apply(&current, generator);
                if seen.insert(product.clone()) {
                    elements.push(product);
                }
            }
            next += 1;
        }

        Self::new(elements, op).with_name(name)
    }
}
