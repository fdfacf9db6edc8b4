//! Property-based tests for group structure.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use finigroup_elements::{Element, Permutation};
    use finigroup_ops::Operation;

    use crate::families::{
        additive, alternating, dihedral, general_linear, matrices, symmetric, units,
    };
    use crate::FiniteGroup;

    // Strategy for permutations of 1..=4
    fn perm4() -> impl Strategy<Value = Permutation> {
        Just((1u32..=4).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|images| Permutation::from_arrangement(&images).unwrap())
    }

    // Permutation and matrix groups small enough for the cubic checks
    fn small_group(kind: u8, n: u32) -> FiniteGroup<Element> {
        match kind {
            0 => dihedral(n),
            1 => alternating(n.min(4)),
            // over {0, 1} a non-zero raw determinant is a unit mod 2
            2 => general_linear(2, &additive(2), Some(Operation::matrix_mod(2, 0))),
            _ => matrices(
                2,
                &additive(2),
                Some(Operation::matrix_elementwise(&Operation::add_mod(2, 0), 0)),
            ),
        }
    }

    fn assert_partition(group: &FiniteGroup<Element>, cosets: &[Vec<Element>], block: usize) {
        let mut seen = FxHashSet::default();
        for coset in cosets {
            assert_eq!(coset.len(), block);
            for element in coset {
                assert!(group.contains(element));
                assert!(seen.insert(element.clone()), "cosets overlap at {element}");
            }
        }
        assert_eq!(seen.len(), group.len());
    }

    proptest! {
        // Group laws on the named families

        #[test]
        fn identity_law(n in 1u32..16) {
            let g = additive(n);
            let e = g.identity().unwrap().clone();
            for i in g.elements() {
                prop_assert_eq!(&g.operation().apply(&e, i), i);
                prop_assert_eq!(&g.operation().apply(i, &e), i);
            }
        }

        #[test]
        fn permutation_and_matrix_group_laws(kind in 0u8..4, n in 1u32..9) {
            let g = small_group(kind, n);
            prop_assert!(g.is_closed());
            prop_assert!(g.is_associative());
            let e = g.identity().unwrap().clone();
            for i in g.elements() {
                prop_assert_eq!(&g.operation().apply(&e, i), i);
                prop_assert_eq!(&g.operation().apply(i, &e), i);
                prop_assert!(g.inverse(i).unwrap().is_some());
            }
        }

        #[test]
        fn units_form_a_group(n in 2u32..24) {
            let g = units(n);
            prop_assert!(g.is_closed());
            prop_assert!(g.is_associative());
            for i in g.elements() {
                prop_assert!(g.inverse(i).unwrap().is_some());
            }
        }

        #[test]
        fn lagrange(n in 2u32..60) {
            let g = units(n);
            for order in g.orders().unwrap().values() {
                let order = order.unwrap();
                prop_assert_eq!(g.len() % order, 0);
            }
        }

        #[test]
        fn cyclic_implies_abelian(n in 2u32..40) {
            let elements = units(n).elements().to_vec();
            let op = Operation::mult_mod(i64::from(n), 0);
            let probe = FiniteGroup::new(elements.clone(), op.clone());
            let checked = FiniteGroup::new(elements, op);
            if probe.cyclic().unwrap().is_cyclic {
                prop_assert!(checked.abelian());
            }
        }

        #[test]
        fn generated_by_one_is_z(n in 2u32..30) {
            let g = FiniteGroup::generated(Element::Int(1), Operation::add_mod(i64::from(n), 0));
            prop_assert_eq!(g, additive(n));
        }

        // Cosets

        #[test]
        fn cyclic_cosets_partition(n in 1u32..24, k in 1usize..24) {
            let g = additive(n);
            let h = g.subgroup(k).unwrap();
            if !h.is_null() {
                prop_assert_eq!(g.len() % h.len(), 0);
                assert_partition(&g, &g.left_cosets(&h).unwrap(), h.len());
                assert_partition(&g, &g.right_cosets(&h).unwrap(), h.len());
            }
        }

        #[test]
        fn permutation_cosets_partition(p in perm4()) {
            let s4 = symmetric(4);
            let h = FiniteGroup::generated(Element::Perm(p), s4.operation().clone());
            let left = s4.left_cosets(&h).unwrap();
            let right = s4.right_cosets(&h).unwrap();
            prop_assert_eq!(left.len() * h.len(), 24);
            assert_partition(&s4, &left, h.len());
            assert_partition(&s4, &right, h.len());
        }

        #[test]
        fn generated_subgroups_are_subgroups(p in perm4(), q in perm4()) {
            let s4 = symmetric(4);
            let h = FiniteGroup::generated_by(
                &[Element::Perm(p), Element::Perm(q)],
                s4.operation().clone(),
            );
            prop_assert!(h <= s4);
            prop_assert!(h.is_closed());
            prop_assert_eq!(24 % h.len(), 0);
        }

        #[test]
        fn centralizer_contains_center(n in 3u32..7) {
            let d = dihedral(n);
            let center = d.center().to_vec();
            for g in d.elements() {
                let centralizer = d.centralizer(std::slice::from_ref(g));
                prop_assert!(center.iter().all(|z| centralizer.contains(z)));
            }
        }

        #[test]
        fn alternating_has_index_two(n in 2u32..6) {
            let s = symmetric(n);
            let a = alternating(n);
            prop_assert!(a <= s);
            prop_assert_eq!(s.left_cosets(&a).unwrap().len(), 2);
        }
    }
}
