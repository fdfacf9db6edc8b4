//! Property-based tests for the element algebras.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Element, Matrix, Permutation};

    // Strategy for permutations of 1..=6
    fn small_perm() -> impl Strategy<Value = Permutation> {
        Just((1u32..=6).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|images| Permutation::from_arrangement(&images).unwrap())
    }

    // Strategy for square integer matrices of a fixed size
    fn square_matrix(n: usize) -> impl Strategy<Value = Matrix<i64>> {
        proptest::collection::vec(proptest::collection::vec(-5i64..5i64, n), n)
            .prop_map(|rows| Matrix::from_rows(rows).unwrap())
    }

    proptest! {
        // Permutation group laws

        #[test]
        fn perm_sign_homomorphism(p in small_perm(), q in small_perm()) {
            prop_assert_eq!((&p * &q).sign(), p.sign() * q.sign());
        }

        #[test]
        fn perm_compose_associative(p in small_perm(), q in small_perm(), r in small_perm()) {
            prop_assert_eq!((&p * &q) * r.clone(), p.clone() * (&q * &r));
        }

        #[test]
        fn perm_inverse(p in small_perm()) {
            prop_assert!((&p * &p.inverse()).is_identity());
            prop_assert!((&p.inverse() * &p).is_identity());
        }

        #[test]
        fn perm_cycles_rebuild(p in small_perm()) {
            prop_assert_eq!(Permutation::from_cycles(&p.cycles()), p);
        }

        #[test]
        fn perm_order_is_exact(p in small_perm()) {
            let mut power = p.clone();
            for _ in 1..p.order() {
                prop_assert!(!power.is_identity());
                power = &power * &p;
            }
            prop_assert!(power.is_identity());
        }

        // Determinant

        #[test]
        fn det_multiplicative_2x2(a in square_matrix(2), b in square_matrix(2)) {
            let ab = a.checked_mul(&b).unwrap();
            prop_assert_eq!(ab.det(), Some(a.det().unwrap() * b.det().unwrap()));
        }

        #[test]
        fn det_multiplicative_3x3(a in square_matrix(3), b in square_matrix(3)) {
            let ab = a.checked_mul(&b).unwrap();
            prop_assert_eq!(ab.det(), Some(a.det().unwrap() * b.det().unwrap()));
        }

        #[test]
        fn det_transpose_invariant(a in square_matrix(3)) {
            prop_assert_eq!(a.transpose().det(), a.det());
        }

        #[test]
        fn element_matrix_mul_associative(
            a in square_matrix(2),
            b in square_matrix(2),
            c in square_matrix(2)
        ) {
            let wrap = |m: &Matrix<i64>| Element::Matrix(m.map(|&v| Element::Int(v)));
            let (a, b, c) = (wrap(&a), wrap(&b), wrap(&c));
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }
    }
}
