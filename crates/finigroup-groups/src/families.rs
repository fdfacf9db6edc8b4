//! Named group families over [`Element`] values.
//!
//! | Function | Group | Operation |
//! |---|---|---|
//! | [`additive`] | Z(n), residues under addition | `addmod{n}` |
//! | [`units`] | U(n), residues coprime to n | `multmod{n}` |
//! | [`nonzero_residues`] | Zx(n), all non-zero residues | `multmod{n}` |
//! | [`symmetric`] | S(n) | `mult` |
//! | [`alternating`] | A(n), even permutations | `mult` |
//! | [`dihedral`] | D(n), symmetries of the regular n-gon | `mult` |
//! | [`matrices`] | M(s, base), all s×s matrices | `mult` by default |
//! | [`general_linear`] | GL(s, base), non-zero determinant | `mult` by default |
//! | [`special_linear`] | SL(s, base), determinant one | `mult` by default |
//! | [`affine`] | Aff(base), `[[a, b], [0, 1]]` with `a != 0` | `mult` by default |
//!
//! Determinants are taken over the raw entries, not under the group
//! operation.

use itertools::Itertools;
use num_integer::Integer;

use finigroup_elements::{Element, Matrix, Permutation};
use finigroup_ops::Operation;

use crate::group::FiniteGroup;

/// The set of entries a matrix family is built over.
#[derive(Clone, Copy, Debug)]
pub enum BaseSet<'a> {
    /// The elements of a group, in insertion order.
    Group(&'a FiniteGroup<Element>),
    /// A plain list of elements.
    Elements(&'a [Element]),
}

impl<'a> BaseSet<'a> {
    /// Returns the entries.
    #[must_use]
    pub fn elements(&self) -> &'a [Element] {
        match *self {
            BaseSet::Group(group) => group.elements(),
            BaseSet::Elements(elements) => elements,
        }
    }

    /// Returns the group's label, or the element listing.
    #[must_use]
    pub fn label(&self) -> String {
        match *self {
            BaseSet::Group(group) => group.label(),
            BaseSet::Elements(elements) => format!("[{}]", elements.iter().join(", ")),
        }
    }
}

impl<'a> From<&'a FiniteGroup<Element>> for BaseSet<'a> {
    fn from(group: &'a FiniteGroup<Element>) -> Self {
        BaseSet::Group(group)
    }
}

impl<'a> From<&'a [Element]> for BaseSet<'a> {
    fn from(elements: &'a [Element]) -> Self {
        BaseSet::Elements(elements)
    }
}

impl<'a> From<&'a Vec<Element>> for BaseSet<'a> {
    fn from(elements: &'a Vec<Element>) -> Self {
        BaseSet::Elements(elements)
    }
}

impl<'a, const N: usize> From<&'a [Element; N]> for BaseSet<'a> {
    fn from(elements: &'a [Element; N]) -> Self {
        BaseSet::Elements(elements)
    }
}

// ----------------------------------------------------------------------
// Residues
// ----------------------------------------------------------------------

/// Z(n): `0..n` under addition mod n.
#[must_use]
pub fn additive(n: u32) -> FiniteGroup<Element> {
    let modulus = i64::from(n);
    let group = FiniteGroup::new((0..modulus).map(Element::Int), Operation::add_mod(modulus, 0))
        .with_name(format!("Z({n})"))
        .with_abelian_hint(true);
    if n > 0 {
        group.with_identity(Element::Int(0))
    } else {
        group
    }
}

/// U(n): the residues coprime to n under multiplication mod n.
///
/// U(1) is `[1]`.
#[must_use]
pub fn units(n: u32) -> FiniteGroup<Element> {
    let modulus = i64::from(n);
    let elements: Vec<Element> = if n == 1 {
        vec![Element::Int(1)]
    } else {
        (0..modulus)
            .filter(|i| i.gcd(&modulus) == 1)
            .map(Element::Int)
            .collect()
    };
    let group = FiniteGroup::new(elements, Operation::mult_mod(modulus, 0))
        .with_name(format!("U({n})"))
        .with_abelian_hint(true);
    if n > 0 {
        group.with_identity(Element::Int(1))
    } else {
        group
    }
}

/// Zx(n): `1..n` under multiplication mod n.
///
/// This is only a group when n is prime.
#[must_use]
pub fn nonzero_residues(n: u32) -> FiniteGroup<Element> {
    let modulus = i64::from(n);
    let group = FiniteGroup::new((1..modulus).map(Element::Int), Operation::mult_mod(modulus, 0))
        .with_name(format!("Zx({n})"))
        .with_abelian_hint(true);
    if n > 1 {
        group.with_identity(Element::Int(1))
    } else {
        group
    }
}

// ----------------------------------------------------------------------
// Permutations
// ----------------------------------------------------------------------

/// A group of permutations under composition, named `mult`.
///
/// The operation caches up to `len²` products.
pub fn permutation_group(perms: impl IntoIterator<Item = Permutation>) -> FiniteGroup<Element> {
    let elements: Vec<Element> = perms.into_iter().map(Element::Perm).collect();
    let capacity = elements.len().pow(2);
    FiniteGroup::new(elements, Operation::multiplication(capacity))
        .with_identity(Element::Perm(Permutation::identity()))
}

/// The permutation group generated by `generators` under composition.
#[must_use]
pub fn permutation_generated(generators: &[Permutation]) -> FiniteGroup<Element> {
    let op = Operation::multiplication(0);
    match generators {
        [single] => FiniteGroup::generated(Element::Perm(single.clone()), op),
        _ => {
            let elements: Vec<Element> = generators.iter().cloned().map(Element::Perm).collect();
            FiniteGroup::generated_by(&elements, op)
        }
    }
}

/// S(n): every permutation of `1..=n`.
#[must_use]
pub fn symmetric(n: u32) -> FiniteGroup<Element> {
    permutation_group(Permutation::all(n))
        .with_name(format!("S({n})"))
        .with_abelian_hint(n <= 2)
}

/// A(n): the even permutations of `1..=n`.
#[must_use]
pub fn alternating(n: u32) -> FiniteGroup<Element> {
    permutation_group(Permutation::all(n).filter(|p| p.sign() > 0))
        .with_name(format!("A({n})"))
        .with_abelian_hint(n <= 3)
}

/// D(n): the n rotations of the regular n-gon and, for n > 2, its n
/// reflections.
///
/// D(0) is empty.
#[must_use]
pub fn dihedral(n: u32) -> FiniteGroup<Element> {
    let labels: Vec<u32> = (1..=n).collect();
    let rotation = Permutation::from_cycle(&labels);
    let rotations: Vec<Permutation> =
        std::iter::successors(Some(Permutation::identity()), |r| Some(r.compose(&rotation)))
            .take(labels.len())
            .collect();

    let mut perms = rotations.clone();
    if n > 2 {
        // Fixes 1 and swaps k with n + 2 - k.
        let flips: Vec<Vec<u32>> = (2..=n)
            .filter(|&k| k < n + 2 - k)
            .map(|k| vec![k, n + 2 - k])
            .collect();
        let reflection = Permutation::from_cycles(&flips);
        perms.extend(rotations.iter().map(|r| reflection.compose(r)));
    }

    let identity = perms.first().cloned().map(Element::Perm);
    let capacity = perms.len().pow(2);

    let group = FiniteGroup::new(
        perms.into_iter().map(Element::Perm),
        Operation::multiplication(capacity),
    )
    .with_name(format!("D({n})"));
    match identity {
        Some(identity) => group.with_identity(identity).with_abelian_hint(n <= 2),
        None => group,
    }
}

// ----------------------------------------------------------------------
// Matrices
// ----------------------------------------------------------------------

/// A group of matrices under `op`.
pub fn matrix_group(
    matrices: impl IntoIterator<Item = Matrix<Element>>,
    op: Operation<Element>,
) -> FiniteGroup<Element> {
    FiniteGroup::new(matrices.into_iter().map(Element::Matrix), op)
}

fn matrix_family(
    family: &str,
    size: usize,
    base: BaseSet<'_>,
    op: Option<Operation<Element>>,
    keep: impl Fn(&Matrix<Element>) -> bool,
) -> FiniteGroup<Element> {
    let entries = base.elements();
    let matrices: Vec<Element> = if size == 0 {
        Vec::new()
    } else {
        std::iter::repeat(entries)
            .take(size * size)
            .map(|entries| entries.iter().cloned())
            .multi_cartesian_product()
            .map(|cells| Matrix::from_fn(size, size, |r, c| cells[r * size + c].clone()))
            .filter(|m| keep(m))
            .map(Element::Matrix)
            .collect()
    };
    let op = op.unwrap_or_else(|| Operation::multiplication(matrices.len().pow(2)));
    FiniteGroup::new(matrices, op).with_name(format!("{family}({size}, {})", base.label()))
}

/// M(s, base): every s×s matrix with entries from `base`.
///
/// Without `op` the family uses `mult`, caching up to `len²` products.
pub fn matrices<'a>(
    size: usize,
    base: impl Into<BaseSet<'a>>,
    op: Option<Operation<Element>>,
) -> FiniteGroup<Element> {
    matrix_family("M", size, base.into(), op, |_| true)
}

/// GL(s, base): the s×s matrices over `base` with non-zero determinant.
pub fn general_linear<'a>(
    size: usize,
    base: impl Into<BaseSet<'a>>,
    op: Option<Operation<Element>>,
) -> FiniteGroup<Element> {
    matrix_family("GL", size, base.into(), op, |m| {
        m.det().is_some_and(|d| !d.is_zero())
    })
}

/// SL(s, base): the s×s matrices over `base` with determinant one.
pub fn special_linear<'a>(
    size: usize,
    base: impl Into<BaseSet<'a>>,
    op: Option<Operation<Element>>,
) -> FiniteGroup<Element> {
    matrix_family("SL", size, base.into(), op, |m| {
        m.det() == Some(Element::Int(1))
    })
}

/// Aff(base): the affine maps `x -> ax + b` as matrices `[[a, b], [0, 1]]`
/// with `a` non-zero.
pub fn affine<'a>(base: impl Into<BaseSet<'a>>, op: Option<Operation<Element>>) -> FiniteGroup<Element> {
    let base = base.into();
    let entries = base.elements();
    let matrices: Vec<Element> = entries
        .iter()
        .filter(|a| !a.is_zero())
        .flat_map(|a| {
            entries.iter().map(move |b| {
                Element::Matrix(Matrix::from_fn(2, 2, |r, c| match (r, c) {
                    (0, 0) => a.clone(),
                    (0, 1) => b.clone(),
                    (1, 0) => Element::Int(0),
                    _ => Element::Int(1),
                }))
            })
        })
        .collect();
    let op = op.unwrap_or_else(|| Operation::multiplication(matrices.len().pow(2)));
    FiniteGroup::new(matrices, op).with_name(format!("Aff({})", base.label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(cycles: &[&[u32]]) -> Element {
        let cycles: Vec<Vec<u32>> = cycles.iter().map(|c| c.to_vec()).collect();
        Element::Perm(Permutation::from_cycles(&cycles))
    }

    #[test]
    fn test_residue_families() {
        let z = additive(6);
        assert_eq!(z.len(), 6);
        assert_eq!(z.identity(), Some(&Element::Int(0)));
        assert_eq!(z.name(), Some("Z(6)"));

        let u = units(12);
        let ints: Vec<i64> = u.elements().iter().filter_map(Element::as_int).collect();
        assert_eq!(ints, vec![1, 5, 7, 11]);
        assert_eq!(units(1).elements(), &[Element::Int(1)]);

        let zx = nonzero_residues(5);
        assert_eq!(zx.len(), 4);
        assert_eq!(zx.order(&Element::Int(2)), Ok(Some(4)));
    }

    #[test]
    fn test_empty_families() {
        assert!(additive(0).is_empty());
        assert_eq!(additive(0).identity(), None);
        assert!(dihedral(0).is_empty());
        assert_eq!(dihedral(0).identity(), None);
        assert!(matrices(0, &[Element::Int(1)], None).is_empty());
    }

    #[test]
    fn test_permutation_family_sizes() {
        assert_eq!(symmetric(0).len(), 1);
        assert_eq!(symmetric(4).len(), 24);
        assert_eq!(alternating(4).len(), 12);
        assert_eq!(dihedral(1).len(), 1);
        assert_eq!(dihedral(2).len(), 2);
        assert_eq!(dihedral(5).len(), 10);
    }

    #[test]
    fn test_permutation_families_are_complete() {
        assert_eq!(symmetric(5).len(), 120);
        assert_eq!(alternating(5).len(), 60);
        for n in 3..9 {
            let d = dihedral(n);
            assert_eq!(d.len(), 2 * n as usize);
            let involutions = d.elements()[n as usize..]
                .iter()
                .filter(|r| d.order(r) == Ok(Some(2)))
                .count();
            assert_eq!(involutions, n as usize, "D({n})");
        }
    }

    #[test]
    fn test_alternating_three_is_abelian() {
        let a3 = alternating(3);
        assert!(a3.abelian());
        assert!(a3.cyclic().unwrap().is_cyclic);
    }

    #[test]
    fn test_dihedral_identity_comes_first() {
        let d = dihedral(6);
        assert_eq!(d.elements()[0], Element::Perm(Permutation::identity()));
        assert_eq!(d.identity(), Some(&Element::Perm(Permutation::identity())));
        assert!(!d.abelian());
        assert_eq!(d.center(), &[perm(&[]), perm(&[&[1, 4], &[2, 5], &[3, 6]])]);
    }

    #[test]
    fn test_permutation_generated_single_generator() {
        let g = permutation_generated(&[Permutation::from_cycle(&[1, 2, 3, 4])]);
        assert_eq!(g.len(), 4);
        assert_eq!(g.name(), Some("<(1 2 3 4)>"));
        assert!(g.cyclic().unwrap().is_cyclic);
    }

    #[test]
    fn test_matrix_family_sizes() {
        let z2 = additive(2);
        assert_eq!(matrices(2, &z2, None).len(), 16);
        // GL(2, 2) has order 6, and over {0, 1} every non-zero raw
        // determinant is 1 or -1.
        let gl = general_linear(2, &z2, None);
        assert_eq!(gl.len(), 6);
        assert_eq!(gl.name(), Some("GL(2, Z(2))"));
        assert_eq!(special_linear(2, &z2, None).len(), 3);
        assert_eq!(affine(&z2, None).len(), 2);
    }

    #[test]
    fn test_base_set_labels() {
        let entries = vec![Element::Int(0), Element::Int(1)];
        assert_eq!(BaseSet::from(&entries).label(), "[0, 1]");
        assert_eq!(affine(&entries, None).name(), Some("Aff([0, 1])"));
    }
}
