//! Property-based tests for Strassen multiplication.
//!
//! Every property compares against the schoolbook product, which uses the
//! same wrapping `i32` arithmetic, so agreement is exact.

use proptest::prelude::*;

use strassen_core::base_case::multiply_naive;
use strassen_core::{
    strassen_multiply, Element, Matrix, MatrixError, Options, RayonScheduler, SequentialScheduler,
    Strassen,
};

/// Strategy for an `n x n` matrix with entries in `lo..hi`.
fn square(n: usize, lo: Element, hi: Element) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(lo..hi, n * n).prop_map(move |data| Matrix::from_vec(n, n, data).unwrap())
}

/// A power-of-two side length in `1..=16` and two matrices of that size.
fn operand_pair(lo: Element, hi: Element) -> impl Strategy<Value = (Matrix, Matrix)> {
    (0u32..=4).prop_flat_map(move |k| {
        let n = 1usize << k;
        (square(n, lo, hi), square(n, lo, hi))
    })
}

fn operand_triple() -> impl Strategy<Value = (Matrix, Matrix, Matrix)> {
    (0u32..=3).prop_flat_map(|k| {
        let n = 1usize << k;
        (square(n, -50, 50), square(n, -50, 50), square(n, -50, 50))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Strassen equals the schoolbook product entry for entry.
    #[test]
    fn matches_naive((a, b) in operand_pair(-1000, 1000)) {
        let expected = multiply_naive(&a, &b).unwrap();
        prop_assert_eq!(strassen_multiply(&a, &b).unwrap(), expected);
    }

    /// Wrapping overflow does not break agreement with the schoolbook product.
    #[test]
    fn matches_naive_under_overflow((a, b) in operand_pair(Element::MIN, Element::MAX)) {
        let expected = multiply_naive(&a, &b).unwrap();
        prop_assert_eq!(strassen_multiply(&a, &b).unwrap(), expected);
    }

    /// A * I == I * A == A.
    #[test]
    fn identity_on_both_sides((a, _) in operand_pair(-1000, 1000)) {
        let id = Matrix::identity(a.rows());
        prop_assert_eq!(&strassen_multiply(&a, &id).unwrap(), &a);
        prop_assert_eq!(&strassen_multiply(&id, &a).unwrap(), &a);
    }

    /// Multiplying by zero gives zero.
    #[test]
    fn zero_annihilates((a, _) in operand_pair(-1000, 1000)) {
        let zero = Matrix::zeros(a.rows());
        prop_assert!(strassen_multiply(&a, &zero).unwrap().is_zero());
        prop_assert!(strassen_multiply(&zero, &a).unwrap().is_zero());
    }

    /// (AB)C == A(BC).
    #[test]
    fn associative((a, b, c) in operand_triple()) {
        let left = strassen_multiply(&strassen_multiply(&a, &b).unwrap(), &c).unwrap();
        let right = strassen_multiply(&a, &strassen_multiply(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// The cutover only changes where recursion stops, never the result.
    #[test]
    fn cutover_does_not_change_result((a, b) in operand_pair(-1000, 1000), shift in 0u32..=4) {
        let options = Options { cutover: 1 << shift, ..Options::default() };
        let product = Strassen::new(&SequentialScheduler, options).multiply(&a, &b).unwrap();
        prop_assert_eq!(product, multiply_naive(&a, &b).unwrap());
    }

    /// Side lengths that are not powers of two are rejected.
    #[test]
    fn rejects_non_power_of_two(n in 3usize..40) {
        prop_assume!(!n.is_power_of_two());
        let m = Matrix::zeros(n);
        prop_assert!(matches!(strassen_multiply(&m, &m), Err(MatrixError::InvalidDimension(_))));
    }

    /// Non-square operands are rejected.
    #[test]
    fn rejects_non_square(rows in 1usize..9, cols in 1usize..9) {
        prop_assume!(rows != cols);
        let m = Matrix::from_fn(rows, cols, |_, _| 1);
        prop_assert!(matches!(strassen_multiply(&m, &m), Err(MatrixError::InvalidDimension(_))));
    }
}

#[test]
fn sequential_and_pool_schedulers_agree() {
    let pool = RayonScheduler::new(4).unwrap();
    let a = Matrix::from_fn(32, 32, |r, c| Element::try_from((r * 31 + c * 17) % 23).unwrap() - 11);
    let b = Matrix::from_fn(32, 32, |r, c| Element::try_from((r * 13 + c * 7) % 19).unwrap() - 9);

    let on_pool = Strassen::new(&pool, Options::default()).multiply(&a, &b).unwrap();
    let inline = Strassen::new(&SequentialScheduler, Options::default())
        .multiply(&a, &b)
        .unwrap();

    assert_eq!(on_pool, inline);
    assert_eq!(on_pool, multiply_naive(&a, &b).unwrap());
}

#[test]
fn mismatched_sizes_are_rejected() {
    let err = strassen_multiply(&Matrix::zeros(2), &Matrix::zeros(4)).unwrap_err();
    assert!(matches!(err, MatrixError::InvalidDimension(_)));
}

#[test]
fn leaves_are_seven_to_the_depth() {
    let pool = RayonScheduler::new(2).unwrap();
    let s = Strassen::new(&pool, Options::default());
    for k in 0u32..=4 {
        let n = 1usize << k;
        let (_, stats) = s
            .multiply_with_stats(&Matrix::identity(n), &Matrix::identity(n))
            .unwrap();
        assert_eq!(stats.base_products, 7u64.pow(k), "n = {n}");
    }
}
