//! Property-based tests for recursive polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::poly::Poly;

    // Strategy for generating small coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    // Strategy for generating nested polynomials, built only through the
    // canonicalizing constructor. Nesting depth doubles as variable count.
    fn small_poly() -> impl Strategy<Value = Poly> {
        let leaf = small_coeff().prop_map(Poly::from_coeff);
        leaf.prop_recursive(2, 24, 3, |inner| {
            proptest::collection::vec((inner, 0u32..5), 0..=3).prop_map(|terms| {
                Poly::from_monomials(
                    terms
                        .into_iter()
                        .map(|(coeff, exp)| Monomial::new(coeff, exp))
                        .collect(),
                )
            })
        })
    }

    // Strategy for generating linear substitutions c0 + c1*x
    fn linear_poly() -> impl Strategy<Value = Poly> {
        (small_coeff(), small_coeff()).prop_map(|(c0, c1)| {
            Poly::from_monomials(vec![Monomial::from_coeff(c0, 0), Monomial::from_coeff(c1, 1)])
        })
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Poly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        // Canonical form survives every operation

        #[test]
        fn constructed_polys_are_canonical(a in small_poly()) {
            prop_assert!(a.check_canonical().is_ok());
        }

        #[test]
        fn operations_preserve_canonical_form(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert!(a.add(&b).check_canonical().is_ok());
            prop_assert!(a.sub(&b).check_canonical().is_ok());
            prop_assert!(a.mul(&b).check_canonical().is_ok());
            prop_assert!(a.neg().check_canonical().is_ok());
            prop_assert!(a.at(x).check_canonical().is_ok());
            prop_assert!(a.compose(&[b.clone(), Poly::var(0)]).check_canonical().is_ok());
        }

        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_identities(a in small_poly()) {
            prop_assert_eq!(a.add(&Poly::zero()), a.clone());
            prop_assert_eq!(a.mul(&Poly::one()), a.clone());
            prop_assert!(a.mul(&Poly::zero()).is_zero());
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero polynomials
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            // deg(a + b) <= max(deg(a), deg(b))
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        #[test]
        fn degree_by_bounded_by_total_degree(a in small_poly(), idx in 0usize..4) {
            prop_assert!(a.degree_by(idx) <= a.degree());
        }

        // Equality

        #[test]
        fn equality_reflexive_and_symmetric(a in small_poly(), b in small_poly()) {
            prop_assert!(a.structurally_eq(&a));
            prop_assert!(a.structurally_eq(&a.clone()));
            prop_assert_eq!(a.structurally_eq(&b), b.structurally_eq(&a));
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn poly_at_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.add(&b).at(x), a.at(x).add(&b.at(x)));
        }

        #[test]
        fn poly_at_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.mul(&b).at(x), a.at(x).mul(&b.at(x)));
        }

        // Composition

        #[test]
        fn compose_with_scalar_matches_at(a in small_poly(), x in small_coeff()) {
            // Variables past the first are forced to zero
            let composed = a.compose(&[Poly::from_coeff(x)]);
            prop_assert_eq!(composed, Poly::from_coeff(a.at(x).at_zeros()));
        }

        #[test]
        fn compose_with_variables_is_identity(a in small_poly()) {
            let vars: Vec<Poly> = (0..4).map(Poly::var).collect();
            prop_assert_eq!(a.compose(&vars), a);
        }

        #[test]
        fn compose_without_substitutions_is_constant_term(a in small_poly()) {
            prop_assert_eq!(a.compose(&[]), Poly::from_coeff(a.at_zeros()));
        }

        #[test]
        fn compose_is_multiplicative(a in small_poly(), b in small_poly(), s in linear_poly(), t in linear_poly()) {
            let subs = [s, t];
            prop_assert_eq!(a.mul(&b).compose(&subs), a.compose(&subs).mul(&b.compose(&subs)));
        }
    }
}
