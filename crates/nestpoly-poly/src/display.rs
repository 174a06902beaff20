//! Rendering polynomials as text.
//!
//! Two notations are supported:
//! - Bracketed: the calculator format, `(coeff,exp)+(coeff,exp)`, with
//!   nested coefficients rendered recursively
//! - Algebraic: flattened terms over named variables, `2 + 3*x0^2*x1`

use std::fmt;

use nestpoly_rings::Coefficient;

use crate::monomial::Exp;
use crate::poly::Poly;

/// Output notation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Notation {
    /// `(coeff,exp)+...`, nesting coefficients in parentheses.
    #[default]
    Bracketed,
    /// Sum of flattened monomials over `x0, x1, ...`.
    Algebraic,
}

/// Rendering options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderConfig {
    /// Output notation.
    pub notation: Notation,
    /// Variable name prefix for algebraic notation; variable `i` prints as
    /// `{prefix}{i}`.
    pub var_prefix: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            notation: Notation::Bracketed,
            var_prefix: 'x',
        }
    }
}

impl RenderConfig {
    /// Algebraic notation with the default variable prefix.
    #[must_use]
    pub fn algebraic() -> Self {
        Self {
            notation: Notation::Algebraic,
            ..Self::default()
        }
    }
}

/// A polynomial paired with rendering options; see [`Poly::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a, C: Coefficient> {
    poly: &'a Poly<C>,
    config: RenderConfig,
}

impl<C: Coefficient> Poly<C> {
    /// Returns a value that formats this polynomial with `config`.
    #[must_use]
    pub fn display_with(&self, config: RenderConfig) -> Rendered<'_, C> {
        Rendered { poly: self, config }
    }
}

impl<C: Coefficient> fmt::Display for Rendered<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.config.notation {
            Notation::Bracketed => write_bracketed(f, self.poly),
            Notation::Algebraic => write_algebraic(f, self.poly, self.config.var_prefix),
        }
    }
}

impl<C: Coefficient> fmt::Display for Poly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(RenderConfig::default()), f)
    }
}

fn write_bracketed<C: Coefficient>(f: &mut fmt::Formatter<'_>, poly: &Poly<C>) -> fmt::Result {
    match poly {
        Poly::Scalar(c) => write!(f, "{c}"),
        Poly::Composite(terms) => {
            for (i, m) in terms.iter().enumerate() {
                if i > 0 {
                    f.write_str("+")?;
                }
                f.write_str("(")?;
                write_bracketed(f, &m.coeff)?;
                write!(f, ",{})", m.exp)?;
            }
            Ok(())
        }
    }
}

/// A flattened term: scalar coefficient and `(variable, exponent)` factors.
type FlatTerm<C> = (C, Vec<(usize, Exp)>);

fn flatten<C: Coefficient>(
    poly: &Poly<C>,
    depth: usize,
    factors: &mut Vec<(usize, Exp)>,
    out: &mut Vec<FlatTerm<C>>,
) {
    match poly {
        Poly::Scalar(c) => {
            if !c.is_zero() {
                out.push((*c, factors.clone()));
            }
        }
        Poly::Composite(terms) => {
            for m in terms {
                if m.exp > 0 {
                    factors.push((depth, m.exp));
                }
                flatten(&m.coeff, depth + 1, factors, out);
                if m.exp > 0 {
                    factors.pop();
                }
            }
        }
    }
}

fn write_algebraic<C: Coefficient>(
    f: &mut fmt::Formatter<'_>,
    poly: &Poly<C>,
    prefix: char,
) -> fmt::Result {
    let mut flat = Vec::new();
    flatten(poly, 0, &mut Vec::new(), &mut flat);

    if flat.is_empty() {
        return f.write_str("0");
    }

    for (i, (c, factors)) in flat.iter().enumerate() {
        if i > 0 {
            f.write_str(" + ")?;
        }

        let mon = factors
            .iter()
            .map(|&(var, e)| {
                if e == 1 {
                    format!("{prefix}{var}")
                } else {
                    format!("{prefix}{var}^{e}")
                }
            })
            .collect::<Vec<_>>()
            .join("*");

        if mon.is_empty() {
            write!(f, "{c}")?;
        } else if c.is_one() {
            f.write_str(&mon)?;
        } else if *c == C::one().wrapping_neg() {
            write!(f, "-{mon}")?;
        } else {
            write!(f, "{c}*{mon}")?;
        }
    }

    Ok(())
}
