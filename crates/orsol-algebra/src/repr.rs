//! Text form of algebra elements.
//!
//! An element prints as a signed sum of basis indices, for example
//! `OS{0, 2, 3} - 2*OS{0, 1} + OS{}`. Terms appear in graded order and the
//! members of each index in rank order. [`OrlikSolomonAlgebra::parse_element`]
//! reads the same syntax back; there the listed order of each index is
//! significant (`OS{1, 0}` is `-OS{0, 1}`).

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use orsol_rings::{CommutativeRing, Ring};

use crate::algebra::{OrlikSolomonAlgebra, OsElement};
use crate::error::{AlgebraError, Result};
use crate::sign::Sign;
use crate::subset::RankSet;

/// Displays an element against its algebra's ordering and prefix.
pub struct ElementDisplay<'a, E, R: CommutativeRing> {
    algebra: &'a OrlikSolomonAlgebra<E, R>,
    element: &'a OsElement<R>,
}

impl<E, R> OrlikSolomonAlgebra<E, R>
where
    E: Clone + Eq + Hash + Ord + Debug + Display,
    R: CommutativeRing,
{
    /// The text form of a basis index, e.g. `OS{0, 2}`.
    ///
    /// A rank outside the ground set prints as `#rank`.
    #[must_use]
    pub fn repr_term(&self, m: &RankSet) -> String {
        let members: Vec<String> = m
            .ranks()
            .iter()
            .map(|&r| match self.ordering_index().element(r) {
                Some(x) => x.to_string(),
                None => format!("#{r}"),
            })
            .collect();
        format!("{}{{{}}}", self.prefix(), members.join(", "))
    }

    /// A `Display` adapter for `x`.
    #[must_use]
    pub fn display<'a>(&'a self, x: &'a OsElement<R>) -> ElementDisplay<'a, E, R> {
        ElementDisplay {
            algebra: self,
            element: x,
        }
    }

    /// Reads an element from its text form.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::Parse` for malformed text and
    /// `InvalidArgument` for elements outside the ground set.
    pub fn parse_element(&self, input: &str) -> Result<OsElement<R>>
    where
        E: FromStr,
        E::Err: Display,
        R: FromStr,
        R::Err: Display,
    {
        let text = input.trim();
        if text == "0" {
            return Ok(OsElement::zero());
        }

        let mut out = OsElement::zero();
        for (sign, term) in split_terms(text).map_err(|reason| parse_error(input, reason))? {
            let (coeff, members) = self.parse_term(&term).map_err(|reason| parse_error(input, reason))?;
            let value = self.wedge(&members)?;
            out.add_scaled(&value, &sign.apply(coeff));
        }
        Ok(out)
    }

    fn parse_term(&self, term: &str) -> std::result::Result<(R, Vec<E>), String>
    where
        E: FromStr,
        E::Err: Display,
        R: FromStr,
        R::Err: Display,
    {
        let term = term.trim();
        let open = format!("{}{{", self.prefix());
        let Some(pos) = term.find(&open) else {
            return Err(format!("`{term}` has no `{open}`"));
        };
        let Some(body) = term[pos + open.len()..].strip_suffix('}') else {
            return Err(format!("`{term}` is not closed by `}}`"));
        };

        let head = term[..pos].trim();
        let coeff = if head.is_empty() {
            R::one()
        } else {
            let Some(digits) = head.strip_suffix('*') else {
                return Err(format!("expected `*` after the coefficient in `{term}`"));
            };
            digits.trim().parse::<R>().map_err(|e| e.to_string())?
        };

        let members = if body.trim().is_empty() {
            Vec::new()
        } else {
            body.split(',')
                .map(|x| x.trim().parse::<E>().map_err(|e| format!("`{}`: {e}", x.trim())))
                .collect::<std::result::Result<Vec<_>, _>>()?
        };
        Ok((coeff, members))
    }
}

/// Splits at `+` and `-` outside braces. Consecutive signs multiply.
fn split_terms(text: &str) -> std::result::Result<Vec<(Sign, String)>, String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut sign = Sign::Plus;
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => {
                depth += 1;
                current.push(ch);
            }
            '}' => {
                depth = depth.checked_sub(1).ok_or("unbalanced `}`")?;
                current.push(ch);
            }
            '+' | '-' if depth == 0 => {
                let op = if ch == '-' { Sign::Minus } else { Sign::Plus };
                if current.trim().is_empty() {
                    sign = sign * op;
                } else {
                    terms.push((sign, std::mem::take(&mut current)));
                    sign = op;
                }
            }
            _ => current.push(ch),
        }
    }

    if depth != 0 {
        return Err("unbalanced `{`".to_string());
    }
    if current.trim().is_empty() {
        return Err("expected a term".to_string());
    }
    terms.push((sign, current));
    Ok(terms)
}

fn parse_error(input: &str, reason: String) -> AlgebraError {
    AlgebraError::Parse {
        input: input.to_string(),
        reason,
    }
}

impl<E, R> fmt::Display for ElementDisplay<'_, E, R>
where
    E: Clone + Eq + Hash + Ord + Debug + Display,
    R: CommutativeRing,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.element.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.element.iter().enumerate() {
            let term = self.algebra.repr_term(m);
            let text = if c.is_one() {
                term
            } else if (-c.clone()).is_one() {
                format!("-{term}")
            } else {
                format!("{c}*{term}")
            };

            match (i, text.strip_prefix('-')) {
                (0, _) => write!(f, "{text}")?,
                (_, Some(rest)) => write!(f, " - {rest}")?,
                (_, None) => write!(f, " + {text}")?,
            }
        }
        Ok(())
    }
}
