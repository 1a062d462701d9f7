//! Rewriting `e_S` in the NBC basis.
//!
//! For a subset `S` the reducer returns the wedge product of the generators
//! of `S` (taken in ascending rank) as a combination of NBC monomials:
//!
//! 1. `S` contains no broken circuit: `S` is a basis index, return `[S]`.
//! 2. `S` contains a broken circuit `bc` and a minimum `i` removed from it:
//!    `S` contains the circuit `bc ∪ {i}`, return 0.
//! 3. Otherwise apply the boundary of `e_{S ∪ {i}}`, which lies in the
//!    ideal: every `s` in `bc` is exchanged for `i`, with the sign of `s`
//!    in `S ∪ {i}` relative to the sign of `i`.
//!
//! Exchanging `s` for the smaller `i` decreases `S` in the reverse
//! lexicographic order, so the rewriting terminates. It is driven by an
//! explicit stack and every intermediate result is cached under its
//! canonical `RankSet`, so recursion depth never depends on the ground
//! set size and no subset is reduced twice.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use orsol_rings::CommutativeRing;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::algebra::OsElement;
use crate::broken_circuits::BrokenCircuitTable;
use crate::error::{AlgebraError, Result};
use crate::sign::Sign;
use crate::subset::RankSet;

/// Counters describing the reducer's cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered straight from the cache.
    pub hits: usize,
    /// Subsets reduced from scratch.
    pub derivations: usize,
    /// Subsets currently cached.
    pub entries: usize,
}

/// Pending work on the reduction stack.
struct Frame {
    set: RankSet,
    /// Set once the rewrite has been planned; the frame is finished when
    /// every target below it on the stack has been cached.
    rewrite: Option<Vec<(Sign, RankSet)>>,
}

enum Step<R: CommutativeRing> {
    Value(OsElement<R>),
    Rewrite(Vec<(Sign, RankSet)>),
}

/// Memoized reduction of subsets to the NBC basis.
pub struct SubsetReducer<R: CommutativeRing> {
    table: BrokenCircuitTable,
    basis: FxHashSet<RankSet>,
    memo: RwLock<FxHashMap<RankSet, Arc<OsElement<R>>>>,
    hits: AtomicUsize,
    derivations: AtomicUsize,
}

impl<R: CommutativeRing> SubsetReducer<R> {
    /// Creates a reducer over `table` whose basis indices are `basis`.
    pub fn new<I: IntoIterator<Item = RankSet>>(table: BrokenCircuitTable, basis: I) -> Self {
        Self {
            table,
            basis: basis.into_iter().collect(),
            memo: RwLock::new(FxHashMap::default()),
            hits: AtomicUsize::new(0),
            derivations: AtomicUsize::new(0),
        }
    }

    /// The broken circuits driving the rewriting.
    #[must_use]
    pub fn table(&self) -> &BrokenCircuitTable {
        &self.table
    }

    /// Returns true if `s` indexes a basis element.
    #[must_use]
    pub fn is_basis(&self, s: &RankSet) -> bool {
        self.basis.contains(s)
    }

    /// The image of `e_S` in the NBC basis.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticInconsistency` if the broken circuits and the
    /// basis disagree, which cannot happen for valid matroid data.
    pub fn image(&self, s: &RankSet) -> Result<Arc<OsElement<R>>> {
        let cached = self.memo.read().get(s).cloned();
        if let Some(value) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(value);
        }

        let mut stack = vec![Frame {
            set: s.clone(),
            rewrite: None,
        }];

        while let Some(frame) = stack.pop() {
            if let Some(terms) = frame.rewrite {
                let value = self.combine(&terms)?;
                self.store(frame.set, value);
                continue;
            }
            if self.memo.read().contains_key(&frame.set) {
                continue;
            }

            match self.plan(&frame.set)? {
                Step::Value(value) => self.store(frame.set, value),
                Step::Rewrite(terms) => {
                    let pending: Vec<RankSet> = {
                        let memo = self.memo.read();
                        terms
                            .iter()
                            .map(|(_, target)| target)
                            .filter(|target| !memo.contains_key(*target))
                            .cloned()
                            .collect()
                    };
                    stack.push(Frame {
                        set: frame.set,
                        rewrite: Some(terms),
                    });
                    stack.extend(pending.into_iter().map(|set| Frame { set, rewrite: None }));
                }
            }
        }

        self.memo.read().get(s).cloned().ok_or_else(|| {
            AlgebraError::ArithmeticInconsistency(format!("reduction of {s:?} left no result"))
        })
    }

    /// Current cache counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            derivations: self.derivations.load(Ordering::Relaxed),
            entries: self.memo.read().len(),
        }
    }

    fn plan(&self, s: &RankSet) -> Result<Step<R>> {
        let Some(bc) = self.table.find_contained(s) else {
            if self.basis.contains(s) {
                return Ok(Step::Value(OsElement::monomial(s.clone())));
            }
            return Err(AlgebraError::ArithmeticInconsistency(format!(
                "{s:?} contains no broken circuit but is not a basis index"
            )));
        };

        if bc.removed().iter().any(|&i| s.contains(i)) {
            return Ok(Step::Value(OsElement::zero()));
        }

        let i = bc.smallest_removed();
        let below = s.ranks().iter().take_while(|&&r| r < i).count();
        let mut sign = Sign::from_parity(below);
        let mut terms = Vec::with_capacity(bc.set().len());
        for &r in s.ranks() {
            if bc.set().contains(r) {
                terms.push((sign, s.exchange(r, i)));
            }
            sign = sign.flip();
        }
        Ok(Step::Rewrite(terms))
    }

    fn combine(&self, terms: &[(Sign, RankSet)]) -> Result<OsElement<R>> {
        let memo = self.memo.read();
        let mut value = OsElement::zero();
        for (sign, target) in terms {
            let part = memo.get(target).ok_or_else(|| {
                AlgebraError::ArithmeticInconsistency(format!("{target:?} was never reduced"))
            })?;
            value.add_scaled(part, &sign.to_ring());
        }
        Ok(value)
    }

    fn store(&self, set: RankSet, value: OsElement<R>) {
        let mut memo = self.memo.write();
        if memo.contains_key(&set) {
            return;
        }
        trace!(subset = ?set, terms = value.len(), "reduced subset");
        memo.insert(set, Arc::new(value));
        self.derivations.fetch_add(1, Ordering::Relaxed);
    }
}
