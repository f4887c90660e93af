//! Bounded minimax over feedback buckets
//!
//! A node is a candidate set. Guessing `g` splits the set into buckets, one per
//! feedback the adversary could answer with, and each bucket is the child node.
//! Values count guesses including the one that solves, so a single candidate is
//! worth 1.

use super::cancel::CancelToken;
use super::memo::MemoTable;
use crate::core::{Feedback, FeedbackRule, FeedbackSpace, Word};
use crate::error::{Budget, EngineError};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// State shared by every worker of one search
pub(super) struct SearchContext<'a> {
    dictionary: &'a [Word],
    rule: FeedbackRule,
    space: FeedbackSpace,
    memoize: bool,
    max_nodes: Option<u64>,
    cancel: &'a CancelToken,
    nodes: AtomicU64,
    best_root: AtomicU32,
}

impl<'a> SearchContext<'a> {
    pub(super) const fn new(
        dictionary: &'a [Word],
        rule: FeedbackRule,
        space: FeedbackSpace,
        memoize: bool,
        max_nodes: Option<u64>,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            dictionary,
            rule,
            space,
            memoize,
            max_nodes,
            cancel,
            nodes: AtomicU64::new(0),
            best_root: AtomicU32::new(u32::MAX),
        }
    }

    pub(super) fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    /// Smallest worst case proven for any root guess so far
    pub(super) fn best_root(&self) -> Option<u32> {
        match self.best_root.load(Ordering::Relaxed) {
            u32::MAX => None,
            bound => Some(bound),
        }
    }

    pub(super) fn record_root(&self, depth: u32) {
        self.best_root.fetch_min(depth, Ordering::Relaxed);
    }

    fn visit(&self) -> Result<(), EngineError> {
        if self.cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        let visited = self.nodes.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(max) = self.max_nodes
            && visited > max
        {
            return Err(EngineError::SearchBudgetExceeded {
                budget: Budget::Nodes(max),
                best_bound: None,
            });
        }
        Ok(())
    }

    /// Buckets of `candidates` minus `guess`, in response order after `last`
    ///
    /// After a feedback, codes that keep its Matches come first in
    /// [`FeedbackSpace::at_least_as_good`] order and any others follow by value.
    /// At the root buckets follow code value. Only occupied buckets are ranked,
    /// so the cost never depends on the size of the feedback space.
    fn partition(
        &self,
        guess: u32,
        candidates: &[u32],
        last: Option<Feedback>,
    ) -> Vec<(Feedback, Vec<u32>)> {
        let guess_word = &self.dictionary[guess as usize];
        let mut buckets: FxHashMap<Feedback, Vec<u32>> = FxHashMap::default();

        for &solution in candidates {
            if solution == guess {
                continue;
            }
            let code = self
                .rule
                .feedback(guess_word, &self.dictionary[solution as usize]);
            buckets.entry(code).or_default().push(solution);
        }

        let mut ordered: Vec<(Feedback, Vec<u32>)> = buckets.into_iter().collect();
        match last {
            Some(last) => {
                ordered.sort_unstable_by_key(|(code, _)| {
                    self.space.response_rank(last, *code)
                });
            }
            None => ordered.sort_unstable_by_key(|(code, _)| *code),
        }
        ordered
    }
}

/// Lowest value a set of this size can have
pub(super) const fn floor(candidates: usize) -> u32 {
    if candidates <= 1 { 1 } else { 2 }
}

/// One search thread's view: the shared context plus a private memo
pub(super) struct Worker<'c, 'a> {
    ctx: &'c SearchContext<'a>,
    memo: MemoTable,
}

impl<'c, 'a> Worker<'c, 'a> {
    pub(super) fn new(ctx: &'c SearchContext<'a>) -> Self {
        Self {
            ctx,
            memo: MemoTable::new(),
        }
    }

    /// Worst case of guessing `guess`, or `None` if it exceeds `limit`
    pub(super) fn guess_value(
        &mut self,
        guess: u32,
        candidates: &[u32],
        last: Option<Feedback>,
        limit: u32,
    ) -> Result<Option<u32>, EngineError> {
        if limit < 1 {
            return Ok(None);
        }

        let mut worst = 1;
        for (code, bucket) in self.ctx.partition(guess, candidates, last) {
            if limit < 2 {
                return Ok(None);
            }
            match self.value(&bucket, code, limit - 1)? {
                Some(child) => worst = worst.max(child + 1),
                None => return Ok(None),
            }
        }
        Ok(Some(worst))
    }

    /// Exact value of `candidates` if it is at most `limit`
    fn value(
        &mut self,
        candidates: &[u32],
        last: Feedback,
        limit: u32,
    ) -> Result<Option<u32>, EngineError> {
        self.ctx.visit()?;

        let floor = floor(candidates.len());
        if limit < floor {
            return Ok(None);
        }
        if candidates.len() <= 1 {
            return Ok(Some(1));
        }
        if self.ctx.memoize
            && let Some(known) = self.memo.get(candidates)
        {
            return Ok((known <= limit).then_some(known));
        }

        let mut best = None;
        let mut bound = limit;

        for &guess in candidates {
            if let Some(worst) = self.guess_value(guess, candidates, Some(last), bound)? {
                best = Some(worst);
                if worst <= floor {
                    break;
                }
                bound = worst - 1;
            }
        }

        if self.ctx.memoize
            && let Some(depth) = best
        {
            self.memo.insert(candidates, depth);
        }
        Ok(best)
    }

    pub(super) const fn memo(&self) -> &MemoTable {
        &self.memo
    }
}
