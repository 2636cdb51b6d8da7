//! Composable transaction filters.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use super::period::DateRange;
use crate::ledger::{Transaction, TransactionKind};

/// Kind constraint accumulated by [`TransactionQuery::with_kind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum KindFilter {
    #[default]
    Any,
    Only(TransactionKind),
    /// Two different kinds were required; nothing can match.
    Neither,
}

/// Immutable filter specification over transactions.
///
/// Every `with_*` call adds a condition that is AND-ed with the existing
/// ones. A fresh query matches every transaction.
///
/// ```
/// use tally_core::ledger::{Transaction, TransactionKind};
/// use tally_core::query::TransactionQuery;
/// use rust_decimal::Decimal;
///
/// let food = TransactionQuery::new()
///     .with_kind(TransactionKind::Expense)
///     .with_categories(["food", "cafe"]);
///
/// let tx = Transaction::expense("cafe", Decimal::TEN).unwrap();
/// assert!(food.matches(&tx));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    categories: Option<BTreeSet<String>>,
    kind: KindFilter,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
}

impl TransactionQuery {
    /// Query that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to transactions whose category is in `categories`.
    ///
    /// An empty set adds no condition. A second call intersects with the
    /// first, so disjoint sets match nothing.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = categories.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return self;
        }
        self.categories = Some(match self.categories.take() {
            Some(existing) => existing.intersection(&set).cloned().collect(),
            None => set,
        });
        self
    }

    /// Restricts to one kind. Requiring both kinds matches nothing.
    #[must_use]
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = match self.kind {
            KindFilter::Any => KindFilter::Only(kind),
            KindFilter::Only(existing) if existing == kind => KindFilter::Only(kind),
            KindFilter::Only(_) | KindFilter::Neither => KindFilter::Neither,
        };
        self
    }

    /// Restricts to transactions created within `[from, to]`.
    ///
    /// Either bound may be omitted. Repeated bounds tighten: the latest
    /// start and the earliest end win.
    #[must_use]
    pub fn with_period(mut self, from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        if let Some(from) = from {
            self.from = Some(self.from.map_or(from, |existing| existing.max(from)));
        }
        if let Some(to) = to {
            self.to = Some(self.to.map_or(to, |existing| existing.min(to)));
        }
        self
    }

    /// Restricts to a whole-day [`DateRange`].
    #[must_use]
    pub fn with_range(self, range: DateRange) -> Self {
        self.with_period(Some(range.start), Some(range.end))
    }

    /// Returns true when no condition has been added.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluates the query against one transaction.
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        let category_ok = self
            .categories
            .as_ref()
            .is_none_or(|set| set.contains(tx.category()));

        let kind_ok = match self.kind {
            KindFilter::Any => true,
            KindFilter::Only(kind) => tx.kind() == kind,
            KindFilter::Neither => false,
        };

        let created_at = tx.created_at();
        let from_ok = self.from.is_none_or(|from| created_at >= from);
        let to_ok = self.to.is_none_or(|to| created_at <= to);

        category_ok && kind_ok && from_ok && to_ok
    }

    /// The query as a predicate, e.g. for `Iterator::filter`.
    pub fn predicate(&self) -> impl Fn(&&Transaction) -> bool + '_ {
        move |tx: &&Transaction| self.matches(tx)
    }
}
