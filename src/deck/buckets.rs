//! Ordered category buckets.
//!
//! A `CategoryBuckets<C>` holds one append-only card list per variant of
//! `C`, laid out in `C::TEMPLATE_ORDER`. Iteration order is therefore fixed
//! by the category type and never by insertion order. Deserializing rebuilds
//! that layout, whatever order or length the input buckets have.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::cards::BucketCategory;
use crate::classify::ClassifiedCard;

/// Cards in one bucket, in source order.
///
/// Most buckets hold a handful of entries, so small lists stay inline.
pub type CardList = SmallVec<[ClassifiedCard; 4]>;

/// Sum of quantities (not the number of entries).
#[must_use]
pub fn total_quantity(cards: &[ClassifiedCard]) -> u64 {
    cards.iter().map(|c| u64::from(c.quantity)).sum()
}

/// Cards of a single category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket<C> {
    pub category: C,
    cards: CardList,
}

impl<C: BucketCategory> Bucket<C> {
    /// Create an empty bucket.
    #[must_use]
    pub fn new(category: C) -> Self {
        Self {
            category,
            cards: CardList::new(),
        }
    }

    /// Field label of this bucket's category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Cards in source order.
    #[must_use]
    pub fn cards(&self) -> &[ClassifiedCard] {
        &self.cards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total copies in this bucket.
    #[must_use]
    pub fn total(&self) -> u64 {
        total_quantity(&self.cards)
    }

    fn push(&mut self, card: ClassifiedCard) {
        self.cards.push(card);
    }
}

/// One bucket per category, in template order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryBuckets<C> {
    buckets: Vec<Bucket<C>>,
}

impl<'de, C> Deserialize<'de> for CategoryBuckets<C>
where
    C: BucketCategory + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr<C> {
            buckets: Vec<Bucket<C>>,
        }

        let repr = Repr::<C>::deserialize(deserializer)?;
        let mut rebuilt = Self::new();
        for Bucket { category, cards } in repr.buckets {
            for card in cards {
                rebuilt.push(category, card);
            }
        }
        Ok(rebuilt)
    }
}

impl<C: BucketCategory> Default for CategoryBuckets<C> {
    fn default() -> Self {
        Self {
            buckets: C::TEMPLATE_ORDER.iter().map(|&c| Bucket::new(c)).collect(),
        }
    }
}

impl<C: BucketCategory> CategoryBuckets<C> {
    /// Create a set of empty buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the bucket for `category`.
    pub fn push(&mut self, category: C, card: ClassifiedCard) {
        let index = category.index();
        self.buckets[index].push(card);
    }

    /// Bucket for `category`.
    #[must_use]
    pub fn get(&self, category: C) -> &Bucket<C> {
        &self.buckets[category.index()]
    }

    /// All buckets in template order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket<C>> {
        self.buckets.iter()
    }

    /// Buckets holding at least one card, in template order.
    pub fn non_empty(&self) -> impl Iterator<Item = &Bucket<C>> {
        self.buckets.iter().filter(|b| !b.is_empty())
    }

    /// Total copies across all buckets.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(Bucket::total).sum()
    }

    /// Number of card entries across all buckets.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(|b| b.cards.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Consume the buckets, yielding every card in template order.
    pub(crate) fn into_cards(self) -> impl Iterator<Item = ClassifiedCard> {
        self.buckets.into_iter().flat_map(|b| b.cards)
    }
}
