//! In-memory filtering of loaded collections.
//!
//! Every list view narrows its collection the same way: each active filter
//! field contributes one predicate and an item is kept only when all of
//! them hold. Input order is preserved.

pub mod entity;
pub mod spot;

pub use entity::{filter_hotels, filter_parkings, ParkingFilter};
pub use spot::{filter_spots, is_free, SpotFilter};

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Conjunction of the active filter predicates for one entity kind.
pub struct Criteria<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T> Criteria<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Adds `predicate` only when the filter field holds a value.
    #[must_use]
    pub fn when<V: 'a>(
        mut self,
        value: Option<V>,
        predicate: impl Fn(&T, &V) -> bool + 'a,
    ) -> Self {
        if let Some(value) = value {
            self.predicates
                .push(Box::new(move |item| predicate(item, &value)));
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }

    #[must_use]
    pub fn apply<'s>(&self, items: &'s [T]) -> Vec<&'s T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl<T> Default for Criteria<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring query. Blank input is no query at all; any
/// other input is matched as typed, surrounding spaces included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery(String);

impl TextQuery {
    #[must_use]
    pub fn parse(input: Option<&str>) -> Option<Self> {
        let input = input?;
        if input.trim().is_empty() {
            None
        } else {
            Some(Self(input.to_lowercase()))
        }
    }

    #[must_use]
    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    #[must_use]
    pub fn found_in_opt(&self, haystack: Option<&str>) -> bool {
        haystack.is_some_and(|h| self.found_in(h))
    }
}

/// What a list view has to show.
///
/// `Empty` is a loaded collection with no match; it is never used while the
/// data is still being fetched.
#[derive(Debug, PartialEq)]
pub enum Listing<'a, T> {
    Loading,
    Empty,
    Items(Vec<&'a T>),
}

impl<'a, T> Listing<'a, T> {
    #[must_use]
    pub fn from_items(items: Vec<&'a T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    #[must_use]
    pub fn items(&self) -> &[&'a T] {
        match self {
            Listing::Items(items) => items,
            Listing::Loading | Listing::Empty => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
