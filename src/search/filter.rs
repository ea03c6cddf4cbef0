// src/search/filter.rs

/// A conjunction of constraints over one record kind.
///
/// Implementors check every active constraint and return `true` only when all
/// of them hold. A default-constructed criteria value must match every record.
pub trait Criteria<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Keeps the records that satisfy `criteria`, in input order.
///
/// An empty result is a normal outcome; callers render a "no results" state.
pub fn filter<'a, R, C>(records: impl IntoIterator<Item = &'a R>, criteria: &C) -> Vec<&'a R>
where
    R: 'a,
    C: Criteria<R> + ?Sized,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Exact-match constraint on a categorical field. `All` is the "all" sentinel
/// and never excludes anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    /// Membership test against a collection field (tags, amenities, ...).
    pub fn admits_any_of(&self, values: &[T]) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => values.contains(wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

/// Case-insensitive substring search over one or more text fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextQuery {
    raw: String,
    needle: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the query is empty or ANY of `fields` contains it.
    pub fn matches_any<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Inclusive numeric range. A missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Drops bounds that sit on (or past) the domain edges, so a range that
    /// spans the whole domain is indistinguishable from an absent one.
    pub fn within(self, floor: T, ceiling: T) -> Self {
        Self {
            min: self.min.filter(|min| *min > floor),
            max: self.max.filter(|max| *max < ceiling),
        }
    }
}

/// One-directional boolean filter: when set, the field must be true; when
/// unset it never excludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flag(pub bool);

impl Flag {
    pub fn admits(&self, value: bool) -> bool {
        !self.0 || value
    }

    pub fn is_set(&self) -> bool {
        self.0
    }
}
