// src/search/query.rs

use crate::search::filter::{Choice, Flag, Range, TextQuery};
use crate::search::page::PageIndex;
use crate::search::QueryError;
use std::str::FromStr;
use url::form_urlencoded;

/// An enumerated value that round-trips through a query-string token.
///
/// Used for sort keys and for closed categorical facets (category, listing
/// type, presets). `VARIANTS` is also what the templates render as options.
pub trait ParamValue: Sized + Copy + PartialEq + 'static {
    const VARIANTS: &'static [Self];

    fn token(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_token(token: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.token() == token)
    }
}

/// Typed criteria that can be read from and written to a query string.
pub trait QueryParams: Sized {
    fn from_params(params: &Params) -> Result<Self, QueryError>;

    /// Writes only non-default values.
    fn to_params(&self, out: &mut Encoder);
}

/// Decoded `application/x-www-form-urlencoded` pairs.
///
/// Empty values count as absent and the last occurrence of a key wins.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn parse(query: &str) -> Self {
        let pairs = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self, key: &str) -> TextQuery {
        TextQuery::new(self.get(key).unwrap_or_default())
    }

    /// Free-form categorical value; "all" is the no-op sentinel.
    pub fn choice(&self, key: &str) -> Choice<String> {
        match self.get(key) {
            None | Some("all") => Choice::All,
            Some(value) => Choice::Only(value.to_string()),
        }
    }

    /// Closed categorical value; tokens outside `T::VARIANTS` are rejected.
    pub fn choice_of<T: ParamValue>(&self, key: &'static str) -> Result<Choice<T>, QueryError> {
        match self.get(key) {
            None | Some("all") => Ok(Choice::All),
            Some(token) => T::from_token(token)
                .map(Choice::Only)
                .ok_or_else(|| QueryError::UnknownValue {
                    field: key,
                    value: token.to_string(),
                }),
        }
    }

    /// Preset filters whose default variant stands for "all".
    pub fn preset<T: ParamValue + Default>(&self, key: &'static str) -> Result<T, QueryError> {
        match self.get(key) {
            None | Some("all") => Ok(T::default()),
            Some(token) => T::from_token(token).ok_or_else(|| QueryError::UnknownValue {
                field: key,
                value: token.to_string(),
            }),
        }
    }

    pub fn number<T: FromStr>(&self, key: &'static str) -> Result<Option<T>, QueryError> {
        self.get(key)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|_| QueryError::InvalidNumber {
                    field: key,
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    pub fn range<T: FromStr + PartialOrd + Copy>(
        &self,
        min_key: &'static str,
        max_key: &'static str,
    ) -> Result<Range<T>, QueryError> {
        Ok(Range {
            min: self.number(min_key)?,
            max: self.number(max_key)?,
        })
    }

    pub fn flag(&self, key: &'static str) -> Result<Flag, QueryError> {
        match self.get(key) {
            None | Some("false") | Some("0") => Ok(Flag(false)),
            Some("true") | Some("1") | Some("on") => Ok(Flag(true)),
            Some(other) => Err(QueryError::InvalidFlag {
                field: key,
                value: other.to_string(),
            }),
        }
    }

    pub fn sort<K: ParamValue + Default>(&self) -> Result<K, QueryError> {
        match self.get("sort") {
            None => Ok(K::default()),
            Some(token) => {
                K::from_token(token).ok_or_else(|| QueryError::UnknownSortKey(token.to_string()))
            }
        }
    }

    pub fn page(&self) -> Result<PageIndex, QueryError> {
        match self.get("page") {
            None => Ok(PageIndex::FIRST),
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| PageIndex::new(n).ok())
                .ok_or_else(|| QueryError::InvalidPageIndex(raw.to_string())),
        }
    }
}

/// Query-string writer that skips default values.
pub struct Encoder {
    serializer: form_urlencoded::Serializer<'static, String>,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            serializer: form_urlencoded::Serializer::new(String::new()),
        }
    }

    pub fn text(&mut self, key: &str, query: &TextQuery) -> &mut Self {
        if !query.is_empty() {
            self.serializer.append_pair(key, query.as_str());
        }
        self
    }

    pub fn choice(&mut self, key: &str, choice: &Choice<String>) -> &mut Self {
        if let Choice::Only(value) = choice {
            self.serializer.append_pair(key, value);
        }
        self
    }

    pub fn choice_of<T: ParamValue>(&mut self, key: &str, choice: &Choice<T>) -> &mut Self {
        if let Choice::Only(value) = choice {
            self.serializer.append_pair(key, value.token());
        }
        self
    }

    pub fn preset<T: ParamValue + Default>(&mut self, key: &str, value: T) -> &mut Self {
        if value != T::default() {
            self.serializer.append_pair(key, value.token());
        }
        self
    }

    pub fn number<T: ToString>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.serializer.append_pair(key, &value.to_string());
        }
        self
    }

    pub fn range<T: ToString + Copy>(
        &mut self,
        min_key: &str,
        max_key: &str,
        range: &Range<T>,
    ) -> &mut Self {
        self.number(min_key, range.min);
        self.number(max_key, range.max)
    }

    pub fn flag(&mut self, key: &str, flag: Flag) -> &mut Self {
        if flag.is_set() {
            self.serializer.append_pair(key, "true");
        }
        self
    }

    pub fn finish(mut self) -> String {
        self.serializer.finish()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// The owned state of one listing page: what to match, how to order, and
/// which window to show.
///
/// Changing the criteria or the sort key always lands back on page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<C, K> {
    criteria: C,
    sort: K,
    page: PageIndex,
}

impl<C, K> QueryState<C, K>
where
    C: QueryParams + Default + PartialEq,
    K: ParamValue + Default,
{
    pub fn new(criteria: C, sort: K) -> Self {
        Self {
            criteria,
            sort,
            page: PageIndex::FIRST,
        }
    }

    pub fn decode(query: &str) -> Result<Self, QueryError> {
        let params = Params::parse(query);
        Ok(Self {
            criteria: C::from_params(&params)?,
            sort: params.sort()?,
            page: params.page()?,
        })
    }

    pub fn encode(&self) -> String {
        let mut out = Encoder::new();
        self.criteria.to_params(&mut out);
        out.preset("sort", self.sort);
        if !self.page.is_first() {
            out.number("page", Some(self.page.get()));
        }
        out.finish()
    }

    /// Link to `page` of the same query under `base` (e.g. "/properties").
    pub fn page_link(&self, base: &str, page: PageIndex) -> String
    where
        C: Clone,
    {
        with_query(base, &self.clone().with_page(page).encode())
    }

    /// Link to the same query with a different sort order (page resets).
    pub fn sort_link(&self, base: &str, sort: K) -> String
    where
        C: Clone,
    {
        with_query(base, &self.clone().with_sort(sort).encode())
    }

    /// Link to the same sort order with every facet cleared.
    pub fn clear_link(&self, base: &str) -> String
    where
        C: Clone,
    {
        with_query(base, &self.clone().with_criteria(C::default()).encode())
    }

    pub fn with_criteria(self, criteria: C) -> Self {
        Self {
            criteria,
            sort: self.sort,
            page: PageIndex::FIRST,
        }
    }

    pub fn with_sort(self, sort: K) -> Self {
        Self {
            criteria: self.criteria,
            sort,
            page: PageIndex::FIRST,
        }
    }

    pub fn with_page(self, page: PageIndex) -> Self {
        Self { page, ..self }
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn sort(&self) -> K {
        self.sort
    }

    pub fn page(&self) -> PageIndex {
        self.page
    }

    /// True when any facet is narrowed, i.e. a "clear filters" link makes sense.
    pub fn is_filtered(&self) -> bool {
        self.criteria != C::default()
    }
}

impl<C, K> Default for QueryState<C, K>
where
    C: QueryParams + Default + PartialEq,
    K: ParamValue + Default,
{
    fn default() -> Self {
        Self::new(C::default(), K::default())
    }
}

fn with_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{query}")
    }
}
