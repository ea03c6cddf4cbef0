use crate::search::{
    collate, Choice, Criteria, Encoder, ParamValue, Params, QueryError, QueryParams, SortKey,
    TextQuery,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A blog article from `blog.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    pub date: NaiveDate,
    /// Minutes.
    pub read_time: u32,
    #[serde(default)]
    pub image: String,
}

impl Post {
    pub fn url(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostCriteria {
    /// Matched against title, excerpt and content.
    pub search: TextQuery,
    pub category: Choice<String>,
    pub tag: Choice<String>,
}

impl Criteria<Post> for PostCriteria {
    fn matches(&self, post: &Post) -> bool {
        self.search
            .matches_any([post.title.as_str(), post.excerpt.as_str(), post.content.as_str()])
            && self.category.admits(&post.category)
            && self.tag.admits_any_of(&post.tags)
    }
}

impl QueryParams for PostCriteria {
    fn from_params(params: &Params) -> Result<Self, QueryError> {
        Ok(Self {
            search: params.text("search"),
            category: params.choice("category"),
            tag: params.choice("tag"),
        })
    }

    fn to_params(&self, out: &mut Encoder) {
        out.text("search", &self.search)
            .choice("category", &self.category)
            .choice("tag", &self.tag);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl SortKey<Post> for PostSort {
    fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            PostSort::Newest => b.date.cmp(&a.date),
            PostSort::Oldest => a.date.cmp(&b.date),
            PostSort::Title => collate(&a.title, &b.title),
        }
    }
}

impl ParamValue for PostSort {
    const VARIANTS: &'static [Self] = &[PostSort::Newest, PostSort::Oldest, PostSort::Title];

    fn token(self) -> &'static str {
        match self {
            PostSort::Newest => "newest",
            PostSort::Oldest => "oldest",
            PostSort::Title => "title",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PostSort::Newest => "Newest First",
            PostSort::Oldest => "Oldest First",
            PostSort::Title => "Title",
        }
    }
}

/// Posts with an id up to this one are pinned as featured articles.
pub const FEATURED_MAX_ID: u32 = 2;

/// Pinned articles shown above the listing, in catalog order. Unaffected by
/// the current search.
pub fn featured(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| p.id <= FEATURED_MAX_ID).collect()
}

/// Distinct categories in first-seen order.
pub fn categories(posts: &[Post]) -> Vec<&str> {
    distinct(posts.iter().map(|p| p.category.as_str()))
}

/// Distinct tags in first-seen order.
pub fn tags(posts: &[Post]) -> Vec<&str> {
    distinct(posts.iter().flat_map(|p| p.tags.iter().map(String::as_str)))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
