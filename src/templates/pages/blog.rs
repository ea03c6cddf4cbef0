use crate::domain::{Post, PostCriteria, PostSort};
use crate::search::QueryState;
use crate::search::{Choice, Page};
use crate::templates::components::format::{format_date, slugify, truncate};
use crate::templates::components::{
    empty_state, pager, past_last_page, showing, text_select, value_select,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub type PostQuery = QueryState<PostCriteria, PostSort>;

const EXCERPT_CHARS: usize = 160;

pub struct BlogVm<'a> {
    pub state: &'a PostQuery,
    pub page: &'a Page<&'a Post>,
    pub featured: Vec<&'a Post>,
    pub categories: Vec<&'a str>,
    pub tags: Vec<&'a str>,
}

pub fn blog_page(vm: &BlogVm) -> Markup {
    let state = vm.state;
    let c = state.criteria();

    desktop_layout(
        "Blog",
        html! {
            main class="container" {
                h1 { "Real Estate Blog" }
                p { "Market insights, buying guides and neighborhood news." }

                form class="card search-form" action="/blog" method="get" {
                    input type="search" name="search" value=(c.search.as_str())
                        placeholder="Search articles";
                    label for="category" { "Category" }
                    (text_select("category", "All Categories", &vm.categories, &c.category))
                    label for="tag" { "Tag" }
                    (text_select("tag", "All Tags", &vm.tags, &c.tag))
                    label for="sort" { "Sort by" }
                    (value_select("sort", state.sort()))
                    button type="submit" class="primary" { "Search" }
                }

                @if !vm.featured.is_empty() {
                    section class="featured-posts" {
                        h2 { "Featured Articles" }
                        div class="grid" {
                            @for post in &vm.featured {
                                (post_card(post))
                            }
                        }
                    }
                }

                h2 { "Latest Articles" }
                (showing(vm.page, "articles"))

                @if vm.page.is_past_end() {
                    (past_last_page(state, vm.page, "/blog"))
                } @else if vm.page.is_empty() {
                    (empty_state("articles", &state.clear_link("/blog")))
                } @else {
                    div class="grid" {
                        @for post in &vm.page.items {
                            (post_card(post))
                        }
                    }
                }

                (pager(state, vm.page, "/blog"))

                aside class="tag-cloud" {
                    h3 { "Popular Tags" }
                    @for tag in &vm.tags {
                        a class="badge" href=(tag_link(tag)) { (tag) }
                    }
                }
            }
        },
    )
}

fn tag_link(tag: &str) -> String {
    let criteria = PostCriteria {
        tag: Choice::Only(tag.to_string()),
        ..Default::default()
    };
    let query = PostQuery::new(criteria, PostSort::default()).encode();
    format!("/blog?{query}")
}

fn post_card(post: &Post) -> Markup {
    html! {
        article class="card post-card" {
            @if !post.image.is_empty() {
                img src=(post.image) alt=(post.title) loading="lazy";
            }
            span class=(format!("badge category-{}", slugify(&post.category))) { (post.category) }
            h3 { a href=(post.url()) { (post.title) } }
            p class="muted" {
                (format_date(post.date)) " · " (post.read_time) " min read · " (post.author)
            }
            p { (truncate(&post.excerpt, EXCERPT_CHARS)) }
            p class="tags" {
                @for tag in post.tags.iter().take(2) {
                    span class="badge" { (tag) }
                }
            }
        }
    }
}

pub fn post_page(post: &Post, related: &[&Post]) -> Markup {
    desktop_layout(
        &post.title,
        html! {
            main class="container narrow" {
                p { a href="/blog" { "← Back to Blog" } }
                span class=(format!("badge category-{}", slugify(&post.category))) { (post.category) }
                h1 { (post.title) }
                p class="muted" {
                    "By " (post.author) " · " (format_date(post.date)) " · "
                    (post.read_time) " min read"
                }
                @if !post.image.is_empty() {
                    img src=(post.image) alt=(post.title);
                }
                p class="lead" { (post.excerpt) }
                @for paragraph in post.content.split("\n\n") {
                    p { (paragraph) }
                }
                p class="tags" {
                    @for tag in &post.tags {
                        a class="badge" href=(tag_link(tag)) { (tag) }
                    }
                }

                @if !related.is_empty() {
                    section {
                        h2 { "Related Articles" }
                        ul {
                            @for other in related {
                                li { a href=(other.url()) { (other.title) } }
                            }
                        }
                    }
                }
            }
        },
    )
}
