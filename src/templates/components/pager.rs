use crate::search::{Page, PageIndex, ParamValue, QueryParams, QueryState};
use maud::{html, Markup};

/// Previous / numbered / Next links. Every link keeps the current criteria
/// and sort order; only the page number changes.
pub fn pager<C, K, T>(state: &QueryState<C, K>, page: &Page<T>, base: &str) -> Markup
where
    C: QueryParams + Default + PartialEq + Clone,
    K: ParamValue + Default,
{
    if page.total_pages <= 1 {
        return html! {};
    }

    let numbers = (1..=page.total_pages).filter_map(|n| PageIndex::new(n).ok());

    html! {
        nav class="pager" aria-label="Pagination" {
            @match page.previous() {
                Some(prev) => a class="btn outline" rel="prev" href=(state.page_link(base, prev)) { "Previous" },
                None => span class="btn outline disabled" { "Previous" },
            }
            @for n in numbers {
                @if n == page.index {
                    span class="btn current" aria-current="page" { (n.get()) }
                } @else {
                    a class="btn outline" href=(state.page_link(base, n)) { (n.get()) }
                }
            }
            @match page.next() {
                Some(next) => a class="btn outline" rel="next" href=(state.page_link(base, next)) { "Next" },
                None => span class="btn outline disabled" { "Next" },
            }
        }
    }
}

/// Replaces the list when a stale link points past the last page. Both links
/// keep the current criteria and sort order.
pub fn past_last_page<C, K, T>(state: &QueryState<C, K>, page: &Page<T>, base: &str) -> Markup
where
    C: QueryParams + Default + PartialEq + Clone,
    K: ParamValue + Default,
{
    let last = PageIndex::new(page.total_pages).ok();

    html! {
        div class="card empty-state" {
            h3 { "Page " (page.index.get()) " is past the last page" }
            p {
                @if page.total_pages == 1 {
                    "This search has a single page of results."
                } @else {
                    "This search has " (page.total_pages) " pages of results."
                }
            }
            a class="btn" href=(state.page_link(base, PageIndex::FIRST)) { "Back to page 1" }
            @if let Some(last) = last.filter(|last| !last.is_first()) {
                " "
                a class="btn outline" href=(state.page_link(base, last)) { "Go to page " (last.get()) }
            }
        }
    }
}

/// "Showing 13-24 of 40 properties"
pub fn showing<T>(page: &Page<T>, noun: &str) -> Markup {
    html! {
        p class="showing" {
            @if page.is_empty() {
                "Showing 0 of " (page.total_items) " " (noun)
            } @else {
                "Showing " (page.first_position()) "-" (page.last_position())
                " of " (page.total_items) " " (noun)
            }
        }
    }
}
