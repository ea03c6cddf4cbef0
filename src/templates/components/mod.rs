use crate::search::{Choice, ParamValue};
use maud::{html, Markup};

pub mod error;
pub mod format;
pub mod pager;
pub mod property_card;

pub use error::html_error_response;
pub use pager::{pager, past_last_page, showing};
pub use property_card::property_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// `<select>` over a closed set of values with a leading "all" option.
pub fn choice_select<T: ParamValue>(name: &str, all_label: &str, current: &Choice<T>) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="all" selected[current.is_all()] { (all_label) }
            @for value in T::VARIANTS {
                option value=(value.token()) selected[current.selected() == Some(value)] {
                    (value.label())
                }
            }
        }
    }
}

/// `<select>` over free-form values (neighborhoods, tags, ...).
pub fn text_select(name: &str, all_label: &str, values: &[&str], current: &Choice<String>) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="all" selected[current.is_all()] { (all_label) }
            @for value in values {
                option value=(value) selected[current.selected().map(String::as_str) == Some(*value)] {
                    (value)
                }
            }
        }
    }
}

/// `<select>` for sort keys and presets, where every variant is a real value.
pub fn value_select<T: ParamValue>(name: &str, current: T) -> Markup {
    html! {
        select name=(name) id=(name) {
            @for value in T::VARIANTS {
                option value=(value.token()) selected[*value == current] { (value.label()) }
            }
        }
    }
}

/// Shown instead of a list when a query matched nothing.
pub fn empty_state(what: &str, clear_href: &str) -> Markup {
    html! {
        div class="card empty-state" {
            h3 { "No " (what) " found" }
            p { "Try adjusting your search or filters to find " (what) "." }
            a class="btn" href=(clear_href) { "Clear Filters" }
        }
    }
}

pub fn rating_stars(rating: f32) -> Markup {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    html! {
        span class="rating" title=(format!("{rating:.1}")) {
            @for i in 0..5 {
                @if i < full { "★" } @else { "☆" }
            }
            " " (format!("{rating:.1}"))
        }
    }
}
