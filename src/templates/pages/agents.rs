use crate::domain::agent::AgentSegment;
use crate::domain::{Agent, AgentCriteria, AgentSort};
use crate::search::{Page, QueryState};
use crate::templates::components::{
    empty_state, pager, past_last_page, rating_stars, showing, value_select,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub type AgentQuery = QueryState<AgentCriteria, AgentSort>;

pub fn agents_page(state: &AgentQuery, page: &Page<&Agent>) -> Markup {
    let c = state.criteria();

    desktop_layout(
        "Our Agents",
        html! {
            main class="container" {
                h1 { "Meet Our Agents" }

                form class="card search-form" action="/agents" method="get" {
                    input type="search" name="search" value=(c.search.as_str())
                        placeholder="Search agents by name, title or bio";
                    label for="filter" { "Show" }
                    (value_select::<AgentSegment>("filter", c.segment))
                    label for="sort" { "Sort by" }
                    (value_select("sort", state.sort()))
                    button type="submit" class="primary" { "Search" }
                }

                (showing(page, "agents"))

                @if page.is_past_end() {
                    (past_last_page(state, page, "/agents"))
                } @else if page.is_empty() {
                    (empty_state("agents", &state.clear_link("/agents")))
                } @else {
                    div class="grid" {
                        @for agent in &page.items {
                            (agent_card(agent))
                        }
                    }
                }

                (pager(state, page, "/agents"))
            }
        },
    )
}

fn agent_card(agent: &Agent) -> Markup {
    html! {
        article class="card agent-card" {
            @if !agent.photo.is_empty() {
                img src=(agent.photo) alt=(agent.name) loading="lazy";
            }
            h3 { (agent.name) }
            p class="muted" { (agent.title) }
            (rating_stars(agent.rating))
            p { (agent.bio) }
            ul class="facts" {
                li { strong { (agent.listings_count) } " active listings" }
                li { strong { (agent.sold_count) } " sold" }
            }
            @if !agent.specialties.is_empty() {
                p class="tags" {
                    @for specialty in agent.specialties.iter().take(3) {
                        span class="badge" { (specialty) }
                    }
                }
            }
            @if !agent.languages.is_empty() {
                p class="muted" { "Speaks " (agent.languages.join(", ")) }
            }
            p {
                a href=(format!("tel:{}", agent.phone)) { (agent.phone) }
                " · "
                a href=(format!("mailto:{}", agent.email)) { (agent.email) }
            }
        }
    }
}
