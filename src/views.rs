//! Server-rendered pages. Page shells are read from disk on every request;
//! the data fragments spliced into their `{placeholder}` markers are built
//! with maud, which escapes every dynamic value.

use crate::config::{TEMPLATE_ACTORS, TEMPLATE_MAIN, TEMPLATE_MOVIES};
use crate::error::AppResult;
use crate::model::{Actor, Movie};
use crate::rating::RatingPayload;
use maud::{html, Markup};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Views {
    dir: PathBuf,
}

/// Rating lookup result plus the local record for the same title, if any.
pub struct RatingView<'a> {
    pub title: &'a str,
    pub payload: &'a RatingPayload,
    pub local: Option<&'a Movie>,
}

impl Views {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Views { dir: dir.into() }
    }

    async fn load(&self, name: &str) -> AppResult<String> {
        let path = self.dir.join(name);
        tracing::debug!(path = %path.display(), "loading template");
        Ok(tokio::fs::read_to_string(path).await?)
    }

    pub async fn main_page(&self, movies: &[Movie], rating: Option<RatingView<'_>>) -> AppResult<String> {
        let template = self.load(TEMPLATE_MAIN).await?;
        let rating = match rating {
            Some(r) => rating_section(&r),
            None => html! {},
        };
        Ok(render(&template, &[("movies", movie_list(movies)), ("rating", rating)]))
    }

    pub async fn movies_page(&self, movies: &[Movie]) -> AppResult<String> {
        let template = self.load(TEMPLATE_MOVIES).await?;
        Ok(render(&template, &[("movies", movie_list(movies))]))
    }

    pub async fn actors_page(&self, actors: &[Actor]) -> AppResult<String> {
        let template = self.load(TEMPLATE_ACTORS).await?;
        Ok(render(&template, &[("actors", actor_list(actors))]))
    }
}

/// Single pass over the template: each known `{key}` marker is replaced and
/// the inserted markup is never scanned again. Unknown markers stay as written.
pub fn render(template: &str, params: &[(&str, Markup)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = after.find('}').and_then(|close| {
            let key = &after[..close];
            params.iter().find(|(k, _)| *k == key).map(|(_, v)| (v, close))
        });
        match hit {
            Some((markup, close)) => {
                out.push_str(&markup.0);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn movie_list(movies: &[Movie]) -> Markup {
    html! {
        @if movies.is_empty() {
            p class="empty" { "No movies yet." }
        } @else {
            ul class="movies" {
                @for m in movies {
                    li id=(m.id.to_string()) {
                        img src=(m.poster) alt="";
                        a href=(m.trailer) { (m.title) }
                        " (" (m.year) ") "
                        em { (m.genre) }
                        p { (m.description) }
                    }
                }
            }
        }
    }
}

fn actor_list(actors: &[Actor]) -> Markup {
    html! {
        @if actors.is_empty() {
            p class="empty" { "No actors yet." }
        } @else {
            ul class="actors" {
                @for a in actors {
                    li id=(a.id.to_string()) {
                        (a.full_name) " "
                        span { (a.birth_date) }
                    }
                }
            }
        }
    }
}

fn rating_section(view: &RatingView<'_>) -> Markup {
    let payload = view.payload;
    let shown_title = payload.get("Title").and_then(Value::as_str).unwrap_or(view.title);
    let ratings = payload
        .get("Ratings")
        .and_then(Value::as_array)
        .map(|r| r.as_slice())
        .unwrap_or(&[]);

    html! {
        section class="rating" {
            h2 { (shown_title) }
            @if let Some(year) = payload.get("Year").and_then(Value::as_str) {
                p class="year" { (year) }
            }
            @if ratings.is_empty() {
                p { "No ratings available." }
            } @else {
                ul {
                    @for r in ratings {
                        li {
                            (r.get("Source").and_then(Value::as_str).unwrap_or("unknown"))
                            ": "
                            (r.get("Value").and_then(Value::as_str).unwrap_or("-"))
                        }
                    }
                }
            }
            @match view.local {
                Some(m) => {
                    p class="local" {
                        "In catalogue as "
                        a href=(format!("/movies#{}", m.id)) { (m.title) }
                    }
                }
                None => {
                    p class="local" { "Not in catalogue." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::PreEscaped;
    use serde_json::json;
    use uuid::Uuid;

    fn movie(title: &str) -> Movie {
        Movie {
            id: Uuid::new_v4(),
            title: title.into(),
            description: "d".into(),
            genre: "g".into(),
            year: 2020,
            trailer: "https://example.com/t?a=1&b=2".into(),
            poster: "p".into(),
        }
    }

    #[test]
    fn render_replaces_known_markers_only() {
        let out = render("<b>{movies}</b>{other}{", &[("movies", PreEscaped("list".into()))]);
        assert_eq!(out, "<b>list</b>{other}{");
    }

    #[test]
    fn inserted_markup_is_not_rescanned() {
        let template = "<main>{movies}</main><aside>{rating}</aside>";
        let out = render(
            template,
            &[("movies", movie_list(&[movie("{rating}")])), ("rating", PreEscaped("R".into()))],
        );
        assert!(out.contains(">{rating}</a>"));
        assert_eq!(out.matches('R').count(), 1);
    }

    #[test]
    fn movie_values_are_escaped() {
        let html = movie_list(&[movie("<script>alert(1)</script>")]).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a=1&amp;b=2"));
    }

    #[test]
    fn rating_section_lists_sources_and_local_match() {
        let payload = json!({
            "Title": "Heat",
            "Year": "1995",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.3/10"}]
        });
        let payload = payload.as_object().unwrap().clone();
        let local = movie("Heat");
        let html = rating_section(&RatingView { title: "Heat", payload: &payload, local: Some(&local) })
            .into_string();
        assert!(html.contains("Internet Movie Database: 8.3/10"));
        assert!(html.contains("In catalogue"));
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let views = Views::new("/nonexistent-template-dir");
        assert!(views.movies_page(&[]).await.is_err());
    }
}
