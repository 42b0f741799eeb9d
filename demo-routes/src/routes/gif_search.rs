use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::Html,
};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::Value;

use super::layout;
use crate::state::State as AppState;

#[derive(Deserialize, Default, Debug)]
pub struct GifSearchForm {
    pub search_query: Option<String>,
    pub quantity: Option<String>,
}

/// Displayable url of one upstream result, v2 layout first.
pub fn gif_url(result: &Value) -> Option<&str> {
    result
        .pointer("/media_formats/gif/url")
        .or_else(|| result.pointer("/media/0/gif/url"))
        .or_else(|| result.get("url"))
        .and_then(Value::as_str)
}

fn search_form() -> Markup {
    html! {
        form action="/gif_search" method="post" {
            input type="text" name="search_query" placeholder="Search for GIFs";
            input type="number" name="quantity" value="8" min="1" max="50";
            button type="submit" { "Search" }
        }
    }
}

pub async fn gif_search_form_handler() -> Html<String> {
    Html(layout("GIF search", search_form()).into_string())
}

pub async fn gif_search_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GifSearchForm>,
) -> Html<String> {
    let query = form.search_query.unwrap_or_default();
    let gifs = state
        .gif_search
        .search(&query, form.quantity.as_deref())
        .await;

    let page = layout(
        "GIF search",
        html! {
            (search_form())
            @if gifs.is_empty() {
                p { "No GIFs found." }
            } @else {
                div class="gifs" {
                    @for gif in &gifs {
                        @if let Some(url) = gif_url(gif) {
                            img src=(url)
                                alt=(gif.get("content_description").and_then(Value::as_str).unwrap_or(&query));
                        }
                    }
                }
            }
        },
    );

    Html(page.into_string())
}
