use axum::response::Html;
use maud::html;

use super::layout;

const LINKS: [(&str, &str); 4] = [
    ("/compliments", "Compliments"),
    ("/animal_facts", "Animal facts"),
    ("/image_filter", "Image filter"),
    ("/gif_search", "GIF search"),
];

pub async fn home_handler() -> Html<String> {
    let page = layout(
        "Demo routes",
        html! {
            ul {
                @for (href, label) in LINKS {
                    li { a href=(href) { (label) } }
                }
            }
        },
    );

    Html(page.into_string())
}
