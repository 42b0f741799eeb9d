pub mod animal_facts;
pub mod compliments;
pub mod gif_search;
pub mod home;
pub mod image_filter;

pub use animal_facts::animal_facts_handler;
pub use compliments::{compliments_form_handler, compliments_results_handler};
pub use gif_search::{gif_search_form_handler, gif_search_handler};
pub use home::home_handler;
pub use image_filter::{image_filter_form_handler, image_filter_handler};

use maud::{DOCTYPE, Markup, html};

/// Shared page chrome for every route.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}
