use axum::{extract::Query, response::Html};
use maud::html;
use serde::Deserialize;

use super::layout;

pub const ANIMAL_FACTS: [(&str, &str); 5] = [
    (
        "koala",
        "Koala fingerprints are so close to humans' that they could taint crime scenes.",
    ),
    ("parrot", "Parrots will selflessly help each other out."),
    ("mantis shrimp", "The mantis shrimp has the world's fastest punch."),
    ("lion", "Female lions do 90 percent of the hunting."),
    ("narwhal", "Narwhal tusks are really an \"inside out\" tooth."),
];

pub fn all_animals() -> Vec<&'static str> {
    ANIMAL_FACTS.iter().map(|(animal, _)| *animal).collect()
}

/// Unknown animals simply have no fact.
pub fn animal_fact(animal: &str) -> Option<&'static str> {
    ANIMAL_FACTS
        .iter()
        .find(|(name, _)| *name == animal)
        .map(|(_, fact)| *fact)
}

#[derive(Deserialize, Default, Debug)]
pub struct AnimalQuery {
    pub animal: Option<String>,
}

pub async fn animal_facts_handler(Query(query): Query<AnimalQuery>) -> Html<String> {
    let fact = query.animal.as_deref().and_then(animal_fact);

    let page = layout(
        "Animal facts",
        html! {
            form action="/animal_facts" method="get" {
                select name="animal" {
                    @for animal in all_animals() {
                        option value=(animal) selected[query.animal.as_deref() == Some(animal)] { (animal) }
                    }
                }
                button type="submit" { "Tell me a fact" }
            }
            @if let Some(fact) = fact {
                p class="fact" { (fact) }
            }
        },
    );

    Html(page.into_string())
}
