use axum::{
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use maud::html;
use rand::seq::IndexedRandom;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use super::layout;

pub const COMPLIMENTS: [&str; 23] = [
    "awesome",
    "beatific",
    "blithesome",
    "conscientious",
    "coruscant",
    "erudite",
    "exquisite",
    "fabulous",
    "fantastic",
    "gorgeous",
    "indubitable",
    "ineffable",
    "magnificent",
    "outstanding",
    "propitioius",
    "remarkable",
    "spectacular",
    "splendiferous",
    "stupendous",
    "super",
    "upbeat",
    "wondrous",
    "zoetic",
];

/// Validation failures; the message is shown back on the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplimentsError {
    #[error("Name is required")]
    MissingName,

    #[error("Number of compliments must be a number")]
    NotANumber,

    #[error("Number of compliments requested exceeds available compliments.")]
    TooMany,
}

#[derive(Deserialize, Default, Debug)]
pub struct ComplimentsQuery {
    pub users_name: Option<String>,
    pub wants_compliments: Option<String>,
    pub num_compliments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplimentsRequest {
    pub users_name: String,
    pub wants_compliments: bool,
    pub num_compliments: usize,
}

impl ComplimentsQuery {
    pub fn validate(&self) -> Result<ComplimentsRequest, ComplimentsError> {
        let users_name = self
            .users_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ComplimentsError::MissingName)?;

        let wants_compliments = self.wants_compliments.as_deref() == Some("on");

        let count = self.num_compliments.as_deref().unwrap_or("1");
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ComplimentsError::NotANumber);
        }

        // All digits, so a parse failure can only be an overflow
        let num_compliments = count.parse::<usize>().map_err(|_| ComplimentsError::TooMany)?;
        if num_compliments > COMPLIMENTS.len() {
            return Err(ComplimentsError::TooMany);
        }

        Ok(ComplimentsRequest {
            users_name: users_name.to_string(),
            wants_compliments,
            num_compliments,
        })
    }
}

/// `count` distinct phrases, in random order.
pub fn sample_compliments(count: usize) -> Vec<&'static str> {
    COMPLIMENTS
        .choose_multiple(&mut rand::rng(), count)
        .copied()
        .collect()
}

/// Redirect to `path`, carrying `message` in the `flash` query parameter.
pub fn flash_redirect(path: &str, message: &str) -> Redirect {
    match Url::parse_with_params(&format!("http://localhost{path}"), [("flash", message)]) {
        Ok(url) => Redirect::to(&format!("{}?{}", url.path(), url.query().unwrap_or_default())),
        Err(_) => Redirect::to(path),
    }
}

#[derive(Deserialize, Default, Debug)]
pub struct FlashQuery {
    pub flash: Option<String>,
}

pub async fn compliments_form_handler(Query(query): Query<FlashQuery>) -> Html<String> {
    let page = layout(
        "Compliments",
        html! {
            @if let Some(message) = &query.flash {
                p class="flash" { (message) }
            }
            form action="/compliments_results" method="get" {
                label { "Your name " input type="text" name="users_name"; }
                label { input type="checkbox" name="wants_compliments"; " I want compliments" }
                label {
                    "How many? "
                    input type="number" name="num_compliments" value="1" min="1" max=(COMPLIMENTS.len());
                }
                button type="submit" { "Submit" }
            }
        },
    );

    Html(page.into_string())
}

pub async fn compliments_results_handler(Query(query): Query<ComplimentsQuery>) -> Response {
    let request = match query.validate() {
        Ok(request) => request,
        Err(e) => {
            log::info!("compliments rejected: {e}");
            return flash_redirect("/compliments", &e.to_string()).into_response();
        }
    };

    let compliments = if request.wants_compliments {
        sample_compliments(request.num_compliments)
    } else {
        vec![]
    };

    log::debug!("{request:?} -> {compliments:?}");

    let page = layout(
        "Compliments",
        html! {
            p { "Hello " (request.users_name) "!" }
            @if request.wants_compliments {
                p { "Here are your " (request.num_compliments) " compliments:" }
                ul {
                    @for compliment in &compliments {
                        li { "You are " (compliment) "!" }
                    }
                }
            } @else {
                p { "Have a great day!" }
            }
            a href="/compliments" { "Back" }
        },
    );

    Html(page.into_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use std::collections::HashSet;

    fn query(name: Option<&str>, wants: Option<&str>, count: Option<&str>) -> ComplimentsQuery {
        ComplimentsQuery {
            users_name: name.map(String::from),
            wants_compliments: wants.map(String::from),
            num_compliments: count.map(String::from),
        }
    }

    #[test]
    fn test_validate_accepts_full_range() {
        for count in 1..=COMPLIMENTS.len() {
            let request = query(Some("Ann"), Some("on"), Some(&count.to_string()))
                .validate()
                .unwrap();
            assert_eq!(request.num_compliments, count);
            assert!(request.wants_compliments);
        }
    }

    #[test]
    fn test_validate_defaults_to_one() {
        let request = query(Some("Ann"), None, None).validate().unwrap();
        assert_eq!(request.num_compliments, 1);
        assert!(!request.wants_compliments);
    }

    #[test]
    fn test_validate_errors() {
        assert_eq!(
            query(None, Some("on"), Some("3")).validate(),
            Err(ComplimentsError::MissingName)
        );
        assert_eq!(
            query(Some(""), Some("on"), Some("3")).validate(),
            Err(ComplimentsError::MissingName)
        );

        for count in ["", "abc", "-1", "2.5", " 3", "٣"] {
            assert_eq!(
                query(Some("Ann"), Some("on"), Some(count)).validate(),
                Err(ComplimentsError::NotANumber),
                "{count:?}"
            );
        }

        for count in ["24", "100", "99999999999999999999999999"] {
            assert_eq!(
                query(Some("Ann"), Some("on"), Some(count)).validate(),
                Err(ComplimentsError::TooMany),
                "{count:?}"
            );
        }
    }

    #[test]
    fn test_compliment_list_is_unchanged() {
        let unique: HashSet<_> = COMPLIMENTS.iter().collect();
        assert_eq!(unique.len(), 23);
        assert!(COMPLIMENTS.contains(&"propitioius"));
        assert!(COMPLIMENTS.contains(&"zoetic"));
    }

    #[test]
    fn test_sample_is_distinct() {
        for count in 0..=COMPLIMENTS.len() {
            let sample = sample_compliments(count);
            assert_eq!(sample.len(), count);

            let unique: HashSet<_> = sample.iter().collect();
            assert_eq!(unique.len(), count);
            assert!(sample.iter().all(|c| COMPLIMENTS.contains(c)));
        }
    }

    #[test]
    fn test_flash_redirect_encodes_message() {
        let response = flash_redirect("/compliments", "Name is required").into_response();

        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            "/compliments?flash=Name+is+required"
        );
    }
}
