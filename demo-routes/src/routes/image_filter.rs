use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use image_effect::FilterName;
use maud::html;

use super::layout;
use crate::{
    error::AppError,
    state::State as AppState,
    storage::{ImageStore, UploadedImage, image_url},
};

/// Fields of one `POST /image_filter` submission.
#[derive(Debug, Default)]
pub struct FilterSubmission {
    pub filter_type: Option<String>,
    pub image: Option<UploadedImage>,
}

impl FilterSubmission {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = FilterSubmission::default();

        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("filter_type") => submission.filter_type = Some(field.text().await?),
                Some("users_image") => {
                    // Browsers send an empty file name when nothing was picked
                    let Some(file_name) = field.file_name().map(str::to_string) else {
                        continue;
                    };

                    if file_name.is_empty() {
                        continue;
                    }

                    let bytes = field.bytes().await?.to_vec();
                    submission.image = Some(UploadedImage { file_name, bytes });
                }
                _ => (),
            }
        }

        Ok(submission)
    }

    /// Reject unknown filters before anything touches the disk.
    pub fn validate(self) -> Result<(FilterName, UploadedImage), AppError> {
        let filter_type = self
            .filter_type
            .ok_or_else(|| AppError::MalformedForm("filter_type is required".to_string()))?;

        let filter = FilterName::lookup(&filter_type).ok_or(AppError::UnknownFilter(filter_type))?;
        let image = self.image.ok_or(AppError::MissingImage)?;

        Ok((filter, image))
    }
}

/// Persist the upload, then filter it in place. Returns the stored path.
///
/// If filtering fails the untransformed upload stays on disk.
pub fn process_upload(
    store: &ImageStore,
    image: &UploadedImage,
    filter: FilterName,
) -> Result<PathBuf, AppError> {
    let path = store.save(image, filter.as_str())?;
    image_effect::apply_filter(&path, filter.as_str())?;
    log::info!("applied {filter} to {}", path.display());

    Ok(path)
}

fn render(image_url: Option<&str>) -> Html<String> {
    let page = layout(
        "Image filter",
        html! {
            form action="/image_filter" method="post" enctype="multipart/form-data" {
                input type="file" name="users_image" accept="image/*";
                select name="filter_type" {
                    @for name in FilterName::all_names() {
                        option value=(name) { (name) }
                    }
                }
                button type="submit" { "Apply filter" }
            }
            @if let Some(url) = image_url {
                figure {
                    img src=(url) alt="Filtered image";
                    figcaption { a href=(url) { (url) } }
                }
            }
        },
    );

    Html(page.into_string())
}

pub async fn image_filter_form_handler() -> Html<String> {
    render(None)
}

pub async fn image_filter_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let (filter, image) = FilterSubmission::from_multipart(multipart).await?.validate()?;

    let store = state.images.clone();
    let path = tokio::task::spawn_blocking(move || process_upload(&store, &image, filter))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    Ok(render(Some(&image_url(&path))))
}
