use std::sync::Arc;

use anyhow::{Context, Result};
use gif_search::GifSearch;

use super::{config::Config, storage::ImageStore};

pub struct State {
    pub config: Config,
    pub images: ImageStore,
    pub gif_search: GifSearch,
}

impl State {
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let images = ImageStore::open(config.images_dir())
            .with_context(|| format!("create {} failed", config.images_dir().display()))?;

        let gif_search =
            GifSearch::new(config.gif.clone()).with_context(|| "build gif search client failed")?;

        Ok(Arc::new(Self {
            config,
            images,
            gif_search,
        }))
    }
}
