use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid service catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("service catalog has an entry with an empty slug")]
    EmptySlug,

    #[error("service `{0}` is listed more than once")]
    DuplicateService(String),

    #[error("photo {index} in album `{album}` of service `{service}` has no image url")]
    MissingHref {
        service: String,
        album: String,
        index: usize,
    },

    #[error("dom query `{selector}` failed")]
    Query { selector: &'static str },
}
