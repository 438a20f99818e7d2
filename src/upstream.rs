//! Client for the upstream model-catalog service.

use async_trait::async_trait;
use reqwest::{Client, IntoUrl, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::catalog::ModelDescriptor;

const MODELS_ALL_PATH: &str = "/models/all";

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("invalid catalog api base: {0}")]
    InvalidApiBase(reqwest::Error),

    #[error("invalid catalog endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("a request to the catalog service failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("the catalog service answered with status {0}")]
    BadStatus(StatusCode),

    #[error("could not decode the catalog response: {0}")]
    MalformedBody(#[source] reqwest::Error),
}

// The full listing arrives wrapped in a "models" field.
#[derive(Deserialize)]
struct CatalogList {
    models: Vec<ModelDescriptor>,
}

/// Where the handler obtains its catalog. The production source is
/// [`CatalogClient`]; tests substitute stubs.
#[async_trait]
pub(crate) trait CatalogSource: Send + Sync {
    /// Fetches the full model catalog, in upstream order.
    async fn models(&self) -> Result<Vec<ModelDescriptor>, Error>;
}

pub(crate) struct CatalogClient {
    api_base: Url,
    client: Client,
}

impl CatalogClient {
    pub(crate) fn with_api_base<U: IntoUrl>(api_base: U) -> Result<CatalogClient, Error> {
        Ok(CatalogClient {
            api_base: api_base.into_url().map_err(Error::InvalidApiBase)?,
            client: Client::new(),
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn models(&self) -> Result<Vec<ModelDescriptor>, Error> {
        let url = self.api_base.join(MODELS_ALL_PATH)?;

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let status = res.status();

        if !status.is_success() {
            return Err(Error::BadStatus(status));
        }

        let list: CatalogList = res.json().await.map_err(|err| {
            if err.is_decode() {
                Error::MalformedBody(err)
            } else {
                Error::RequestFailed(err)
            }
        })?;

        Ok(list.models)
    }
}
