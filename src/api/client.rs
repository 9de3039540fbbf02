use super::error::{ApiClientError, EmptyTokenError, IntoApiClientError};
use super::links::{GATEWAY, GATEWAY_BOT, SCHEDULED_MAINTENANCES};
use super::model::{Gateway, GatewayBot, MaintenanceWindow, ScheduledMaintenances};
use crate::config::ClientConfig;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    authorized: bool,
}

impl ApiClient {
    pub fn new(token: &str) -> Result<Self, ApiClientError> {
        Self::from_config(&ClientConfig {
            token: token.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        let authorized = !config.token.is_empty();

        if authorized {
            let mut auth = HeaderValue::from_str(&config.token).bx()?;
            auth.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().bx()?;

        debug!(
            authorized,
            timeout_secs = config.timeout_secs,
            "api client ready"
        );
        Ok(Self { client, authorized })
    }

    /// GETs `url` and decodes the body, treating any non-2xx status as an error.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiClientError> {
        let response = self.client.get(url).send().await.bx()?;
        debug!(status = %response.status(), "response");

        response.error_for_status().bx()?.json().await.bx()
    }

    pub async fn get_gateway(&self, bot: bool) -> Result<Url, ApiClientError> {
        if bot {
            if !self.authorized {
                return Err(EmptyTokenError).bx();
            }
            self.gateway_from(GATEWAY_BOT).await
        } else {
            self.gateway_from(GATEWAY).await
        }
    }

    /// Reads the `url` field of a gateway response. Both gateway endpoints
    /// carry it.
    pub(crate) async fn gateway_from(&self, endpoint: &str) -> Result<Url, ApiClientError> {
        let gateway: Gateway = self.get_json(endpoint).await?;
        Url::parse(&gateway.url).bx()
    }

    /// Bot gateway info; needs a token, so fails fast without one.
    pub async fn get_gateway_bot(&self) -> Result<GatewayBot, ApiClientError> {
        if !self.authorized {
            return Err(EmptyTokenError).bx();
        }
        self.get_json(GATEWAY_BOT).await
    }

    pub async fn scheduled_maintenances(
        &self,
        window: MaintenanceWindow,
    ) -> Result<ScheduledMaintenances, ApiClientError> {
        self.maintenances_from(SCHEDULED_MAINTENANCES, window).await
    }

    /// `base` is the scheduled-maintenances directory, with trailing slash.
    pub(crate) async fn maintenances_from(
        &self,
        base: &str,
        window: MaintenanceWindow,
    ) -> Result<ScheduledMaintenances, ApiClientError> {
        let url = format!("{}{}", base, window.file_name());
        self.get_json(&url).await
    }

    /// Appends the API version and json encoding to a gateway url returned
    /// by [`ApiClient::get_gateway`].
    pub fn gateway_connect_url(mut gateway_url: Url) -> Url {
        gateway_url
            .query_pairs_mut()
            .append_pair("v", crate::API_VERSION)
            .append_pair("encoding", "json");
        gateway_url
    }
}
