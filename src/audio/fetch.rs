use std::io::Read;

use crate::foundation::{
    config::ResolverConfig,
    error::{WidgetError, WidgetResult},
};

/// Blocking download capability used by inline resolution of remote URLs.
pub trait HttpFetch: Send + Sync {
    /// Fetch the full response body of `url`. Non-2xx responses are errors.
    fn fetch(&self, url: &str) -> WidgetResult<Vec<u8>>;
}

/// [`HttpFetch`] backed by a shared `ureq` agent.
pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    /// Build an agent with the timeouts from `config`.
    pub fn new(config: &ResolverConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().timeout_connect(config.connect_timeout);
        if let Some(timeout) = config.fetch_timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
        }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl HttpFetch for UreqFetcher {
    #[tracing::instrument(skip(self))]
    fn fetch(&self, url: &str) -> WidgetResult<Vec<u8>> {
        let response = match self.agent.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                return Err(WidgetError::download(
                    url,
                    format!("status {status} {}", resp.status_text()),
                ));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(WidgetError::download(url, transport.to_string()));
            }
        };

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| WidgetError::download(url, format!("read body: {e}")))?;
        tracing::debug!(bytes = body.len(), "downloaded");
        Ok(body)
    }
}
