use reqwest::Client;

const USER_AGENT: &str = concat!("salesdeck/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client. No request timeout is configured; the transport defaults apply.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}
