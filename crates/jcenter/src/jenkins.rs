use crate::prelude::*;
use log::debug;

/// Response header carrying the Jenkins core version
const JENKINS_VERSION_HEADER: &str = "X-Jenkins";

/// Connection settings for a live Jenkins instance
#[derive(Debug, Clone)]
pub struct JenkinsConfig {
    pub base_url: String,
    pub user: Option<String>,
    pub api_token: Option<String>,
}

impl JenkinsConfig {
    /// Load configuration from the global options (flags or environment variables)
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let base_url = global
            .jenkins_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or(Error::MissingJenkinsUrl)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user: global.jenkins_user.clone(),
            api_token: global.jenkins_token.clone(),
        })
    }
}

/// Create an HTTP client, authenticated with Basic Auth when credentials are set
pub fn create_client(config: &JenkinsConfig) -> Result<reqwest::Client> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

    let mut headers = HeaderMap::new();

    if let (Some(user), Some(token)) = (&config.user, &config.api_token) {
        let auth_string = format!("{user}:{token}");
        let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {auth_encoded}"))
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Ask a running Jenkins for its core version.
///
/// Jenkins reports its version in the `X-Jenkins` header of every response,
/// the JSON API root is used because it is cheap and requires no plugins.
pub async fn fetch_jenkins_version(
    client: &reqwest::Client,
    config: &JenkinsConfig,
) -> Result<String> {
    let url = format!("{}/api/json", config.base_url);
    debug!("Requesting Jenkins status from {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::VersionUnavailable(format!("{url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::VersionUnavailable(format!("{url}: HTTP {}", response.status())).into());
    }

    response
        .headers()
        .get(JENKINS_VERSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::VersionUnavailable(format!("{url}: missing {JENKINS_VERSION_HEADER} header"))
                .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_global(url: Option<&str>) -> crate::Global {
        crate::Global {
            jenkins_url: url.map(str::to_string),
            jenkins_user: Some("admin".to_string()),
            jenkins_token: Some("secret".to_string()),
            verbose: false,
        }
    }

    #[test]
    fn test_config_from_global() {
        let config = JenkinsConfig::from_global(&create_test_global(Some(
            "http://localhost:8080/jenkins/",
        )))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/jenkins");
        assert_eq!(config.user.as_deref(), Some("admin"));
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_config_from_global_missing_url() {
        let err = JenkinsConfig::from_global(&create_test_global(None)).unwrap_err();
        assert!(err.to_string().contains("JENKINS_URL"));

        assert!(JenkinsConfig::from_global(&create_test_global(Some("  "))).is_err());
    }

    #[tokio::test]
    async fn test_fetch_jenkins_version_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/json"))
            .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Jenkins", "2.303.1")
                    .set_body_string("{}"),
            )
            .mount(&mock_server)
            .await;

        let global = create_test_global(Some(mock_server.uri().as_str()));
        let config = JenkinsConfig::from_global(&global).unwrap();
        let client = create_client(&config).unwrap();

        let version = fetch_jenkins_version(&client, &config).await.unwrap();
        assert_eq!(version, "2.303.1");
    }

    #[tokio::test]
    async fn test_fetch_jenkins_version_missing_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let global = create_test_global(Some(mock_server.uri().as_str()));
        let config = JenkinsConfig::from_global(&global).unwrap();
        let client = create_client(&config).unwrap();

        let err = fetch_jenkins_version(&client, &config).await.unwrap_err();
        assert!(err.to_string().contains("missing X-Jenkins header"));
    }

    #[tokio::test]
    async fn test_fetch_jenkins_version_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let global = create_test_global(Some(mock_server.uri().as_str()));
        let config = JenkinsConfig::from_global(&global).unwrap();
        let client = create_client(&config).unwrap();

        let err = fetch_jenkins_version(&client, &config).await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
