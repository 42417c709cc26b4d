//! Reqwest-backed Google identity verifier adapter.
//!
//! Delegates signature validation to Google's `tokeninfo` endpoint, then
//! checks the audience claim against the configured OAuth client id. Only
//! verified claims cross the port boundary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::domain::ports::{IdentityVerifier, IdentityVerifierError};
use crate::domain::{DonorProfile, EmailAddress};

const DEFAULT_TOKENINFO_ENDPOINT: &str = "https://oauth2.googleapis.com/tokeninfo";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Claims subset returned by the tokeninfo endpoint.
#[derive(Debug, Deserialize)]
struct TokenInfoDto {
    aud: String,
    sub: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// Identity verifier calling Google's tokeninfo endpoint.
pub struct GoogleIdentityVerifier {
    client: Client,
    endpoint: Url,
    client_id: String,
}

impl GoogleIdentityVerifier {
    /// Build a verifier for the given OAuth client id with the default
    /// endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or
    /// the default endpoint fails to parse.
    pub fn new(client_id: impl Into<String>) -> Result<Self, reqwest::Error> {
        let endpoint = Url::parse(DEFAULT_TOKENINFO_ENDPOINT)
            .unwrap_or_else(|_| unreachable!("default tokeninfo endpoint is a valid URL"));
        Self::with_endpoint(client_id, endpoint, DEFAULT_TIMEOUT)
    }

    /// Build a verifier against an explicit endpoint, used by tests pointed
    /// at a stub server.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_endpoint(
        client_id: impl Into<String>,
        endpoint: Url,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            client_id: client_id.into(),
        })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<DonorProfile, IdentityVerifierError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|err| IdentityVerifierError::transport(err.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            status if status.is_client_error() => {
                return Err(IdentityVerifierError::invalid_token(format!(
                    "provider answered {status}"
                )));
            }
            status => {
                return Err(IdentityVerifierError::transport(format!(
                    "provider answered {status}"
                )));
            }
        }

        let claims: TokenInfoDto = response
            .json()
            .await
            .map_err(|err| IdentityVerifierError::transport(err.to_string()))?;
        if claims.aud != self.client_id {
            return Err(IdentityVerifierError::invalid_token(
                "audience does not match the configured client id",
            ));
        }
        let email = EmailAddress::new(claims.email.as_str())
            .map_err(|err| IdentityVerifierError::invalid_token(err.to_string()))?;

        Ok(DonorProfile {
            subject: claims.sub,
            name: claims.name.unwrap_or_else(|| email.as_str().to_owned()),
            email,
            picture: claims.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn tokeninfo_claims_deserialise_without_optional_fields() {
        let claims: TokenInfoDto = serde_json::from_value(serde_json::json!({
            "aud": "client-1",
            "sub": "sub-1",
            "email": "a@x.com",
        }))
        .expect("claims deserialise");
        assert_eq!(claims.aud, "client-1");
        assert!(claims.name.is_none());
        assert!(claims.picture.is_none());
    }

    #[test]
    fn default_endpoint_parses() {
        let verifier = GoogleIdentityVerifier::new("client-1");
        assert!(verifier.is_ok());
    }
}
