#![forbid(unsafe_code)]

//! Wire types for the palette endpoint and the transport seam.

use core::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Body of `POST <endpoint>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRequest {
    pub base_color: String,
    pub mode: String,
    pub count: u32,
}

impl PaletteRequest {
    pub fn to_json(&self) -> Result<String, PaletteError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Body returned by the endpoint, on success and on failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaletteResponse {
    #[must_use]
    pub fn ok(palette: Vec<String>) -> Self {
        Self {
            success: true,
            palette: Some(palette),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            palette: None,
            error: Some(error.into()),
        }
    }

    /// Parse a response body. Anything that is not the expected object is
    /// [`PaletteError::Malformed`].
    pub fn from_json(body: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Collapse the response into the colors to render or the reason not to.
    pub fn into_palette(self) -> Result<Vec<String>, PaletteError> {
        match (self.success, self.palette, self.error) {
            (true, Some(palette), _) => Ok(palette),
            (true, None, _) => Err(PaletteError::malformed("success without palette")),
            (false, _, Some(reason)) => Err(PaletteError::Application(reason)),
            (false, _, None) => Err(PaletteError::malformed("failure without error")),
        }
    }
}

/// Sends one palette request and yields the decoded response.
///
/// Implementations make a single attempt: no retries, no timeout beyond what
/// the transport imposes. Non-2xx statuses still carry a JSON body and must be
/// decoded like any other response.
pub trait PaletteClient {
    fn generate(
        &self,
        request: &PaletteRequest,
    ) -> impl Future<Output = Result<PaletteResponse, PaletteError>>;
}
