#![forbid(unsafe_code)]

//! `fetch`-backed [`PaletteClient`].

use core::future::Future;

use hue_core::{PaletteClient, PaletteError, PaletteRequest, PaletteResponse};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::js_error_message;

/// POSTs palette requests to one endpoint.
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PaletteClient for FetchClient {
    fn generate(
        &self,
        request: &PaletteRequest,
    ) -> impl Future<Output = Result<PaletteResponse, PaletteError>> {
        let endpoint = self.endpoint.clone();
        let body = request.to_json();
        async move {
            let body = body?;
            let text = post_json(&endpoint, &body)
                .await
                .map_err(|err| PaletteError::transport(js_error_message(&err)))?;
            PaletteResponse::from_json(&text)
        }
    }
}

/// One POST, body read as text whatever the status.
async fn post_json(endpoint: &str, body: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    debug!(status = response.status(), endpoint, "palette response received");

    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
