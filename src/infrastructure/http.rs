use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::domain::calculation::{CalculationRequest, CalculatorApi};
use crate::domain::errors::CalcError;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// Wire shape of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequestDto {
    pub a: f64,
    pub b: f64,
    pub operation: String,
}

impl From<&CalculationRequest> for CalculateRequestDto {
    fn from(request: &CalculationRequest) -> Self {
        Self {
            a: request.a.value(),
            b: request.b.value(),
            operation: request.operation.as_wire_str().to_string(),
        }
    }
}

/// Wire shape of a 2xx answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponseDto {
    pub result: f64,
}

/// Wire shape of a non-2xx answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateErrorDto {
    pub error: String,
}

/// REST client for the arithmetic backend.
///
/// An empty base URL targets the page's own origin, which is how the
/// bundled frontend is served in the original deployment.
#[derive(Debug, Clone, Default)]
pub struct CalculatorApiClient {
    base_url: String,
}

impl CalculatorApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn calculate_url(&self) -> String {
        format!("{}/calculate", self.base_url.trim_end_matches('/'))
    }
}

impl CalculatorApi for CalculatorApiClient {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalcError> {
        let url = self.calculate_url();
        let body = CalculateRequestDto::from(request);
        log_debug!(LogComponent::Infrastructure("CalculatorApi"), "POST {url} {body:?}");

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| CalcError::Transport(format!("failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| CalcError::Transport(format!("request failed: {e:?}")))?;

        if !response.ok() {
            // non-2xx carries {"error": ...}; an unreadable body counts as
            // a transport failure, same as any other malformed response
            let body: CalculateErrorDto = response
                .json()
                .await
                .map_err(|e| CalcError::Transport(format!("unreadable error body: {e:?}")))?;
            log_warn!(
                LogComponent::Infrastructure("CalculatorApi"),
                "service rejected request: {}",
                body.error
            );
            return Err(CalcError::Remote(body.error));
        }

        let body: CalculateResponseDto = response
            .json()
            .await
            .map_err(|e| CalcError::Transport(format!("unreadable response body: {e:?}")))?;
        Ok(body.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculation::{Operand, Operation};

    #[test]
    fn same_origin_url() {
        assert_eq!(CalculatorApiClient::new().calculate_url(), "/calculate");
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let client = CalculatorApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(client.calculate_url(), "http://localhost:5000/calculate");
    }

    #[test]
    fn request_dto_carries_wire_names() {
        let request = CalculationRequest::new(
            Operand::from(6.0),
            Operand::from(3.0),
            Operation::Divide,
        );
        let dto = CalculateRequestDto::from(&request);
        assert_eq!(dto.a, 6.0);
        assert_eq!(dto.b, 3.0);
        assert_eq!(dto.operation, "divide");
    }
}
