use super::value_objects::CalculationRequest;
use crate::domain::errors::CalcError;

/// Port to the remote arithmetic collaborator.
///
/// One stateless request/response exchange per call: no retries, no
/// queueing, no cancellation. Concurrent calls run independently and the
/// caller decides what to do with late responses.
#[allow(async_fn_in_trait)]
pub trait CalculatorApi {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalcError>;
}
