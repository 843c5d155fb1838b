use crate::domain::calculation::{
    CalculationRequest, CalculatorApi, InputValidator, Operand, Operation, ResultFormatter,
};
use crate::domain::errors::CalcError;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

/// What one calculation attempt leaves on the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    Result(String),
    Error(String),
}

impl DisplayOutcome {
    pub fn text(&self) -> &str {
        match self {
            DisplayOutcome::Result(text) | DisplayOutcome::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayOutcome::Error(_))
    }
}

/// Use Case: validate operands, delegate the arithmetic, format the answer.
///
/// The gate runs first: if either operand is unusable, the request never
/// leaves the client. Both the happy path and every error path resolve to
/// a single `DisplayOutcome`; nothing is retried.
pub struct PerformCalculationUseCase<A: CalculatorApi> {
    api: A,
    validator: InputValidator,
    formatter: ResultFormatter,
}

impl<A: CalculatorApi> PerformCalculationUseCase<A> {
    pub fn new(api: A) -> Self {
        Self { api, validator: InputValidator::new(), formatter: ResultFormatter::new() }
    }

    pub async fn execute(&self, raw_a: &str, raw_b: &str, operation: Operation) -> DisplayOutcome {
        let (Some(a), Some(b)) =
            (self.validator.parse(raw_a.trim()), self.validator.parse(raw_b.trim()))
        else {
            log_warn!(
                LogComponent::Application("Calculate"),
                "rejected operands {raw_a:?} / {raw_b:?}"
            );
            return DisplayOutcome::Error(CalcError::InvalidInput.display_text());
        };

        let request = CalculationRequest::new(Operand::from(a), Operand::from(b), operation);
        log_debug!(
            LogComponent::Application("Calculate"),
            "dispatching {} {} {}",
            a,
            operation.symbol(),
            b
        );

        match self.api.calculate(&request).await {
            Ok(value) => DisplayOutcome::Result(self.formatter.format_result(value)),
            Err(error) => {
                log_warn!(LogComponent::Application("Calculate"), "calculation failed: {error}");
                DisplayOutcome::Error(error.display_text())
            }
        }
    }
}
