pub mod use_cases;

pub use use_cases::{DisplayOutcome, PerformCalculationUseCase};
