pub mod api;
pub mod services;
pub mod value_objects;

pub use api::CalculatorApi;
pub use services::{InputValidator, ResultFormatter, parse_leading_number};
pub use value_objects::{CalculationRequest, Operand, Operation};
