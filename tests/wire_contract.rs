use arcade_calc_wasm::domain::calculation::{CalculationRequest, Operand, Operation};
use arcade_calc_wasm::infrastructure::http::{
    CalculateErrorDto, CalculateRequestDto, CalculateResponseDto,
};
use serde_json::json;

#[test]
fn request_serializes_to_the_backend_shape() {
    let request =
        CalculationRequest::new(Operand::from(6.0), Operand::from(3.0), Operation::Divide);
    let dto = CalculateRequestDto::from(&request);
    assert_eq!(
        serde_json::to_value(&dto).unwrap(),
        json!({"a": 6.0, "b": 3.0, "operation": "divide"})
    );
}

#[test]
fn every_operation_has_a_lowercase_wire_name() {
    let expected = [
        (Operation::Add, "add"),
        (Operation::Subtract, "subtract"),
        (Operation::Multiply, "multiply"),
        (Operation::Divide, "divide"),
        (Operation::Power, "power"),
    ];
    for (operation, name) in expected {
        assert_eq!(operation.as_wire_str(), name);
        assert_eq!(serde_json::to_value(operation).unwrap(), json!(name));
    }
}

#[test]
fn wire_names_parse_back() {
    assert_eq!("power".parse::<Operation>().unwrap(), Operation::Power);
    assert!("modulo".parse::<Operation>().is_err());
}

#[test]
fn success_body_deserializes() {
    let body: CalculateResponseDto = serde_json::from_str(r#"{"result": 2}"#).unwrap();
    assert_eq!(body.result, 2.0);
}

#[test]
fn error_body_deserializes() {
    let body: CalculateErrorDto = serde_json::from_str(r#"{"error": "division by zero"}"#).unwrap();
    assert_eq!(body.error, "division by zero");
}

#[test]
fn domain_request_matches_the_wire_shape_directly() {
    // the value objects carry serde derives; keep them in lockstep with
    // the transport DTO
    let request =
        CalculationRequest::new(Operand::from(1.5), Operand::from(-2.0), Operation::Power);
    assert_eq!(
        serde_json::to_value(request).unwrap(),
        json!({"a": 1.5, "b": -2.0, "operation": "power"})
    );
}
