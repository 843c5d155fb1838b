use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::app::App;
use crate::application::use_cases::PerformCalculationUseCase;
use crate::domain::calculation::{InputValidator, Operation, ResultFormatter};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::theme::{PreferenceStore, load_theme};
use crate::infrastructure::http::CalculatorApiClient;
use crate::infrastructure::storage::LocalStoragePreferences;

/// Mount the calculator into `<body>`. The theme preference is resolved
/// here, once, and handed to the shell as an explicit value.
#[wasm_bindgen(js_name = runApp)]
pub fn run_app() {
    let preferences: Rc<dyn PreferenceStore> = Rc::new(LocalStoragePreferences::new());
    let initial_theme = load_theme(preferences.as_ref());
    get_logger().info(
        LogComponent::Presentation("Mount"),
        &format!("mounting calculator with {initial_theme} theme"),
    );
    leptos::mount_to_body(move || {
        leptos::view! { <App initial_theme=initial_theme preferences=preferences/> }
    });
}

/// One full validate → call → format cycle for JS-driven shells.
/// Always resolves to the display string; failures arrive as their
/// display form ("INVALID INPUT", "CONNECTION ERROR", ...), not as
/// rejections.
#[wasm_bindgen]
pub fn calculate(a: String, b: String, operation: String) -> Promise {
    future_to_promise(async move {
        let Ok(operation) = operation.parse::<Operation>() else {
            return Ok(JsValue::from_str("INVALID OPERATION"));
        };
        let use_case = PerformCalculationUseCase::new(CalculatorApiClient::new());
        let outcome = use_case.execute(&a, &b, operation).await;
        Ok(JsValue::from_str(outcome.text()))
    })
}

/// Operand validation, exposed for hosting pages that pre-check input.
#[wasm_bindgen(js_name = isValidNumber)]
pub fn is_valid_number(value: &str) -> bool {
    InputValidator::new().is_valid_number(value)
}

/// Result formatting, exposed for hosting pages that render externally
/// obtained values.
#[wasm_bindgen(js_name = formatResult)]
pub fn format_result(value: f64) -> String {
    ResultFormatter::new().format_result(value)
}
