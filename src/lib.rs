use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::console::{BrowserTimeProvider, ConsoleLogger};

/// Wire the ambient services, then hand control to the presentation layer.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));
    domain::logging::init_logger(Box::new(ConsoleLogger::new_development()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🕹️ arcade calculator booting");

    presentation::wasm_api::run_app();
}
