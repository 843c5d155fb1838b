use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::html::Input;
use leptos::*;
use strum::IntoEnumIterator;

use crate::application::use_cases::{DisplayOutcome, PerformCalculationUseCase};
use crate::domain::calculation::Operation;
use crate::domain::logging::LogComponent;
use crate::domain::theme::{PreferenceStore, Theme, store_theme};
use crate::event_utils::{EventOptions, window_event_listener_with_options};
use crate::global_state::{DisplayStatus, current_theme, display_status, display_text};
use crate::infrastructure::audio::SoundEffects;
use crate::infrastructure::http::CalculatorApiClient;
use crate::log_info;

/// 🕹️ Root component of the calculator shell.
///
/// The theme arrives as an explicit value resolved by the caller; the
/// injected preference store is only touched again when the user switches.
#[component]
pub fn App(initial_theme: Theme, preferences: Rc<dyn PreferenceStore>) -> impl IntoView {
    current_theme().set(initial_theme);

    let sounds = Rc::new(SoundEffects::new());
    let use_case = Rc::new(PerformCalculationUseCase::new(CalculatorApiClient::new()));

    let input_a = create_node_ref::<Input>();
    let input_b = create_node_ref::<Input>();

    // one independent request per press; the latest response to arrive
    // owns the display
    let trigger = {
        let sounds = Rc::clone(&sounds);
        let use_case = Rc::clone(&use_case);
        move |operation: Operation| {
            sounds.resume_if_suspended();
            sounds.play_button();
            let raw_a = input_a.get_untracked().map(|input| input.value()).unwrap_or_default();
            let raw_b = input_b.get_untracked().map(|input| input.value()).unwrap_or_default();
            let sounds = Rc::clone(&sounds);
            let use_case = Rc::clone(&use_case);
            spawn_local(async move {
                let outcome = use_case.execute(&raw_a, &raw_b, operation).await;
                apply_outcome(&sounds, outcome);
            });
        }
    };

    let clear_all = {
        let sounds = Rc::clone(&sounds);
        move || {
            sounds.resume_if_suspended();
            sounds.play_button();
            for input in [input_a, input_b] {
                if let Some(input) = input.get_untracked() {
                    input.set_value("0");
                }
            }
            display_text().set("0".to_string());
            display_status().set(DisplayStatus::Idle);
        }
    };

    let switch_theme = {
        let sounds = Rc::clone(&sounds);
        let preferences = Rc::clone(&preferences);
        move || {
            sounds.resume_if_suspended();
            sounds.play_button();
            let theme = current_theme().get_untracked().next();
            current_theme().set(theme);
            store_theme(preferences.as_ref(), theme);
            log_info!(LogComponent::Presentation("Theme"), "switched to {theme} theme");
        }
    };

    // keyboard shortcuts, matching the buttons one to one
    let keyboard_handle = {
        let trigger = trigger.clone();
        let clear_all = clear_all.clone();
        let switch_theme = switch_theme.clone();
        window_event_listener_with_options(
            ev::keydown,
            &EventOptions { passive: false, ..EventOptions::default() },
            move |event: web_sys::KeyboardEvent| {
                let in_a = targets_input(&event, input_a);
                let in_b = targets_input(&event, input_b);
                match event.key().as_str() {
                    "+" => {
                        event.prevent_default();
                        trigger(Operation::Add);
                    }
                    "-" => {
                        event.prevent_default();
                        trigger(Operation::Subtract);
                    }
                    "*" | "x" | "X" => {
                        event.prevent_default();
                        trigger(Operation::Multiply);
                    }
                    "/" => {
                        event.prevent_default();
                        trigger(Operation::Divide);
                    }
                    "^" => {
                        event.prevent_default();
                        trigger(Operation::Power);
                    }
                    "Escape" => {
                        event.prevent_default();
                        clear_all();
                    }
                    "c" | "C" if !in_a && !in_b => {
                        event.prevent_default();
                        clear_all();
                    }
                    "Enter" if in_a => {
                        event.prevent_default();
                        if let Some(input) = input_b.get_untracked() {
                            let _ = input.focus();
                        }
                    }
                    "Enter" if in_b => {
                        event.prevent_default();
                        trigger(Operation::Add);
                    }
                    "t" | "T" if !in_a && !in_b => {
                        event.prevent_default();
                        switch_theme();
                    }
                    _ => {}
                }
            },
        )
    };
    on_cleanup(move || keyboard_handle.remove());

    let on_theme_click = {
        let switch_theme = switch_theme.clone();
        move |_| switch_theme()
    };
    let on_clear_click = {
        let clear_all = clear_all.clone();
        move |_| clear_all()
    };

    view! {
        <style>{STYLE}</style>
        <div class="calc-app" data-theme=move || current_theme().get().to_string()>
            <div class="calc-shell">
                <header class="calc-header">
                    <h1 id="calc-title" class="calc-title">
                        {move || current_theme().get().title()}
                    </h1>
                    <button id="theme-switcher" class="theme-switcher" on:click=on_theme_click>
                        <span class="theme-icon">{move || current_theme().get().icon()}</span>
                        <span class="theme-label">{move || current_theme().get().label()}</span>
                    </button>
                </header>

                <div class="operands">
                    <input
                        id="input-a"
                        class="operand-input"
                        type="text"
                        value="0"
                        node_ref=input_a
                        on:focus=move |_| {
                            if let Some(input) = input_a.get_untracked() {
                                input.select();
                            }
                        }
                    />

                    <input
                        id="input-b"
                        class="operand-input"
                        type="text"
                        value="0"
                        node_ref=input_b
                        on:focus=move |_| {
                            if let Some(input) = input_b.get_untracked() {
                                input.select();
                            }
                        }
                    />
                </div>

                <div class="op-grid">
                    {Operation::iter()
                        .map(|operation| {
                            let trigger = trigger.clone();
                            view! {
                                <button
                                    class="op-btn"
                                    data-op=operation.to_string()
                                    on:click=move |_| trigger(operation)
                                >
                                    {operation.symbol()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button id="clear-btn" class="clear-btn" on:click=on_clear_click>
                    "CLEAR"
                </button>

                <ResultDisplay/>
            </div>
        </div>
    }
}

/// Result panel; flashes on success, shakes on error.
#[component]
fn ResultDisplay() -> impl IntoView {
    view! {
        <div
            id="result"
            class="result-display"
            class:success=move || display_status().get() == DisplayStatus::Success
            class:error=move || display_status().get() == DisplayStatus::Error
        >
            {move || display_text().get()}
        </div>
    }
}

/// Push one finished attempt onto the display, with the matching jingle.
/// The highlight class is dropped again on the same timers the original
/// shell used: 300ms for success, 500ms for error.
fn apply_outcome(sounds: &SoundEffects, outcome: DisplayOutcome) {
    let is_error = outcome.is_error();
    display_text().set(outcome.text().to_string());
    if is_error {
        display_status().set(DisplayStatus::Error);
        sounds.play_error();
        Timeout::new(500, || display_status().set(DisplayStatus::Idle)).forget();
    } else {
        display_status().set(DisplayStatus::Success);
        sounds.play_success();
        Timeout::new(300, || display_status().set(DisplayStatus::Idle)).forget();
    }
}

fn targets_input(event: &web_sys::KeyboardEvent, input: NodeRef<Input>) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(element) = input.get_untracked() else {
        return false;
    };
    let element: &web_sys::HtmlInputElement = &element;
    &target == AsRef::<web_sys::EventTarget>::as_ref(element)
}

const STYLE: &str = r#"
.calc-app {
    font-family: 'Courier New', monospace;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--bg);
    color: var(--text);
    transition: background 0.3s ease;
}

.calc-app[data-theme="arcade"] {
    --bg: #1a1a2e;
    --panel: #16213e;
    --accent: #e94560;
    --accent-soft: #0f3460;
    --text: #eaeaea;
    --display-bg: #0f0f1a;
    --glow: rgba(233, 69, 96, 0.5);
}

.calc-app[data-theme="cyberpunk"] {
    --bg: #0d0221;
    --panel: #261447;
    --accent: #ff2a6d;
    --accent-soft: #05d9e8;
    --text: #d1f7ff;
    --display-bg: #01012b;
    --glow: rgba(5, 217, 232, 0.5);
}

.calc-app[data-theme="matrix"] {
    --bg: #000000;
    --panel: #0d1b0d;
    --accent: #00ff41;
    --accent-soft: #008f11;
    --text: #00ff41;
    --display-bg: #001100;
    --glow: rgba(0, 255, 65, 0.5);
}

.calc-shell {
    background: var(--panel);
    border: 3px solid var(--accent);
    border-radius: 10px;
    box-shadow: 0 0 30px var(--glow);
    padding: 25px;
    width: 340px;
}

.calc-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 20px;
}

.calc-title {
    font-size: 20px;
    letter-spacing: 2px;
    margin: 0;
    text-shadow: 0 0 10px var(--glow);
}

.theme-switcher {
    background: var(--accent-soft);
    border: 2px solid var(--accent);
    border-radius: 5px;
    color: var(--text);
    cursor: pointer;
    font-family: inherit;
    font-size: 11px;
    padding: 5px 8px;
}

.operands {
    display: flex;
    flex-direction: column;
    gap: 10px;
    margin-bottom: 15px;
}

.operand-input {
    background: var(--display-bg);
    border: 2px solid var(--accent-soft);
    border-radius: 5px;
    color: var(--text);
    font-family: inherit;
    font-size: 22px;
    padding: 10px;
    text-align: right;
}

.operand-input:focus {
    border-color: var(--accent);
    outline: none;
}

.op-grid {
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 8px;
    margin-bottom: 15px;
}

.op-btn,
.clear-btn {
    background: var(--accent-soft);
    border: 2px solid var(--accent);
    border-radius: 5px;
    color: var(--text);
    cursor: pointer;
    font-family: inherit;
    font-size: 18px;
    padding: 10px 0;
}

.op-btn:active,
.clear-btn:active {
    background: var(--accent);
}

.clear-btn {
    font-size: 14px;
    letter-spacing: 2px;
    margin-bottom: 15px;
    width: 100%;
}

.result-display {
    background: var(--display-bg);
    border: 2px solid var(--accent);
    border-radius: 5px;
    font-size: 26px;
    min-height: 40px;
    overflow-wrap: break-word;
    padding: 12px;
    text-align: right;
}

.result-display.success {
    animation: flash 0.3s ease;
}

.result-display.error {
    color: var(--accent);
    animation: shake 0.5s ease;
}

@keyframes flash {
    from { box-shadow: 0 0 25px var(--glow) inset; }
}

@keyframes shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-6px); }
    75% { transform: translateX(6px); }
}
"#;
