//! Main module for the sensitivity optimizer using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use friction_engine::{
    optimize_sensitivity, push_recent, DeviceSpec, HistoryEntry, PlayingStyle, RefreshRate,
    SensitivitySettings, TouchMethod,
};
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod components;
mod config;
mod locale;
mod storage;
mod utils;

use components::{render_history, render_settings};
use config::*;
use locale::Language;
use storage::Theme;

// ──────────────────────────────────────────────────────────────────────────────
// Type aliases for better readability
type ResultView = (SensitivitySettings, String); // (settings, tip text)

/// Banner line prepended to the clipboard export.
const SHARE_BANNER: &str = "FF ULTRA PRO";

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    // Ambient UI state
    let theme = use_state(|| Theme::Dark);
    let show_sidebar = use_state(|| false);
    let lang = use_state(|| Language::En);
    let history = use_state(Vec::<HistoryEntry>::new);

    // Form inputs
    let device = use_state(String::new);
    let device_error = use_state(|| None::<String>);
    let ram = use_state(|| DEFAULT_RAM_GB);
    let total_storage = use_state(|| DEFAULT_STORAGE_GB);
    let ram_usage = use_state(|| DEFAULT_RAM_USAGE_PCT);
    let free_storage = use_state(|| DEFAULT_FREE_STORAGE_GB);
    let free_storage_text = use_state(|| DEFAULT_FREE_STORAGE_GB.to_string());
    let free_storage_error = use_state(|| None::<String>);
    let play_style = use_state(|| PlayingStyle::Balanced);
    let refresh_rate = use_state(|| RefreshRate::Hz60);
    let touch_method = use_state(|| TouchMethod::RawFinger);

    // Results
    let result = use_state(|| None::<ResultView>);
    let is_calculating = use_state(|| false);
    let copied = use_state(|| false);

    // Cancellable timer handles: the simulated processing delay and the
    // copied-indicator reset. Dropping a handle cancels the pending run.
    let calc_timer = use_state(|| None::<Timeout>);
    let copied_timer = use_state(|| None::<Timeout>);

    // Load persisted theme and history on mount
    {
        let theme = theme.clone();
        let history = history.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = storage::load_theme() {
                theme.set(saved);
            }
            let entries = storage::load_history();
            if !entries.is_empty() {
                history.set(entries);
            }
        });
    }

    // --- Callbacks ---

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            storage::save_theme(next);
            theme.set(next);
        })
    };

    let on_open_sidebar = {
        let show_sidebar = show_sidebar.clone();
        Callback::from(move |_: MouseEvent| show_sidebar.set(true))
    };

    let on_close_sidebar = {
        let show_sidebar = show_sidebar.clone();
        Callback::from(move |_: MouseEvent| show_sidebar.set(false))
    };

    let on_device_input = {
        let device = device.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            device.set(input.value());
        })
    };

    let on_ram_change = {
        let ram = ram.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(val) = select.value().parse::<u32>() {
                ram.set(val);
            }
        })
    };

    let on_storage_change = {
        let total_storage = total_storage.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(val) = select.value().parse::<u32>() {
                total_storage.set(val);
            }
        })
    };

    let on_usage_input = {
        let ram_usage = ram_usage.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<u32>() {
                ram_usage.set(val.min(100));
            }
        })
    };

    let on_free_storage_input = {
        let free_storage_text = free_storage_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            free_storage_text.set(input.value());
        })
    };

    // Commit the free-storage text on change or Enter
    let commit_free_storage = {
        let free_storage_text = free_storage_text.clone();
        let free_storage = free_storage.clone();
        let free_storage_error = free_storage_error.clone();
        Callback::from(move |_: ()| {
            match utils::validate_free_storage(&free_storage_text) {
                Ok(val) => {
                    free_storage_error.set(None);
                    free_storage.set(val);
                    free_storage_text.set(val.to_string());
                }
                Err(msg) => {
                    free_storage_error.set(Some(msg));
                }
            }
        })
    };

    let free_storage_onkeydown = {
        let commit = commit_free_storage.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    let on_style_change = {
        let play_style = play_style.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<PlayingStyle>() {
                Ok(style) => play_style.set(style),
                Err(err) => debug!("{}", err),
            }
        })
    };

    let on_refresh_change = {
        let refresh_rate = refresh_rate.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<RefreshRate>() {
                Ok(rate) => refresh_rate.set(rate),
                Err(err) => debug!("{}", err),
            }
        })
    };

    let on_touch_change = {
        let touch_method = touch_method.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TouchMethod>() {
                Ok(method) => touch_method.set(method),
                Err(err) => debug!("{}", err),
            }
        })
    };

    let on_submit = {
        let device = device.clone();
        let device_error = device_error.clone();
        let ram = ram.clone();
        let total_storage = total_storage.clone();
        let ram_usage = ram_usage.clone();
        let free_storage = free_storage.clone();
        let play_style = play_style.clone();
        let touch_method = touch_method.clone();
        let refresh_rate = refresh_rate.clone();
        let result = result.clone();
        let is_calculating = is_calculating.clone();
        let history = history.clone();
        let calc_timer = calc_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = match utils::validate_device_name(&device) {
                Ok(name) => {
                    device_error.set(None);
                    name
                }
                Err(msg) => {
                    device_error.set(Some(msg));
                    return;
                }
            };

            let spec = DeviceSpec {
                model_name: name,
                total_ram_gb: *ram,
                total_storage_gb: *total_storage,
                ram_usage_percent: *ram_usage,
                available_storage_gb: *free_storage,
                playing_style: *play_style,
                touch_method: *touch_method,
                refresh_rate: *refresh_rate,
            };

            result.set(None);
            is_calculating.set(true);

            // Replace any pending run, then schedule the new one
            calc_timer.set(None);
            let result = result.clone();
            let is_calculating = is_calculating.clone();
            let history = history.clone();
            let timer_done = calc_timer.clone();
            let handle = Timeout::new(CALC_DELAY_MS, move || {
                let rec = optimize_sensitivity(&spec);

                let entry = HistoryEntry {
                    id: js_sys::Date::now() as u64,
                    date: String::from(
                        js_sys::Date::new_0()
                            .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED),
                    ),
                    device: rec.profile.clone(),
                    settings: rec.settings,
                };
                let mut entries = (*history).clone();
                push_recent(&mut entries, entry);
                storage::save_history(&entries);
                history.set(entries);

                result.set(Some((rec.settings, rec.tip.message().to_string())));
                is_calculating.set(false);
                timer_done.set(None);
            });
            calc_timer.set(Some(handle));
        })
    };

    let on_copy = {
        let result = result.clone();
        let copied = copied.clone();
        let copied_timer = copied_timer.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some((settings, _)) = &*result {
                let text = format!("{}\n{}", SHARE_BANNER, settings.share_line());
                utils::copy_to_clipboard(&text);
                copied.set(true);

                let copied_reset = copied.clone();
                let timer_done = copied_timer.clone();
                let handle = Timeout::new(COPIED_RESET_MS, move || {
                    copied_reset.set(false);
                    timer_done.set(None);
                });
                copied_timer.set(Some(handle));
            }
        })
    };

    let on_reset = {
        let result = result.clone();
        let device = device.clone();
        let device_error = device_error.clone();
        let is_calculating = is_calculating.clone();
        let calc_timer = calc_timer.clone();
        Callback::from(move |_: MouseEvent| {
            calc_timer.set(None);
            is_calculating.set(false);
            result.set(None);
            device.set(String::new());
            device_error.set(None);
        })
    };

    let on_select_history = {
        let device = device.clone();
        let result = result.clone();
        let show_sidebar = show_sidebar.clone();
        Callback::from(move |entry: HistoryEntry| {
            device.set(entry.device.clone());
            result.set(Some((entry.settings, "Loaded from history".to_string())));
            show_sidebar.set(false);
        })
    };

    let on_clear_history = {
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            storage::clear_history();
            history.set(Vec::new());
        })
    };

    let on_lang_en = {
        let lang = lang.clone();
        Callback::from(move |_: MouseEvent| lang.set(Language::En))
    };

    let on_lang_si = {
        let lang = lang.clone();
        Callback::from(move |_: MouseEvent| lang.set(Language::Si))
    };

    // --- View ---

    let labels = lang.labels();
    let result_view = (*result).clone();

    // Card body: interstitial while "analyzing", results once available,
    // otherwise the input form.
    let card_body = if *is_calculating {
        html! {
            <div class="analyzing">
                <span class="analyzing-bolt">{ "⚡" }</span>
                <h3>{ "Analyzing..." }</h3>
                <p class="analyzing-detail">
                    { format!("OPTIMIZING FOR {}", touch_method.label().to_uppercase()) }
                </p>
            </div>
        }
    } else if let Some((settings, tip_text)) = result_view {
        html! {
            <div class="results">
                <div class="results-head">
                    <h3>{ labels.results }</h3>
                    <button class="copy-btn" onclick={on_copy}>
                        { if *copied { "✓ COPIED" } else { "⧉ COPY" } }
                    </button>
                </div>

                { render_settings(&settings) }

                <div class="tip-box">
                    <h4>{ labels.pro_tip }</h4>
                    <p>{ tip_text }</p>
                </div>

                <button class="reset-btn" onclick={on_reset}>
                    { "Calculate Again" }
                </button>
            </div>
        }
    } else {
        html! {
            <form class="calc-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="device">{ labels.device }</label>
                    <input
                        id="device"
                        type="text"
                        placeholder="e.g. iPhone 11"
                        value={(*device).clone()}
                        class={if device_error.is_some() { "invalid" } else { "" }}
                        oninput={on_device_input}
                    />
                    if let Some(ref err) = *device_error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="ram">{ format!("{} (GB)", labels.ram) }</label>
                        <select id="ram" onchange={on_ram_change}>
                            { RAM_OPTIONS_GB.iter().map(|&n| html! {
                                <option value={n.to_string()} selected={*ram == n}>
                                    { format!("{} GB", n) }
                                </option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="total-storage">{ format!("{} (GB)", labels.storage) }</label>
                        <select id="total-storage" onchange={on_storage_change}>
                            { STORAGE_OPTIONS_GB.iter().map(|&n| html! {
                                <option value={n.to_string()} selected={*total_storage == n}>
                                    { format!("{} GB", n) }
                                </option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <div class="slider-head">
                        <label for="ram-usage">{ labels.usage }</label>
                        <span class="slider-value">{ format!("{}%", *ram_usage) }</span>
                    </div>
                    <input
                        id="ram-usage"
                        type="range"
                        min="0"
                        max="100"
                        value={ram_usage.to_string()}
                        oninput={on_usage_input}
                    />
                </div>

                <div class="form-group">
                    <label for="free-storage">{ labels.free_storage }</label>
                    <input
                        id="free-storage"
                        type="number"
                        min="0"
                        step="0.5"
                        value={(*free_storage_text).clone()}
                        class={if free_storage_error.is_some() { "invalid" } else { "" }}
                        oninput={on_free_storage_input}
                        onchange={commit_free_storage.reform(|_| ())}
                        onkeydown={free_storage_onkeydown}
                    />
                    if let Some(ref err) = *free_storage_error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                <div class="factor-row">
                    <div class="form-group">
                        <label for="play-style">{ labels.style }</label>
                        <select id="play-style" onchange={on_style_change}>
                            { PlayingStyle::ALL.iter().map(|style| html! {
                                <option
                                    value={style.label()}
                                    selected={*play_style == *style}
                                >
                                    { style.label() }
                                </option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="refresh-rate">{ labels.refresh }</label>
                        <select id="refresh-rate" onchange={on_refresh_change}>
                            { RefreshRate::ALL.iter().map(|rate| html! {
                                <option
                                    value={rate.hz().to_string()}
                                    selected={*refresh_rate == *rate}
                                >
                                    { rate.label() }
                                </option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="touch-method">{ labels.touch }</label>
                        <select id="touch-method" onchange={on_touch_change}>
                            { TouchMethod::ALL.iter().map(|method| html! {
                                <option
                                    value={method.label()}
                                    selected={*touch_method == *method}
                                >
                                    { method.label() }
                                </option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                </div>

                <button type="submit" class="generate-btn">
                    { format!("⚡ {}", labels.generate) }
                </button>
            </form>
        }
    };

    html! {
        <div class={format!("app {}", theme.as_str())}>

            <header class="header">
                <div class="brand">
                    <span class="brand-bolt">{ "⚡" }</span>
                    <div>
                        <h1 class="brand-title">{ "ULTRA PRO" }</h1>
                        <p class="brand-version">{ "V9.0 ENGINE" }</p>
                    </div>
                </div>
                <div class="header-actions">
                    <button class="icon-btn" onclick={on_toggle_theme}>
                        { if *theme == Theme::Dark { "☀" } else { "☾" } }
                    </button>
                    <button class="icon-btn accent" onclick={on_open_sidebar}>
                        { "⚙" }
                    </button>
                </div>
            </header>

            <main class="content">
                <div class="hero">
                    <h2 class="hero-title">
                        <span class="hero-accent">{ "AI" }</span>{ " SENSITIVITY" }
                    </h2>
                    <p class="hero-subtitle">{ labels.subtitle }</p>
                </div>

                <div class="form-card">
                    { card_body }
                </div>
            </main>

            <div class={format!("sidebar {}", if *show_sidebar { "open" } else { "" })}>
                <div class="sidebar-head">
                    <h2>{ labels.settings }</h2>
                    <button class="icon-btn" onclick={on_close_sidebar.clone()}>{ "✕" }</button>
                </div>

                <div class="sidebar-section">
                    <label>{ labels.language }</label>
                    <div class="lang-row">
                        <button
                            class={if *lang == Language::En { "lang-btn active" } else { "lang-btn" }}
                            onclick={on_lang_en}
                        >
                            { "English" }
                        </button>
                        <button
                            class={if *lang == Language::Si { "lang-btn active" } else { "lang-btn" }}
                            onclick={on_lang_si}
                        >
                            { "සිංහල" }
                        </button>
                    </div>
                </div>

                <div class="sidebar-section grow">
                    <div class="history-head">
                        <label>{ labels.history }</label>
                        if !history.is_empty() {
                            <button class="clear-btn" onclick={on_clear_history}>
                                { format!("🗑 {}", labels.clear) }
                            </button>
                        }
                    </div>
                    { render_history(&history, labels.no_data, &on_select_history) }
                </div>
            </div>
            if *show_sidebar {
                <div class="backdrop" onclick={on_close_sidebar}></div>
            }

        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
