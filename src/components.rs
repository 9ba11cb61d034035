//! Pure Yew view components for the sensitivity UI.
//!
//! Everything here renders from props alone; state and callbacks live
//! in the main component.

use friction_engine::limits::SENS_MAX;
use friction_engine::{HistoryEntry, SensitivitySettings};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SensitivityRowProps {
    pub label: AttrValue,
    pub value: i32,
}

/// One labeled sensitivity value with a proportional level bar.
#[function_component(SensitivityRow)]
pub fn sensitivity_row(props: &SensitivityRowProps) -> Html {
    // Bar width relative to the maximum legal value
    let width = (props.value as f64 / SENS_MAX as f64 * 100.0).clamp(0.0, 100.0);
    html! {
        <div class="sens-row">
            <div class="sens-row-head">
                <span class="sens-label">{ props.label.clone() }</span>
                <span class="sens-value">{ props.value }</span>
            </div>
            <div class="sens-bar-track">
                <div class="sens-bar-fill" style={format!("width: {:.1}%", width)}></div>
            </div>
        </div>
    }
}

/// Full settings grid: six sensitivity rows plus the DPI and
/// fire-button cards.
pub fn render_settings(settings: &SensitivitySettings) -> Html {
    html! {
        <div class="settings-grid">
            <SensitivityRow label="General" value={settings.general} />
            <SensitivityRow label="Red Dot" value={settings.red_dot} />
            <SensitivityRow label="2x Scope" value={settings.scope_2x} />
            <SensitivityRow label="4x Scope" value={settings.scope_4x} />
            <SensitivityRow label="Sniper Scope" value={settings.sniper} />
            <SensitivityRow label="Free Look" value={settings.free_look} />

            <div class="spec-cards">
                <div class="spec-card dpi-card">
                    <h3>{ "Recommended DPI" }</h3>
                    <div class="spec-card-value">{ settings.dpi }</div>
                </div>
                <div class="spec-card fire-card">
                    <h3>{ "Fire Button Size" }</h3>
                    <div class="spec-card-value">{ format!("{}%", settings.fire_button_size) }</div>
                </div>
            </div>
        </div>
    }
}

/// Sidebar history list. Each entry reloads its settings on click.
pub fn render_history(
    history: &[HistoryEntry],
    no_data_label: &str,
    on_select: &Callback<HistoryEntry>,
) -> Html {
    if history.is_empty() {
        return html! {
            <div class="history-empty">
                <p>{ no_data_label }</p>
            </div>
        };
    }

    html! {
        <div class="history-list">
            { history.iter().map(|entry| {
                let on_select = on_select.clone();
                let item = entry.clone();
                let onclick = Callback::from(move |_| on_select.emit(item.clone()));
                html! {
                    <div class="history-item" key={entry.id.to_string()} {onclick}>
                        <div class="history-device">{ &entry.device }</div>
                        <div class="history-date">{ &entry.date }</div>
                    </div>
                }
            }).collect::<Html>() }
        </div>
    }
}
