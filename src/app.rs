use futures::future::{AbortHandle, Abortable};
use leptos::html::Canvas;
use leptos::*;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::ChartController,
    domain::{
        chart::{ChartConfig, LineChart},
        logging::{LogComponent, get_time_provider},
        market_data::{TimeRange, Trend},
        state::ViewState,
    },
    global_state::{TooltipData, fetch_abort, tooltip, view_state},
    infrastructure::{
        http::{KrakenConfig, KrakenRestClient},
        rendering::CanvasRenderer,
    },
    log_debug, log_error,
    number_format::{format_percent, format_price},
};

const STYLES: &str = r#"
.container {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    display: flex;
    flex-direction: column;
    align-items: center;
    color: #1a1a1a;
}
.title { margin-bottom: 10px; }
.general { display: flex; align-items: center; gap: 20px; }
.price { font-size: 24px; font-weight: 700; }
.percentageContainer { border-radius: 6px; padding: 4px 10px; color: white; }
.percentage { font-weight: 600; }
.btnContainer { display: flex; gap: 10px; margin: 20px 0; }
.button {
    background: #f1f1f1;
    border: none;
    border-radius: 6px;
    padding: 8px 16px;
    cursor: pointer;
}
.button.active { background: #f89620; color: white; }
.chart { position: relative; }
.tooltip {
    position: absolute;
    background: rgba(0, 0, 0, 0.85);
    color: white;
    padding: 6px 10px;
    border-radius: 6px;
    font-size: 12px;
    white-space: pre-line;
    pointer-events: none;
    transform: translate(10px, -100%);
}
.loading { text-align: center; margin-top: 40vh; font-size: 20px; }
"#;

fn controller() -> ChartController<KrakenRestClient> {
    let config = KrakenConfig::default();
    let pair = config.pair.clone();
    ChartController::new(KrakenRestClient::new(config), pair)
}

/// Handle a range button (or the initial mount): update the snapshot and,
/// if the selection changed, start exactly one fetch for it.
///
/// The previous in-flight fetch is aborted; its result would be rejected by
/// the generation check in [`ViewState::update`] anyway.
pub fn select_range(range: TimeRange) {
    let controller = controller();
    let current = view_state().get_untracked();
    let (next, ticket) = controller.select(&current, range);
    view_state().set(next);

    let Some(ticket) = ticket else {
        return;
    };

    if let Some(previous) = fetch_abort().get_untracked() {
        previous.abort();
    }
    let (handle, registration) = AbortHandle::new_pair();
    fetch_abort().set(Some(handle));

    let now_ms = get_time_provider().current_timestamp();
    spawn_local(async move {
        match Abortable::new(controller.load(ticket, now_ms), registration).await {
            Ok(event) => view_state().update(|state| *state = state.update(event)),
            Err(_) => {
                log_debug!(
                    LogComponent::Presentation("App"),
                    "Fetch for {} aborted",
                    ticket.range.label()
                );
            }
        }
    });
}

/// 🦀 Bitcoin Tracker root component
#[component]
pub fn App() -> impl IntoView {
    select_range(TimeRange::default());

    let loading = move || view_state().with(|s: &ViewState| s.loading);

    view! {
        <style>{STYLES}</style>
        <Show
            when=move || !loading()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div class="container">
                <h1 class="title">"Bitcoin Tracker"</h1>
                <PriceSummary />
                <RangeButtons />
                <ChartView />
            </div>
        </Show>
    }
}

/// Latest close and the percentage badge.
#[component]
fn PriceSummary() -> impl IntoView {
    let style = ChartConfig::default().style;

    let price = move || {
        view_state().with(|s| {
            s.latest_price().map(|p| format_price(p.value())).unwrap_or_else(|| "--".to_string())
        })
    };
    let badge_style = move || {
        view_state().with(|s| match s.indicator.trend() {
            Some(Trend::Up) => format!("background-color: {}", style.positive_color.to_css()),
            Some(Trend::Down) => format!("background-color: {}", style.negative_color.to_css()),
            None => "display: none".to_string(),
        })
    };
    let percent =
        move || view_state().with(|s| s.indicator.value().map(format_percent).unwrap_or_default());

    view! {
        <div class="general">
            <div class="price">"Current Price: $" {price}</div>
            <div class="percentageContainer" style=badge_style>
                <div class="percentage">{percent}</div>
            </div>
        </div>
    }
}

#[component]
fn RangeButtons() -> impl IntoView {
    view! {
        <div class="btnContainer">
            {TimeRange::iter()
                .map(|range| {
                    let active = move || view_state().with(|s| s.selection == range);
                    view! {
                        <button class="button" class:active=active on:click=move |_| select_range(range)>
                            {range.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Line + markers on a canvas, with a hover tooltip.
#[component]
fn ChartView() -> impl IntoView {
    let config = ChartConfig::default();
    let canvas_ref = create_node_ref::<Canvas>();
    let chart = create_memo(move |_| {
        view_state().with(|s| LineChart::from_series(&s.series, config.dimensions))
    });

    create_effect(move |_| {
        let chart = chart.get();
        tooltip().set(None);
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = CanvasRenderer::new(config).render(&canvas, &chart) {
                log_error!(LogComponent::Presentation("ChartView"), "{}", e);
            }
        }
    });

    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let x = event.offset_x() as f64;
        let y = event.offset_y() as f64;
        let hovered = chart.with_untracked(|c| c.nearest_point(x).cloned());
        tooltip().set(hovered.map(|point| TooltipData { point, x, y }));
    };
    let handle_mouse_leave = move |_event: web_sys::MouseEvent| tooltip().set(None);

    view! {
        <div class="chart">
            <canvas
                node_ref=canvas_ref
                width=config.dimensions.width
                height=config.dimensions.height
                on:mousemove=handle_mouse_move
                on:mouseleave=handle_mouse_leave
            />
            <ChartTooltip />
        </div>
    }
}

#[component]
fn ChartTooltip() -> impl IntoView {
    let left = move || tooltip().with(|t| t.as_ref().map(|t| t.x).unwrap_or(0.0));
    let top = move || tooltip().with(|t| t.as_ref().map(|t| t.y).unwrap_or(0.0));

    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip().with(Option::is_some) { "block" } else { "none" }
            style:left=move || format!("{}px", left())
            style:top=move || format!("{}px", top())
        >
            {move || tooltip().with(|t| t.as_ref().map(|t| t.point.label.clone()).unwrap_or_default())}
        </div>
    }
}
