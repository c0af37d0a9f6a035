//! Festive Decoration Component
//!
//! Snowfall and pine rows rendered behind the top bar while festive mode is
//! on. Layout is generated once per mount.

use leptos::prelude::*;

use crate::decor::{pine_rows, snowflakes, SNOWFLAKE_COUNT};

#[component]
pub fn Snowfall() -> impl IntoView {
    let flakes = snowflakes(SNOWFLAKE_COUNT, js_sys::Math::random);

    view! {
        <div class="snowfall" aria-hidden="true">
            {flakes
                .into_iter()
                .map(|flake| view! { <span class="snowflake" style=flake.style()>"❄"</span> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn PineRows() -> impl IntoView {
    let rows = pine_rows(js_sys::Math::random);

    view! {
        <div class="pine-rows" aria-hidden="true">
            {rows
                .into_iter()
                .enumerate()
                .map(|(layer, offsets)| {
                    view! {
                        <div class=format!("pine-row pine-row-{}", layer)>
                            {offsets
                                .into_iter()
                                .map(|offset| {
                                    view! {
                                        <span class="pine" style=format!("transform: translateY({:.1}px);", offset)>
                                            "🌲"
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
