use crate::state::{GRID_COLUMNS, Grid, Spawn, SpawnId, SpawnKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GridViewProps {
    pub grid: Grid,
    /// False outside active play; spawns render but ignore input.
    pub enabled: bool,
    pub on_activate: Callback<SpawnId>,
}

#[function_component]
pub fn GridView(props: &GridViewProps) -> Html {
    let cell_style = "aspect-ratio:1; background:#12314f; border:1px solid #1f4a73; border-radius:10px; display:flex; align-items:center; justify-content:center;";
    html! {
        <div class="game-grid" style={format!("display:grid; grid-template-columns:repeat({}, 1fr); gap:10px; margin:14px 0;", GRID_COLUMNS)}>
            { for props.grid.cells().iter().enumerate().map(|(idx, cell)| html! {
                <div class="grid-cell" data-cell={idx.to_string()} style={cell_style}>
                    { cell.map(|spawn| spawn_button(spawn, props.enabled, &props.on_activate)).unwrap_or_default() }
                </div>
            }) }
        </div>
    }
}

fn spawn_button(spawn: Spawn, enabled: bool, on_activate: &Callback<SpawnId>) -> Html {
    let id = spawn.id;
    let onclick = {
        let cb = on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if enabled {
                cb.emit(id);
            }
        })
    };
    let onkeydown = {
        let cb = on_activate.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if enabled && (key == "Enter" || key == " ") {
                e.prevent_default();
                cb.emit(id);
            }
        })
    };
    let (class, glyph, ring) = match spawn.kind {
        SpawnKind::Collectible => ("water-can pop", "💧", "#4fcbff"),
        SpawnKind::Hazard => ("obstacle", "💣", "#f85149"),
    };
    html! {
        <div
            key={id.0}
            class={class}
            role="button"
            tabindex="0"
            aria-label={spawn.kind.aria_label()}
            {onclick}
            {onkeydown}
            style={format!("font-size:40px; cursor:pointer; user-select:none; border-radius:50%; padding:6px; box-shadow:0 0 0 2px {};", ring)}
        >
            { glyph }
        </div>
    }
}
