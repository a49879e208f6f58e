use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub start_enabled: bool,
    pub reset_enabled: bool,
    pub on_start: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let button_style = "flex:1; padding:8px 12px; font-size:15px; border-radius:8px; border:1px solid #1f4a73;";
    html! {<div style="display:flex; gap:12px; justify-content:center;">
        <button id="start-game" style={button_style} disabled={!props.start_enabled} onclick={start_cb}>{"Start Game"}</button>
        <button id="reset-game" style={button_style} disabled={!props.reset_enabled} onclick={reset_cb}>{"Reset"}</button>
    </div>}
}
