use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u32,
    pub goal: u32,
    pub time_left: u32,
    /// 0..=100
    pub progress: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:50px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let low_time = props.time_left <= 10;
    html! {
        <div style="background:rgba(18,49,79,0.9); border:1px solid #1f4a73; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#4fcbff;", icon_style)}>{"💧"}</span>
                <span style={format!("{} color:#4fcbff;", label_style)}>{"Cans"}</span>
                <span style={format!("{} color:#4fcbff;", value_style)}>
                    <span id="current-cans">{ props.score }</span>{" / "}<span id="goal-cans">{ props.goal }</span>
                </span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d29922;", icon_style)}>{"⏱"}</span>
                <span style={format!("{} color:#d29922;", label_style)}>{"Time"}</span>
                <span id="timer" style={format!("{} color:{};", value_style, if low_time { "#f85149" } else { "#d29922" })}>{ props.time_left }</span>
            </div>
            <div style="height:10px; background:#0a1a2b; border-radius:5px; overflow:hidden;" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={props.progress.to_string()}>
                <div id="progress-bar" style={format!("height:100%; width:{}%; background:linear-gradient(90deg, #0b6bff, #4fcbff); transition:width 200ms ease;", props.progress)}></div>
            </div>
        </div>
    }
}
