use crate::state::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastBannerProps {
    pub toast: Option<Toast>,
}

/// Achievement line above the grid. Keeps its height when empty so the grid does not jump.
#[function_component]
pub fn ToastBanner(props: &ToastBannerProps) -> Html {
    let base = "min-height:22px; margin-top:10px; text-align:center; font-size:14px; line-height:1.25; border-radius:6px; padding:4px 8px;";
    match props.toast {
        Some(t) => html! {
            <div id="achievements" role="status" aria-live="polite" key={t.id} style={format!("{} background:#1c2f45; border:1px solid #1f4a73;", base)}>
                { t.message() }
            </div>
        },
        None => html! { <div id="achievements" class="hidden" role="status" aria-live="polite" style={base}></div> },
    }
}
