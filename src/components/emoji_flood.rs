use rand::SeedableRng;
use rand_pcg::Pcg32;
use yew::prelude::*;

use crate::state::EmojiFlood;
use crate::state::emoji_flood::FLOOD_EMOJI;
use crate::util::{Timeout, random_seed};

#[derive(Properties, PartialEq, Clone)]
pub struct EmojiFloodLayerProps {
    /// Releases a new flood every time this changes (0 = none yet).
    pub floods: u32,
    pub count: u32,
}

#[function_component]
pub fn EmojiFloodLayer(props: &EmojiFloodLayerProps) -> Html {
    let flood = use_state(|| None::<EmojiFlood>);
    {
        let flood = flood.clone();
        let count = props.count;
        use_effect_with(props.floods, move |&floods| {
            let mut removal = None;
            if floods > 0 {
                let mut rng = Pcg32::seed_from_u64(random_seed());
                // Replaces whatever flood is still on screen.
                flood.set(Some(EmojiFlood::new(&mut rng, count)));
                let flood = flood.clone();
                removal = Timeout::new(EmojiFlood::lifetime_ms(), move || flood.set(None));
            }
            move || drop(removal)
        });
    }
    let Some(current) = &*flood else {
        return html! {};
    };
    html! {
        <div
            class="emoji-flood"
            key={props.floods}
            aria-hidden="true"
            style="position:absolute; inset:0; pointer-events:none; overflow:hidden;"
        >
            { for current.drops.iter().map(|d| html! {
                <div class="emoji" style={format!("position:absolute; top:-60px; {}", d.style())}>{ FLOOD_EMOJI }</div>
            }) }
        </div>
    }
}
