use super::{
    confetti_canvas::ConfettiCanvas, controls_panel::ControlsPanel, emoji_flood::EmojiFloodLayer,
    grid_view::GridView, stats_panel::StatsPanel, toast_banner::ToastBanner,
};
use crate::config::GameConfig;
use crate::model::{RoundAction, RoundPhase, RoundState};
use crate::state::SpawnId;
use crate::util::{Interval, Timeout, random_seed};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let round = use_reducer(|| RoundState::new(GameConfig::from_document(), random_seed()));

    // Spawner + countdown. Dropping the guards clears both intervals, so leaving
    // Playing by any path (win, timeout, reset) stops them.
    {
        let handle = round.clone();
        let spawn_ms = round.config.spawn_period_ms;
        let countdown_ms = round.config.countdown_period_ms;
        use_effect_with((round.round, round.is_ticking()), move |&(_, ticking)| {
            let timers = ticking.then(|| {
                let spawner = handle.clone();
                let countdown = handle.clone();
                (
                    Interval::new(spawn_ms, move || spawner.dispatch(RoundAction::SpawnTick)),
                    Interval::new(countdown_ms, move || {
                        countdown.dispatch(RoundAction::CountdownTick)
                    }),
                )
            });
            move || drop(timers)
        });
    }

    // Delayed win once the goal is reached
    {
        let handle = round.clone();
        let delay = round.config.win_delay_ms;
        let finishing = round.phase == RoundPhase::Finishing;
        use_effect_with((round.round, finishing), move |&(id, finishing)| {
            let pending = if finishing {
                Timeout::new(delay, move || {
                    handle.dispatch(RoundAction::End { round: id, won: true })
                })
            } else {
                None
            };
            move || drop(pending)
        });
    }

    // Toast auto-dismiss; a newer toast cancels the older timer
    {
        let handle = round.clone();
        let toast = round.toast;
        use_effect_with(toast.map(|t| t.id), move |_| {
            let pending = toast.and_then(|t| {
                Timeout::new(t.duration_ms(), move || {
                    handle.dispatch(RoundAction::DismissToast { id: t.id })
                })
            });
            move || drop(pending)
        });
    }

    let on_start = {
        let round = round.clone();
        Callback::from(move |_| round.dispatch(RoundAction::Start))
    };
    let on_reset = {
        let round = round.clone();
        Callback::from(move |_| round.dispatch(RoundAction::Reset))
    };
    let on_activate = {
        let round = round.clone();
        Callback::from(move |spawn: SpawnId| round.dispatch(RoundAction::Activate { spawn }))
    };

    html! {
        <div class="container" style="position:relative; max-width:520px; margin:24px auto; padding:20px; background:#0d2238; border:1px solid #1f4a73; border-radius:14px; color:#e6f1ff; font-family:system-ui, sans-serif; overflow:hidden;">
            <h1 style="margin:0 0 6px 0; font-size:24px; text-align:center; color:#4fcbff;">{"Splash Grid"}</h1>
            <p style="margin:0 0 14px 0; text-align:center; opacity:0.8; font-size:13px;">
                { format!("Collect {} water cans before time runs out. Avoid the bombs!", round.goal()) }
            </p>
            <StatsPanel
                score={round.score}
                goal={round.goal()}
                time_left={round.time_left}
                progress={round.progress_percent()}
            />
            <ToastBanner toast={round.toast} />
            <GridView
                grid={round.grid.clone()}
                enabled={round.is_ticking()}
                on_activate={on_activate}
            />
            <ControlsPanel
                start_enabled={round.start_enabled()}
                reset_enabled={round.reset_enabled()}
                on_start={on_start}
                on_reset={on_reset}
            />
            <ConfettiCanvas bursts={round.confetti_bursts} />
            <EmojiFloodLayer floods={round.floods} count={round.config.flood_count} />
        </div>
    }
}
