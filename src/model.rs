//! Round state for Splash Grid.
//! The reducer below is the round controller: every timer firing and every
//! player activation reaches the game as a `RoundAction`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::state::spawner::{self, Placement};
use crate::state::{Grid, Spawn, SpawnId, SpawnKind, Toast, ToastKind};
use crate::util::percent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Before the first start and after a reset.
    Idle,
    /// Timers running, input accepted.
    Playing,
    /// Goal reached; waiting out the win delay. Timers and input are off.
    Finishing,
    /// Round ended by win or timeout.
    Over { won: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Milestones {
    pub halfway: bool,
    pub goal: bool,
}

#[derive(Clone, Debug)]
pub struct RoundState {
    pub config: GameConfig,
    pub phase: RoundPhase,
    pub score: u32,
    pub time_left: u32,
    pub grid: Grid,
    /// Incremented on every start; delayed work carries it to detect staleness.
    pub round: u64,
    pub toast: Option<Toast>,
    pub milestones: Milestones,
    /// Bumped once per confetti burst. The canvas plays on change.
    pub confetti_bursts: u32,
    /// Bumped once per emoji flood.
    pub floods: u32,
    next_spawn_id: u64,
    next_toast_id: u64,
    rng: Pcg32,
}

impl RoundState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let time_left = config.round_secs;
        Self {
            config,
            phase: RoundPhase::Idle,
            score: 0,
            time_left,
            grid: Grid::default(),
            round: 0,
            toast: None,
            milestones: Milestones::default(),
            confetti_bursts: 0,
            floods: 0,
            next_spawn_id: 0,
            next_toast_id: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn goal(&self) -> u32 {
        self.config.goal
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, RoundPhase::Playing | RoundPhase::Finishing)
    }

    /// Spawner and countdown run only in this state.
    pub fn is_ticking(&self) -> bool {
        self.phase == RoundPhase::Playing
    }

    pub fn start_enabled(&self) -> bool {
        !self.is_active()
    }

    pub fn reset_enabled(&self) -> bool {
        self.phase != RoundPhase::Idle
    }

    pub fn progress_percent(&self) -> u32 {
        percent(self.score, self.config.goal)
    }

    /// Clears the grid and puts a fresh spawn of `kind` into `cell`.
    pub fn place_spawn(&mut self, cell: usize, kind: SpawnKind) -> SpawnId {
        self.next_spawn_id += 1;
        let id = SpawnId(self.next_spawn_id);
        self.grid.place(cell, Spawn { id, kind });
        log::debug!("spawn {:?} {:?} in cell {}", id.0, kind, cell);
        id
    }

    fn show_toast(&mut self, kind: ToastKind) {
        self.next_toast_id += 1;
        self.toast = Some(Toast { id: self.next_toast_id, kind });
    }

    // Each transition returns whether the state changed; unchanged actions hand
    // back the same Rc so callers and Yew see a no-op.

    fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.round += 1;
        self.score = 0;
        self.time_left = self.config.round_secs;
        self.grid.clear();
        self.milestones = Milestones::default();
        self.phase = RoundPhase::Playing;
        self.show_toast(ToastKind::Started);
        let Placement { cell, kind } = spawner::roll_placement(&mut self.rng, &self.config);
        self.place_spawn(cell, kind);
        log::info!(
            "round {} started: goal {}, {}s",
            self.round,
            self.config.goal,
            self.time_left
        );
        true
    }

    fn end(&mut self, round: u64, won: bool) -> bool {
        if round != self.round || !self.is_active() {
            return false;
        }
        self.phase = RoundPhase::Over { won };
        if won {
            self.show_toast(ToastKind::Won);
        } else {
            self.show_toast(ToastKind::Lost);
            self.floods += 1;
        }
        log::info!(
            "round {} over: {} with {}/{}",
            self.round,
            if won { "won" } else { "lost" },
            self.score,
            self.config.goal
        );
        true
    }

    fn reset(&mut self) -> bool {
        self.phase = RoundPhase::Idle;
        self.score = 0;
        self.time_left = self.config.round_secs;
        self.grid.clear();
        self.milestones = Milestones::default();
        self.toast = None;
        log::info!("round {} reset", self.round);
        true
    }

    fn spawn_tick(&mut self) -> bool {
        if !self.is_ticking() {
            return false;
        }
        if let Some(Placement { cell, kind }) = spawner::roll_tick(&mut self.rng, &self.config) {
            self.place_spawn(cell, kind);
        }
        // RNG advanced either way.
        true
    }

    fn countdown_tick(&mut self) -> bool {
        if !self.is_ticking() {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.end(self.round, false);
        }
        true
    }

    fn activate(&mut self, id: SpawnId) -> bool {
        if !self.is_ticking() {
            return false;
        }
        match self.grid.take(id).map(|s| s.kind) {
            Some(SpawnKind::Collectible) => self.collect(),
            Some(SpawnKind::Hazard) => self.hit(),
            None => return false,
        }
        true
    }

    fn collect(&mut self) {
        self.score += 1;
        if self.score == self.config.halfway() && !self.milestones.halfway {
            self.milestones.halfway = true;
            self.show_toast(ToastKind::Halfway);
        } else if self.score == self.config.goal && !self.milestones.goal {
            self.milestones.goal = true;
            self.show_toast(ToastKind::GoalReached);
            self.confetti_bursts += 1;
            self.phase = RoundPhase::Finishing;
            log::info!("round {} goal reached", self.round);
        }
    }

    fn hit(&mut self) {
        self.score = self.score.saturating_sub(1);
        self.show_toast(ToastKind::Hit);
    }

    fn dismiss_toast(&mut self, id: u64) -> bool {
        if self.toast.is_some_and(|t| t.id == id) {
            self.toast = None;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Debug)]
pub enum RoundAction {
    Start,
    Reset,
    /// Ends `round`. Ignored if that round is no longer the active one.
    End { round: u64, won: bool },
    SpawnTick,
    CountdownTick,
    /// Player clicked or keyed a spawn.
    Activate { spawn: SpawnId },
    DismissToast { id: u64 },
}

impl Reducible for RoundState {
    type Action = RoundAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use RoundAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            Start => new.start(),
            Reset => new.reset(),
            End { round, won } => new.end(round, won),
            SpawnTick => new.spawn_tick(),
            CountdownTick => new.countdown_tick(),
            Activate { spawn } => new.activate(spawn),
            DismissToast { id } => new.dismiss_toast(id),
        };
        if changed { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fresh(goal: u32) -> Rc<RoundState> {
        let config = GameConfig { goal, ..Default::default() };
        Rc::new(RoundState::new(config, 0x5eed))
    }

    fn started(goal: u32) -> Rc<RoundState> {
        fresh(goal).reduce(RoundAction::Start)
    }

    /// Puts a spawn of `kind` on the board and activates it.
    fn interact(state: Rc<RoundState>, kind: SpawnKind) -> Rc<RoundState> {
        let mut st = (*state).clone();
        let spawn = st.place_spawn(4, kind);
        Rc::new(st).reduce(RoundAction::Activate { spawn })
    }

    fn collect_n(mut state: Rc<RoundState>, n: u32) -> Rc<RoundState> {
        for _ in 0..n {
            state = interact(state, SpawnKind::Collectible);
        }
        state
    }

    #[test]
    fn start_opens_round_with_one_spawn() {
        let s = started(25);
        assert_eq!(s.phase, RoundPhase::Playing);
        assert_eq!(s.round, 1);
        assert_eq!(s.score, 0);
        assert_eq!(s.time_left, 45);
        assert!(s.grid.live().is_some());
        assert_eq!(s.grid.cells().iter().flatten().count(), 1);
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::Started));
        assert!(!s.start_enabled());
        assert!(s.reset_enabled());
    }

    #[test]
    fn start_while_active_is_noop() {
        let s = collect_n(started(25), 3);
        let again = s.clone().reduce(RoundAction::Start);
        assert!(Rc::ptr_eq(&s, &again));
        assert_eq!(again.score, 3);
    }

    #[test]
    fn reset_from_any_state() {
        let idle = fresh(25);
        let playing = collect_n(started(25), 4);
        let finishing = collect_n(started(2), 2);
        let lost = (0..45).fold(started(25), |s, _| s.reduce(RoundAction::CountdownTick));
        for s in [idle, playing, finishing, lost] {
            let r = s.reduce(RoundAction::Reset);
            assert!(!r.is_active());
            assert_eq!(r.phase, RoundPhase::Idle);
            assert_eq!(r.score, 0);
            assert_eq!(r.time_left, 45);
            assert!(r.grid.is_empty());
            assert!(r.toast.is_none());
            assert!(!r.reset_enabled());
            assert!(r.start_enabled());
        }
    }

    #[test]
    fn twenty_five_collects_win() {
        let s = collect_n(started(25), 25);
        assert_eq!(s.score, 25);
        assert_eq!(s.phase, RoundPhase::Finishing);
        assert_eq!(s.confetti_bursts, 1);
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::GoalReached));
        assert_eq!(s.progress_percent(), 100);

        let round = s.round;
        let s = s.reduce(RoundAction::End { round, won: true });
        assert_eq!(s.phase, RoundPhase::Over { won: true });
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::Won));
        assert_eq!(s.score, 25);
        assert_eq!(s.floods, 0);
        assert!(s.start_enabled());
    }

    #[test]
    fn hit_at_zero_stays_zero() {
        let s = interact(started(25), SpawnKind::Hazard);
        assert_eq!(s.score, 0);
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::Hit));
        assert_eq!(s.toast.map(|t| t.duration_ms()), Some(1200));
    }

    #[test]
    fn hit_takes_one_point() {
        let s = interact(collect_n(started(25), 3), SpawnKind::Hazard);
        assert_eq!(s.score, 2);
    }

    #[test]
    fn timeout_loses_exactly_once() {
        let mut s = started(25);
        for _ in 0..44 {
            s = s.reduce(RoundAction::CountdownTick);
        }
        assert_eq!(s.time_left, 1);
        assert!(s.is_active());
        s = s.reduce(RoundAction::CountdownTick);
        assert_eq!(s.time_left, 0);
        assert_eq!(s.phase, RoundPhase::Over { won: false });
        assert_eq!(s.floods, 1);
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::Lost));
        assert!(s.start_enabled());

        for _ in 0..5 {
            s = s.reduce(RoundAction::CountdownTick);
        }
        let round = s.round;
        s = s.reduce(RoundAction::End { round, won: false });
        assert_eq!(s.floods, 1);
        assert_eq!(s.time_left, 0);
    }

    #[test]
    fn milestones_fire_once_per_round() {
        let mut s = started(4);
        let mut halfway = 0;
        let mut goal = 0;
        let mut last_toast = s.toast.map(|t| t.id);
        let steps = [
            SpawnKind::Collectible,
            SpawnKind::Collectible,
            SpawnKind::Hazard,
            SpawnKind::Collectible,
            SpawnKind::Collectible,
            SpawnKind::Collectible,
        ];
        for kind in steps {
            s = interact(s, kind);
            if let Some(t) = s.toast {
                if Some(t.id) != last_toast {
                    match t.kind {
                        ToastKind::Halfway => halfway += 1,
                        ToastKind::GoalReached => goal += 1,
                        _ => {}
                    }
                    last_toast = Some(t.id);
                }
            }
        }
        assert_eq!(s.score, 4);
        assert_eq!((halfway, goal), (1, 1));

        // A new round re-arms both milestones.
        let round = s.round;
        let s = s
            .reduce(RoundAction::End { round, won: true })
            .reduce(RoundAction::Start);
        let s = collect_n(s, 2);
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::Halfway));
    }

    #[test]
    fn spawn_consumed_once() {
        let mut st = (*started(25)).clone();
        let spawn = st.place_spawn(0, SpawnKind::Collectible);
        let s = Rc::new(st).reduce(RoundAction::Activate { spawn });
        let again = s.clone().reduce(RoundAction::Activate { spawn });
        assert_eq!(again.score, 1);
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn finishing_freezes_round() {
        let s = collect_n(started(2), 2);
        assert_eq!(s.phase, RoundPhase::Finishing);
        let time = s.time_left;
        let s2 = s.clone().reduce(RoundAction::CountdownTick);
        let s2 = s2.reduce(RoundAction::SpawnTick);
        assert!(Rc::ptr_eq(&s, &s2));
        assert_eq!(s2.time_left, time);
        // No points past the goal while the win is pending.
        let s3 = interact(s2, SpawnKind::Collectible);
        assert_eq!(s3.score, 2);
    }

    #[test]
    fn stale_end_is_ignored() {
        let first = collect_n(started(2), 2);
        let old_round = first.round;
        let s = first
            .reduce(RoundAction::Reset)
            .reduce(RoundAction::Start);
        let s = s.reduce(RoundAction::End { round: old_round, won: true });
        assert_eq!(s.phase, RoundPhase::Playing);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn ticks_ignored_when_idle() {
        let s = fresh(25);
        let t = s.clone().reduce(RoundAction::SpawnTick);
        let t = t.reduce(RoundAction::CountdownTick);
        assert!(Rc::ptr_eq(&s, &t));
        assert!(t.grid.is_empty());
    }

    #[test]
    fn spawn_ticks_keep_one_live_spawn() {
        let mut s = started(25);
        for _ in 0..100 {
            s = s.reduce(RoundAction::SpawnTick);
            assert!(s.grid.cells().iter().flatten().count() <= 1);
        }
        assert!(s.grid.live().is_some());
    }

    #[test]
    fn toast_dismiss_only_matches_current() {
        let s = started(25);
        let first = s.toast.map(|t| t.id).unwrap();
        let s = interact(s, SpawnKind::Hazard);
        let s = s.reduce(RoundAction::DismissToast { id: first });
        assert_eq!(s.toast.map(|t| t.kind), Some(ToastKind::Hit));
        let current = s.toast.map(|t| t.id).unwrap();
        let s = s.reduce(RoundAction::DismissToast { id: current });
        assert!(s.toast.is_none());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Collect,
        Hit,
        SpawnTick,
        CountdownTick,
        EndWin,
        Start,
        Reset,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => Just(Op::Collect),
            2 => Just(Op::Hit),
            2 => Just(Op::SpawnTick),
            2 => Just(Op::CountdownTick),
            1 => Just(Op::EndWin),
            1 => Just(Op::Start),
            1 => Just(Op::Reset),
        ]
    }

    proptest! {
        #[test]
        fn score_stays_within_bounds(goal in 1u32..30, ops in prop::collection::vec(op(), 0..300)) {
            let mut s = started(goal);
            for op in ops {
                s = match op {
                    Op::Collect => interact(s, SpawnKind::Collectible),
                    Op::Hit => interact(s, SpawnKind::Hazard),
                    Op::SpawnTick => s.reduce(RoundAction::SpawnTick),
                    Op::CountdownTick => s.reduce(RoundAction::CountdownTick),
                    Op::EndWin => {
                        let round = s.round;
                        s.reduce(RoundAction::End { round, won: true })
                    }
                    Op::Start => s.reduce(RoundAction::Start),
                    Op::Reset => s.reduce(RoundAction::Reset),
                };
                prop_assert!(s.score <= goal);
                prop_assert!(s.time_left <= 45);
                prop_assert!(s.progress_percent() <= 100);
            }
        }
    }
}
