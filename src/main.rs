//! Beachball entry point
//!
//! Runs the fixed-delay game loop headless: the autopilot supplies input and
//! each frame's "render" is a snapshot, logged every few ticks.
//!
//! Usage: `beachball [settings.json]`

use std::path::PathBuf;
use std::time::Duration;

use beachball::sim::{FrameSnapshot, GameEvent, TickInput, WorldState, update_state};
use beachball::{Autopilot, Settings};

/// Game instance holding all state
struct Game {
    state: WorldState,
    autopilot: Option<Autopilot>,
    tick_delay: Duration,
    max_ticks: Option<u64>,
    snapshot_interval: u64,
    running: bool,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: WorldState::new(seed),
            autopilot: settings
                .autopilot
                .then(|| Autopilot::new(settings.mode_switch_interval)),
            tick_delay: Duration::from_millis(settings.tick_delay_ms),
            max_ticks: settings.max_ticks,
            snapshot_interval: settings.snapshot_interval,
            running: true,
        }
    }

    fn poll_input(&mut self) -> TickInput {
        match self.autopilot.as_mut() {
            Some(pilot) => pilot.next_input(&self.state),
            None => TickInput {
                cursor: self.state.cursor.pos,
                ..Default::default()
            },
        }
    }

    fn run(&mut self) {
        while self.running {
            let input = self.poll_input();
            let events = update_state(&mut self.state, &input);
            self.report(&events);
            std::thread::sleep(self.tick_delay);
            self.render();

            if self
                .max_ticks
                .is_some_and(|max| self.state.time_ticks >= max)
            {
                self.running = false;
            }
        }
    }

    fn report(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Scored(score) => log::info!("Score: {}", score),
                GameEvent::Lost => log::info!("Fell to the floor - retry to continue"),
                _ => {}
            }
        }
    }

    fn render(&self) {
        if self.snapshot_interval == 0 || !self.state.time_ticks.is_multiple_of(self.snapshot_interval) {
            return;
        }
        let snapshot = FrameSnapshot::capture(&self.state);
        log::debug!("{}", snapshot.summary());
        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&snapshot) {
                Ok(json) => log::trace!("{}", json),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref());
    let seed = settings.resolve_seed();

    log::info!("Beachball starting (seed {})", seed);
    if !settings.autopilot {
        log::info!("Autopilot off - the player will stand still");
    }

    let mut game = Game::new(&settings, seed);
    game.run();

    log::info!(
        "Stopped after {} ticks with score {}",
        game.state.time_ticks,
        game.state.score
    );
}
