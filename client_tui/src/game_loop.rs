use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use game_core::{Game, InputOutcome, KeySource};
use log::{debug, info, trace, warn};

use crate::config::LoopConfig;
use crate::fsm::{LoopAction, LoopFsm, LoopState};
use crate::renderer::Renderer;
use crate::terminal::DisplaySink;

// Abstract environment (clock, pacing)
pub trait Environment {
    /// Monotonic time in seconds
    fn now(&self) -> f64;
    fn sleep(&self, duration: Duration);
}

/// Wall clock and real sleeps
pub struct SystemEnv {
    start: Instant,
}

impl SystemEnv {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Drives input, simulation and rendering until the quit key
pub struct GameLoop<E, K, D> {
    game: Game,
    renderer: Renderer,
    config: LoopConfig,
    fsm: LoopFsm,
    env: E,
    keys: K,
    sink: D,
    interrupted: Arc<AtomicBool>,
    last_time: f64,
    render_acc: f32,
    frames_drawn: u64,
}

impl<E, K, D> GameLoop<E, K, D>
where
    E: Environment,
    K: KeySource,
    D: DisplaySink,
{
    pub fn new(
        game: Game,
        renderer: Renderer,
        config: LoopConfig,
        env: E,
        keys: K,
        sink: D,
    ) -> Self {
        let last_time = env.now();
        Self {
            game,
            renderer,
            config,
            fsm: LoopFsm::new(),
            env,
            keys,
            sink,
            interrupted: Arc::new(AtomicBool::new(false)),
            last_time,
            render_acc: 0.0,
            frames_drawn: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn state(&self) -> LoopState {
        self.fsm.state()
    }

    /// Frames successfully handed to the sink so far
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Flag that stops the loop at the start of the next tick once set
    ///
    /// Safe to set from a signal handler thread.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Run one loop iteration
    pub fn tick(&mut self) -> LoopState {
        if !self.fsm.is_running() {
            return self.fsm.state();
        }

        if self.interrupted.load(Ordering::SeqCst) {
            self.terminate(LoopAction::Interrupt);
            return self.fsm.state();
        }

        let now = self.env.now();
        let dt = (now - self.last_time) as f32;
        self.last_time = now;
        self.render_acc += dt;

        if self.game.apply_input(dt, &mut self.keys) == InputOutcome::Quit {
            self.terminate(LoopAction::Quit);
            return self.fsm.state();
        }

        self.game.advance(dt);
        self.log_events();

        if self.render_acc >= self.config.render_interval {
            self.render_acc = 0.0;
            if let Some(frame) = self.renderer.rasterize(&self.game) {
                match self.sink.write_frame(frame) {
                    Ok(()) => self.frames_drawn += 1,
                    Err(err) => warn!("Failed to write frame: {}", err),
                }
            }
        }

        self.env.sleep(self.config.frame_sleep);
        self.fsm.state()
    }

    /// Tick until the loop terminates
    pub fn run(&mut self) {
        while self.tick() == LoopState::Running {}
    }

    fn terminate(&mut self, action: LoopAction) {
        let result = self.fsm.transition(action);
        debug!(
            "Loop {:?} -> {:?} on {:?}",
            result.from_state(),
            result.to_state(),
            result.action()
        );
    }

    fn log_events(&self) {
        let events = self.game.events;
        if events.any_score() {
            let score = self.game.score();
            let scorer = if events.left_scored { "Left" } else { "Right" };
            info!("{} scores: L={} R={}", scorer, score.left, score.right);
        }
        if events.ball_hit_paddle {
            trace!("Ball hit paddle at t={:.3}", self.game.time.now);
        }
        if events.ball_hit_wall {
            trace!("Ball hit wall at t={:.3}", self.game.time.now);
        }
    }
}
