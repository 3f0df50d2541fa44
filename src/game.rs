//! Frame driver
//!
//! `Game` owns a session plus its collaborators (task generator, feedback
//! sink) and is the only surface presentation code talks to. Every call
//! drains the session's events into the feedback hooks and hands them back.

use crate::audio::{AudioManager, Feedback};
use crate::sim::gate::{self, AnswerResult};
use crate::sim::{
    Direction, GameEvent, GameState, RandomTaskGenerator, TaskGenerator, TickInput, tick,
};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// A running game
pub struct Game<G: TaskGenerator = RandomTaskGenerator, F: Feedback = AudioManager> {
    state: GameState,
    tasks: G,
    feedback: F,
    input: TickInput,
}

impl Game {
    /// Standard map, default tuning, seeded generators, default audio
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let state = GameState::with_world(crate::sim::World::standard(), tuning, seed);
        // Separate stream so quiz content does not shift the wolf's wandering
        let tasks =
            RandomTaskGenerator::new(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1));
        Self::with_parts(state, tasks, AudioManager::default())
    }
}

impl<G: TaskGenerator, F: Feedback> Game<G, F> {
    pub fn with_parts(state: GameState, tasks: G, feedback: F) -> Self {
        Self {
            state,
            tasks,
            feedback,
            input: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Currently held direction
    pub fn direction(&self) -> Option<Direction> {
        self.input.direction
    }

    /// Press a direction (ignored while the board is frozen)
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.is_frozen() {
            return;
        }
        self.input.direction = Some(direction);
    }

    /// Release the held direction
    pub fn clear_direction(&mut self) {
        self.input.direction = None;
    }

    /// Simulate one frame of `dt` seconds (clamped by tuning)
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        tick(&mut self.state, &self.input, dt, &mut self.tasks);
        self.dispatch()
    }

    /// Answer the open math task
    pub fn submit(&mut self, answer: &str) -> (AnswerResult, Vec<GameEvent>) {
        let result = gate::submit(&mut self.state, answer);
        (result, self.dispatch())
    }

    /// Pick a word for the open language task
    pub fn choose(&mut self, word: &str) -> (AnswerResult, Vec<GameEvent>) {
        let result = gate::choose(&mut self.state, word);
        (result, self.dispatch())
    }

    /// Close the open task without scoring
    pub fn cancel(&mut self) -> bool {
        let cancelled = gate::cancel(&mut self.state);
        self.dispatch();
        cancelled
    }

    /// Start over on the same map
    pub fn reset(&mut self) {
        self.state.reset();
        self.input = TickInput::default();
        self.dispatch();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    fn dispatch(&mut self) -> Vec<GameEvent> {
        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::AnswerCorrect { .. } => self.feedback.success(),
                GameEvent::AnswerWrong { .. } => self.feedback.failure(),
                GameEvent::Victory { .. } => self.feedback.victory(),
                GameEvent::Defeat { reason } => self.feedback.defeat(*reason),
                GameEvent::Reset => self.feedback.reset(),
                GameEvent::TaskStarted { .. }
                | GameEvent::TaskCancelled { .. }
                | GameEvent::DoorOpened { .. }
                | GameEvent::PredatorModeChanged { .. } => {}
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::consts::SIM_DT;
    use crate::sim::tasks::{LanguageTask, MathOp, MathTask};
    use crate::sim::{DefeatReason, DoorKind, Outcome, Task};
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Feedback for Recorder {
        fn success(&mut self) {
            self.calls.push("success".into());
        }
        fn failure(&mut self) {
            self.calls.push("failure".into());
        }
        fn victory(&mut self) {
            self.calls.push("victory".into());
        }
        fn defeat(&mut self, reason: DefeatReason) {
            self.calls.push(format!("defeat:{:?}", reason));
        }
        fn reset(&mut self) {
            self.calls.push("reset".into());
        }
    }

    struct FixedTasks;

    impl TaskGenerator for FixedTasks {
        fn math(&mut self) -> MathTask {
            MathTask {
                a: 58,
                b: 42,
                op: MathOp::Add,
                expected: 100,
            }
        }

        fn language(&mut self) -> LanguageTask {
            LanguageTask {
                correct: "dabar".into(),
                wrong: "babar".into(),
                correct_first: true,
            }
        }
    }

    fn recorded_game(state: GameState) -> Game<FixedTasks, Recorder> {
        Game::with_parts(state, FixedTasks, Recorder::default())
    }

    #[test]
    fn test_last_door_scenario() {
        // 10 doors, 9 already open, player parked on the tenth
        let mut state = GameState::new(77);
        let last = *state.doors.last().unwrap();
        for door in state.doors.iter_mut().take(9) {
            door.open = true;
        }
        state.player.pos = last.pos;
        let mut game = recorded_game(state);

        let events = game.frame(SIM_DT);
        assert!(events.contains(&GameEvent::TaskStarted {
            door_id: last.id,
            kind: last.kind
        }));
        assert_eq!(last.kind, DoorKind::Language);

        let (result, events) = game.choose("dabar");
        assert_eq!(result, AnswerResult::Correct { victory: true });
        assert!(events.contains(&GameEvent::DoorOpened { door_id: last.id }));

        let snap = game.snapshot();
        assert_eq!(snap.score, 10);
        assert!(snap.doors.iter().all(|d| d.open));
        assert_eq!(snap.outcome, Outcome::Victory);
        assert_eq!(game.feedback().calls, vec!["success", "victory"]);
    }

    #[test]
    fn test_wrong_math_answers_then_retry() {
        let mut state = GameState::new(77);
        state.player.pos = state.doors[0].pos;
        let mut game = recorded_game(state);
        game.frame(SIM_DT);
        assert!(matches!(
            game.state().gate.active().map(|a| &a.task),
            Some(Task::Math(_))
        ));

        assert_eq!(game.submit("99").0, AnswerResult::Wrong { penalty: 10 });
        assert_eq!(game.submit("ninety").0, AnswerResult::Wrong { penalty: 10 });
        assert_eq!(game.snapshot().score, -20);
        assert!(game.snapshot().task.is_some());

        assert_eq!(game.submit("100").0, AnswerResult::Correct { victory: false });
        assert_eq!(game.snapshot().score, -10);
        assert_eq!(game.feedback().calls, vec!["failure", "failure", "success"]);
    }

    #[test]
    fn test_direction_ignored_while_frozen() {
        let mut state = GameState::new(77);
        state.player.pos = state.doors[0].pos;
        let mut game = recorded_game(state);
        game.frame(SIM_DT);
        assert!(game.state().is_frozen());

        game.set_direction(Direction::Left);
        assert_eq!(game.direction(), None);

        assert!(game.cancel());
        assert!(!game.cancel());
        game.set_direction(Direction::Left);
        assert_eq!(game.direction(), Some(Direction::Left));
        game.clear_direction();
        assert_eq!(game.direction(), None);
    }

    #[test]
    fn test_defeat_feedback_and_reset() {
        let mut state = GameState::new(77);
        state.player.pos = state.world.hazards[0].center();
        let mut game = recorded_game(state);

        let events = game.frame(SIM_DT);
        assert!(events.contains(&GameEvent::Defeat {
            reason: DefeatReason::Hazard
        }));
        assert_eq!(game.snapshot().outcome, Outcome::Defeat(DefeatReason::Hazard));

        // Terminal: further frames change nothing
        let frozen = game.snapshot();
        assert!(game.frame(SIM_DT).is_empty());
        assert_eq!(game.snapshot(), frozen);

        game.reset();
        game.reset();
        let snap = game.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.outcome, Outcome::InProgress);
        assert_eq!(snap.player, game.state().world.player_start);
        assert_eq!(snap.predator, game.state().world.predator_start);
        assert!(snap.doors.iter().all(|d| !d.open));
        assert_eq!(
            game.feedback().calls,
            vec!["defeat:Hazard", "reset", "reset"]
        );
    }

    #[test]
    fn test_broken_frame_cap_freezes_instead_of_panicking() {
        let tuning = Tuning {
            max_frame_dt: -1.0,
            ..Tuning::default()
        };
        let mut game = Game::with_tuning(1, tuning);
        let start = game.snapshot().player;
        game.set_direction(Direction::Right);
        game.frame(0.016);
        assert_eq!(game.snapshot().player, start);
        assert_eq!(game.snapshot().outcome, Outcome::InProgress);
    }

    #[test]
    fn test_reset_clears_held_direction() {
        let mut game = Game::new(5);
        game.set_direction(Direction::Down);
        game.reset();
        assert_eq!(game.direction(), None);
    }

    #[test]
    fn test_default_game_plays_audio_cues() {
        let mut game = Game::new(5);
        let door = game.state().doors[0].pos;
        let mut state = game.state().clone();
        state.player.pos = door;
        game = Game::with_parts(state, RandomTaskGenerator::new(5), AudioManager::default());

        game.frame(SIM_DT);
        let (result, _) = game.submit("not a number");
        assert!(matches!(result, AnswerResult::Wrong { .. }));
        let cues = game.feedback_mut().drain_cues();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].effect, SoundEffect::Failure);
    }

    #[test]
    fn test_player_walks_toward_wolf_and_is_caught() {
        let mut state = GameState::new(77);
        state.player.pos = Vec2::new(740.0, 420.0);
        state.predator.pos = Vec2::new(740.0, 300.0);
        let mut game = recorded_game(state);
        game.set_direction(Direction::Up);

        let mut frames = 0;
        while game.snapshot().outcome == Outcome::InProgress && frames < 120 {
            game.frame(SIM_DT);
            frames += 1;
        }
        assert_eq!(game.snapshot().outcome, Outcome::Defeat(DefeatReason::Predator));
        assert_eq!(game.feedback().calls, vec!["defeat:Predator"]);
    }
}
