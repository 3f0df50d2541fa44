//! Task gate: the modal quiz state that freezes the board
//!
//! A door trigger opens the gate; `submit`/`choose` resolve it and `cancel`
//! closes it without touching the score. All calls are safe to repeat: a call
//! that does not apply to the current state is ignored.

use super::state::{GameEvent, GameState, Outcome};
use super::tasks::{Task, TaskError, TaskGenerator};
use super::world::DoorKind;

/// The quiz currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTask {
    pub door_id: u32,
    pub task: Task,
}

/// Holds at most one outstanding task
#[derive(Debug, Clone, Default)]
pub struct TaskGate {
    active: Option<ActiveTask>,
}

impl TaskGate {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveTask> {
        self.active.as_ref()
    }

    pub fn door_id(&self) -> Option<u32> {
        self.active.as_ref().map(|a| a.door_id)
    }
}

/// What an answer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerResult {
    /// Door opened; `victory` if it was the last one
    Correct { victory: bool },
    /// Score reduced, task still open
    Wrong { penalty: i64 },
    /// No matching task to answer
    Ignored,
}

/// Open the gate for a door
///
/// Returns `Ok(true)` if a task is now active for `door_id`, `Ok(false)` if the
/// call was redundant (task already open, run over, door unknown or open).
/// Generator output that breaks the task contract is refused.
pub fn activate<G: TaskGenerator + ?Sized>(
    state: &mut GameState,
    door_id: u32,
    tasks: &mut G,
) -> Result<bool, TaskError> {
    if state.gate.is_active() || state.outcome.is_terminal() {
        return Ok(false);
    }
    let Some(door) = state.door(door_id).copied() else {
        log::debug!("Ignoring task request for unknown door {}", door_id);
        return Ok(false);
    };
    if door.open {
        return Ok(false);
    }

    let task = match door.kind {
        DoorKind::Math => Task::Math(tasks.math()),
        DoorKind::Language => Task::Language(tasks.language()),
    };
    if let Err(err) = task.validate() {
        log::warn!("Refusing task for door {}: {}", door_id, err);
        return Err(err);
    }

    log::info!("Door {} asks a {:?} task", door_id, door.kind);
    state.gate.active = Some(ActiveTask { door_id, task });
    state.events.push(GameEvent::TaskStarted {
        door_id,
        kind: door.kind,
    });
    Ok(true)
}

/// Answer an outstanding math task; non-numeric input counts as wrong
pub fn submit(state: &mut GameState, answer: &str) -> AnswerResult {
    let correct = match state.gate.active.as_ref().map(|a| &a.task) {
        Some(Task::Math(task)) => task.check(answer),
        Some(Task::Language(_)) => {
            log::debug!("Numeric answer sent to a language task, ignoring");
            return AnswerResult::Ignored;
        }
        None => return AnswerResult::Ignored,
    };
    let penalty = state.tuning.math_penalty;
    resolve(state, correct, penalty)
}

/// Pick a word for an outstanding language task
pub fn choose(state: &mut GameState, word: &str) -> AnswerResult {
    let correct = match state.gate.active.as_ref().map(|a| &a.task) {
        Some(Task::Language(task)) => task.check(word),
        Some(Task::Math(_)) => {
            log::debug!("Word choice sent to a math task, ignoring");
            return AnswerResult::Ignored;
        }
        None => return AnswerResult::Ignored,
    };
    let penalty = state.tuning.language_penalty;
    resolve(state, correct, penalty)
}

fn resolve(state: &mut GameState, correct: bool, penalty: i64) -> AnswerResult {
    let Some(door_id) = state.gate.door_id() else {
        return AnswerResult::Ignored;
    };
    if state.outcome.is_terminal() {
        return AnswerResult::Ignored;
    }

    if !correct {
        state.score -= penalty;
        log::info!("Wrong answer at door {} (-{}, score {})", door_id, penalty, state.score);
        state.events.push(GameEvent::AnswerWrong { door_id, penalty });
        return AnswerResult::Wrong { penalty };
    }

    let reward = state.tuning.task_reward;
    state.score += reward;
    state.gate.active = None;
    if let Some(door) = state.door_mut(door_id) {
        door.open = true;
    }
    log::info!("Door {} opened (+{}, score {})", door_id, reward, state.score);
    state.events.push(GameEvent::AnswerCorrect { door_id, reward });
    state.events.push(GameEvent::DoorOpened { door_id });

    let victory = state.closed_doors() == 0;
    if victory {
        state.finish(Outcome::Victory);
    }
    AnswerResult::Correct { victory }
}

/// Close the task without reward or penalty; returns whether one was open
pub fn cancel(state: &mut GameState) -> bool {
    match state.gate.active.take() {
        Some(active) => {
            log::info!("Task at door {} cancelled", active.door_id);
            state.events.push(GameEvent::TaskCancelled {
                door_id: active.door_id,
            });
            true
        }
        None => false,
    }
}
