use core::time::{Duration, TryFromFloatSecsError};

use handrps::{
    Landmark, MatchEngine, MatchOptions, MatchSnapshot, Move, Phase, RoundOutcome, RoundRecord,
    Timestamp,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMatch {
    engine: MatchEngine,
}

#[wasm_bindgen]
impl WasmMatch {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, max_rounds: u32) -> Result<WasmMatch, JsValue> {
        let options = MatchOptions::default().with_max_rounds(max_rounds);
        let engine = MatchEngine::new(options, seed as u64).map_err(js_err)?;
        Ok(Self { engine })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        let options = self.engine.options().clone();
        self.engine = MatchEngine::new(options, seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn restart(&self, now_ms: f64) -> Result<(), JsValue> {
        self.engine.restart(timestamp(now_ms).map_err(js_err)?);
        Ok(())
    }

    pub fn start(&self, now_ms: f64) -> Result<(), JsValue> {
        self.engine.start_match(timestamp(now_ms).map_err(js_err)?).map_err(js_err)
    }

    /// Feeds one camera frame. `landmarks` is the detector output flattened
    /// to `[x0, y0, x1, y1, ...]`, or `undefined` when no hand was found.
    pub fn tick(&self, now_ms: f64, landmarks: Option<Vec<f32>>) -> Result<String, JsValue> {
        let points: Option<Vec<Landmark>> = landmarks.map(|flat| {
            flat.chunks(2)
                .map(|pair| Landmark::new(pair[0], pair.get(1).copied().unwrap_or(f32::NAN)))
                .collect()
        });

        self.engine
            .tick(timestamp(now_ms).map_err(js_err)?, points.as_deref())
            .map(|phase| phase_to_str(phase).to_owned())
            .map_err(js_err)
    }

    pub fn pause(&self, now_ms: f64) -> Result<(), JsValue> {
        self.engine.pause(timestamp(now_ms).map_err(js_err)?).map_err(js_err)
    }

    pub fn resume(&self, now_ms: f64) -> Result<(), JsValue> {
        self.engine.resume(timestamp(now_ms).map_err(js_err)?).map_err(js_err)
    }

    pub fn snapshot(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        let snapshot = JsSnapshot::from(self.engine.snapshot(timestamp(now_ms).map_err(js_err)?));
        to_js_value(&snapshot)
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        let rounds: Vec<JsRound> = self.engine.history().into_iter().map(JsRound::from).collect();
        to_js_value(&rounds)
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    remaining_ms: Option<f64>,
    display_seconds: Option<u32>,
    rounds_played: u32,
    max_rounds: u32,
    human_score: u32,
    opponent_score: u32,
    ties: u32,
    human_move: Option<&'static str>,
    opponent_move: Option<&'static str>,
    outcome: Option<&'static str>,
    winner: Option<&'static str>,
    paused: bool,
}

impl From<MatchSnapshot> for JsSnapshot {
    fn from(snapshot: MatchSnapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            remaining_ms: snapshot.remaining.map(|left| left.as_secs_f64() * 1000.0),
            display_seconds: snapshot.display_seconds().map(|secs| secs as u32),
            rounds_played: snapshot.rounds_played,
            max_rounds: snapshot.max_rounds,
            human_score: snapshot.human_score,
            opponent_score: snapshot.opponent_score,
            ties: snapshot.ties,
            human_move: snapshot.last_human_move.map(move_to_str),
            opponent_move: snapshot.last_opponent_move.map(move_to_str),
            outcome: snapshot.last_outcome.map(outcome_to_str),
            winner: snapshot.winner.map(outcome_to_str),
            paused: snapshot.paused,
        }
    }
}

#[derive(Serialize)]
struct JsRound {
    round: u32,
    human: Option<&'static str>,
    opponent: Option<&'static str>,
    outcome: &'static str,
    decided_at_ms: f64,
}

impl From<RoundRecord> for JsRound {
    fn from(record: RoundRecord) -> Self {
        Self {
            round: record.round,
            human: record.human.map(move_to_str),
            opponent: record.opponent.map(move_to_str),
            outcome: outcome_to_str(record.outcome),
            decided_at_ms: record.decided_at.as_duration().as_secs_f64() * 1000.0,
        }
    }
}

/// Converts a `performance.now()` style reading. Negative, NaN and
/// overflowing values are rejected rather than clamped.
fn timestamp(now_ms: f64) -> Result<Timestamp, TryFromFloatSecsError> {
    Duration::try_from_secs_f64(now_ms / 1000.0).map(Timestamp::from_duration)
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingStart => "AwaitingStart",
        Phase::Countdown => "Countdown",
        Phase::Sampling => "Sampling",
        Phase::RoundBreak => "RoundBreak",
        Phase::Finished => "Finished",
    }
}

fn move_to_str(mv: Move) -> &'static str {
    match mv {
        Move::Rock => "Rock",
        Move::Paper => "Paper",
        Move::Scissors => "Scissors",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::HumanWins => "HumanWins",
        RoundOutcome::OpponentWins => "OpponentWins",
        RoundOutcome::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_accepts_clock_readings() {
        assert_eq!(timestamp(0.0), Ok(Timestamp::ZERO));
        assert_eq!(timestamp(1500.0), Ok(Timestamp::from_millis(1500)));
    }

    #[test]
    fn timestamp_rejects_unusable_readings() {
        assert!(timestamp(-1.0).is_err());
        assert!(timestamp(f64::NAN).is_err());
        assert!(timestamp(f64::INFINITY).is_err());
        assert!(timestamp(f64::MAX).is_err());
    }
}
