//! Terminal rock-paper-scissors example.
//!
//! Stands in for a camera loop: every line typed is one frame, and the key
//! pressed decides which hand pose the fake detector reports.

#![allow(clippy::missing_docs_in_private_items)]

use std::convert::Infallible;
use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use handrps::landmark::{FINGER_TIPS, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP, lower_joint};
use handrps::{
    HandLandmarks, Landmark, LandmarkDetector, MatchEngine, MatchOptions, MatchSnapshot, Phase,
    RoundOutcome, Timestamp,
};

/// Turns a typed key into the landmarks a camera detector would report.
struct KeyboardDetector;

impl LandmarkDetector for KeyboardDetector {
    type Frame = String;
    type Error = Infallible;

    fn detect(&mut self, frame: &String) -> Result<Option<HandLandmarks>, Infallible> {
        let extended = match frame.as_str() {
            "r" | "rock" => [false; 4],
            "p" | "paper" => [true; 4],
            "s" | "scissors" => [true, true, false, false],
            _ => return Ok(None),
        };
        Ok(Some(pose(extended)))
    }
}

fn pose(extended: [bool; 4]) -> HandLandmarks {
    let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    for (finger, (&tip, &up)) in FINGER_TIPS.iter().zip(extended.iter()).enumerate() {
        let x = 0.4 + 0.1 * finger as f32;
        points[lower_joint(tip)] = Landmark::new(x, 0.5);
        points[tip] = Landmark::new(x, if up { 0.3 } else { 0.7 });
    }

    // A fist closes the thumb over the index fingertip.
    let index = points[INDEX_TIP];
    points[THUMB_TIP] = if extended[0] {
        Landmark::new(0.1, 0.9)
    } else {
        Landmark::new(index.x, index.y)
    };

    HandLandmarks::new(&points).unwrap_or_else(|err| unreachable!("synthetic pose: {err}"))
}

fn main() {
    env_logger::init();
    println!("Rock Paper Scissors (r/p/s to show a hand, enter to wait, 'pause', 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let engine = match MatchEngine::new(MatchOptions::default(), seed) {
        Ok(engine) => engine,
        Err(err) => {
            println!("Config error: {err}");
            return;
        }
    };

    let epoch = Instant::now();
    let now = || Timestamp::from_duration(epoch.elapsed());
    let mut detector = KeyboardDetector;

    prompt_line("Press enter to start.");
    if let Err(err) = engine.start_match(now()) {
        println!("Start error: {err}");
        return;
    }

    loop {
        let snapshot = engine.snapshot(now());
        print_status(&snapshot);

        if snapshot.phase == Phase::Finished {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    engine.restart(now());
                    if let Err(err) = engine.start_match(now()) {
                        println!("Start error: {err}");
                    }
                    continue;
                }
                _ => break,
            }
        }

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => break,
            "pause" => {
                if let Err(err) = engine.pause(now()) {
                    println!("Pause error: {err}");
                }
                continue;
            }
            "resume" => {
                if let Err(err) = engine.resume(now()) {
                    println!("Resume error: {err}");
                }
                continue;
            }
            _ => {}
        }

        let Ok(hand) = detector.detect(&input);
        if let Err(err) = engine.tick_hand(now(), hand.as_ref()) {
            println!("Tick error: {err}");
        }
    }

    println!("Goodbye.");
}

fn print_status(snapshot: &MatchSnapshot) {
    let round = snapshot.rounds_played;
    let max = snapshot.max_rounds;
    let score = format!(
        "Human {} | Opponent {} | Ties {}",
        snapshot.human_score, snapshot.opponent_score, snapshot.ties
    );

    if snapshot.paused {
        println!("[paused] type 'resume' to continue. {score}");
        return;
    }

    match snapshot.phase {
        Phase::AwaitingStart => println!("Waiting to start."),
        Phase::Countdown => {
            let left = snapshot.display_seconds().unwrap_or(0);
            println!("Round {}/{max} starts in {left}... {score}", round + 1);
        }
        Phase::Sampling => println!("Show your move! {score}"),
        Phase::RoundBreak => {
            let result = match snapshot.last_outcome {
                Some(RoundOutcome::HumanWins) => "You win!",
                Some(RoundOutcome::OpponentWins) => "Opponent wins!",
                Some(RoundOutcome::Tie) | None => "Tie!",
            };
            println!(
                "Round {round}/{max}: {:?} vs {:?}. {result} {score}",
                snapshot.last_human_move, snapshot.last_opponent_move
            );
        }
        Phase::Finished => {
            let verdict = match snapshot.winner {
                Some(RoundOutcome::HumanWins) => "You win the match!",
                Some(RoundOutcome::OpponentWins) => "The opponent wins the match!",
                _ => "It's a tie!",
            };
            println!("Game over. {score}. {verdict}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
