//! Headless frame dump
//!
//! Usage: `quizfx-dump <questions.csv> [--frames N] [--click X,Y@FRAME]...`
//!
//! Runs the quiz for N frames without a terminal, replaying each scripted
//! click just before the given frame, and prints the last frame's draw
//! commands as JSON.

use std::path::PathBuf;

use quizfx::{
    error,
    models::QuestionStore,
    quiz::{FrameContext, Quiz},
    util::Point,
    QuizError, Result,
};

#[derive(Debug, Clone, PartialEq)]
struct ScriptedClick {
    at: Point,
    frame: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct DumpArgs {
    questions: PathBuf,
    frames: u64,
    clicks: Vec<ScriptedClick>,
}

fn parse_click(value: &str) -> Result<ScriptedClick> {
    let bad = || QuizError::Config(format!("--click expects X,Y@FRAME, got '{}'", value));
    let (coords, frame) = value.split_once('@').ok_or_else(bad)?;
    let (x, y) = coords.split_once(',').ok_or_else(bad)?;
    Ok(ScriptedClick {
        at: Point::new(
            x.trim().parse().map_err(|_| bad())?,
            y.trim().parse().map_err(|_| bad())?,
        ),
        frame: frame.trim().parse().map_err(|_| bad())?,
    })
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<DumpArgs> {
    let mut questions = None;
    let mut frames = 1;
    let mut clicks = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args
                    .next()
                    .ok_or_else(|| QuizError::Config("--frames needs a value".to_string()))?;
                frames = value.parse().map_err(|_| {
                    QuizError::Config(format!("--frames expects a number, got '{}'", value))
                })?;
            }
            "--click" => {
                let value = args
                    .next()
                    .ok_or_else(|| QuizError::Config("--click needs a value".to_string()))?;
                clicks.push(parse_click(&value)?);
            }
            _ if questions.is_none() && !arg.starts_with("--") => {
                questions = Some(PathBuf::from(arg));
            }
            _ => return Err(QuizError::Config(format!("unexpected argument '{}'", arg))),
        }
    }

    Ok(DumpArgs {
        questions: questions.unwrap_or_else(|| PathBuf::from(quizfx::DEFAULT_QUESTIONS_FILE)),
        frames,
        clicks,
    })
}

fn run() -> Result<String> {
    let args = parse_args(std::env::args().skip(1))?;
    let store = QuestionStore::load(&args.questions)?;
    let mut quiz = Quiz::new(store);

    let mut pointer = Point::default();
    let mut last = None;
    for frame in 1..=args.frames {
        for click in args.clicks.iter().filter(|c| c.frame == frame) {
            pointer = click.at;
            quiz.on_click(click.at);
        }
        last = Some(quiz.tick(FrameContext::new(pointer)));
    }

    let Some(list) = last else {
        return Ok("[]".to_string());
    };
    serde_json::to_string_pretty(&list)
        .map_err(|e| QuizError::Config(format!("Failed to encode frame: {}", e)))
}

fn main() {
    match run() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(Vec::new()).unwrap();
        assert_eq!(parsed.questions, PathBuf::from("questions.csv"));
        assert_eq!(parsed.frames, 1);
        assert!(parsed.clicks.is_empty());
    }

    #[test]
    fn test_full_command_line() {
        let parsed = parse_args(args(&[
            "quiz.csv",
            "--frames",
            "40",
            "--click",
            "400,180@2",
            "--click",
            "1.5, 2@35",
        ]))
        .unwrap();
        assert_eq!(parsed.questions, PathBuf::from("quiz.csv"));
        assert_eq!(parsed.frames, 40);
        assert_eq!(
            parsed.clicks,
            vec![
                ScriptedClick {
                    at: Point::new(400.0, 180.0),
                    frame: 2
                },
                ScriptedClick {
                    at: Point::new(1.5, 2.0),
                    frame: 35
                },
            ]
        );
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(args(&["--frames"])).is_err());
        assert!(parse_args(args(&["--frames", "many"])).is_err());
        assert!(parse_args(args(&["--click", "400x180@2"])).is_err());
        assert!(parse_args(args(&["--click", "400,180"])).is_err());
        assert!(parse_args(args(&["a.csv", "b.csv"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}
