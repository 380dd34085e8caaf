//! Interaction scripts
//!
//! A script is plain text with one interaction per line, used by the
//! `session` command to drive a [`SyllabusTreeView`] from a file or stdin.
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! mouse-down 100 100
//! mouse-move 150 130
//! mouse-up
//! wheel -100 ctrl
//! click 1
//! chapter 1 2 5
//! ```
//!
//! Subject and chapter numbers in `chapter` lines are 1-based, matching the
//! numbering printed by the text renderer.
//!
//! [`SyllabusTreeView`]: crate::core::view::SyllabusTreeView

use crate::core::view::Interaction;
use crate::core::viewer::{Modifiers, MouseEvent, Point, TouchEvent, WheelEvent};
use std::str::FromStr;

/// Every command keyword with its argument summary, for help output
pub const COMMANDS: [(&str, &str); 14] = [
    ("mouse-down", "X Y"),
    ("mouse-move", "X Y"),
    ("mouse-up", ""),
    ("mouse-leave", ""),
    ("touch-start", "X Y [X Y ...]"),
    ("touch-move", "X Y [X Y ...]"),
    ("touch-end", ""),
    ("wheel", "DELTA_Y [ctrl] [meta] [shift] [alt]"),
    ("zoom-in", ""),
    ("zoom-out", ""),
    ("reset", ""),
    ("click", "MONTH"),
    ("chapter", "MONTH SUBJECT CHAPTER"),
    ("class", "LEVEL"),
];

fn parse_f64(token: &str, what: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid {what}: '{token}'"))
}

fn parse_point(args: &[&str]) -> Result<Point, String> {
    match args {
        [x, y] => Ok(Point::new(parse_f64(x, "x")?, parse_f64(y, "y")?)),
        _ => Err(format!("Expected X Y, got {} argument(s)", args.len())),
    }
}

fn parse_touches(args: &[&str]) -> Result<TouchEvent, String> {
    if args.is_empty() || args.len() % 2 != 0 {
        return Err("Expected one or more X Y pairs".to_string());
    }
    let touches = args
        .chunks(2)
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;
    TouchEvent::new(touches).ok_or_else(|| "Expected at least one touch point".to_string())
}

fn parse_modifiers(args: &[&str]) -> Result<Modifiers, String> {
    let mut modifiers = Modifiers::NONE;
    for arg in args {
        match arg.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "meta" | "cmd" => modifiers.meta = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            other => return Err(format!("Unknown modifier: '{other}'")),
        }
    }
    Ok(modifiers)
}

fn parse_number(token: &str, what: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .map_err(|_| format!("Invalid {what}: '{token}'"))
}

fn parse_ordinal(token: &str, what: &str) -> Result<usize, String> {
    match parse_number(token, what)? {
        0 => Err(format!("{what} numbers start at 1")),
        n => Ok(n - 1),
    }
}

fn no_args(keyword: &str, args: &[&str], interaction: Interaction) -> Result<Interaction, String> {
    if args.is_empty() {
        Ok(interaction)
    } else {
        Err(format!("'{keyword}' takes no arguments"))
    }
}

impl FromStr for Interaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let Some((keyword, args)) = tokens.split_first() else {
            return Err("Empty command".to_string());
        };

        match keyword.to_ascii_lowercase().as_str() {
            "mouse-down" => Ok(Self::MouseDown(MouseEvent {
                client: parse_point(args)?,
            })),
            "mouse-move" => Ok(Self::MouseMove(MouseEvent {
                client: parse_point(args)?,
            })),
            "mouse-up" => no_args(keyword, args, Self::MouseUp),
            "mouse-leave" => no_args(keyword, args, Self::MouseLeave),
            "touch-start" => Ok(Self::TouchStart(parse_touches(args)?)),
            "touch-move" => Ok(Self::TouchMove(parse_touches(args)?)),
            "touch-end" => no_args(keyword, args, Self::TouchEnd),
            "wheel" => {
                let Some((delta, rest)) = args.split_first() else {
                    return Err("'wheel' needs a DELTA_Y".to_string());
                };
                Ok(Self::Wheel(WheelEvent::new(
                    parse_f64(delta, "wheel delta")?,
                    parse_modifiers(rest)?,
                )))
            }
            "zoom-in" => no_args(keyword, args, Self::ZoomIn),
            "zoom-out" => no_args(keyword, args, Self::ZoomOut),
            "reset" => no_args(keyword, args, Self::ResetView),
            "click" => match args {
                [month] => Ok(Self::ToggleMonth(
                    month
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid month: '{month}'"))?,
                )),
                _ => Err("'click' needs a MONTH".to_string()),
            },
            "chapter" => match args {
                [month, subject, chapter] => Ok(Self::ClickChapter {
                    month: month
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid month: '{month}'"))?,
                    subject_index: parse_ordinal(subject, "Subject")?,
                    chapter_index: parse_ordinal(chapter, "Chapter")?,
                }),
                _ => Err("'chapter' needs MONTH SUBJECT CHAPTER".to_string()),
            },
            "class" => match args {
                [level] => Ok(Self::SetClassLevel((*level).to_string())),
                _ => Err("'class' needs a LEVEL".to_string()),
            },
            other => Err(format!("Unknown command: '{other}'")),
        }
    }
}

/// Parse a single script line
///
/// # Returns
/// `Ok(None)` for blank and comment lines
///
/// # Errors
/// Returns a message describing the malformed command
pub fn parse_line(line: &str) -> Result<Option<Interaction>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Parse a whole script
///
/// # Returns
/// Interactions paired with their 1-based line numbers
///
/// # Errors
/// Returns the first malformed line, prefixed with its line number
pub fn parse_script(script: &str) -> Result<Vec<(usize, Interaction)>, String> {
    let mut interactions = Vec::new();
    for (i, line) in script.lines().enumerate() {
        if let Some(interaction) = parse_line(line).map_err(|e| format!("line {}: {e}", i + 1))? {
            interactions.push((i + 1, interaction));
        }
    }
    Ok(interactions)
}
