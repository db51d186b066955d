//! Line-oriented terminal front end for [`PlanWizard`]
//!
//! At every prompt `b`/`back` returns to the previous step and `q`/`cancel`
//! abandons the wizard. An empty answer keeps the current choice. End of
//! input counts as cancelling.

use super::wizard::{PlanWizard, WizardStep};
use crate::core::models::{
    ProficiencyLevel, ReferenceBook, Skill, StudyPlanConfig, Timeframe, MAX_HOURS_PER_WEEK,
    MIN_HOURS_PER_WEEK,
};
use std::io::{self, BufRead, Write};

enum Answer {
    Keep,
    Back,
    Cancel,
    Text(String),
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Answer> {
    write!(output, "{prompt} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Answer::Cancel);
    }
    let trimmed = line.trim();
    Ok(match trimmed.to_ascii_lowercase().as_str() {
        "" => Answer::Keep,
        "b" | "back" => Answer::Back,
        "q" | "quit" | "cancel" => Answer::Cancel,
        _ => Answer::Text(trimmed.to_string()),
    })
}

/// Pick an option either by its 1-based number or by parsing the text
fn choose<T: Copy + std::str::FromStr>(options: &[T], text: &str) -> Option<T> {
    text.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| options.get(idx).copied())
        .or_else(|| text.parse::<T>().ok())
}

/// Run the three-step plan creator on the given streams.
///
/// Returns `Ok(None)` when the user cancels; no partial configuration is
/// ever returned.
///
/// # Errors
/// Returns an error only if reading or writing the streams fails.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<StudyPlanConfig>> {
    let mut wizard = PlanWizard::new();
    writeln!(output, "Create Study Plan (b = back, q = cancel)")?;

    loop {
        writeln!(output, "\n{} - {}", wizard.step(), wizard.step().prompt())?;
        let advance = match wizard.step() {
            WizardStep::Schedule => schedule_step(&mut wizard, &mut input, &mut output)?,
            WizardStep::Level => level_step(&mut wizard, &mut input, &mut output)?,
            WizardStep::FocusAreas => focus_step(&mut wizard, &mut input, &mut output)?,
        };

        match advance {
            Flow::Stay => {}
            Flow::Back => {
                wizard.back();
            }
            Flow::Next => {
                if wizard.step() == WizardStep::FocusAreas {
                    match wizard.confirm() {
                        Ok(config) => return Ok(Some(config)),
                        Err((returned, err)) => {
                            writeln!(output, "! {err}")?;
                            wizard = returned;
                        }
                    }
                } else if let Err(err) = wizard.next() {
                    writeln!(output, "! {err}")?;
                }
            }
            Flow::Cancel => {
                wizard.cancel();
                writeln!(output, "✗ Plan creation cancelled")?;
                return Ok(None);
            }
        }
    }
}

enum Flow {
    Stay,
    Back,
    Next,
    Cancel,
}

fn schedule_step<R: BufRead, W: Write>(
    wizard: &mut PlanWizard,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    for (idx, timeframe) in Timeframe::ALL.iter().enumerate() {
        let marker = if *timeframe == wizard.timeframe() { "*" } else { " " };
        writeln!(output, " {marker} {}. {}", idx + 1, timeframe.label())?;
    }
    match ask(input, output, "Timeframe:")? {
        Answer::Cancel => return Ok(Flow::Cancel),
        Answer::Back => return Ok(Flow::Back),
        Answer::Keep => {}
        Answer::Text(text) => match choose(&Timeframe::ALL, &text) {
            Some(timeframe) => wizard.set_timeframe(timeframe),
            None => {
                writeln!(output, "! Unknown timeframe: '{text}'")?;
                return Ok(Flow::Stay);
            }
        },
    }

    let prompt = format!(
        "Weekly study hours [{MIN_HOURS_PER_WEEK}-{MAX_HOURS_PER_WEEK}] ({}):",
        wizard.hours_per_week()
    );
    match ask(input, output, &prompt)? {
        Answer::Cancel => return Ok(Flow::Cancel),
        Answer::Back => return Ok(Flow::Stay),
        Answer::Keep => {}
        Answer::Text(text) => match text.parse::<u32>() {
            Ok(hours) => {
                let hours = u8::try_from(hours).unwrap_or(u8::MAX);
                wizard.set_hours_per_week(hours);
            }
            Err(_) => {
                writeln!(output, "! Not a number: '{text}'")?;
                return Ok(Flow::Stay);
            }
        },
    }

    let hint = (f32::from(wizard.hours_per_week()) / 7.0 * 10.0).round() / 10.0;
    writeln!(
        output,
        "  {}h/week (~{hint} hours per day)",
        wizard.hours_per_week()
    )?;
    Ok(Flow::Next)
}

fn level_step<R: BufRead, W: Write>(
    wizard: &mut PlanWizard,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    for (idx, level) in ProficiencyLevel::ALL.iter().enumerate() {
        let book = ReferenceBook::for_level(*level);
        let marker = if *level == wizard.level() { "*" } else { " " };
        writeln!(
            output,
            " {marker} {}. {} - {} [{}]",
            idx + 1,
            level.label(),
            book.description,
            book.title
        )?;
    }
    match ask(input, output, "Level:")? {
        Answer::Cancel => Ok(Flow::Cancel),
        Answer::Back => Ok(Flow::Back),
        Answer::Keep => Ok(Flow::Next),
        Answer::Text(text) => match choose(&ProficiencyLevel::ALL, &text) {
            Some(level) => {
                wizard.set_level(level);
                Ok(Flow::Next)
            }
            None => {
                writeln!(output, "! Unknown level: '{text}'")?;
                Ok(Flow::Stay)
            }
        },
    }
}

fn focus_step<R: BufRead, W: Write>(
    wizard: &mut PlanWizard,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    for (idx, skill) in Skill::ALL.iter().enumerate() {
        let marker = if wizard.focus_areas().contains(skill) {
            "[x]"
        } else {
            "[ ]"
        };
        writeln!(
            output,
            " {marker} {}. {} - {}",
            idx + 1,
            skill.label(),
            skill.description()
        )?;
    }
    if let Some(warning) = wizard.focus_warning() {
        writeln!(output, "! {warning}")?;
    }

    let answer = ask(
        input,
        output,
        "Toggle focus areas (numbers or names, comma separated; empty to create):",
    )?;
    match answer {
        Answer::Cancel => Ok(Flow::Cancel),
        Answer::Back => Ok(Flow::Back),
        Answer::Keep => Ok(Flow::Next),
        Answer::Text(text) => {
            for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                match choose(&Skill::ALL, part) {
                    Some(skill) => {
                        wizard.toggle_focus_area(skill);
                    }
                    None => writeln!(output, "! Unknown focus area: '{part}'")?,
                }
            }
            Ok(Flow::Stay)
        }
    }
}
