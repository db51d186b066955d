//! Plan command handler
//!
//! Creating a plan always succeeds once the configuration is accepted; a
//! failed save is reported as a notice and the plan is still shown.

use super::{confirm, open_store};
use crate::args::PlanSubcommand;
use bloom_logger::{error, info, verbose, warn};
use chrono::{Datelike, Local, Utc};
use std::io;
use std::path::PathBuf;
use study_bloom::config::Config;
use study_bloom::core::models::{
    DailySchedule, ProficiencyLevel, Skill, StudyPlanConfig, Timeframe, WeeklyStudyPlan, Weekday,
};
use study_bloom::core::planner::{generate, run_interactive, PlanWizard};
use study_bloom::core::report::{reporter_for, ReportContext, ReportFormat, ReportGenerator};
use study_bloom::core::storage::{KeyValueStore, PlanStore, PlanStoreError};

/// Dispatch plan subcommands
pub fn run(subcommand: PlanSubcommand, config: &Config) {
    match subcommand {
        PlanSubcommand::Create {
            timeframe,
            hours,
            level,
            focus,
            interactive,
        } => handle_create(config, timeframe, hours, level, &focus, interactive),
        PlanSubcommand::Show { day } => handle_show(config, day),
        PlanSubcommand::Today => {
            handle_show(config, Some(Weekday::from(Local::now().weekday())));
        }
        PlanSubcommand::Complete { day, session_id } => {
            handle_complete(config, day, &session_id);
        }
        PlanSubcommand::Export { format, output } => handle_export(config, &format, output),
        PlanSubcommand::Clear { yes } => handle_clear(config, yes),
    }
}

fn open_plan_store(config: &Config) -> PlanStore<Box<dyn KeyValueStore>> {
    match open_store(config) {
        Ok(store) => PlanStore::new(store),
        Err(e) => {
            error!("Failed to open plan storage: {e}");
            eprintln!("✗ Failed to open plan storage: {e}");
            std::process::exit(1);
        }
    }
}

fn load_or_exit(store: &PlanStore<Box<dyn KeyValueStore>>) -> Option<WeeklyStudyPlan> {
    match store.load() {
        Ok(plan) => plan,
        Err(e) => {
            error!("Failed to load plan: {e}");
            eprintln!("✗ Failed to load plan: {e}");
            std::process::exit(1);
        }
    }
}

fn print_no_plan() {
    println!("No study plan yet. Create one with `studybloom plan create`.");
}

/// Collect the configuration from flags, filling gaps with the creator's defaults
fn config_from_flags(
    timeframe: Option<Timeframe>,
    hours: Option<u8>,
    level: Option<ProficiencyLevel>,
    focus: &[Skill],
) -> Result<StudyPlanConfig, String> {
    let mut wizard = PlanWizard::new();
    if let Some(timeframe) = timeframe {
        wizard.set_timeframe(timeframe);
    }
    if let Some(hours) = hours {
        wizard.set_hours_per_week(hours);
    }
    wizard.next().map_err(|e| e.to_string())?;

    if let Some(level) = level {
        wizard.set_level(level);
    }
    wizard.next().map_err(|e| e.to_string())?;

    if !focus.is_empty() {
        wizard.set_focus_areas(focus.iter().copied());
    }
    wizard.confirm().map_err(|(_, e)| e.to_string())
}

/// Handle the plan create subcommand
pub fn handle_create(
    config: &Config,
    timeframe: Option<Timeframe>,
    hours: Option<u8>,
    level: Option<ProficiencyLevel>,
    focus: &[Skill],
    interactive: bool,
) {
    let plan_config = if interactive {
        match run_interactive(io::stdin().lock(), io::stdout()) {
            Ok(Some(plan_config)) => plan_config,
            Ok(None) => return,
            Err(e) => {
                eprintln!("✗ Plan creation failed: {e}");
                std::process::exit(1);
            }
        }
    } else {
        match config_from_flags(timeframe, hours, level, focus) {
            Ok(plan_config) => plan_config,
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    };

    let plan = generate(&plan_config, Utc::now());
    info!(
        "Generated plan: {} h/week, level {}, {} sessions",
        plan_config.hours_per_week,
        plan_config.level,
        plan.sessions().count()
    );

    match open_store(config) {
        Ok(store) => {
            let mut store = PlanStore::new(store);
            match store.save(&plan) {
                Ok(()) => println!("✓ Study plan created"),
                Err(e) => report_save_failure(&e),
            }
        }
        Err(e) => report_save_failure(&PlanStoreError::from(e)),
    }

    print_plan(&plan);
}

fn report_save_failure(err: &PlanStoreError) {
    warn!("Plan could not be saved: {err}");
    eprintln!("! Plan created but could not be saved: {err}");
}

/// Handle the plan show and today subcommands
pub fn handle_show(config: &Config, day: Option<Weekday>) {
    let store = open_plan_store(config);
    let Some(plan) = load_or_exit(&store) else {
        print_no_plan();
        return;
    };

    match day {
        Some(day) => {
            if let Some(schedule) = plan.day(day) {
                print_day(schedule);
            }
        }
        None => print_plan(&plan),
    }
}

/// Handle the plan complete subcommand
pub fn handle_complete(config: &Config, day: Weekday, session_id: &str) {
    let mut store = open_plan_store(config);
    match store.mark_session_completed(day, session_id) {
        Ok(plan) => {
            let progress = plan.day(day).map_or(0, DailySchedule::progress);
            println!("✓ Completed {session_id} ({day} {progress}% done)");
            verbose!("Week progress: {}%", plan.overall_progress());
        }
        Err(PlanStoreError::NoPlan) => {
            print_no_plan();
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the plan export subcommand
pub fn handle_export(config: &Config, format: &str, output: Option<PathBuf>) {
    let format: ReportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let store = open_plan_store(config);
    let Some(plan) = load_or_exit(&store) else {
        print_no_plan();
        std::process::exit(1);
    };

    let path = output.unwrap_or_else(|| {
        config.reports_dir().join(format!(
            "study-plan-{}.{}",
            plan.created_at.format("%Y%m%d"),
            format.extension()
        ))
    });

    match reporter_for(format).generate(&ReportContext::new(&plan), &path) {
        Ok(()) => println!("✓ Plan exported: {}", path.display()),
        Err(e) => {
            error!("Export to {} failed: {e}", path.display());
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the plan clear subcommand
pub fn handle_clear(config: &Config, yes: bool) {
    let mut store = open_plan_store(config);
    if load_or_exit(&store).is_none() {
        print_no_plan();
        return;
    }

    if !yes && !confirm("Discard the current study plan?") {
        println!("✗ Clear cancelled");
        return;
    }

    if let Err(e) = store.clear() {
        eprintln!("✗ Failed to clear plan: {e}");
        std::process::exit(1);
    }
    println!("✓ Study plan cleared");
}

fn print_plan(plan: &WeeklyStudyPlan) {
    let cfg = &plan.config;
    let focus: Vec<&str> = cfg.focus_areas.iter().map(|skill| skill.label()).collect();

    println!("\n=== Weekly Study Plan ===\n");
    println!(
        "Level: {} | {} h/week (~{} min/day) | {}",
        cfg.level.label(),
        cfg.hours_per_week,
        cfg.daily_minutes(),
        cfg.timeframe.label()
    );
    println!("Focus: {}", focus.join(", "));
    println!(
        "Resource: {} - {}",
        plan.recommended_resource.title, plan.recommended_resource.author
    );
    println!(
        "Progress: {}% ({}/7 days complete, {} min planned)",
        plan.overall_progress(),
        plan.completed_days(),
        plan.total_minutes()
    );

    for day in &plan.schedule {
        print_day(day);
    }
}

fn print_day(day: &DailySchedule) {
    println!(
        "\n{} - {} min [{}%]",
        day.day,
        day.total_minutes,
        day.progress()
    );
    if day.sessions.is_empty() {
        println!("  (no sessions)");
    }
    for session in &day.sessions {
        let mark = if session.completed { "x" } else { " " };
        println!(
            "  [{mark}] {} {:<36} {:>3} min  ({})",
            session.skill.symbol(),
            session.title,
            session.duration,
            session.id
        );
        verbose!("        {}", session.source);
    }
}
