//! Remind command handler
//!
//! Reminder failures are reported and never touch the stored plan.

use super::open_store;
use crate::args::RemindSubcommand;
use bloom_logger::{error, info};
use chrono::{Local, NaiveDateTime};
use study_bloom::config::Config;
use study_bloom::core::models::Weekday;
use study_bloom::core::reminders::{
    Reminder, ReminderRequest, ReminderScheduler, StoreReminderQueue,
};
use study_bloom::core::storage::{KeyValueStore, PlanStore};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Dispatch remind subcommands
pub fn run(subcommand: RemindSubcommand, config: &Config) {
    if !config.reminders.enabled {
        println!("Reminders are disabled. Enable them with `studybloom config set reminders true`.");
        return;
    }

    let store = match open_store(config) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open reminder storage: {e}");
            eprintln!("✗ Failed to open reminder storage: {e}");
            std::process::exit(1);
        }
    };

    match subcommand {
        RemindSubcommand::Session {
            day,
            session_id,
            at,
        } => handle_session(store, day, &session_id, &at),
        RemindSubcommand::Streak => handle_streak(store, config.reminders.streak_hour),
        RemindSubcommand::List => handle_list(store),
    }
}

/// Parse a local date and time such as `2026-10-20 18:30`
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| format!("Invalid date and time: '{value}' (expected YYYY-MM-DD HH:MM)"))
}

fn schedule(store: Box<dyn KeyValueStore>, request: ReminderRequest) {
    let mut queue = StoreReminderQueue::new(store);
    match queue.schedule(request, Local::now().naive_local()) {
        Ok(reminder) => {
            info!("Scheduled reminder {} at {}", reminder.id, reminder.at);
            println!(
                "✓ Reminder #{} set for {}",
                reminder.id,
                reminder.at.format("%a %Y-%m-%d %H:%M")
            );
            println!("  {}: {}", reminder.title, reminder.body);
        }
        Err(e) => {
            error!("Failed to schedule reminder: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the remind session subcommand
pub fn handle_session(store: Box<dyn KeyValueStore>, day: Weekday, session_id: &str, at: &str) {
    let at = match parse_local_datetime(at) {
        Ok(at) => at,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let plans = PlanStore::new(store);
    let title = match plans.load() {
        Ok(Some(plan)) => match plan.session(day, session_id) {
            Some(session) => session.title.clone(),
            None => {
                eprintln!("✗ No session '{session_id}' on {day}");
                std::process::exit(1);
            }
        },
        Ok(None) => {
            println!("No study plan yet. Create one with `studybloom plan create`.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ Failed to load plan: {e}");
            std::process::exit(1);
        }
    };

    schedule(plans.into_inner(), ReminderRequest::study(&title, at));
}

/// Handle the remind streak subcommand
pub fn handle_streak(store: Box<dyn KeyValueStore>, hour: u32) {
    match ReminderRequest::streak(Local::now().date_naive(), hour) {
        Ok(request) => schedule(store, request),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the remind list subcommand
pub fn handle_list(store: Box<dyn KeyValueStore>) {
    let queue = StoreReminderQueue::new(store);
    let pending: Vec<Reminder> = match queue.pending(Local::now().naive_local()) {
        Ok(pending) => pending,
        Err(e) => {
            eprintln!("✗ Failed to read reminders: {e}");
            std::process::exit(1);
        }
    };

    if pending.is_empty() {
        println!("No pending reminders.");
        return;
    }
    for reminder in pending {
        println!(
            "#{:<3} {}  {} - {}",
            reminder.id,
            reminder.at.format("%a %Y-%m-%d %H:%M"),
            reminder.title,
            reminder.body
        );
    }
}
