use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::cli::commands::{Cli, Commands, FutureArgs, RecurArgs};
use crate::cli::output;
use crate::io::rewrite::move_lines;
use crate::io::settings_io::load_settings;
use crate::io::todo_io::read_agenda;
use crate::model::settings::Settings;
use crate::ops::recur::expand_recurring;
use crate::ops::schedule::{due_line_numbers, horizon_limit};

/// Resolved invocation context: the todo directory, its settings, and the
/// date the run treats as today.
struct Context {
    todo_dir: PathBuf,
    settings: Settings,
    now: NaiveDate,
    horizon_days: u32,
    json: bool,
}

impl Context {
    fn todo_path(&self) -> PathBuf {
        self.todo_dir.join(&self.settings.todo_file)
    }

    fn future_path(&self) -> PathBuf {
        self.todo_dir.join(&self.settings.future_file)
    }

    fn recur_path(&self) -> PathBuf {
        self.todo_dir.join(&self.settings.recur_file)
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = resolve_context(&cli)?;
    match cli.command {
        Commands::Agenda => cmd_agenda(&ctx),
        Commands::Future(args) => cmd_future(&ctx, args),
        Commands::Recur(args) => cmd_recur(&ctx, args),
    }
}

fn resolve_context(cli: &Cli) -> Result<Context, Box<dyn std::error::Error>> {
    let todo_dir = match &cli.todo_dir {
        Some(dir) => PathBuf::from(dir),
        None => env::var("TODO_DIR")
            .map(PathBuf::from)
            .map_err(|_| "TODO_DIR is not set (pass --todo-dir or export TODO_DIR)")?,
    };
    if !todo_dir.is_dir() {
        return Err(format!("todo directory not found: {}", todo_dir.display()).into());
    }

    let settings = load_settings(&todo_dir)?;

    let now = match &cli.date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| format!("invalid --date '{}': expected YYYY-MM-DD", date))?,
        None => Local::now().date_naive(),
    };

    let horizon_days = cli.days.unwrap_or(settings.horizon_days);

    Ok(Context {
        todo_dir,
        settings,
        now,
        horizon_days,
        json: cli.json,
    })
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_agenda(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut agenda = read_agenda(&ctx.todo_path())?;
    // Non-scheduled tasks show up under the current date.
    agenda.promote_unscheduled(ctx.now);

    let limit = horizon_limit(ctx.now, ctx.horizon_days);
    let buckets = output::due_buckets(&agenda, limit);

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::agenda_to_json(&buckets))?
        );
    } else if buckets.is_empty() {
        println!("Nothing scheduled through {}.", limit.format("%Y-%m-%d"));
    } else {
        print!("{}", output::render_agenda(&buckets));
    }
    Ok(())
}

fn cmd_future(ctx: &Context, args: FutureArgs) -> Result<(), Box<dyn std::error::Error>> {
    let future_path = ctx.future_path();

    let mut agenda = read_agenda(&future_path)?;
    // Lines without a threshold are due as-is.
    agenda.promote_unscheduled(ctx.now);
    let due = due_line_numbers(&agenda, ctx.now, ctx.horizon_days);
    let due_lines = output::lines_by_nr(&agenda, &due);

    let preserve = if args.preserve_line_numbers {
        true
    } else {
        match env::var("TODOTXT_PRESERVE_LINE_NUMBERS") {
            Ok(value) => value == "1" || value == "true",
            Err(_) => ctx.settings.preserve_line_numbers,
        }
    };

    if !args.dry_run {
        move_lines(&future_path, &ctx.todo_path(), &due, preserve)?;
    }

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::move_to_json(&due_lines))?
        );
    } else {
        for line in &due_lines {
            println!("+ {}", line.text);
        }
        let verb = if args.dry_run { "would move" } else { "moved" };
        println!(
            "{} task(s) {} from {} to {}",
            due_lines.len(),
            verb,
            ctx.settings.future_file,
            ctx.settings.todo_file
        );
    }
    Ok(())
}

fn cmd_recur(ctx: &Context, args: RecurArgs) -> Result<(), Box<dyn std::error::Error>> {
    let max_threshold = horizon_limit(ctx.now, ctx.horizon_days)
        .format("%Y-%m-%d")
        .to_string();

    let expansion = expand_recurring(
        &ctx.recur_path(),
        &ctx.todo_path(),
        &max_threshold,
        args.dry_run,
    )?;

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::expansion_to_json(&expansion))?
        );
    } else {
        for line in &expansion.emitted {
            println!("+ {}", line);
        }
        let verb = if args.dry_run { "would be added" } else { "added" };
        println!(
            "{} task(s) {} to {}",
            expansion.emitted.len(),
            verb,
            ctx.settings.todo_file
        );
    }
    Ok(())
}
