use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ag", about = concat!("agenda v", env!("CARGO_PKG_VERSION"), " - threshold and recurrence plugins for todo.txt"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Todo directory (default: the TODO_DIR environment variable)
    #[arg(short = 'C', long = "todo-dir", global = true)]
    pub todo_dir: Option<String>,

    /// Date treated as today, YYYY-MM-DD (default: the current date)
    #[arg(long, global = true)]
    pub date: Option<String>,

    /// How many days ahead count as due
    #[arg(long, global = true)]
    pub days: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an overview of scheduled ('t:') tasks for the coming days
    Agenda,
    /// Move due tasks from future.txt into todo.txt
    Future(FutureArgs),
    /// Expand recurring tasks from recur.txt into todo.txt
    Recur(RecurArgs),
}

// ---------------------------------------------------------------------------
// Subcommand args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct FutureArgs {
    /// Leave an empty placeholder per moved line so unmoved lines keep
    /// their numbers (also: TODOTXT_PRESERVE_LINE_NUMBERS=1)
    #[arg(long)]
    pub preserve_line_numbers: bool,
    /// Show what would move without changing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct RecurArgs {
    /// Show what would be added without changing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
