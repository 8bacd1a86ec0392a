use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Student-records manager for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist a session token
    Login {
        /// Username
        #[arg(short, long, default_value = "admin")]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// Log out and discard the session token
    Logout,

    /// Change the stored password
    Passwd {
        /// The new password
        new_password: String,
    },

    /// List students, with search, course filter, and paging
    #[command(alias = "ls")]
    List {
        /// Search term matched against names
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one course code (e.g. BSIT)
        #[arg(short, long)]
        course: Option<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one student in full
    #[command(alias = "v")]
    View { id: u32 },

    /// Add a student
    Add {
        #[arg(long)]
        first: String,

        #[arg(long)]
        middle: Option<String>,

        #[arg(long)]
        last: String,

        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth_date: String,

        #[arg(long)]
        age: String,

        #[arg(long)]
        address: String,

        /// Course code (see `rollbook courses`)
        #[arg(long)]
        course: String,

        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Edit fields of an existing student
    #[command(alias = "e")]
    Edit {
        id: u32,

        #[arg(long)]
        first: Option<String>,

        #[arg(long)]
        middle: Option<String>,

        #[arg(long)]
        last: Option<String>,

        #[arg(long)]
        birth_date: Option<String>,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        course: Option<String>,

        #[arg(long)]
        avatar: Option<String>,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete { id: u32 },

    /// Replace the roster with generated demo records
    Seed {
        /// How many records (defaults to the configured seed count)
        #[arg(short, long)]
        count: Option<usize>,

        /// Generate and print without persisting
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the course table
    Courses,
}
