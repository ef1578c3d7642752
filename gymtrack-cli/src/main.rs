use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use dotenvy::dotenv;
use log::debug;
use std::fmt::Display;
use std::path::PathBuf;

use gymtrack::Program;
use gymtrack::backup::Backup;
use gymtrack::db::models::ProgrammingOverrides;
use gymtrack::db::operations::ExerciseFilter;
use gymtrack::db::{default_db_path, discover_db};
use gymtrack::logging::{init_logger, set_log_level, verbosity_level};
use gymtrack::program::AddOptions;

#[derive(Parser, Debug)]
#[command(version, about = "GymTrack - workout program editor", long_about = None)]
struct Args {
    /// Path to the GymTrack database
    #[arg(long, env = "GYMTRACK_DB", global = true)]
    db: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Explicit log level, overrides -v
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the exercises of one workout, or of all workouts
    Show {
        workout: Option<String>,
        /// Include inactive exercises
        #[arg(long)]
        all: bool,
    },
    /// Search the exercise catalog
    Exercises {
        query: Option<String>,
        #[arg(short, long)]
        muscle: Option<String>,
        #[arg(short, long)]
        equipment: Option<String>,
    },
    /// Replace an exercise in a workout, keeping its position
    Swap {
        workout: String,
        old: String,
        new: String,
        #[arg(long)]
        sets: Option<i32>,
        #[arg(long)]
        reps: Option<i32>,
        #[arg(long)]
        rest: Option<i32>,
        #[arg(long)]
        execute: bool,
    },
    /// Add an exercise to a workout
    Add {
        workout: String,
        exercise: String,
        /// Position to insert at, appends by default
        #[arg(long)]
        position: Option<i32>,
        #[arg(long)]
        sets: Option<i32>,
        #[arg(long)]
        reps: Option<i32>,
        #[arg(long)]
        rest: Option<i32>,
        /// Count seconds instead of reps
        #[arg(long)]
        timed: bool,
        #[arg(long)]
        weight: bool,
        #[arg(long)]
        execute: bool,
    },
    /// Deactivate an exercise in a workout
    Remove {
        workout: String,
        exercise: String,
        #[arg(long)]
        execute: bool,
    },
    /// Move the exercise at one position to another
    Reorder {
        workout: String,
        #[arg(long = "move")]
        from: i32,
        #[arg(long)]
        to: i32,
        #[arg(long)]
        execute: bool,
    },
    /// Import exercises from a JSON catalog file
    ImportExercises {
        file: PathBuf,
        #[arg(long)]
        execute: bool,
    },
    /// Create a database with the full schema
    Init,
}

/// One command run against an open program.
struct Context {
    program: Program,
    backup: Backup,
    execute: bool,
}

impl Context {
    fn open(db: Option<PathBuf>, execute: bool) -> Result<Self> {
        let path = discover_db(db.as_deref())?;
        debug!("Using database {}", path.display());
        Ok(Self {
            program: Program::open(&path)?,
            backup: Backup::new(path),
            execute,
        })
    }

    /// Prints the plan, then either stops (dry run) or backs up and applies it.
    fn run<P, T, F>(&mut self, plan: &P, apply: F) -> Result<()>
    where
        P: Display,
        F: FnOnce(&mut Program, &P) -> gymtrack::Result<T>,
    {
        println!("{plan}");
        if !self.execute {
            println!("\nDry run, pass --execute to apply.");
            return Ok(());
        }

        let backup = self.backup.ensure()?;
        println!("\nBackup: {}", backup.display());
        apply(&mut self.program, plan)?;
        println!("Done.");
        Ok(())
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    match &args.log_level {
        Some(level) => {
            if !set_log_level(level) {
                bail!("Unknown log level: {level}");
            }
        }
        None => init_logger(verbosity_level(args.verbose)),
    }

    match args.command {
        Commands::Show { workout, all } => {
            let mut program = Program::open(&discover_db(args.db.as_deref())?)?;
            let listings = program.listings(workout.as_deref(), all)?;
            for listing in listings {
                println!("{listing}\n");
            }
            Ok(())
        }
        Commands::Exercises {
            query,
            muscle,
            equipment,
        } => {
            let mut program = Program::open(&discover_db(args.db.as_deref())?)?;
            let filter = ExerciseFilter {
                name: query,
                muscle,
                equipment,
            };
            println!("{}", program.search_exercises(&filter)?);
            Ok(())
        }
        Commands::Swap {
            workout,
            old,
            new,
            sets,
            reps,
            rest,
            execute,
        } => {
            let mut ctx = Context::open(args.db, execute)?;
            let overrides = ProgrammingOverrides {
                sets,
                counter_value: reps,
                rest_seconds: rest,
            };
            let plan = ctx.program.plan_swap(&workout, &old, &new, overrides)?;
            ctx.run(&plan, |program, plan| program.apply_swap(plan))
        }
        Commands::Add {
            workout,
            exercise,
            position,
            sets,
            reps,
            rest,
            timed,
            weight,
            execute,
        } => {
            let mut ctx = Context::open(args.db, execute)?;
            let options = AddOptions {
                position,
                sets,
                reps,
                rest,
                timed,
                weight,
            };
            let plan = ctx.program.plan_add(&workout, &exercise, options)?;
            ctx.run(&plan, |program, plan| program.apply_add(plan))
        }
        Commands::Remove {
            workout,
            exercise,
            execute,
        } => {
            let mut ctx = Context::open(args.db, execute)?;
            let plan = ctx.program.plan_remove(&workout, &exercise)?;
            ctx.run(&plan, |program, plan| program.apply_remove(plan))
        }
        Commands::Reorder {
            workout,
            from,
            to,
            execute,
        } => {
            let mut ctx = Context::open(args.db, execute)?;
            let plan = ctx.program.plan_reorder(&workout, from, to)?;
            ctx.run(&plan, |program, plan| program.apply_reorder(plan))
        }
        Commands::ImportExercises { file, execute } => {
            let mut ctx = Context::open(args.db, execute)?;
            let plan = ctx.program.plan_import(&file)?;
            if plan.is_empty() {
                println!("{plan}");
                return Ok(());
            }
            ctx.run(&plan, |program, plan| program.apply_import(plan))
        }
        Commands::Init => {
            let Some(path) = args.db.or_else(default_db_path) else {
                bail!("No database path; pass --db PATH");
            };
            Program::create(&path)?;
            println!("Initialized database at {}", path.display());
            Ok(())
        }
    }
}
