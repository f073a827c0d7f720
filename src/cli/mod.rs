use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::LedgerSession;

/// Spesa - Session Expense Tracker
#[derive(Parser)]
#[command(name = "spesa")]
#[command(about = "An in-memory expense tracker driven by an interactive session")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of user input inside the session, parsed as a command.
#[derive(Parser)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Record an expense
    Add {
        /// Amount to record (e.g., "12.50" or "12")
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Category label (free-form, may be omitted)
        category: Vec<String>,
    },

    /// Delete the expense at a position shown by `list`
    Delete {
        /// Position of the expense to delete
        index: Option<usize>,
    },

    /// List recorded expenses in entry order
    List,

    /// Show per-category spending and the grand total
    Summary {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let interactive = io::stdin().is_terminal();
        let mut session = LedgerSession::new();

        if interactive {
            println!("spesa - type 'help' for commands, 'quit' to leave");
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            if interactive {
                print!("> ");
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => parsed,
                Err(err) => {
                    err.print()?;
                    continue;
                }
            };

            match self.execute(&mut session, parsed.command) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => println!("Error: {err}"),
            }
        }

        Ok(())
    }

    /// Run one session command. Returns `false` when the session should end.
    fn execute(&self, session: &mut LedgerSession, command: SessionCommand) -> Result<bool> {
        match command {
            SessionCommand::Add { amount, category } => {
                let expense = session.add_expense(category.join(" "), &amount)?;
                println!("Added expense: {}", expense.display_line());
                if self.verbose {
                    eprintln!("[session] {} entries recorded", session.entry_count());
                }
            }

            SessionCommand::Delete { index } => {
                let removed = session.delete_expense(index)?;
                println!("Deleted expense: {}", removed.display_line());
                if self.verbose {
                    eprintln!("[session] {} entries recorded", session.entry_count());
                }
            }

            SessionCommand::List => {
                if session.entry_count() == 0 {
                    println!("No expenses recorded.");
                } else {
                    for (index, line) in session.list_lines().enumerate() {
                        println!("{index:>4}  {line}");
                    }
                }
            }

            SessionCommand::Summary { format } => {
                let report = session.spending_report();
                match format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                    _ => println!("{}", report.render_text()),
                }
            }

            SessionCommand::Quit => return Ok(false),
        }

        Ok(true)
    }
}
