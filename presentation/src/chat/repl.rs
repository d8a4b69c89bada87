//! REPL (Read-Eval-Print Loop) for the hosted game session

use crate::ComposingIndicator;
use crate::ConsoleFormatter;
use parlor_application::SessionController;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive game session REPL
pub struct ChatRepl {
    controller: SessionController,
    show_indicator: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl around an assembled session controller.
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            show_indicator: true,
        }
    }

    /// Set whether to show the composing indicator
    pub fn with_indicator(mut self, show: bool) -> Self {
        self.show_indicator = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("parlor").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        // Opening line: the host speaks first.
        let indicator = self.indicator();
        let opened = self.controller.start().await;
        indicator.finish();
        if opened.is_ok() {
            self.print_last_host_message();
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.play_turn(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Thanks for playing!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Parlor - Game Night            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::banner(&self.controller.snapshot()));
        println!();
        println!("Commands:");
        println!("  /help        - Show this help");
        println!("  /transcript  - Replay the whole conversation");
        println!("  /quit        - Leave the game");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Thanks for playing!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /transcript      - Replay the whole conversation");
                println!("  /quit, /exit, /q - Leave the game");
                println!();
                false
            }
            "/transcript" => {
                println!();
                print!("{}", ConsoleFormatter::format(&self.controller.snapshot()));
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Submit one user line and print the host's reply.
    async fn play_turn(&mut self, line: &str) {
        let indicator = self.indicator();
        let outcome = self.controller.submit(line).await;
        indicator.finish();

        if outcome.is_ok() {
            self.print_last_host_message();
        }
    }

    fn indicator(&self) -> ComposingIndicator {
        if self.show_indicator {
            ComposingIndicator::start()
        } else {
            ComposingIndicator::hidden()
        }
    }

    fn print_last_host_message(&self) {
        if let Some(message) = self.controller.snapshot().transcript.last() {
            println!();
            print!("{}", ConsoleFormatter::format_message(message));
            println!();
        }
    }
}
