//! rulebot CLI: chat with the rule-based response engine.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use rulebot::command::{is_training_command, parse_training_command};
use rulebot::config::{EngineConfig, FileConfig};
use rulebot::engine::Engine;

#[derive(Parser)]
#[command(name = "rulebot", version, about = "Rule-based chatbot with user training")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Training file to load and append to (default: training_data.txt).
    #[arg(long, global = true)]
    training_file: Option<PathBuf>,

    /// Do not read or write a training file.
    #[arg(long, global = true, conflicts_with = "training_file")]
    memory_only: bool,

    /// Name the bot introduces itself with.
    #[arg(long, global = true)]
    bot_name: Option<String>,

    /// Seed for reproducible context replies.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session on stdin (the default).
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The message to send.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Teach a question/answer pair.
    Train {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },

    /// List all phrases the bot knows, in matching order.
    Lexicon {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let mut config = file.into_engine_config();

        if self.memory_only {
            config.training_file = None;
        } else if let Some(path) = &self.training_file {
            config.training_file = Some(path.clone());
        }
        if let Some(name) = &self.bot_name {
            config.bot_name = name.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;
    let mut engine = Engine::new(config);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(&mut engine)?,

        Commands::Ask { text } => {
            println!("{}", engine.get_response(&text.join(" ")));
        }

        Commands::Train { question, answer } => {
            if question.trim().is_empty() || answer.trim().is_empty() {
                miette::bail!("both --question and --answer must be non-empty");
            }
            engine.train(&question, &answer);
            println!("Learned: '{}'", question.trim());
        }

        Commands::Lexicon { json } => {
            if json {
                let entries: Vec<_> = engine
                    .lexicon()
                    .entries()
                    .map(|(phrase, reply)| serde_json::json!({ "phrase": phrase, "reply": reply }))
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries).into_diagnostic()?
                );
            } else {
                println!("Phrases ({}):", engine.lexicon().len());
                for (phrase, reply) in engine.lexicon().entries() {
                    println!("  {phrase} => {reply}");
                }
            }
        }
    }

    Ok(())
}

fn run_chat(engine: &mut Engine) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Welcome! I'm {}.", engine.config().bot_name);
    println!("I can help you with programming, answer questions, and learn from our conversations.");
    println!("Teach me with 'train: question | answer'. Commands: stats, stats --json, clear, quit.");
    println!("Type 'help' to see what I can do!");
    println!();

    loop {
        print!("You: ");
        stdout.flush().into_diagnostic()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
            println!();
            break;
        }
        let message = line.trim();

        match message.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "stats" => {
                println!("{}", engine.stats());
                continue;
            }
            "stats --json" => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&engine.stats()).into_diagnostic()?
                );
                continue;
            }
            "clear" => {
                engine.reset_context();
                println!("Chat history cleared.\n");
                continue;
            }
            _ => {}
        }

        if is_training_command(message) {
            match parse_training_command(message) {
                Some((question, answer)) => {
                    engine.train(&question, &answer);
                    println!("Training: I've learned '{question}'!\n");
                }
                None => println!("Training format: train: question | answer\n"),
            }
            continue;
        }

        println!("Bot: {}\n", engine.get_response(message));
    }

    println!("Goodbye!");
    Ok(())
}
