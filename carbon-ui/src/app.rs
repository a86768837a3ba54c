//! Line-oriented command loop driving a [`GenerationSession`].
//!
//! Each line read from the input is parsed into a [`Command`], applied to
//! the session, and answered with an optional message followed by the view
//! for the current step.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use carbon_core::{GenerationSession, ImageHost, WizardSnapshot, WizardStep};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::logging;
use crate::models::{load_photo, load_photos};
use crate::views::render;

const HELP: &str = "\
Commands:
  next                 Continue to the next step
  back                 Return to the previous step
  reset                Start over with a new tree
  reference <path>     Upload the reference photo (Reference Photo step)
  photos <path>...     Add tree photos (Tree Photos step)
  generate             Generate the 3D model (Tree Photos step)
  wait                 Wait for a pending 3D model
  status               Show the current step again
  log <level>          Change log verbosity (e.g. debug, warn)
  help                 Show this list
  quit                 Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Reset,
    Reference(PathBuf),
    Photos(Vec<PathBuf>),
    Generate,
    Wait,
    Status,
    Log(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a trimmed, whitespace-separated command line. Paths cannot
    /// contain spaces.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let bare = |command: Command, label: &'static str| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::UnexpectedArgument(label))
            }
        };

        match name.as_str() {
            "next" | "n" => bare(Command::Next, "next"),
            "back" | "b" => bare(Command::Back, "back"),
            "reset" => bare(Command::Reset, "reset"),
            "generate" | "g" => bare(Command::Generate, "generate"),
            "wait" | "w" => bare(Command::Wait, "wait"),
            "status" | "s" => bare(Command::Status, "status"),
            "help" | "h" | "?" => bare(Command::Help, "help"),
            "quit" | "q" | "exit" => bare(Command::Quit, "quit"),
            "reference" | "ref" => match args.as_slice() {
                [path] => Ok(Command::Reference(PathBuf::from(path))),
                [] => Err(CommandError::MissingArgument {
                    command: "reference",
                    argument: "a file path",
                }),
                _ => Err(CommandError::UnexpectedArgument("reference")),
            },
            "photos" | "p" => {
                if args.is_empty() {
                    Err(CommandError::MissingArgument {
                        command: "photos",
                        argument: "one or more file paths",
                    })
                } else {
                    Ok(Command::Photos(args.iter().map(PathBuf::from).collect()))
                }
            }
            "log" => match args.as_slice() {
                [level] => Ok(Command::Log(level.to_string())),
                _ => Err(CommandError::MissingArgument {
                    command: "log",
                    argument: "a single level",
                }),
            },
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<H: ImageHost + 'static> {
    session: GenerationSession<H>,
}

impl<H: ImageHost + 'static> App<H> {
    pub fn new(session: GenerationSession<H>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GenerationSession<H> {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R, W>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(output, "{}", render(&self.session.snapshot().await))?;
        prompt(&mut output)?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("cannot read command")? {
            let line = line.trim();
            if line.is_empty() {
                prompt(&mut output)?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, &mut output).await? == Flow::Quit {
                        break;
                    }
                }
                Err(error) => {
                    debug!(%error, line, "Unparsed command");
                    writeln!(output, "{error}. Type `help` for the list of commands.")?;
                }
            }
            prompt(&mut output)?;
        }

        info!("Command loop finished");
        Ok(())
    }

    /// Applies one command and writes the response.
    pub async fn execute<W: Write>(
        &self,
        command: Command,
        output: &mut W,
    ) -> Result<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::Next => {
                if !self.session.advance().await {
                    let snapshot = self.session.snapshot().await;
                    writeln!(output, "{}", advance_blocked_reason(&snapshot))?;
                }
            }
            Command::Back => {
                if !self.session.retreat().await {
                    writeln!(output, "Already at the first step.")?;
                }
            }
            Command::Reset => {
                self.session.reset().await;
                writeln!(output, "Starting over.")?;
            }
            Command::Reference(path) => {
                if !self.on_step(WizardStep::ReferencePhoto, output).await? {
                    return Ok(Flow::Continue);
                }
                self.upload_reference(path, output).await?;
            }
            Command::Photos(paths) => {
                if !self.on_step(WizardStep::TreePhotos, output).await? {
                    return Ok(Flow::Continue);
                }
                self.upload_tree_photos(&paths, output).await?;
            }
            Command::Generate => {
                if !self.on_step(WizardStep::TreePhotos, output).await? {
                    return Ok(Flow::Continue);
                }
                if !self.session.begin_generation().await {
                    let snapshot = self.session.snapshot().await;
                    writeln!(output, "{}", generate_refused_reason(&snapshot))?;
                }
            }
            Command::Wait => {
                self.session.wait_for_generation().await;
            }
            Command::Status => {}
            Command::Log(level) => {
                match logging::set_log_level(&level) {
                    Ok(()) => writeln!(output, "Log level set to '{level}'.")?,
                    Err(error) => writeln!(output, "{error:#}")?,
                }
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        write!(output, "{}", render(&self.session.snapshot().await))?;
        Ok(Flow::Continue)
    }

    async fn on_step<W: Write>(
        &self,
        step: WizardStep,
        output: &mut W,
    ) -> Result<bool> {
        let current = self.session.snapshot().await.current_step;
        if current == step {
            return Ok(true);
        }
        writeln!(
            output,
            "That command is only available on the {step} step (currently on {current})."
        )?;
        Ok(false)
    }

    async fn upload_reference<W: Write>(
        &self,
        path: PathBuf,
        output: &mut W,
    ) -> Result<()> {
        let file = match load_photo(&path) {
            Ok(file) => file,
            Err(error) => {
                warn!(%error, "Reference photo not loaded");
                writeln!(output, "{error}")?;
                return Ok(());
            }
        };
        if let Err(error) = self.session.submit_reference_photo(&file).await {
            writeln!(output, "{error}")?;
        }
        Ok(())
    }

    async fn upload_tree_photos<W: Write>(
        &self,
        paths: &[PathBuf],
        output: &mut W,
    ) -> Result<()> {
        let files = match load_photos(paths) {
            Ok(files) => files,
            Err(error) => {
                warn!(%error, "Tree photos not loaded");
                writeln!(output, "{error}; no photos were added.")?;
                return Ok(());
            }
        };

        let upload = self.session.submit_tree_photos(&files).await;
        for error in &upload.rejected {
            writeln!(output, "Skipped {error}.")?;
        }
        Ok(())
    }
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

fn advance_blocked_reason(snapshot: &WizardSnapshot) -> &'static str {
    match snapshot.current_step {
        WizardStep::ReferencePhoto => "Upload a reference photo before continuing.",
        WizardStep::TreePhotos if snapshot.is_processing => {
            "The 3D model is still generating. Use `wait` or try again shortly."
        }
        WizardStep::TreePhotos => "Generate the 3D model before continuing.",
        WizardStep::CarbonCredits => "This is the final step. Use `reset` to measure another tree.",
        WizardStep::Welcome | WizardStep::TreeAnalysis => "Cannot continue from this step.",
    }
}

fn generate_refused_reason(snapshot: &WizardSnapshot) -> &'static str {
    if snapshot.tree_photos.is_empty() {
        "Add tree photos before generating the 3D model."
    } else if snapshot.is_processing {
        "The 3D model is already generating."
    } else {
        "The 3D model has already been created."
    }
}
