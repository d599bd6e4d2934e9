//! Console command table.
//!
//! Commands self-register through an explicit [`CommandSet::register`]
//! call during startup; there is no runtime discovery. The debug console
//! panel owns a set and feeds typed lines into [`CommandSet::dispatch`].

use anyhow::Result;

use stagehand_logger as logger;

/// A registered command handler.
///
/// Receives the whitespace-split arguments (command name excluded) and
/// returns the text to print in the console.
pub type CommandHandler = Box<dyn FnMut(&[&str]) -> Result<String>>;

struct CommandEntry {
    name: String,
    help: String,
    run: CommandHandler,
}

/// Result of dispatching one console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Blank input; nothing to do.
    Empty,
    /// No command registered under this name.
    Unknown(String),
    /// The command ran and produced output.
    Output(String),
    /// The command ran and failed.
    Failed {
        /// Command name
        name: String,
        /// Failure description
        reason: String,
    },
}

/// Explicit command registration table.
///
/// First registration wins: a second command under an occupied name is
/// discarded with a logged conflict, mirroring the panel registry policy.
#[derive(Default)]
pub struct CommandSet {
    entries: Vec<CommandEntry>,
}

impl CommandSet {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Returns false if the name was already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        run: impl FnMut(&[&str]) -> Result<String> + 'static,
    ) -> bool {
        let name = name.into();
        if self.entries.iter().any(|entry| entry.name == name) {
            logger::warn(format!(
                "command '{}' already registered, keeping the first",
                name
            ));
            return false;
        }
        self.entries.push(CommandEntry {
            name,
            help: help.into(),
            run: Box::new(run),
        });
        true
    }

    /// Parse and run one console line.
    pub fn dispatch(&mut self, line: &str) -> CommandOutcome {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return CommandOutcome::Empty;
        };
        let args: Vec<&str> = parts.collect();

        let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) else {
            logger::debug(format!("unknown console command '{}'", name));
            return CommandOutcome::Unknown(name.to_string());
        };

        match (entry.run)(&args) {
            Ok(output) => CommandOutcome::Output(output),
            Err(err) => {
                logger::warn(format!("console command '{}' failed: {}", name, err));
                CommandOutcome::Failed {
                    name: name.to_string(),
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Registered (name, help) pairs, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.help.as_str()))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_dispatch_output() {
        let mut set = CommandSet::new();
        set.register("echo", "repeat the arguments", |args| Ok(args.join(" ")));

        assert_eq!(
            set.dispatch("echo hello world"),
            CommandOutcome::Output("hello world".to_string())
        );
    }

    #[test]
    fn test_dispatch_unknown_and_empty() {
        let mut set = CommandSet::new();
        assert_eq!(set.dispatch("   "), CommandOutcome::Empty);
        assert_eq!(
            set.dispatch("teleport 3 4"),
            CommandOutcome::Unknown("teleport".to_string())
        );
    }

    #[test]
    fn test_first_registration_wins() {
        let mut set = CommandSet::new();
        assert!(set.register("ver", "version", |_| Ok("1".to_string())));
        assert!(!set.register("ver", "version again", |_| Ok("2".to_string())));

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.dispatch("ver"),
            CommandOutcome::Output("1".to_string())
        );
    }

    #[test]
    fn test_failure_is_reported_not_raised() {
        let mut set = CommandSet::new();
        set.register("boom", "always fails", |_| Err(anyhow!("no such entity")));

        assert_eq!(
            set.dispatch("boom"),
            CommandOutcome::Failed {
                name: "boom".to_string(),
                reason: "no such entity".to_string(),
            }
        );
    }

    #[test]
    fn test_listing_keeps_registration_order() {
        let mut set = CommandSet::new();
        set.register("help", "list commands", |_| Ok(String::new()));
        set.register("quit", "leave the game", |_| Ok(String::new()));

        let names: Vec<&str> = set.commands().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["help", "quit"]);
    }
}
