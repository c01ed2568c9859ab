use crate::command::command_resolver::{CommandResolver, GlobalResolver, NavigateResolver};
use crate::command::commands::CommandDyn;
use crate::errors::{Error, Result};

pub struct CommandParser {
    registry: Vec<Box<dyn CommandResolver>>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            registry: vec![
                Box::new(NavigateResolver),
                Box::new(GlobalResolver),
            ],
        }
    }

    pub fn parse<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        self.registry
            .iter()
            .find(|r| r.can_resolve(command))
            .ok_or_else(|| Error::UnknownCommand(command.to_string()))?
            .resolve(command, args)
    }

    /// Split a raw line into command name and argument tokens.
    pub fn split(line: &str) -> (String, Vec<String>) {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_string();
        (command, parts.map(str::to_string).collect())
    }
}
