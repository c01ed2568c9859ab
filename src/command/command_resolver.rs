use crate::calendar::QuickFilter;
use crate::command::commands::{
    CommandDyn, ConfigCommand, DayCommand, HelpCommand, JumpCommand, LogCommand, NavigateCommand,
    QuickCommand, RangeCommand, SelectCommand, ShowCommand,
};
use crate::core::types::{CalendarCommand, MonthDirection};
use crate::errors::{Error, Result};
use std::str::FromStr;

pub trait CommandResolver {
    fn can_resolve(&self, command: &str) -> bool;
    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>>;
}

/// `prev` / `next`, plus the `previous` alias.
pub struct NavigateResolver;

impl CommandResolver for NavigateResolver {
    fn can_resolve(&self, command: &str) -> bool {
        MonthDirection::from_str(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let direction = MonthDirection::from_str(command)
            .map_err(|_| Error::UnknownCommand(command.to_string()))?;
        Ok(Box::new(NavigateCommand::new(direction, args)))
    }
}

/// Every `CalendarCommand` by name.
pub struct GlobalResolver;

impl CommandResolver for GlobalResolver {
    fn can_resolve(&self, command: &str) -> bool {
        CalendarCommand::try_from(command).is_ok()
    }

    fn resolve<'a>(&self, command: &str, args: &'a [String]) -> Result<CommandDyn<'a>> {
        let cmd: CommandDyn<'a> = match CalendarCommand::try_from(command)? {
            CalendarCommand::Prev => Box::new(NavigateCommand::new(MonthDirection::Prev, args)),
            CalendarCommand::Next => Box::new(NavigateCommand::new(MonthDirection::Next, args)),
            CalendarCommand::Select => Box::new(SelectCommand::new(args)),
            CalendarCommand::Day => Box::new(DayCommand::new(args)),
            CalendarCommand::Range => Box::new(RangeCommand::new(args)),
            CalendarCommand::Today => Box::new(QuickCommand::new(QuickFilter::Today, args)),
            CalendarCommand::Tomorrow => Box::new(QuickCommand::new(QuickFilter::Tomorrow, args)),
            CalendarCommand::Next7 => Box::new(QuickCommand::new(QuickFilter::Next7, args)),
            CalendarCommand::Jump => Box::new(JumpCommand::new(args)),
            CalendarCommand::Show => Box::new(ShowCommand::new(args)),
            CalendarCommand::Config => Box::new(ConfigCommand::new(args)),
            CalendarCommand::Log => Box::new(LogCommand::new(args)),
            CalendarCommand::Help => Box::new(HelpCommand::new(args)),
        };
        Ok(cmd)
    }
}
