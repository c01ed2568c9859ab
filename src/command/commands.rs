use crate::calendar::{Action, QuickFilter};
use crate::command::policies::flag_policy::{FlagDecision, FlagPolicy};
use crate::core::context::AppContext;
use crate::core::types::{CalendarCommand, DateInput, MonthDirection, RangeDays};
use crate::errors::Error::Parse;
use crate::errors::{Result, require_parse};
use crate::logging::LogTarget;
use crate::prompter::flows::config_edit::ConfigEditFlow;
use crate::prompter::prompter::Prompter;
use crate::ui::display_manager::DisplayManager;
use strum::IntoEnumIterator;

pub struct CommandCore<'a> {
    pub args: &'a [String],
    pub flag_policy: FlagPolicy,
}

impl<'a> CommandCore<'a> {
    pub fn new(args: &'a [String], max_args: usize) -> Self {
        Self {
            args,
            flag_policy: FlagPolicy::standard(max_args),
        }
    }

    /// The single required argument.
    fn required(&self, usage: &str) -> Result<&'a str> {
        require_parse(
            self.args.first().map(String::as_str),
            format!("Missing argument.\nUsage: {usage}"),
        )
    }
}

mod sealed {
    use super::CommandCore;

    pub trait Sealed<'a> {
        fn core(&self) -> &CommandCore<'a>;
    }
}

pub trait Command<'a>: sealed::Sealed<'a> {
    fn usage(&self) -> String;
    fn perform(&self, ctx: &mut AppContext) -> Result<()>;

    /// Whether the calendar should be drawn again after `perform`.
    fn redraws_calendar(&self) -> bool {
        true
    }

    /// Check flags, then perform. Returns whether to redraw.
    fn execute(&self, ctx: &mut AppContext) -> Result<bool> {
        let core = self.core();
        match core.flag_policy.evaluate(core.args) {
            FlagDecision::ShortCircuitUsage => {
                ctx.logger
                    .info(format!("Usage: {}", self.usage()), LogTarget::ConsoleOnly);
                Ok(false)
            }
            FlagDecision::TooManyArgs(max) => Err(Parse(format!(
                "Expected at most {max} argument(s), got {}.\nUsage: {}",
                core.args.len(),
                self.usage()
            ))),
            FlagDecision::Continue => {
                self.perform(ctx)?;
                Ok(self.redraws_calendar())
            }
        }
    }
}

pub type CommandDyn<'a> = Box<dyn Command<'a> + 'a>;

macro_rules! impl_sealed {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> sealed::Sealed<'a> for $ty<'a> {
                fn core(&self) -> &CommandCore<'a> {
                    &self.core
                }
            }
        )*
    };
}

impl_sealed!(
    NavigateCommand,
    SelectCommand,
    DayCommand,
    RangeCommand,
    QuickCommand,
    JumpCommand,
    ShowCommand,
    ConfigCommand,
    LogCommand,
    HelpCommand,
);

pub struct NavigateCommand<'a> {
    core: CommandCore<'a>,
    direction: MonthDirection,
}

impl<'a> NavigateCommand<'a> {
    pub fn new(direction: MonthDirection, args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
            direction,
        }
    }
}

impl<'a> Command<'a> for NavigateCommand<'a> {
    fn usage(&self) -> String {
        match self.direction {
            MonthDirection::Prev => CalendarCommand::Prev.usage().into(),
            MonthDirection::Next => CalendarCommand::Next.usage().into(),
        }
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.dispatch(Action::NavigateMonth(self.direction))
    }
}

pub struct SelectCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> SelectCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 1),
        }
    }
}

impl<'a> Command<'a> for SelectCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Select.usage().into()
    }

    /// Dates in the visible month keep the view; others bring their month in.
    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let raw = self.core.required(&self.usage())?;
        let DateInput(date) = DateInput::try_from_str(raw, ctx.today)?;
        let action = if ctx.state.is_visible(date) {
            Action::SelectDate(date)
        } else {
            Action::JumpTo(date)
        };
        ctx.dispatch(action)
    }
}

pub struct DayCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> DayCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 1),
        }
    }
}

impl<'a> Command<'a> for DayCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Day.usage().into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let raw = self.core.required(&self.usage())?;
        let day = raw
            .parse::<u32>()
            .map_err(|_| Parse(format!("Invalid day number: '{raw}'.\nUsage: {}", self.usage())))?;
        ctx.dispatch(Action::SelectDay(day))
    }
}

pub struct RangeCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> RangeCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 1),
        }
    }
}

impl<'a> Command<'a> for RangeCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Range.usage().into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let raw = self.core.required(&self.usage())?;
        ctx.dispatch(Action::SetRange(RangeDays::try_from(raw)?))
    }
}

pub struct QuickCommand<'a> {
    core: CommandCore<'a>,
    filter: QuickFilter,
}

impl<'a> QuickCommand<'a> {
    pub fn new(filter: QuickFilter, args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
            filter,
        }
    }
}

impl<'a> Command<'a> for QuickCommand<'a> {
    fn usage(&self) -> String {
        self.filter.to_string()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.dispatch(Action::Quick(self.filter))
    }
}

pub struct JumpCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> JumpCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 1),
        }
    }
}

impl<'a> Command<'a> for JumpCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Jump.usage().into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let raw = self.core.required(&self.usage())?;
        let position = raw.parse::<usize>().map_err(|_| {
            Parse(format!(
                "Invalid nearby event number: '{raw}'.\nUsage: {}",
                self.usage()
            ))
        })?;

        let target = {
            let view = ctx.view()?;
            match view.nearby_at(position) {
                Some(nearby) => nearby.key.date()?,
                None => {
                    return Err(Parse(format!(
                        "No nearby event #{position}; {} listed.",
                        view.nearby.len()
                    )));
                }
            }
        };
        ctx.dispatch(Action::JumpTo(target))
    }
}

pub struct ShowCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ShowCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
        }
    }
}

impl<'a> Command<'a> for ShowCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Show.usage().into()
    }

    fn perform(&self, _ctx: &mut AppContext) -> Result<()> {
        Ok(())
    }
}

pub struct ConfigCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
        }
    }
}

impl<'a> Command<'a> for ConfigCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Config.usage().into()
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        let flow = ConfigEditFlow::new(ctx);
        Prompter::new().run(flow, true)?;
        ctx.sync_with_config()
    }
}

pub struct LogCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> LogCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
        }
    }
}

impl<'a> Command<'a> for LogCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Log.usage().into()
    }

    fn redraws_calendar(&self) -> bool {
        false
    }

    fn perform(&self, ctx: &mut AppContext) -> Result<()> {
        match ctx.logger.log_path() {
            None => println!("No logs"),
            Some(path) => print!("{}", std::fs::read_to_string(&path)?),
        }
        Ok(())
    }
}

pub struct HelpCommand<'a> {
    core: CommandCore<'a>,
}

impl<'a> HelpCommand<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            core: CommandCore::new(args, 0),
        }
    }

    /// COMMAND | DESCRIPTION rows, in declaration order, plus `exit`.
    pub fn rows() -> Vec<Vec<String>> {
        CalendarCommand::iter()
            .map(|c| vec![c.usage().to_string(), c.summary().to_string()])
            .chain(std::iter::once(vec![
                "exit".to_string(),
                "Leave agenda".to_string(),
            ]))
            .collect()
    }
}

impl<'a> Command<'a> for HelpCommand<'a> {
    fn usage(&self) -> String {
        CalendarCommand::Help.usage().into()
    }

    fn redraws_calendar(&self) -> bool {
        false
    }

    fn perform(&self, _ctx: &mut AppContext) -> Result<()> {
        DisplayManager::new().display_help(Self::rows());
        println!("Append -h to any command for its usage.");
        Ok(())
    }
}
