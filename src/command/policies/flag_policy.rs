/// Outcome of checking a command's raw arguments before it runs.
#[derive(Debug, PartialEq, Eq)]
pub enum FlagDecision {
    /// Print usage() instead of running.
    ShortCircuitUsage,
    /// More arguments than the command takes; carries the limit.
    TooManyArgs(usize),
    Continue,
}

pub trait FlagRule {
    fn check(&self, args: &[String]) -> FlagDecision;
}

pub fn is_help_flag(token: &str) -> bool {
    matches!(token, "-h" | "--help")
}

pub struct HelpAtIdx(pub usize);
impl FlagRule for HelpAtIdx {
    fn check(&self, args: &[String]) -> FlagDecision {
        match args.get(self.0) {
            Some(token) if is_help_flag(token) => FlagDecision::ShortCircuitUsage,
            _ => FlagDecision::Continue,
        }
    }
}

pub struct MaxArgs(pub usize);
impl FlagRule for MaxArgs {
    fn check(&self, args: &[String]) -> FlagDecision {
        if args.len() > self.0 {
            FlagDecision::TooManyArgs(self.0)
        } else {
            FlagDecision::Continue
        }
    }
}

pub struct FlagPolicy {
    rules: Vec<Box<dyn FlagRule>>,
}

impl FlagPolicy {
    pub fn new(rules: Vec<Box<dyn FlagRule>>) -> Self {
        Self { rules }
    }

    /// `-h` first, then at most `max` arguments.
    pub fn standard(max: usize) -> Self {
        Self::new(vec![Box::new(HelpAtIdx(0)), Box::new(MaxArgs(max))])
    }

    pub fn evaluate(&self, args: &[String]) -> FlagDecision {
        // first non-Continue wins
        for r in &self.rules {
            match r.check(args) {
                FlagDecision::Continue => continue,
                other => return other,
            }
        }
        FlagDecision::Continue
    }
}
