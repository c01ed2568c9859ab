use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error set for the calendar engine and the session around it.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Calendar / Domain --------------------------------------------------
    /// A date key that was not produced by `to_key` (caller bug).
    #[error("Invalid date key: '{0}'. Expected format: YYYY-MM-DD.")]
    InvalidDateKey(String),

    /// Zero-based month outside 0..=11.
    #[error("Invalid month: {0}. Months are zero-based (0..=11).")]
    InvalidMonth(u32),

    /// Year outside the range a four-digit key can represent.
    #[error("Invalid year: {0}. Supported years: 1..=9999.")]
    InvalidYear(i32),

    /// Day number that does not exist in the given month (`month` is zero-based).
    #[error(
        "Invalid day {day} for {year}-{:02}; the month has {days_in_month} day(s).",
        .month + 1
    )]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        days_in_month: u32,
    },

    /// Search radius outside the supported set.
    #[error("Invalid range: '{0}'. Valid ranges: 1, 3, 7")]
    InvalidRange(String),

    // ---- Parsing & Routing --------------------------------------------------
    /// Command argument problems.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No command matches the input.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config and event index decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for unknown command.
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
