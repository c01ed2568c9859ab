use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

/// One interactive screen: draw, then react to a line of input.
pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigState {
    ShowTable,   // show the config table and ask Y/N
    SelectId,    // ask for ID
    ShowCurrent, // show desc/current
    AskNewValue, // prompt for new value
    Done,
}
