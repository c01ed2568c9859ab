pub mod command_parser;
pub mod command_resolver;
pub mod commands;
mod policies;
#[cfg(test)]
mod tests;
