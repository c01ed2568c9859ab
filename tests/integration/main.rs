mod cli;
mod common;
mod config;
mod persist;
mod session;
