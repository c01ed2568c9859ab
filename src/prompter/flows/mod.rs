pub mod config_edit;
pub mod main_flow;
