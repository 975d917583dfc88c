pub mod applier;
pub mod cli;
pub mod completer;
pub mod consts;
pub mod error;
pub mod prompts;
pub mod spinner;
