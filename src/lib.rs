pub mod args;
pub mod cli;
pub mod ledger;
mod terminal;
