// Application layer: the inspector commands behind the `ec2-model` binary.

pub mod commands;

pub use commands::execute;
