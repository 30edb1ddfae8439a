mod context;
pub mod init;
pub mod rewrite;
pub mod rules;

pub use context::RunContext;
