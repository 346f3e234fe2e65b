//! CLI commands

mod init;
mod new;
mod pipeline;
mod release;

#[cfg(test)]
pub(crate) mod test_support;

pub use init::InitCommand;
pub use new::NewCommand;
pub use release::ReleaseCommand;
