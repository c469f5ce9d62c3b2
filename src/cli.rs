use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Force the credentials file path. Defaults to
    /// ~/.config/menubar-utils/claude-usage.env
    #[arg(long, env = "CLAUDE_USAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug mode: print request and classification details to stderr
    #[arg(long, env = "CLAUDE_USAGE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
