use clap::Parser;

/// Create, write, read back and delete text files
#[derive(Parser, Debug)]
#[command(name = "file-roundtrip")]
#[command(version)]
#[command(
    about = "Create, write, read back and delete text files",
    long_about = "Runs a file lifecycle scenario: each file is created and written, read back and \
                  printed to stdout, and finally deleted. Without a config file the built-in \
                  three-file demonstration runs."
)]
pub struct Args {
    /// Directory the files are created in (defaults to current directory)
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Path to a config file (defaults to file-roundtrip.config.yml in the working directory, if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Remove files created by this run if a later step fails
    #[arg(long)]
    pub cleanup_on_failure: bool,

    /// Only print file contents and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
