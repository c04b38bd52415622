use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "opml-nb-diff", version, about)]
pub struct Args {
    /// Opml file path
    pub opml_filepath: String,

    /// Newsboat urls file path
    #[arg(default_value = "~/.newsboat/urls")]
    pub newsboat_filepath: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
