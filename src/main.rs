use anyhow::Result;
use opml_nb_diff::cli::Args;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse_args();
    opml_nb_diff::run(args)
}
