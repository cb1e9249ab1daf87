use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Load .env early; ignore if missing.
    dotenvy::dotenv().ok();

    let cli = bikeshare_explorer::config::Cli::parse();
    bikeshare_explorer::logging::init(cli.verbose);
    bikeshare_explorer::run(&cli)
}
