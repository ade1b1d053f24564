use anyhow::Result;
use clap::Parser;
use clinids::cli::CliArgs;
use clinids::config::Config;
use clinids::logger::Logger;
use clinids::{tokens, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.dump_tokens {
        println!("{}", tokens::dump_tokens()?);
        return Ok(());
    }

    if let Some(path) = &args.generate_config {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = args.load_config()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    let options = args.launch_options(&config);
    logger.log(format!(
        "Startup: language '{}', page '{}'",
        options.language,
        options.start_page.id()
    ));

    // Run the TUI application
    ui::run_app(&config, options, logger).await?;

    Ok(())
}
