use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use travel_bloom::adapters::TerminalAlerter;
use travel_bloom::app::{handle_line, render_output, run_queries};
use travel_bloom::domain::ports::ConfigProvider;
use travel_bloom::utils::logger;
use travel_bloom::{
    open_source, CliConfig, Controller, DataStore, Flow, Loader, Messages, PageContainer,
    TextInput,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let settings = cli.settings().context("Invalid configuration")?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let mut controller = Controller::with_messages(
        DataStore::new(),
        PageContainer::new(settings.container_id()),
        TextInput::default(),
        TerminalAlerter,
        Messages::from_config(&settings),
    );

    let load = controller.on_startup(Loader::new(open_source(settings.source())));

    if !cli.queries.is_empty() {
        let outputs = run_queries(&mut controller, load, &cli.queries, cli.format)
            .await
            .context("Failed to render results")?;
        for output in outputs {
            print!("{}", output);
        }
        return Ok(());
    }

    eprintln!("Type a keyword and press Enter. ':reset' clears, ':quit' exits.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        if handle_line(&mut controller, &line) == Flow::Stop {
            break;
        }
        let output = render_output(controller.container(), cli.format)
            .context("Failed to render results")?;
        print!("{}", output);
    }

    Ok(())
}
