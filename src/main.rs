use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use doublets::config::{Cli, OutputFormat};
use doublets::logging;
use doublets::word_list::{self, WordFilter};
use doublets::{DoubletError, LadderReport, WordGraph};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    let words = word_list::load_words(&cli.words, WordFilter { length: cli.length })?;
    let mut graph = WordGraph::with_capacity(cli.capacity);
    graph
        .extend(words)
        .with_context(|| format!("building word graph from {}", cli.words.display()))?;
    info!(words = graph.len(), "dictionary ready");
    // load the word list and connect words one letter apart

    let mut csv_out = match cli.format {
        OutputFormat::Csv => Some(csv::Writer::from_writer(std::io::stdout())),
        OutputFormat::Human => None,
    };

    for (from, to) in cli.pairs() {
        let ladder = match graph.ladder(&from, &to, cli.strategy) {
            Ok(ladder) => ladder,
            Err(DoubletError::UnknownWord(word)) => {
                warn!(%word, "skipping puzzle");
                if csv_out.is_none() {
                    println!("Doublet puzzle with words {} and {}:", from, to);
                    println!("{} is not in the dictionary\n", word);
                }
                continue;
            } // one bad pair doesn't stop the rest
            Err(err) => return Err(err.into()),
        };

        match csv_out.as_mut() {
            Some(writer) => writer.serialize(LadderReport::new(&from, &to, cli.strategy, ladder.as_ref()))?,
            None => {
                println!("Doublet puzzle with words {} and {}:", from, to);
                match ladder {
                    Some(ladder) => println!("{} ({} steps)\n", ladder, ladder.steps()),
                    None => println!("no ladder found\n"),
                }
            }
        }
    }

    if let Some(mut writer) = csv_out {
        writer.flush()?;
    }
    Ok(())
}
