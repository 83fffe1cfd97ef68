use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use slovo_morph::{synthesize_request, LexicalStore};
use slovo_protocol::Lexicon;
use slovo_solver::{archive, Processor, RelationGraph};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_DICT_DIR: &str = "data/dictionaries";

#[derive(Parser)]
#[command(name = "slovo", author, version, about = "Russian word decomposition and actant linking")]
struct Cli {
    /// Compiled lexicon archive. Takes precedence over --dict-dir.
    #[arg(long, value_name = "FILE", env = "SLOVO_LEXICON", global = true)]
    lexicon: Option<PathBuf>,

    /// Directory of .dct text dictionaries.
    #[arg(long, value_name = "DIR", env = "SLOVO_DICT_DIR", global = true)]
    dict_dir: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile text dictionaries (or a JSON lexicon) into an rkyv archive.
    Compile {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Read the lexicon from JSON instead of the dictionary directory.
        #[arg(long, value_name = "FILE")]
        from_json: Option<PathBuf>,
    },
    /// Analyse text and print the relations found. Reads stdin without TEXT.
    Analyze {
        text: Option<String>,

        #[arg(long)]
        json: bool,

        #[arg(long, conflicts_with = "json")]
        dot: bool,

        /// Skip glued-expression and synonym rewriting.
        #[arg(long)]
        no_preprocess: bool,
    },
    /// Show every reading of each word and its auxiliary dictionary entries.
    Inspect {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Build the form of CANONICAL with the given features, e.g. `case=РП number=ЕЧ`.
    Synth {
        canonical: String,
        part_of_speech: String,
        fields: Vec<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn dict_dir(cli: &Cli) -> &Path {
    cli.dict_dir.as_deref().unwrap_or_else(|| Path::new(DEFAULT_DICT_DIR))
}

fn load_lexicon(cli: &Cli) -> anyhow::Result<Lexicon> {
    match &cli.lexicon {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            archive::decode(&bytes).with_context(|| format!("loading {}", path.display()))
        }
        None => {
            let dir = dict_dir(cli);
            slovo_parser::load_dir(dir).with_context(|| format!("loading dictionaries from {}", dir.display()))
        }
    }
}

fn load_store(cli: &Cli) -> anyhow::Result<Arc<LexicalStore>> {
    Ok(Arc::new(LexicalStore::new(load_lexicon(cli)?)))
}

fn compile(cli: &Cli, output: &Path, from_json: Option<&Path>) -> anyhow::Result<()> {
    let lexicon: Lexicon = match from_json {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            let dir = dict_dir(cli);
            slovo_parser::load_dir(dir).with_context(|| format!("loading dictionaries from {}", dir.display()))?
        }
    };

    let bytes = archive::encode(&lexicon)?;
    debug!(bytes = bytes.len(), "lexicon archived");
    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    println!(
        "compiled {} roots, {} flexions, {} predicates into {} ({} bytes)",
        lexicon.entities.len() + lexicon.characters.len() + lexicon.verbs.len(),
        lexicon.flexions.len(),
        lexicon.predicates.len(),
        output.display(),
        bytes.len()
    );
    Ok(())
}

fn analyze(cli: &Cli, text: Option<&str>, json: bool, dot: bool, no_preprocess: bool) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let mut processor = Processor::new(load_store(cli)?);
    if no_preprocess {
        processor = processor.without_preprocessing();
    }
    let reports = processor.process_text(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if dot {
        let graph = RelationGraph::from_triples(reports.iter().flat_map(|r| r.triples.iter()));
        print!("{}", graph.to_dot());
    } else {
        for report in &reports {
            println!("{}", report.tokens.join(" "));
            for word in report.unknown_words() {
                println!("  {}: unknown part of speech", word);
            }
            for triple in &report.triples {
                println!("  {}", triple);
            }
        }
    }
    Ok(())
}

fn inspect(cli: &Cli, words: &[String]) -> anyhow::Result<()> {
    let processor = Processor::new(load_store(cli)?);
    for inspection in processor.inspect(words) {
        println!("{}", inspection);
    }
    Ok(())
}

fn synth(cli: &Cli, canonical: &str, part_of_speech: &str, fields: &[String]) -> anyhow::Result<()> {
    let pairs = fields
        .iter()
        .map(|field| match field.split_once('=') {
            Some((name, value)) => Ok((name, value)),
            None => bail!("expected field=value, got '{}'", field),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let store = load_store(cli)?;
    match synthesize_request(&store, canonical, part_of_speech, pairs)? {
        Some(form) => println!("{}", form),
        None => bail!("no form of '{}' has the requested features", canonical),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Compile { output, from_json } => compile(&cli, output, from_json.as_deref()),
        Command::Analyze { text, json, dot, no_preprocess } => {
            analyze(&cli, text.as_deref(), *json, *dot, *no_preprocess)
        }
        Command::Inspect { words } => inspect(&cli, words),
        Command::Synth { canonical, part_of_speech, fields } => synth(&cli, canonical, part_of_speech, fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_synth_fields() {
        let cli = Cli::try_parse_from(["slovo", "synth", "камень", "СУ", "case=РП", "number=ЕЧ"]).unwrap();
        match cli.command {
            Command::Synth { canonical, part_of_speech, fields } => {
                assert_eq!(canonical, "камень");
                assert_eq!(part_of_speech, "СУ");
                assert_eq!(fields, vec!["case=РП", "number=ЕЧ"]);
            }
            _ => panic!("expected synth"),
        }
    }

    #[test]
    fn test_json_and_dot_conflict() {
        assert!(Cli::try_parse_from(["slovo", "analyze", "--json", "--dot", "дом"]).is_err());
    }
}
