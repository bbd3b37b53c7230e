use std::fs;
use std::path::PathBuf;

use clap::Parser;
use pinyin_lang_chinese::DictionaryLoader;

#[derive(Parser, Debug)]
#[clap(name = "merge", about = "Adds new entries to a dictionary source")]
pub struct Args {
    /// Base dictionary source file (JSON).
    #[clap(short = 'b', long)]
    base: PathBuf,

    /// Entries to add. Keys already in the base must carry identical readings.
    #[clap(short = 'a', long)]
    additions: PathBuf,

    /// File to which the merged source is written.
    #[clap(short = 'o', long)]
    output: PathBuf,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let mut source = DictionaryLoader::read_source(&args.base)?;
    let additions = DictionaryLoader::read_source(&args.additions)?;

    let report = source.merge(additions);
    for conflict in &report.conflicts {
        tracing::error!("{conflict}");
    }
    let report = report.into_result()?;

    // never write something that would not load
    source.build()?;
    fs::write(&args.output, source.to_json_pretty()? + "\n")?;

    eprintln!(
        "Wrote {} entries to {} ({} added, {} already present)",
        source.len(),
        args.output.display(),
        report.added.len(),
        report.unchanged.len()
    );
    Ok(())
}
