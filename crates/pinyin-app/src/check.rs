use std::path::PathBuf;

use clap::Parser;
use pinyin_core::dictionary::ReadingDictionary;
use pinyin_lang_chinese::DictionaryLoader;

#[derive(Parser, Debug)]
#[clap(name = "check", about = "Validates a dictionary source file")]
pub struct Args {
    /// Dictionary source file (JSON).
    path: PathBuf,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let dict = DictionaryLoader::load_from_file(&args.path)?;
    let meta = dict.metadata();

    println!("{}: ok", args.path.display());
    println!("entries\t{}", meta.entry_count);
    println!("words\t{}", dict.word_count());
    println!("max_key_length\t{}", meta.max_key_length);
    Ok(())
}
