use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use pinyin_config::Config;
use pinyin_core::preprocess::{Preprocessor, WidthPreprocessor};
use pinyin_core::types::{Segment, SegmentKind, ToneFormat, render_line};
use pinyin_lang_chinese::ChineseProcessor;

use crate::settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Line,
    Segments,
    Details,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "line" => Ok(Self::Line),
            "segments" => Ok(Self::Segments),
            "details" => Ok(Self::Details),
            _ => Err("Could not parse a mode"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "convert", about = "Converts Chinese text to pinyin")]
pub struct Args {
    /// Text to convert. Reads stdin line by line when omitted.
    text: Vec<String>,

    /// Tone format. Choices are diacritic and numeric.
    #[clap(short = 'f', long)]
    format: Option<ToneFormat>,

    /// Output mode. Choices are line, segments, and details.
    #[clap(short = 'O', long, default_value = "line")]
    output_mode: OutputMode,

    /// Dictionary source file used instead of the configured one.
    #[clap(short = 'd', long)]
    dictionary: Option<PathBuf>,

    /// Folds full-width letters and digits before conversion.
    #[clap(short = 'W', long)]
    fold_width: bool,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let dict = settings::load_dictionary(config, args.dictionary.as_deref())?;
    let processor = ChineseProcessor::with_options(dict, settings::render_options(config));
    let format = args.format.unwrap_or(config.output.tone_format);

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        write_converted(&mut out, &processor, &prepare(&text, args.fold_width), format, args.output_mode)?;
        out.flush()?;
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        write_converted(&mut out, &processor, &prepare(&line, args.fold_width), format, args.output_mode)?;
        if is_tty {
            out.flush()?;
        }
    }
    out.flush()?;

    Ok(())
}

fn prepare(text: &str, fold_width: bool) -> String {
    if fold_width {
        WidthPreprocessor.process(text)
    } else {
        text.to_string()
    }
}

pub fn write_converted<W: Write>(
    out: &mut W,
    processor: &ChineseProcessor,
    text: &str,
    format: ToneFormat,
    mode: OutputMode,
) -> std::io::Result<()> {
    let segments: Vec<Segment<'_>> = processor.convert(text, format).collect();
    match mode {
        OutputMode::Line => writeln!(out, "{}", render_line(&segments))?,
        OutputMode::Segments => {
            for segment in &segments {
                writeln!(out, "{}\t{}", segment.source, segment.reading)?;
            }
            out.write_all(b"EOS\n")?;
        }
        OutputMode::Details => {
            for segment in &segments {
                writeln!(
                    out,
                    "{}\t{}\tkind={}\tposition={}\talternatives={}",
                    segment.source,
                    segment.reading,
                    kind_name(segment.kind),
                    segment.position,
                    segment.alternatives.join(",")
                )?;
            }
            out.write_all(b"EOS\n")?;
        }
    }
    Ok(())
}

fn kind_name(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Word => "word",
        SegmentKind::Character => "character",
        SegmentKind::Passthrough => "passthrough",
    }
}

