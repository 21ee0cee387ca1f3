//! シンセットの訳語を決定するユーティリティ
//!
//! このバイナリは、ソースファイルまたはコンパイル済み語彙表から語彙表を読み込み、
//! 指定された見出し語・シンセットID、あるいはすべてのシンセットの訳語を決定して、
//! 指定された出力形式（record、meanings）で結果を出力します。
//! 対象が指定されない場合は、標準入力から1行に1つの見出し語を読み込みます。

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use bilingual_wordnet::{Lexicon, Resolver, SourcePaths, SynsetMeaning};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Record,
    Meanings,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"record"、"meanings"のいずれか）
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "record" => Ok(Self::Record),
            "meanings" => Ok(Self::Meanings),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "resolve", about = "Assigns meanings to WordNet synsets")]
struct Args {
    /// Directory containing the five source files.
    #[clap(short = 'd', long, conflicts_with = "lexicon", required_unless_present = "lexicon")]
    data_dir: Option<PathBuf>,

    /// Compiled lexicon (in zstd).
    #[clap(short = 'i', long)]
    lexicon: Option<PathBuf>,

    /// Lemma to resolve. Can be given more than once.
    #[clap(short = 'w', long)]
    word: Vec<String>,

    /// Synset id to resolve. Can be given more than once.
    #[clap(short = 's', long)]
    synset: Vec<String>,

    /// Resolves every loaded synset.
    #[clap(short = 'a', long, conflicts_with_all = ["word", "synset"])]
    all: bool,

    /// Output mode. Choices are record and meanings.
    #[clap(short = 'O', long, default_value = "record")]
    output_mode: OutputMode,
}

/// 語彙表を読み込む
fn load_lexicon(args: &Args) -> Result<Lexicon, Box<dyn Error>> {
    let lexicon = match (&args.lexicon, &args.data_dir) {
        (Some(path), _) => Lexicon::from_zstd(path)?,
        (None, Some(dir)) => Lexicon::from_paths(&SourcePaths::from_dir(dir))?,
        (None, None) => return Err("Either --data-dir or --lexicon must be specified".into()),
    };
    Ok(lexicon)
}

/// 1件の結果を出力する
fn write_meaning<W: Write>(
    out: &mut W,
    meaning: &SynsetMeaning,
    mode: &OutputMode,
) -> std::io::Result<()> {
    match mode {
        OutputMode::Record => writeln!(out, "{}", meaning),
        OutputMode::Meanings => writeln!(
            out,
            "{}\t{}",
            meaning.synset().id(),
            meaning.meanings().join(", ")
        ),
    }
}

/// メイン関数
///
/// 語彙表をロードし、指定された対象の訳語を決定して標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    eprintln!("Loading the lexicon...");
    let lexicon = load_lexicon(&args)?;
    log::info!("{}", lexicon.stats());
    let resolver = Resolver::new(&lexicon);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    if args.all {
        for meaning in resolver.resolve_all() {
            write_meaning(&mut out, &meaning, &args.output_mode)?;
        }
        return Ok(());
    }

    if !args.word.is_empty() || !args.synset.is_empty() {
        for id in &args.synset {
            match resolver.resolve_id(id) {
                Some(meaning) => write_meaning(&mut out, &meaning, &args.output_mode)?,
                None => eprintln!("Unknown synset id: {}", id),
            }
        }
        for word in &args.word {
            let meanings = resolver.resolve_word(word);
            if meanings.is_empty() {
                eprintln!("Unknown word: {}", word);
            }
            for meaning in &meanings {
                write_meaning(&mut out, meaning, &args.output_mode)?;
            }
        }
        return Ok(());
    }

    eprintln!("Ready to resolve");

    let is_tty = atty::is(atty::Stream::Stdout);

    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        for meaning in resolver.resolve_word(word) {
            write_meaning(&mut out, &meaning, &args.output_mode)?;
        }
        out.write_all(b"EOS\n")?;
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
