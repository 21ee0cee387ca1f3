//! コンパイル済み語彙表の統計表示モジュール

use std::path::PathBuf;

use bilingual_wordnet::Lexicon;
use bilingual_wordnet::errors::WordnetError;

use clap::Parser;

/// 統計コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "stats",
    about = "A program to print table sizes of a compiled lexicon."
)]
pub struct Args {
    /// Compiled lexicon file (in zstd).
    #[clap(short = 'i', long)]
    lexicon_in: PathBuf,
}

/// 統計表示中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// 語彙表読み込みエラー
    #[error("Lexicon loading failed: {0}")]
    Wordnet(#[from] WordnetError),
}

/// 統計コマンドを実行する
///
/// # エラー
///
/// 語彙表を読み込めない場合、`StatsError`を返します。
pub fn run(args: Args) -> Result<(), StatsError> {
    eprintln!("Loading the lexicon...");
    let lexicon = Lexicon::from_zstd(&args.lexicon_in)?;
    let stats = lexicon.stats();

    println!("word forms\t{}", stats.word_forms);
    println!("synsets\t{}", stats.synsets);
    println!("dictionary entries\t{}", stats.dictionary_entries);
    println!("synonym entries\t{}", stats.synonym_entries);
    println!("special cases\t{}", stats.special_cases);
    Ok(())
}
