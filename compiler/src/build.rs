//! コンパイル済み語彙表のビルドモジュール
//!
//! このモジュールは、5つのソースファイルから語彙表を構築し、
//! zstd圧縮したrkyv形式で書き出す機能を提供します。

use std::path::PathBuf;
use std::{fs::File, io};

use bilingual_wordnet::errors::WordnetError;
use bilingual_wordnet::{Lexicon, SourceKind, SourcePaths};

use clap::Parser;

/// ビルドコマンドの引数
///
/// ソースファイルは `--data-dir` で慣例的なファイル名をまとめて指定するか、
/// 個別のオプションで指定します。両方を指定した場合は個別の指定が優先されます。
#[derive(Parser, Debug)]
#[clap(
    name = "build",
    about = "A program to build the compiled lexicon."
)]
pub struct Args {
    /// Directory containing index.noun, data.noun, ev.txt, special.txt and synDict.txt.
    #[clap(short = 'd', long)]
    data_dir: Option<PathBuf>,

    /// Word-form index file (index.noun).
    #[clap(long)]
    index_in: Option<PathBuf>,

    /// Synset data file (data.noun).
    #[clap(long)]
    data_in: Option<PathBuf>,

    /// Bilingual dictionary file (ev.txt).
    #[clap(long)]
    dictionary_in: Option<PathBuf>,

    /// Special-case file (special.txt).
    #[clap(long)]
    special_in: Option<PathBuf>,

    /// Synonym-group file (synDict.txt).
    #[clap(long)]
    synonym_in: Option<PathBuf>,

    /// File to which the compiled lexicon is output (in zstd).
    #[clap(short = 'o', long)]
    lexicon_out: PathBuf,

    /// Zstandard compression level.
    #[clap(long, default_value_t = 19)]
    level: i32,
}

impl Args {
    /// ソースファイルの種類に対応する個別指定のパスを返す
    fn source_in(&self, kind: SourceKind) -> &Option<PathBuf> {
        match kind {
            SourceKind::Index => &self.index_in,
            SourceKind::Data => &self.data_in,
            SourceKind::Dictionary => &self.dictionary_in,
            SourceKind::SpecialCases => &self.special_in,
            SourceKind::SynonymGroups => &self.synonym_in,
        }
    }
}

/// ビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// 不正な引数の組み合わせ
    ///
    /// `--data-dir`を指定しない場合は、5つのソースファイルすべてを
    /// 個別に指定する必要があります。
    #[error(
        "Invalid argument combination: Either --data-dir or all of \
        --{{index,data,dictionary,special,synonym}}-in must be specified."
    )]
    InvalidSourceArguments,

    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 語彙表構築エラー
    #[error("Lexicon building failed: {0}")]
    Wordnet(#[from] WordnetError),
}

/// コマンドライン引数からソースファイルのパスを決定する
///
/// # エラー
///
/// `--data-dir`がなく、個別の指定が足りない場合、`BuildError::InvalidSourceArguments`を返します。
fn get_source_from_args(args: &Args) -> Result<SourcePaths, BuildError> {
    let overrides = SourceKind::ALL.map(|kind| (kind, args.source_in(kind)));
    let mut paths = match &args.data_dir {
        Some(dir) => SourcePaths::from_dir(dir),
        None if overrides.iter().all(|(_, path)| path.is_some()) => SourcePaths::from_dir(""),
        None => return Err(BuildError::InvalidSourceArguments),
    };
    for (kind, path) in overrides {
        if let Some(path) = path {
            paths = paths.with_path(kind, path);
        }
    }
    Ok(paths)
}

/// ビルドコマンドを実行する
///
/// ソースファイルから語彙表を構築し、zstd圧縮したバイナリ形式で出力します。
///
/// # エラー
///
/// ファイルの読み書きや語彙表の構築に失敗した場合、`BuildError`を返します。
pub fn run(args: Args) -> Result<(), BuildError> {
    let paths = get_source_from_args(&args)?;

    eprintln!("Compiling the lexicon...");
    let lexicon = Lexicon::from_paths(&paths)?;
    log::info!("{}", lexicon.stats());

    eprintln!("Writing the lexicon...");
    let file = File::create(&args.lexicon_out)?;
    let mut encoder = zstd::Encoder::new(file, args.level)?;
    lexicon.write(&mut encoder)?;
    encoder.finish()?;

    eprintln!(
        "Successfully built the lexicon to {}",
        args.lexicon_out.display()
    );
    Ok(())
}
