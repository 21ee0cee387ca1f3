//! bilingual-wordnet 語彙表コンパイラのメインエントリーポイント
//!
//! このモジュールは、5つのソースファイルからコンパイル済み語彙表を構築し、
//! その内容を確認するためのサブコマンドを提供します。

mod build;
mod stats;

use clap::Parser;
use thiserror::Error;

use crate::{build::BuildError, stats::StatsError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// ソースファイルからコンパイル済み語彙表を構築します
    ///
    /// 索引・データファイル、対訳辞書、特例表、同義語グループを読み込み、
    /// zstd圧縮したrkyv形式で出力します。
    Build(build::Args),

    /// コンパイル済み語彙表の各表の件数を表示します
    Stats(stats::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// 語彙表ビルド中のエラー
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// 統計表示中のエラー
    #[error(transparent)]
    StatsError(#[from] StatsError),
}

/// メイン関数
///
/// ロガーを初期化し、コマンドライン引数をパースして、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CompileError> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => Ok(build::run(args)?),
        Command::Stats(args) => Ok(stats::run(args)?),
    }
}
