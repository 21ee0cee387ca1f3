//! エラー型の定義
//!
//! このモジュールは、bilingual-wordnetライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::lexicon::SourceKind;

/// bilingual-wordnet専用のResult型
///
/// エラー型としてデフォルトで[`WordnetError`]を使用します。
pub type Result<T, E = WordnetError> = std::result::Result<T, E>;

/// bilingual-wordnetのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 個々の行の書式不正はエラーにならず、読み込み時に読み飛ばされます。
#[derive(Debug, thiserror::Error)]
pub enum WordnetError {
    /// ソースファイル読み込みエラー
    ///
    /// [`LoadError`]のエラーバリアント。5つのソースファイルのいずれかが
    /// 開けない、または読めない場合に発生します。
    #[error(transparent)]
    Load(LoadError),

    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 無効な状態エラー
    ///
    /// [`InvalidStateError`]のエラーバリアント。
    #[error(transparent)]
    InvalidState(InvalidStateError),

    /// ディレクトリが指定されたエラー
    ///
    /// ファイルが期待される場所にディレクトリが指定された場合に発生します。
    #[error("The path '{0}' is a directory, but a file was expected.")]
    PathIsDirectory(PathBuf),

    /// 標準I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    StdIo(#[from] std::io::Error),
}

impl WordnetError {
    /// ソースファイル読み込みエラーを生成します
    ///
    /// # 引数
    ///
    /// * `kind` - 読み込みに失敗したソースファイルの種類
    /// * `path` - ソースファイルのパス
    /// * `source` - 根本原因のI/Oエラー
    pub(crate) fn load<P>(kind: SourceKind, path: P, source: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Load(LoadError {
            kind,
            path: path.into(),
            source,
        })
    }

    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効な状態エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    /// * `cause` - エラーの原因
    pub(crate) fn invalid_state<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::InvalidState(InvalidStateError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }

    /// このエラーがソースファイルの読み込み失敗によるものかを返します。
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load(_) | Self::PathIsDirectory(_))
    }
}

/// ソースファイルを読み込めない場合に使用されるエラー
#[derive(Debug)]
pub struct LoadError {
    /// ソースファイルの種類
    pub(crate) kind: SourceKind,

    /// ソースファイルのパス
    pub(crate) path: PathBuf,

    /// 根本原因
    pub(crate) source: std::io::Error,
}

impl LoadError {
    /// 読み込みに失敗したソースファイルの種類を返します。
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// 読み込みに失敗したパスを返します。
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// 根本原因のI/Oエラーの種類を返します。
    pub fn io_kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LoadError: {} file '{}': {}",
            self.kind,
            self.path.display(),
            self.source
        )
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// 状態が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidStateError {
    /// エラーメッセージ
    pub(crate) msg: String,

    /// エラーの根本原因
    pub(crate) cause: String,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidStateError: {}: {}", self.msg, self.cause)
    }
}

impl Error for InvalidStateError {}
