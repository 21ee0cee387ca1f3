//! ソースファイルの設定
//!
//! 語彙表を構築するための5つのソースファイルの種類とパスを定義します。

use std::fmt;
use std::path::{Path, PathBuf};

/// 見出し語中の空白を置き換える結合文字。
pub const LEMMA_JOINER: char = '_';

/// 語彙表のソースファイルの種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// 語形の索引ファイル (`index.noun`)
    Index,
    /// シンセットのデータファイル (`data.noun`)
    Data,
    /// 対訳辞書ファイル (`ev.txt`)
    Dictionary,
    /// 特例ファイル (`special.txt`)
    SpecialCases,
    /// 同義語グループファイル (`synDict.txt`)
    SynonymGroups,
}

impl SourceKind {
    /// すべてのソースファイルの種類を読み込み順に並べたもの。
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Dictionary,
        SourceKind::Index,
        SourceKind::Data,
        SourceKind::SpecialCases,
        SourceKind::SynonymGroups,
    ];

    /// 慣例的なファイル名を返します。
    pub const fn file_name(self) -> &'static str {
        match self {
            SourceKind::Index => "index.noun",
            SourceKind::Data => "data.noun",
            SourceKind::Dictionary => "ev.txt",
            SourceKind::SpecialCases => "special.txt",
            SourceKind::SynonymGroups => "synDict.txt",
        }
    }

    /// 表示用の名前を返します。
    pub const fn name(self) -> &'static str {
        match self {
            SourceKind::Index => "index",
            SourceKind::Data => "data",
            SourceKind::Dictionary => "dictionary",
            SourceKind::SpecialCases => "special-case",
            SourceKind::SynonymGroups => "synonym-group",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 5つのソースファイルのパス。
///
/// # 例
///
/// ```
/// # use bilingual_wordnet::lexicon::{SourceKind, SourcePaths};
/// let paths = SourcePaths::from_dir("data").with_path(SourceKind::Dictionary, "dict/ev.txt");
/// assert_eq!(paths.path(SourceKind::Index), std::path::Path::new("data/index.noun"));
/// assert_eq!(paths.path(SourceKind::Dictionary), std::path::Path::new("dict/ev.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    index: PathBuf,
    data: PathBuf,
    dictionary: PathBuf,
    special_cases: PathBuf,
    synonym_groups: PathBuf,
}

impl SourcePaths {
    /// 慣例的なファイル名でディレクトリ内のパスを組み立てます。
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            index: dir.join(SourceKind::Index.file_name()),
            data: dir.join(SourceKind::Data.file_name()),
            dictionary: dir.join(SourceKind::Dictionary.file_name()),
            special_cases: dir.join(SourceKind::SpecialCases.file_name()),
            synonym_groups: dir.join(SourceKind::SynonymGroups.file_name()),
        }
    }

    /// 指定した種類のパスを置き換えます。
    pub fn with_path<P: Into<PathBuf>>(mut self, kind: SourceKind, path: P) -> Self {
        *self.path_mut(kind) = path.into();
        self
    }

    /// 指定した種類のパスを返します。
    pub fn path(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Index => &self.index,
            SourceKind::Data => &self.data,
            SourceKind::Dictionary => &self.dictionary,
            SourceKind::SpecialCases => &self.special_cases,
            SourceKind::SynonymGroups => &self.synonym_groups,
        }
    }

    fn path_mut(&mut self, kind: SourceKind) -> &mut PathBuf {
        match kind {
            SourceKind::Index => &mut self.index,
            SourceKind::Data => &mut self.data,
            SourceKind::Dictionary => &mut self.dictionary,
            SourceKind::SpecialCases => &mut self.special_cases,
            SourceKind::SynonymGroups => &mut self.synonym_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir() {
        let paths = SourcePaths::from_dir("/wn");
        assert_eq!(paths.path(SourceKind::Data), Path::new("/wn/data.noun"));
        assert_eq!(
            paths.path(SourceKind::SynonymGroups),
            Path::new("/wn/synDict.txt")
        );
    }
}
