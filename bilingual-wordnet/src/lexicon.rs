//! 語彙表モジュール。
//!
//! このモジュールは、ソースファイルから構築される読み取り専用の語彙表を管理します。
//! 主な機能として以下を提供します:
//!
//! - 語形、シンセット、対訳辞書、同義語グループ、特例の5つの表
//! - 見出し語やシンセットIDによる参照と、上位・下位シンセットの探索
//! - `rkyv` フォーマットによるコンパイル済み語彙表の書き出しと読み込み
//!
//! # 語彙表の読み込み方法
//!
//! - [`Lexicon::from_paths`]: 5つのソースファイルから構築する
//! - [`LexiconBuilder::from_readers`]: リーダーから構築する
//! - [`Lexicon::read`]: コンパイル済みの語彙表を読み込む
//! - [`Lexicon::from_zstd`]: Zstandard圧縮されたコンパイル済み語彙表を読み込む
//!
//! 読み込み後の語彙表は変更されないため、複数のスレッドから共有参照で
//! 同時に参照できます。

pub mod builder;
pub mod config;
pub mod entry;
pub(crate) mod parser;

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use rkyv::rancor::Error;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize, Serialize};

use crate::errors::{Result, WordnetError};

pub use crate::lexicon::builder::LexiconBuilder;
pub use crate::lexicon::config::{LEMMA_JOINER, SourceKind, SourcePaths};
pub use crate::lexicon::entry::{FormRef, Synset, WordForm};

use crate::lexicon::entry::TableEntry;

/// コンパイル済み語彙表のマジックナンバー。
pub const LEXICON_MAGIC: &[u8] = b"BilingualWordnetLexicon 0.1\n";

const LEXICON_MAGIC_LEN: usize = LEXICON_MAGIC.len();

/// 語彙表の保存形式。
///
/// ソースファイルの順序を保った5つの表です。索引は読み込み時に再構築されます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub(crate) struct LexiconTables {
    pub(crate) word_forms: Vec<WordForm>,
    pub(crate) synsets: Vec<Synset>,
    pub(crate) dictionary: Vec<TableEntry>,
    pub(crate) synonym_groups: Vec<TableEntry>,
    pub(crate) special_cases: Vec<TableEntry>,
}

/// 読み取り専用の語彙表。
///
/// 5つの表をすべて所有します。解決処理はこの語彙表を共有参照でのみ扱います。
pub struct Lexicon {
    tables: LexiconTables,
    word_form_index: HashMap<String, usize>,
    synset_index: HashMap<String, usize>,
    dictionary_index: HashMap<String, usize>,
    synonym_index: HashMap<String, usize>,
    special_case_index: HashMap<String, usize>,
}

fn index_by<T, F>(items: &[T], key: F) -> HashMap<String, usize>
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (key(item).to_string(), i))
        .collect()
}

impl Lexicon {
    pub(crate) fn from_tables(tables: LexiconTables) -> Self {
        Self {
            word_form_index: index_by(&tables.word_forms, WordForm::lemma),
            synset_index: index_by(&tables.synsets, Synset::id),
            dictionary_index: index_by(&tables.dictionary, |e| e.key.as_str()),
            synonym_index: index_by(&tables.synonym_groups, |e| e.key.as_str()),
            special_case_index: index_by(&tables.special_cases, |e| e.key.as_str()),
            tables,
        }
    }

    /// 5つのソースファイルから語彙表を構築します。
    ///
    /// [`LexiconBuilder::from_paths`] の短縮形です。
    ///
    /// # エラー
    ///
    /// いずれかのファイルが読めない場合に [`WordnetError::Load`] を返します。
    pub fn from_paths(paths: &SourcePaths) -> Result<Self> {
        LexiconBuilder::from_paths(paths)
    }

    /// 見出し語から語形を取得します。
    pub fn word_form(&self, lemma: &str) -> Option<&WordForm> {
        self.word_form_index
            .get(lemma)
            .map(|&i| &self.tables.word_forms[i])
    }

    /// IDからシンセットを取得します。
    pub fn synset(&self, id: &str) -> Option<&Synset> {
        self.synset_index.get(id).map(|&i| &self.tables.synsets[i])
    }

    /// 読み込まれたすべてのシンセットを、データファイルでの出現順に返します。
    pub fn synsets(&self) -> impl ExactSizeIterator<Item = &Synset> + '_ {
        self.tables.synsets.iter()
    }

    /// 読み込まれたすべての語形を、索引ファイルでの出現順に返します。
    pub fn word_forms(&self) -> impl ExactSizeIterator<Item = &WordForm> + '_ {
        self.tables.word_forms.iter()
    }

    /// シンセットのメンバー語に対応する語形を、メンバー語の順に返します。
    ///
    /// 空のメンバー語は飛ばします。語形が見つからないメンバー語は `None` になります。
    pub fn word_forms_of_synset(&self, synset: &Synset) -> Vec<Option<&WordForm>> {
        synset
            .words()
            .iter()
            .filter(|word| !word.is_empty())
            .map(|word| self.word_form(word))
            .collect()
    }

    /// 語形が属するシンセットを返します。見つからないIDは除かれます。
    pub fn synsets_of_word_form(&self, form: &WordForm) -> Vec<&Synset> {
        form.synset_ids()
            .iter()
            .filter_map(|id| self.synset(id))
            .collect()
    }

    /// 上位・下位シンセットの和集合を重複なしで返します。
    pub fn nearest_synsets(&self, synset: &Synset) -> Vec<&Synset> {
        let mut seen = HashSet::new();
        synset
            .parents()
            .iter()
            .chain(synset.children())
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.synset(id))
            .collect()
    }

    /// 目的言語の語と同じ同義語グループに属する他の語を返します。
    pub fn synonyms_of(&self, word: &str) -> &[String] {
        lookup(&self.synonym_index, &self.tables.synonym_groups, word)
    }

    /// 見出し語の訳語行を対訳辞書から返します。
    pub fn meanings_of(&self, lemma: &str) -> &[String] {
        lookup(&self.dictionary_index, &self.tables.dictionary, lemma)
    }

    /// シンセットIDに対する特例の訳語を返します。
    pub fn special_case_meaning(&self, synset_id: &str) -> &[String] {
        lookup(&self.special_case_index, &self.tables.special_cases, synset_id)
    }

    /// 各表の件数を返します。
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            word_forms: self.tables.word_forms.len(),
            synsets: self.tables.synsets.len(),
            dictionary_entries: self.tables.dictionary.len(),
            synonym_entries: self.tables.synonym_groups.len(),
            special_cases: self.tables.special_cases.len(),
        }
    }

    /// 語彙表を`rkyv`フォーマットでライターに書き出します。
    ///
    /// 出力の先頭には [`LEXICON_MAGIC`] が付きます。計算された訳語は含まれず、
    /// ソースファイルから読み込んだ表だけが保存されます。
    ///
    /// # エラー
    ///
    /// 書き込みまたはシリアライゼーションに失敗した場合にエラーを返します。
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        let bytes = rkyv::to_bytes::<Error>(&self.tables).map_err(|e| {
            WordnetError::invalid_state("rkyv serialization failed".to_string(), e.to_string())
        })?;
        wtr.write_all(LEXICON_MAGIC)?;
        wtr.write_all(&bytes)?;
        Ok(())
    }

    /// [`Lexicon::write`] で書き出された語彙表をリーダーから読み込みます。
    ///
    /// データは完全に検証されたうえで所有された表に展開され、索引が再構築されます。
    ///
    /// # エラー
    ///
    /// この関数は以下の場合にエラーを返します:
    /// - マジックナンバーが一致しない場合。
    /// - データが途中で切れている、または検証に失敗した場合。
    pub fn read<R: Read>(mut rdr: R) -> Result<Self> {
        let mut magic = [0; LEXICON_MAGIC_LEN];
        if let Err(e) = rdr.read_exact(&mut magic) {
            return Err(match e.kind() {
                ErrorKind::UnexpectedEof => WordnetError::invalid_format(
                    "rdr",
                    "The input is too short to be a compiled lexicon.",
                ),
                _ => e.into(),
            });
        }
        if magic[..] != *LEXICON_MAGIC {
            return Err(WordnetError::invalid_argument(
                "rdr",
                "The magic number of the input lexicon mismatches.",
            ));
        }

        let mut buffer = Vec::new();
        rdr.read_to_end(&mut buffer)?;

        let mut aligned_bytes = AlignedVec::<16>::with_capacity(buffer.len());
        aligned_bytes.extend_from_slice(&buffer);

        let tables = rkyv::from_bytes::<LexiconTables, Error>(&aligned_bytes).map_err(|e| {
            WordnetError::invalid_state(
                "rkyv validation failed. The lexicon file may be corrupted or incompatible."
                    .to_string(),
                e.to_string(),
            )
        })?;
        let lexicon = Self::from_tables(tables);
        log::info!("Loaded compiled lexicon: {}", lexicon.stats());
        Ok(lexicon)
    }

    /// Zstandard圧縮されたコンパイル済み語彙表をファイルから読み込みます。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合、展開に失敗した場合、または内容が無効な場合に
    /// エラーを返します。
    pub fn from_zstd<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(WordnetError::PathIsDirectory(path.to_path_buf()));
        }
        let decoder = zstd::Decoder::new(File::open(path)?)?;
        Self::read(decoder)
    }
}

fn lookup<'a>(index: &HashMap<String, usize>, entries: &'a [TableEntry], key: &str) -> &'a [String] {
    match index.get(key) {
        Some(&i) => &entries[i].values,
        None => &[],
    }
}

/// 語彙表の各表の件数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexiconStats {
    /// 語形の数
    pub word_forms: usize,
    /// シンセットの数
    pub synsets: usize,
    /// 対訳辞書の見出し語の数
    pub dictionary_entries: usize,
    /// 同義語グループに現れる語の数
    pub synonym_entries: usize,
    /// 特例の数
    pub special_cases: usize,
}

impl fmt::Display for LexiconStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} word forms, {} synsets, {} dictionary entries, {} synonym entries, {} special cases",
            self.word_forms,
            self.synsets,
            self.dictionary_entries,
            self.synonym_entries,
            self.special_cases
        )
    }
}
