//! 語彙表構築のためのビルダー
//!
//! このモジュールは、5つのソースファイルから [`Lexicon`] を構築するための
//! ビルダーを提供します。

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;

use crate::errors::{Result, WordnetError};
use crate::lexicon::config::{SourceKind, SourcePaths};
use crate::lexicon::entry::{Synset, TableEntry, WordForm};
use crate::lexicon::parser;
use crate::lexicon::{Lexicon, LexiconTables};

/// ソースファイルから [`Lexicon`] を構築するビルダー
pub struct LexiconBuilder {}

impl LexiconBuilder {
    /// 5つのソースファイルのリーダーから新しい [`Lexicon`] を作成します。
    ///
    /// 書式不正な行は読み飛ばされます。UTF-8として不正なバイト列は置換文字に
    /// 置き換えられます。
    ///
    /// # 引数
    ///
    ///  - `index_rdr`: 索引ファイル `index.noun` のリーダー
    ///  - `data_rdr`: データファイル `data.noun` のリーダー
    ///  - `dictionary_rdr`: 対訳辞書ファイル `ev.txt` のリーダー
    ///  - `special_rdr`: 特例ファイル `special.txt` のリーダー
    ///  - `synonym_rdr`: 同義語グループファイル `synDict.txt` のリーダー
    ///
    /// # エラー
    ///
    /// いずれかのリーダーからの読み込みに失敗した場合に [`WordnetError`] を返します。
    pub fn from_readers<I, D, M, S, Y>(
        index_rdr: I,
        data_rdr: D,
        dictionary_rdr: M,
        special_rdr: S,
        synonym_rdr: Y,
    ) -> Result<Lexicon>
    where
        I: Read,
        D: Read,
        M: Read,
        S: Read,
        Y: Read,
    {
        let dictionary = read_text(dictionary_rdr)?;
        let index = read_text(index_rdr)?;
        let data = read_text(data_rdr)?;
        let special = read_text(special_rdr)?;
        let synonyms = read_text(synonym_rdr)?;
        Ok(Self::build(&index, &data, &dictionary, &special, &synonyms))
    }

    /// ソースファイルのパスから新しい [`Lexicon`] を作成します。
    ///
    /// # エラー
    ///
    /// いずれかのファイルを開けない、または読めない場合、そのファイルの種類を
    /// 含む [`WordnetError::Load`] を返します。部分的に構築された語彙表は返しません。
    pub fn from_paths(paths: &SourcePaths) -> Result<Lexicon> {
        let mut texts = HashMap::new();
        for kind in SourceKind::ALL {
            texts.insert(kind, read_source(kind, paths.path(kind))?);
        }
        let text = |kind| texts.get(&kind).map_or("", String::as_str);
        Ok(Self::build(
            text(SourceKind::Index),
            text(SourceKind::Data),
            text(SourceKind::Dictionary),
            text(SourceKind::SpecialCases),
            text(SourceKind::SynonymGroups),
        ))
    }

    /// 解析済みのテキストから語彙表を組み立てます。
    pub(crate) fn build(
        index: &str,
        data: &str,
        dictionary: &str,
        special: &str,
        synonyms: &str,
    ) -> Lexicon {
        let dictionary = parser::parse_dictionary(dictionary);
        let meanings: HashMap<&str, &[String]> = dictionary
            .iter()
            .map(|entry| (entry.key.as_str(), entry.values.as_slice()))
            .collect();

        let mut word_forms: Vec<WordForm> = vec![];
        let mut word_form_pos: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0;
        for line in index.lines() {
            let Some((lemma, synsets)) = parser::parse_index_line(line) else {
                skipped += 1;
                log::debug!("Skipped an index line: {:?}", line);
                continue;
            };
            let form_meanings = meanings.get(lemma.as_str()).map_or_else(Vec::new, |m| m.to_vec());
            let form = WordForm::new(lemma, synsets, form_meanings);
            upsert(&mut word_forms, &mut word_form_pos, form.lemma.clone(), form);
        }
        // `meanings` borrows `dictionary`, which is moved into the tables below.
        drop(meanings);

        let mut synsets: Vec<Synset> = vec![];
        let mut synset_pos: HashMap<String, usize> = HashMap::new();
        for line in data.lines() {
            let Some(synset) = parser::parse_data_line(line) else {
                skipped += 1;
                log::debug!("Skipped a data line: {:?}", line);
                continue;
            };
            upsert(&mut synsets, &mut synset_pos, synset.id.clone(), synset);
        }

        let mut special_cases: Vec<TableEntry> = vec![];
        let mut special_pos: HashMap<String, usize> = HashMap::new();
        for line in special.lines() {
            let Some(entry) = parser::parse_special_case_line(line) else {
                skipped += 1;
                log::debug!("Skipped a special-case line: {:?}", line);
                continue;
            };
            upsert(&mut special_cases, &mut special_pos, entry.key.clone(), entry);
        }

        let mut synonym_groups: Vec<TableEntry> = vec![];
        let mut synonym_pos: HashMap<String, usize> = HashMap::new();
        for line in synonyms.lines() {
            for (word, others) in parser::parse_synonym_line(line) {
                match synonym_pos.get(&word) {
                    Some(&idx) => {
                        let values = &mut synonym_groups[idx].values;
                        for other in others {
                            if !values.contains(&other) {
                                values.push(other);
                            }
                        }
                    }
                    None => {
                        synonym_pos.insert(word.clone(), synonym_groups.len());
                        synonym_groups.push(TableEntry::new(word, others));
                    }
                }
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {} malformed source lines", skipped);
        }

        let lexicon = Lexicon::from_tables(LexiconTables {
            word_forms,
            synsets,
            dictionary,
            synonym_groups,
            special_cases,
        });
        log::info!("Loaded lexicon: {}", lexicon.stats());
        lexicon
    }
}

/// 同じキーのエントリがあれば置き換え、なければ末尾に追加します。
fn upsert<T>(items: &mut Vec<T>, positions: &mut HashMap<String, usize>, key: String, item: T) {
    match positions.get(&key) {
        Some(&idx) => {
            log::warn!("Duplicate identifier {:?}; the later entry wins", key);
            items[idx] = item;
        }
        None => {
            positions.insert(key, items.len());
            items.push(item);
        }
    }
}

/// リーダーの内容をすべて読み込み、文字列に変換します。
fn read_text<R: Read>(mut rdr: R) -> Result<String> {
    let mut buf = vec![];
    rdr.read_to_end(&mut buf)?;
    match String::from_utf8(buf) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!(
                "Invalid UTF-8 at byte {}; replaced invalid sequences with U+FFFD",
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// ソースファイルを読み込みます。失敗した場合はファイルの種類付きのエラーを返します。
fn read_source(kind: SourceKind, path: &Path) -> Result<String> {
    if path.is_dir() {
        return Err(WordnetError::PathIsDirectory(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| WordnetError::load(kind, path, e))?;
    read_text(file).map_err(|e| match e {
        WordnetError::StdIo(e) => WordnetError::load(kind, path, e),
        e => e,
    })
}
