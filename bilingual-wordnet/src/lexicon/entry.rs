//! 語彙表のエントリ型
//!
//! 語形(word-form)、シンセット、辞書エントリと、
//! 1回の解決処理の間だけ存在する一時的な語形を定義します。

use rkyv::{Archive, Deserialize, Serialize};

/// 1つの見出し語(lemma)と、それが属するシンセット、訳語行の組。
///
/// 訳語行(meaning line)は、1つの語義に対する目的言語の同義語を
/// カンマ区切りで並べた文字列です。
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct WordForm {
    pub(crate) lemma: String,
    pub(crate) synsets: Vec<String>,
    pub(crate) meanings: Vec<String>,
}

impl WordForm {
    /// 新しい語形を作成します。
    pub fn new(lemma: String, synsets: Vec<String>, meanings: Vec<String>) -> Self {
        Self {
            lemma,
            synsets,
            meanings,
        }
    }

    /// 見出し語を返します。空白は結合文字に置き換えられています。
    #[inline(always)]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// この語形が属するシンセットIDを索引ファイルの順序で返します。
    #[inline(always)]
    pub fn synset_ids(&self) -> &[String] {
        &self.synsets
    }

    /// 訳語行を辞書ファイルの順序で返します。
    #[inline(always)]
    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }
}

/// シンセット: 同義語の集合、定義文(gloss)、上位・下位シンセットへのリンク。
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct Synset {
    pub(crate) id: String,
    pub(crate) words: Vec<String>,
    pub(crate) gloss: String,
    pub(crate) parents: Vec<String>,
    pub(crate) children: Vec<String>,
}

impl Synset {
    /// 新しいシンセットを作成します。
    pub fn new(
        id: String,
        words: Vec<String>,
        gloss: String,
        parents: Vec<String>,
        children: Vec<String>,
    ) -> Self {
        Self {
            id,
            words,
            gloss,
            parents,
            children,
        }
    }

    /// シンセットIDを返します。
    #[inline(always)]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// メンバー語を返します。書式不正な行から読まれた場合は空になり得ます。
    #[inline(always)]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// 定義文を返します。
    #[inline(always)]
    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    /// 上位シンセット(hypernym)のIDを返します。
    #[inline(always)]
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// 下位シンセット(hyponym)のIDを返します。
    #[inline(always)]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// 指定した語がメンバー語に含まれるかどうか。
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// キーと文字列リストの組。辞書・同義語グループ・特例表の保存形式です。
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct TableEntry {
    pub(crate) key: String,
    pub(crate) values: Vec<String>,
}

impl TableEntry {
    pub(crate) fn new(key: String, values: Vec<String>) -> Self {
        Self { key, values }
    }
}

/// 解決処理が扱う語形への参照。
///
/// 語彙表が所有する語形か、1回の解決処理の間だけ生成される一時的な語形の
/// どちらかです。一時的な語形は、定義文中の未登録名詞や同義語展開の結果を表し、
/// 語彙表には決して登録されません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRef<'a> {
    /// 語彙表が所有する語形。
    Lexicon(&'a WordForm),
    /// 解決処理の間だけ存在する語形。
    Transient {
        /// 見出し語
        lemma: String,
        /// 訳語行
        meanings: Vec<String>,
    },
}

impl<'a> FormRef<'a> {
    /// 一時的な語形を作成します。
    pub fn transient(lemma: impl Into<String>, meanings: Vec<String>) -> Self {
        Self::Transient {
            lemma: lemma.into(),
            meanings,
        }
    }

    /// 見出し語を返します。
    pub fn lemma(&self) -> &str {
        match self {
            Self::Lexicon(form) => form.lemma(),
            Self::Transient { lemma, .. } => lemma,
        }
    }

    /// 訳語行を返します。
    pub fn meanings(&self) -> &[String] {
        match self {
            Self::Lexicon(form) => form.meanings(),
            Self::Transient { meanings, .. } => meanings,
        }
    }

    /// 訳語行をカンマで分割した訳語を、出現順に重複を含めて返します。
    ///
    /// 空の訳語は含みません。
    pub fn meaning_words(&self) -> impl Iterator<Item = &str> + '_ {
        split_meaning_lines(self.meanings())
    }
}

/// 訳語行のリストをカンマで分割し、前後の空白を除いた訳語を返します。
pub(crate) fn split_meaning_lines(lines: &[String]) -> impl Iterator<Item = &str> + '_ {
    lines
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meaning_words() {
        let form = WordForm::new(
            "machine".to_string(),
            vec!["01".to_string()],
            vec!["máy, thiết bị".to_string(), "cơ giới,".to_string()],
        );
        let form = FormRef::Lexicon(&form);
        assert_eq!(
            vec!["máy", "thiết bị", "cơ giới"],
            form.meaning_words().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_transient_form() {
        let form = FormRef::transient("perceived", vec!["nhận thức".to_string()]);
        assert_eq!(form.lemma(), "perceived");
        assert_eq!(form.meanings(), &["nhận thức".to_string()]);
    }

    #[test]
    fn test_contains_word() {
        let synset = Synset::new(
            "00001740".to_string(),
            vec!["entity".to_string()],
            String::new(),
            vec![],
            vec![],
        );
        assert!(synset.contains_word("entity"));
        assert!(!synset.contains_word("object"));
    }
}
