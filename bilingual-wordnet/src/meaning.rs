//! 解決結果の型。
//!
//! シンセットに割り当てられた訳語と、それを生成した規則を表すラベル、
//! および外部に出力するための5フィールドのレコードを定義します。

use std::fmt;
use std::str::FromStr;

use crate::cascade::Strategy;
use crate::errors::{Result, WordnetError};
use crate::lexicon::Synset;

/// リストを文字列にするときの区切り。
pub const LIST_SEPARATOR: &str = ", ";

/// 出力レコードのフィールド区切り。
pub const FIELD_SEPARATOR: char = '|';

/// 訳語を生成した規則を表すラベル。
///
/// 規則の中には複数の段階を持つものがあり、どの段階で訳語が決まったかも区別されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseLabel {
    /// 特例表の訳語
    SpecialCase,
    /// 特例だが訳語がないため、元の語をそのまま使用
    Original,
    /// すべての語形に共通する訳語
    Case1,
    /// 単一値の語形の訳語
    Case2,
    /// 最も多く現れる訳語
    Case31A,
    /// メンバー語形同士の類似度
    Case31B,
    /// 同義語展開したメンバー語形との類似度
    Case31B1,
    /// 上位・下位シンセットとの共通訳語
    Case32A,
    /// 上位・下位シンセットとの類似度
    Case32B,
    /// 定義文中の名詞との共通訳語
    Case33A,
    /// 定義文中の名詞との類似度
    Case33B,
    /// 同義語展開した上位・下位シンセットとの類似度
    Case32B1,
    /// 同義語展開した定義文中の名詞との類似度
    Case33B1,
    /// どの規則でも訳語を決められなかった
    CannotTranslate,
}

impl CaseLabel {
    /// すべてのラベル。
    pub const ALL: [CaseLabel; 14] = [
        CaseLabel::SpecialCase,
        CaseLabel::Original,
        CaseLabel::Case1,
        CaseLabel::Case2,
        CaseLabel::Case31A,
        CaseLabel::Case31B,
        CaseLabel::Case31B1,
        CaseLabel::Case32A,
        CaseLabel::Case32B,
        CaseLabel::Case33A,
        CaseLabel::Case33B,
        CaseLabel::Case32B1,
        CaseLabel::Case33B1,
        CaseLabel::CannotTranslate,
    ];

    /// 出力に使われるラベル文字列を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            CaseLabel::SpecialCase => "Special case",
            CaseLabel::Original => "Original",
            CaseLabel::Case1 => "Case 1",
            CaseLabel::Case2 => "Case 2",
            CaseLabel::Case31A => "Case 3.1A",
            CaseLabel::Case31B => "3.1B",
            CaseLabel::Case31B1 => "3.1.B1",
            CaseLabel::Case32A => "3.2A",
            CaseLabel::Case32B => "3.2B",
            CaseLabel::Case33A => "Case 3.3A",
            CaseLabel::Case33B => "Case 3.3B",
            CaseLabel::Case32B1 => "Case 3.2.B1",
            CaseLabel::Case33B1 => "Case 3.3.B1",
            CaseLabel::CannotTranslate => "Cannot translate",
        }
    }

    /// このラベルを生成する規則を返します。
    ///
    /// # 戻り値
    ///
    /// 規則のラベルであればその規則、[`CaseLabel::CannotTranslate`] であれば `None`
    pub const fn strategy(self) -> Option<Strategy> {
        match self {
            CaseLabel::SpecialCase | CaseLabel::Original => Some(Strategy::SpecialCase),
            CaseLabel::Case1 => Some(Strategy::AllWordFormAgreement),
            CaseLabel::Case2 => Some(Strategy::SingleValueWordForm),
            CaseLabel::Case31A | CaseLabel::Case31B | CaseLabel::Case31B1 => {
                Some(Strategy::MaxRepeatThenSimilarity)
            }
            CaseLabel::Case32A | CaseLabel::Case32B => Some(Strategy::NearestSynsetAgreement),
            CaseLabel::Case33A | CaseLabel::Case33B => Some(Strategy::GlossNounAgreement),
            CaseLabel::Case32B1 => Some(Strategy::SynonymExpandedNearest),
            CaseLabel::Case33B1 => Some(Strategy::SynonymExpandedGloss),
            CaseLabel::CannotTranslate => None,
        }
    }
}

impl fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseLabel {
    type Err = WordnetError;

    fn from_str(s: &str) -> Result<Self> {
        CaseLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| {
                WordnetError::invalid_argument("s", format!("Unknown case label: {:?}", s))
            })
    }
}

/// シンセットの解決結果。
///
/// 解決のたびに新しく生成され、キャッシュされません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetMeaning<'a> {
    synset: &'a Synset,
    meanings: Vec<String>,
    case: CaseLabel,
}

impl<'a> SynsetMeaning<'a> {
    pub(crate) fn new(synset: &'a Synset, meanings: Vec<String>, case: CaseLabel) -> Self {
        Self {
            synset,
            meanings,
            case,
        }
    }

    /// 解決されたシンセットを返します。
    #[inline(always)]
    pub fn synset(&self) -> &'a Synset {
        self.synset
    }

    /// 選択された訳語を返します。
    #[inline(always)]
    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    /// 訳語を生成した規則のラベルを返します。
    #[inline(always)]
    pub fn case_label(&self) -> CaseLabel {
        self.case
    }

    /// 所有された5フィールドのレコードに変換します。
    pub fn to_record(&self) -> MeaningRecord {
        MeaningRecord {
            synset_id: self.synset.id().to_string(),
            words: self.synset.words().to_vec(),
            case_label: self.case,
            meanings: self.meanings.clone(),
            gloss: self.synset.gloss().to_string(),
        }
    }
}

impl fmt::Display for SynsetMeaning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_record(
            f,
            self.synset.id(),
            self.synset.words(),
            self.case,
            &self.meanings,
            self.synset.gloss(),
        )
    }
}

fn write_record(
    f: &mut fmt::Formatter,
    synset_id: &str,
    words: &[String],
    case: CaseLabel,
    meanings: &[String],
    gloss: &str,
) -> fmt::Result {
    write!(
        f,
        "{id}{sep}{words}{sep}{case}{sep}{meanings}{sep}{gloss}",
        id = synset_id,
        words = words.join(LIST_SEPARATOR),
        meanings = meanings.join(LIST_SEPARATOR),
        sep = FIELD_SEPARATOR,
    )
}

/// 解決結果を出力するための5フィールドのレコード。
///
/// 文字列表現は `ID|語, 語|ラベル|訳語, 訳語|定義文` です。
///
/// # 例
///
/// ```
/// # use bilingual_wordnet::meaning::{CaseLabel, MeaningRecord};
/// let record: MeaningRecord = "01|machine, engine|Case 1|máy|a device | tool".parse().unwrap();
/// assert_eq!(record.words, vec!["machine", "engine"]);
/// assert_eq!(record.case_label, CaseLabel::Case1);
/// assert_eq!(record.gloss, "a device | tool");
/// assert_eq!(record.to_string(), "01|machine, engine|Case 1|máy|a device | tool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningRecord {
    /// シンセットID
    pub synset_id: String,
    /// メンバー語
    pub words: Vec<String>,
    /// 規則のラベル
    pub case_label: CaseLabel,
    /// 選択された訳語
    pub meanings: Vec<String>,
    /// 定義文
    pub gloss: String,
}

fn split_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return vec![];
    }
    field.split(LIST_SEPARATOR).map(|s| s.to_string()).collect()
}

impl fmt::Display for MeaningRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_record(
            f,
            &self.synset_id,
            &self.words,
            self.case_label,
            &self.meanings,
            &self.gloss,
        )
    }
}

impl FromStr for MeaningRecord {
    type Err = WordnetError;

    /// 最初の4つの `|` でフィールドを分け、残りをすべて定義文とします。
    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.splitn(5, FIELD_SEPARATOR).collect();
        if fields.len() != 5 {
            return Err(WordnetError::invalid_format(
                "line",
                format!("A meaning record needs 5 fields, but got {}", fields.len()),
            ));
        }
        Ok(Self {
            synset_id: fields[0].to_string(),
            words: split_list(fields[1]),
            case_label: fields[2].parse()?,
            meanings: split_list(fields[3]),
            gloss: fields[4].to_string(),
        })
    }
}
