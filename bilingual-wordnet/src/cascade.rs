//! シンセットの訳語を決定する規則の連鎖。
//!
//! このモジュールは、優先順位の付いた8つの規則を順に適用して、シンセットに
//! 訳語を割り当てる [`Resolver`] を提供します。
//!
//! 各規則は語彙表とシンセットだけを参照する純粋な関数で、訳語を決定できれば結果を
//! 返し、できなければ辞退します。最初に結果を返した規則で処理が終わります。
//! すべての規則が辞退した場合は、メンバー語をそのまま訳語とする
//! [`CaseLabel::CannotTranslate`] の結果になります。
//!
//! # 規則の順序
//!
//! 1. [`Strategy::SpecialCase`]: 固有名詞の特例
//! 2. [`Strategy::AllWordFormAgreement`]: すべての語形に共通する訳語
//! 3. [`Strategy::SingleValueWordForm`]: 単一値の語形
//! 4. [`Strategy::MaxRepeatThenSimilarity`]: 最多の訳語、または類似度
//! 5. [`Strategy::NearestSynsetAgreement`]: 上位・下位シンセット
//! 6. [`Strategy::GlossNounAgreement`]: 定義文中の名詞
//! 7. [`Strategy::SynonymExpandedNearest`]: 同義語展開した上位・下位シンセット
//! 8. [`Strategy::SynonymExpandedGloss`]: 同義語展開した定義文中の名詞

mod counter;
mod forms;

use crate::cascade::counter::MeaningCounter;
use crate::cascade::forms::{
    common_meanings, gloss_noun_forms, member_forms, neighbor_forms, synonym_expansion,
};
use crate::lexicon::{FormRef, Lexicon, Synset};
use crate::meaning::{CaseLabel, SynsetMeaning};
use crate::similarity::best_meaning_between_groups;

/// 訳語を決定する規則。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// 大文字で始まるメンバー語を持つシンセットに特例表の訳語を使います。
    SpecialCase,
    /// すべてのメンバー語形の訳語に現れる訳語を選びます。
    AllWordFormAgreement,
    /// 訳語行が1つで、1つのシンセットにだけ属する語形の訳語を選びます。
    SingleValueWordForm,
    /// 最も多く現れる訳語を選び、重複がなければ類似度で選びます。
    MaxRepeatThenSimilarity,
    /// 上位・下位シンセットの語形と共通する訳語を選びます。
    NearestSynsetAgreement,
    /// 定義文中の名詞と共通する訳語を選びます。
    GlossNounAgreement,
    /// 同義語展開した上位・下位シンセットの語形との類似度で選びます。
    SynonymExpandedNearest,
    /// 同義語展開した定義文中の名詞との類似度で選びます。
    SynonymExpandedGloss,
}

type Decision = Option<(CaseLabel, Vec<String>)>;

impl Strategy {
    /// 適用順に並べたすべての規則。
    pub const CASCADE: [Strategy; 8] = [
        Strategy::SpecialCase,
        Strategy::AllWordFormAgreement,
        Strategy::SingleValueWordForm,
        Strategy::MaxRepeatThenSimilarity,
        Strategy::NearestSynsetAgreement,
        Strategy::GlossNounAgreement,
        Strategy::SynonymExpandedNearest,
        Strategy::SynonymExpandedGloss,
    ];

    /// 規則を1つのシンセットに適用します。
    ///
    /// # 戻り値
    ///
    /// 訳語を決定できた場合は結果、規則が当てはまらない場合は `None`
    pub fn apply<'a>(self, lexicon: &'a Lexicon, synset: &'a Synset) -> Option<SynsetMeaning<'a>> {
        let decision = match self {
            Strategy::SpecialCase => special_case(lexicon, synset),
            Strategy::AllWordFormAgreement => all_word_form_agreement(lexicon, synset),
            Strategy::SingleValueWordForm => single_value_word_form(lexicon, synset),
            Strategy::MaxRepeatThenSimilarity => max_repeat_then_similarity(lexicon, synset),
            Strategy::NearestSynsetAgreement => nearest_synset_agreement(lexicon, synset),
            Strategy::GlossNounAgreement => gloss_noun_agreement(lexicon, synset),
            Strategy::SynonymExpandedNearest => synonym_expanded_nearest(lexicon, synset),
            Strategy::SynonymExpandedGloss => synonym_expanded_gloss(lexicon, synset),
        };
        decision.map(|(case, meanings)| SynsetMeaning::new(synset, meanings, case))
    }
}

/// メンバー語が大文字で始まるかどうか。
fn has_capitalized_word(synset: &Synset) -> bool {
    synset
        .words()
        .iter()
        .any(|word| word.chars().next().is_some_and(char::is_uppercase))
}

fn non_empty(meanings: Vec<String>) -> Option<Vec<String>> {
    (!meanings.is_empty()).then_some(meanings)
}

fn special_case(lexicon: &Lexicon, synset: &Synset) -> Decision {
    if !has_capitalized_word(synset) {
        return None;
    }
    let meanings = lexicon.special_case_meaning(synset.id());
    if meanings.is_empty() {
        return Some((CaseLabel::Original, synset.words().to_vec()));
    }
    Some((CaseLabel::SpecialCase, meanings.to_vec()))
}

fn all_word_form_agreement(lexicon: &Lexicon, synset: &Synset) -> Decision {
    if synset.words().len() < 2 {
        return None;
    }
    let counter = MeaningCounter::from_forms(&member_forms(lexicon, synset));
    if counter.max() < synset.words().len() {
        return None;
    }
    non_empty(counter.maximal()).map(|meanings| (CaseLabel::Case1, meanings))
}

fn single_value_word_form(lexicon: &Lexicon, synset: &Synset) -> Decision {
    if synset.words().is_empty() {
        return None;
    }
    let single_values: Vec<FormRef> = lexicon
        .word_forms_of_synset(synset)
        .into_iter()
        .flatten()
        .filter(|form| {
            form.meanings().len() == 1 && lexicon.synsets_of_word_form(form).len() == 1
        })
        .map(FormRef::Lexicon)
        .collect();
    match single_values.as_slice() {
        [] => None,
        [form] => Some((CaseLabel::Case2, form.meanings().to_vec())),
        forms => {
            let counter = MeaningCounter::from_forms(forms);
            if counter.max() < 2 {
                return None;
            }
            non_empty(counter.maximal()).map(|meanings| (CaseLabel::Case2, meanings))
        }
    }
}

fn max_repeat_then_similarity(lexicon: &Lexicon, synset: &Synset) -> Decision {
    if synset.words().len() < 2 {
        return None;
    }
    let members = member_forms(lexicon, synset);
    let counter = MeaningCounter::from_forms(&members);
    match counter.max() {
        0 => None,
        1 => {
            if let Some(meanings) = non_empty(best_meaning_between_groups(&members, &members)) {
                return Some((CaseLabel::Case31B, meanings));
            }
            let expanded = synonym_expansion(lexicon, &members);
            non_empty(best_meaning_between_groups(&members, &expanded))
                .map(|meanings| (CaseLabel::Case31B1, meanings))
        }
        _ => non_empty(counter.maximal()).map(|meanings| (CaseLabel::Case31A, meanings)),
    }
}

/// 完全一致を先に試し、なければ類似度で選びます。
fn literal_then_similarity(
    members: &[FormRef],
    others: &[FormRef],
    literal: CaseLabel,
    similarity: CaseLabel,
) -> Decision {
    if let Some(meanings) = non_empty(common_meanings(members, others)) {
        return Some((literal, meanings));
    }
    non_empty(best_meaning_between_groups(members, others)).map(|meanings| (similarity, meanings))
}

fn nearest_synset_agreement(lexicon: &Lexicon, synset: &Synset) -> Decision {
    if synset.words().is_empty() {
        return None;
    }
    literal_then_similarity(
        &member_forms(lexicon, synset),
        &neighbor_forms(lexicon, synset),
        CaseLabel::Case32A,
        CaseLabel::Case32B,
    )
}

fn gloss_noun_agreement(lexicon: &Lexicon, synset: &Synset) -> Decision {
    if synset.words().is_empty() {
        return None;
    }
    literal_then_similarity(
        &member_forms(lexicon, synset),
        &gloss_noun_forms(lexicon, synset),
        CaseLabel::Case33A,
        CaseLabel::Case33B,
    )
}

/// メンバー語形と比較対象の語形を同義語展開し、3通りの組み合わせを順に試します。
fn synonym_expanded(
    lexicon: &Lexicon,
    members: &[FormRef],
    others: &[FormRef],
    label: CaseLabel,
) -> Decision {
    let expanded_members = synonym_expansion(lexicon, members);
    let expanded_others = synonym_expansion(lexicon, others);
    [
        (members, expanded_others.as_slice()),
        (expanded_members.as_slice(), others),
        (expanded_members.as_slice(), expanded_others.as_slice()),
    ]
    .into_iter()
    .map(|(first, second)| best_meaning_between_groups(first, second))
    .find(|meanings| !meanings.is_empty())
    .map(|meanings| (label, meanings))
}

fn synonym_expanded_nearest(lexicon: &Lexicon, synset: &Synset) -> Decision {
    synonym_expanded(
        lexicon,
        &member_forms(lexicon, synset),
        &neighbor_forms(lexicon, synset),
        CaseLabel::Case32B1,
    )
}

fn synonym_expanded_gloss(lexicon: &Lexicon, synset: &Synset) -> Decision {
    synonym_expanded(
        lexicon,
        &member_forms(lexicon, synset),
        &gloss_noun_forms(lexicon, synset),
        CaseLabel::Case33B1,
    )
}

/// シンセットの訳語を決定するリゾルバー。
///
/// 語彙表を共有参照で保持するだけなので、複数のスレッドで同じ語彙表に対して
/// 別々のリゾルバーを使えます。
///
/// # 例
///
/// ```
/// use bilingual_wordnet::{CaseLabel, LexiconBuilder, Resolver};
///
/// let lexicon = LexiconBuilder::from_readers(
///     "machine n 1 0 01\ndevice n 1 0 01\n".as_bytes(),
///     "01 03 n 02 machine 0 device 0 000 | a mechanism".as_bytes(),
///     "@machine\n- máy, thiết bị\n@device\n- máy".as_bytes(),
///     "".as_bytes(),
///     "".as_bytes(),
/// )
/// .unwrap();
///
/// let resolver = Resolver::new(&lexicon);
/// let meaning = resolver.resolve_id("01").unwrap();
/// assert_eq!(meaning.case_label(), CaseLabel::Case1);
/// assert_eq!(meaning.meanings(), &["máy"]);
/// assert_eq!(meaning.to_string(), "01|machine, device|Case 1|máy|a mechanism");
/// ```
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Resolver<'a> {
    /// 新しいリゾルバーを作成します。
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// 参照している語彙表を返します。
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// シンセットの訳語を決定します。
    ///
    /// 規則を [`Strategy::CASCADE`] の順に適用し、最初の結果を返します。
    /// 結果はキャッシュされず、呼び出すたびに計算されます。
    pub fn resolve(&self, synset: &'a Synset) -> SynsetMeaning<'a> {
        for strategy in Strategy::CASCADE {
            if let Some(meaning) = strategy.apply(self.lexicon, synset) {
                log::debug!(
                    "Resolved {} with {:?}: {}",
                    synset.id(),
                    strategy,
                    meaning.case_label()
                );
                return meaning;
            }
        }
        log::debug!("No strategy resolved {}", synset.id());
        SynsetMeaning::new(synset, synset.words().to_vec(), CaseLabel::CannotTranslate)
    }

    /// IDで指定したシンセットの訳語を決定します。
    ///
    /// # 戻り値
    ///
    /// シンセットが存在しない場合は `None`
    pub fn resolve_id(&self, id: &str) -> Option<SynsetMeaning<'a>> {
        self.lexicon.synset(id).map(|synset| self.resolve(synset))
    }

    /// 見出し語が属するすべてのシンセットの訳語を、語形のシンセット順に決定します。
    ///
    /// # 戻り値
    ///
    /// 見出し語が語彙表にない場合は空のベクター
    pub fn resolve_word(&self, lemma: &str) -> Vec<SynsetMeaning<'a>> {
        let Some(form) = self.lexicon.word_form(lemma) else {
            return vec![];
        };
        self.lexicon
            .synsets_of_word_form(form)
            .into_iter()
            .map(|synset| self.resolve(synset))
            .collect()
    }

    /// 読み込まれたすべてのシンセットの訳語を、読み込み順に決定します。
    pub fn resolve_all(&self) -> impl ExactSizeIterator<Item = SynsetMeaning<'a>> + use<'a> {
        let resolver = *self;
        self.lexicon
            .synsets()
            .map(move |synset| resolver.resolve(synset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexicon::LexiconBuilder;

    fn build(index: &str, data: &str, dictionary: &str, special: &str, synonyms: &str) -> Lexicon {
        LexiconBuilder::from_readers(
            index.as_bytes(),
            data.as_bytes(),
            dictionary.as_bytes(),
            special.as_bytes(),
            synonyms.as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_case_1_scenario() {
        let lexicon = build(
            "machine n 1 0 01\ndevice n 1 0 01\n",
            "01 03 n 02 machine 0 device 0 000 | a mechanism",
            "@machine\n- máy, thiết bị\n@device\n- máy",
            "",
            "",
        );
        let synset = lexicon.synset("01").unwrap();
        let meaning = Strategy::AllWordFormAgreement.apply(&lexicon, synset).unwrap();
        assert_eq!(meaning.case_label(), CaseLabel::Case1);
        assert_eq!(meaning.meanings(), &["máy"]);
    }

    #[test]
    fn test_original_scenario() {
        let lexicon = build(
            "",
            "01 03 n 01 Texas 0 000 | a state",
            "",
            "",
            "",
        );
        let meaning = Resolver::new(&lexicon).resolve_id("01").unwrap();
        assert_eq!(meaning.case_label(), CaseLabel::Original);
        assert_eq!(meaning.meanings(), &["Texas"]);
    }

    #[test]
    fn test_special_case_wins_over_case_1() {
        let lexicon = build(
            "Mac n 1 0 01\nmachine n 1 0 01\n",
            "01 03 n 02 Mac 0 machine 0 000 | a computer",
            "@Mac\n- máy\n@machine\n- máy",
            "01|Mac|máy Mac",
            "",
        );
        let synset = lexicon.synset("01").unwrap();
        assert!(Strategy::AllWordFormAgreement.apply(&lexicon, synset).is_some());
        let meaning = Resolver::new(&lexicon).resolve(synset);
        assert_eq!(meaning.case_label(), CaseLabel::SpecialCase);
        assert_eq!(meaning.meanings(), &["máy Mac"]);
    }

    #[test]
    fn test_single_value_word_form() {
        let lexicon = build(
            "machine n 2 0 01 02\ngadget n 1 0 01\n",
            "01 03 n 02 machine 0 gadget 0 000 | a device\n\
             02 03 n 01 machine 0 000 | a system",
            "@machine\n- máy\n- bộ máy\n@gadget\n- đồ dùng",
            "",
            "",
        );
        let meaning = Resolver::new(&lexicon).resolve_id("01").unwrap();
        assert_eq!(meaning.case_label(), CaseLabel::Case2);
        assert_eq!(meaning.meanings(), &["đồ dùng"]);
    }

    #[test]
    fn test_single_value_word_forms_without_agreement_decline() {
        let lexicon = build(
            "engine n 1 0 01\nmotor n 1 0 01\n",
            "01 03 n 02 engine 0 motor 0 000 | a device",
            "@engine\n- động cơ\n@motor\n- mô tơ",
            "",
            "",
        );
        let synset = lexicon.synset("01").unwrap();
        assert!(Strategy::SingleValueWordForm.apply(&lexicon, synset).is_none());
    }

    #[test]
    fn test_max_repeat() {
        let lexicon = build(
            "a n 2 0 01 02\nb n 2 0 01 02\nc n 2 0 01 02\n",
            "01 03 n 03 a 0 b 0 c 0 000 | x",
            "@a\n- xe\n@b\n- xe, tàu\n@c\n- tàu, thuyền",
            "",
            "",
        );
        let synset = lexicon.synset("01").unwrap();
        let meaning = Strategy::MaxRepeatThenSimilarity.apply(&lexicon, synset).unwrap();
        assert_eq!(meaning.case_label(), CaseLabel::Case31A);
        assert_eq!(meaning.meanings(), &["xe", "tàu"]);
    }

    #[test]
    fn test_resolve_word_and_unknown() {
        let lexicon = build(
            "machine n 2 0 01 02\n",
            "01 03 n 01 machine 0 000 | a\n02 03 n 01 machine 0 000 | b",
            "",
            "",
            "",
        );
        let resolver = Resolver::new(&lexicon);
        let ids: Vec<&str> = resolver
            .resolve_word("machine")
            .iter()
            .map(|m| m.synset().id())
            .collect();
        assert_eq!(ids, vec!["01", "02"]);
        assert!(resolver.resolve_word("gizmo").is_empty());
        assert!(resolver.resolve_id("99").is_none());
    }

    #[test]
    fn test_cannot_translate() {
        let lexicon = build("", "01 03 n 01 gizmo 0 000 | a thing", "", "", "");
        let meaning = Resolver::new(&lexicon).resolve_id("01").unwrap();
        assert_eq!(meaning.case_label(), CaseLabel::CannotTranslate);
        assert_eq!(meaning.meanings(), &["gizmo"]);
    }
}
