//! 規則が比較する語形グループの収集
//!
//! メンバー語形、上位・下位シンセットの語形、定義文中の名詞、および
//! それらの同義語展開を組み立てます。

use crate::lexicon::{FormRef, Lexicon, Synset};
use crate::utils::OrderedSet;

/// 定義文から名詞候補を取り出す前に取り除く文字。
const GLOSS_STRIP_CHARS: [char; 5] = ['"', ',', ';', '(', ')'];

/// シンセットのメンバー語形。語彙表にないメンバー語は除かれます。
pub(crate) fn member_forms<'a>(lexicon: &'a Lexicon, synset: &Synset) -> Vec<FormRef<'a>> {
    lexicon
        .word_forms_of_synset(synset)
        .into_iter()
        .flatten()
        .map(FormRef::Lexicon)
        .collect()
}

/// 上位・下位シンセットのすべてのメンバー語形。
pub(crate) fn neighbor_forms<'a>(lexicon: &'a Lexicon, synset: &Synset) -> Vec<FormRef<'a>> {
    lexicon
        .nearest_synsets(synset)
        .into_iter()
        .flat_map(|nearest| member_forms(lexicon, nearest))
        .collect()
}

/// 定義文中の名詞候補を語形として返します。
///
/// 語彙表に語形があるか対訳辞書に訳語がある語で、シンセットのメンバー語でないものが
/// 候補になります。語形がない語は、辞書の訳語だけを持つ一時的な語形になります。
pub(crate) fn gloss_noun_forms<'a>(lexicon: &'a Lexicon, synset: &Synset) -> Vec<FormRef<'a>> {
    let gloss: String = synset
        .gloss()
        .chars()
        .filter(|c| !GLOSS_STRIP_CHARS.contains(c))
        .collect();
    gloss
        .split_whitespace()
        .filter(|token| !synset.contains_word(token))
        .filter_map(|token| match lexicon.word_form(token) {
            Some(form) => Some(FormRef::Lexicon(form)),
            None => {
                let meanings = lexicon.meanings_of(token);
                (!meanings.is_empty()).then(|| FormRef::transient(token, meanings.to_vec()))
            }
        })
        .collect()
}

/// 語形グループを同義語グループ表で展開します。
///
/// 各語形について、その訳語それぞれの同義語の和集合を訳語とする一時的な語形を
/// 同じ見出し語で作ります。同義語が1つもない語形は結果に含まれません。
pub(crate) fn synonym_expansion<'a>(lexicon: &Lexicon, forms: &[FormRef<'a>]) -> Vec<FormRef<'a>> {
    forms
        .iter()
        .filter_map(|form| {
            let mut synonyms = OrderedSet::new();
            for word in form.meaning_words() {
                synonyms.extend(lexicon.synonyms_of(word));
            }
            (!synonyms.is_empty()).then(|| FormRef::transient(form.lemma(), synonyms.into_vec()))
        })
        .collect()
}

/// 2つの語形グループの間で、完全に一致する訳語の和集合を返します。
///
/// 同じ見出し語の組は比較しません。
pub(crate) fn common_meanings(first: &[FormRef], second: &[FormRef]) -> Vec<String> {
    let mut common = OrderedSet::new();
    for form1 in first {
        for form2 in second {
            if form1.lemma() == form2.lemma() {
                continue;
            }
            for word1 in form1.meaning_words() {
                if form2.meaning_words().any(|word2| word1 == word2) {
                    common.insert(word1);
                }
            }
        }
    }
    common.into_vec()
}
