//! 訳語の類似度計算モジュール。
//!
//! 2つの訳語を空白で区切ったトークンの重なりから、Dice係数に似た類似度を計算し、
//! 2つの語形(または語形のグループ)の間で最も類似度の高い訳語を選択します。

use crate::lexicon::FormRef;
use crate::utils::OrderedSet;

/// 類似度による選択を受け入れる閾値。最大類似度がこの値以下の場合は一致なしとします。
pub const OVERLAP_THRESHOLD: f64 = 0.65;

/// 2つの訳語の類似度を計算します。
///
/// 両方の文字列を空白で分割し、一致するトークンの組の数 `m` を数えて
/// `2m / (|a| + |b|)` を返します。重複するトークンは一致するたびに数えられます。
///
/// # 例
///
/// ```
/// # use bilingual_wordnet::similarity::overlap_score;
/// assert_eq!(overlap_score("máy bay", "máy móc"), 0.5);
/// assert_eq!(overlap_score("cái máy", "máy"), 2.0 / 3.0);
/// ```
pub fn overlap_score(a: &str, b: &str) -> f64 {
    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    let total = tokens_a.len() + tokens_b.len();
    if total == 0 {
        return 0.0;
    }
    let matches = tokens_a
        .iter()
        .map(|ta| tokens_b.iter().filter(|tb| ta == *tb).count())
        .sum::<usize>();
    (2 * matches) as f64 / total as f64
}

/// 2つの語形の間の最良の訳語と、その類似度。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeaningScore {
    /// 最大類似度。一致なしの場合は0です。
    pub score: f64,
    /// 最大類似度を達成した1つ目の語形側の訳語。
    pub meanings: Vec<String>,
}

impl MeaningScore {
    /// 閾値を超える一致がなかったかどうか。
    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
    }
}

/// 2つの語形の訳語の組のうち、最も類似度の高いものを選択します。
///
/// 訳語行をカンマで分割した訳語のすべての組(完全に一致する組を除く)について
/// [`overlap_score`] を計算します。最大値を更新した場合は集合をやり直し、
/// 最大値と等しい場合は1つ目の語形側の訳語を追加します。
///
/// # 戻り値
///
/// 最大類似度が [`OVERLAP_THRESHOLD`] 以下の場合は空の結果(類似度0)を返します。
pub fn best_meaning_between(first: &FormRef, second: &FormRef) -> MeaningScore {
    let second_words: Vec<&str> = second.meaning_words().collect();
    let mut max_score = 0.0;
    let mut best = OrderedSet::new();
    for word1 in first.meaning_words() {
        for &word2 in &second_words {
            if word1 == word2 {
                continue;
            }
            let score = overlap_score(word1, word2);
            if score < max_score {
                continue;
            }
            if score > max_score {
                best = OrderedSet::new();
                max_score = score;
            }
            best.insert(word1);
        }
    }
    if max_score <= OVERLAP_THRESHOLD {
        return MeaningScore::default();
    }
    MeaningScore {
        score: max_score,
        meanings: best.into_vec(),
    }
}

/// 2つの語形グループの間で、最も類似度の高い訳語の和集合を返します。
///
/// 同じ見出し語を表す組を除くすべての組について [`best_meaning_between`] を計算し、
/// 全体の最大類似度を達成したすべての組の訳語を、出現順に重複なく結合します。
///
/// # 戻り値
///
/// 閾値を超える組がない場合は空のベクター
pub fn best_meaning_between_groups(first: &[FormRef], second: &[FormRef]) -> Vec<String> {
    let mut max_score = 0.0;
    let mut best = OrderedSet::new();
    for form1 in first {
        for form2 in second {
            if form1.lemma() == form2.lemma() {
                continue;
            }
            let result = best_meaning_between(form1, form2);
            if result.is_empty() || result.score < max_score {
                continue;
            }
            if result.score > max_score {
                best = OrderedSet::new();
                max_score = result.score;
            }
            best.extend(&result.meanings);
        }
    }
    best.into_vec()
}
