//! 訳語の出現回数カウンター

use hashbrown::HashMap;

use crate::lexicon::FormRef;
use crate::utils::OrderedSet;

/// 語形の訳語に各訳語が何回現れるかを数えます。
///
/// 1つの語形の中で同じ訳語が複数回現れても1回として数えます。
/// 空の訳語は数えません。最初に現れた順序を保持します。
#[derive(Debug, Default)]
pub(crate) struct MeaningCounter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl MeaningCounter {
    pub(crate) fn from_forms<'a, 'f, I>(forms: I) -> Self
    where
        'a: 'f,
        I: IntoIterator<Item = &'f FormRef<'a>>,
    {
        let mut counter = Self::default();
        for form in forms {
            let mut words = OrderedSet::new();
            for word in form.meaning_words() {
                words.insert(word);
            }
            for word in words.into_vec() {
                match counter.counts.get_mut(&word) {
                    Some(count) => *count += 1,
                    None => {
                        counter.counts.insert(word.clone(), 1);
                        counter.order.push(word);
                    }
                }
            }
        }
        counter
    }

    /// 最大の出現回数。訳語が1つもなければ0です。
    pub(crate) fn max(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// 最大の出現回数を持つすべての訳語を、最初に現れた順に返します。
    pub(crate) fn maximal(&self) -> Vec<String> {
        let max = self.max();
        self.order
            .iter()
            .filter(|word| self.counts.get(*word) == Some(&max))
            .cloned()
            .collect()
    }
}
