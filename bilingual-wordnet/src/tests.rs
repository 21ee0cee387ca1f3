//! bilingual-wordnetのテストモジュール群
//!
//! 小さな語彙表を使って、読み込みと規則の連鎖全体の動作を検証します。

mod cascade;

use crate::lexicon::{Lexicon, LexiconBuilder};

/// テスト用の語彙表を構築します。
pub(crate) fn fixture_lexicon() -> Lexicon {
    LexiconBuilder::from_readers(
        include_str!("./tests/resources/index.noun").as_bytes(),
        include_str!("./tests/resources/data.noun").as_bytes(),
        include_str!("./tests/resources/ev.txt").as_bytes(),
        include_str!("./tests/resources/special.txt").as_bytes(),
        include_str!("./tests/resources/synDict.txt").as_bytes(),
    )
    .unwrap()
}
