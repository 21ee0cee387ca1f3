//! # bilingual-wordnet
//!
//! 英語WordNetのシンセットに、対訳辞書から目的言語の訳語を割り当てる
//! 訳語選択エンジンです。
//!
//! ## 概要
//!
//! このライブラリは新しい訳文を生成するのではなく、対訳辞書にあらかじめ用意された
//! 候補の中から、シンセットに最もふさわしい訳語を選択します。選択には、
//! 訳語の共起回数、上位・下位シンセット、定義文の解析、および訳語の文字列類似度を
//! 組み合わせた8つの規則を、優先順位の順に適用します。
//!
//! ## 主な機能
//!
//! - **語彙表の構築**: WordNetの索引・データファイル、対訳辞書、特例表、同義語グループから構築
//! - **規則の連鎖**: 最初に訳語を決定できた規則の結果を採用
//! - **類似度による選択**: Dice係数に似たトークンの重なりによる訳語の順位付け
//! - **コンパイル済み語彙表**: rkyvフォーマットによる語彙表の保存と高速な読み込み
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bilingual_wordnet::{CaseLabel, LexiconBuilder, Resolver};
//!
//! let index = "machine n 1 0 03699975\nengine n 1 0 03699975\n";
//! let data = "03699975 06 n 02 machine 0 engine 0 000 | any mechanical device";
//! let dictionary = "@machine\n- máy, thiết bị\n@engine\n- máy, động cơ";
//!
//! let lexicon = LexiconBuilder::from_readers(
//!     index.as_bytes(),
//!     data.as_bytes(),
//!     dictionary.as_bytes(),
//!     "".as_bytes(),
//!     "".as_bytes(),
//! )?;
//!
//! let resolver = Resolver::new(&lexicon);
//! let meaning = resolver.resolve_id("03699975").unwrap();
//! assert_eq!(meaning.case_label(), CaseLabel::Case1);
//! assert_eq!(meaning.meanings(), &["máy"]);
//! assert_eq!(
//!     meaning.to_string(),
//!     "03699975|machine, engine|Case 1|máy|any mechanical device"
//! );
//! # Ok(())
//! # }
//! ```

/// 訳語を決定する規則の連鎖
pub mod cascade;

/// エラー型の定義
pub mod errors;

/// 語彙表とそのビルダー
pub mod lexicon;

/// 解決結果の型
pub mod meaning;

/// 訳語の類似度計算
pub mod similarity;

/// 内部ユーティリティ関数
pub mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use cascade::{Resolver, Strategy};
pub use lexicon::{Lexicon, LexiconBuilder, SourceKind, SourcePaths};
pub use meaning::{CaseLabel, MeaningRecord, SynsetMeaning};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
