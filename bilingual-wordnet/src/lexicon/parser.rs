//! ソースファイルの行パーサー
//!
//! 各関数は1行(辞書ファイルのみファイル全体)を解析します。
//! 書式不正な行はエラーにせず `None` を返し、呼び出し側で読み飛ばします。

use hashbrown::HashMap;

use crate::lexicon::config::LEMMA_JOINER;
use crate::lexicon::entry::{Synset, TableEntry};
use crate::utils::parse_delimited_row;

/// WordNetの品詞記号。
const POS_TAGS: [&str; 5] = ["n", "v", "a", "s", "r"];

/// インデントで始まる継続行、または空行かどうか。
fn is_skippable(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(char::is_whitespace)
}

/// 索引ファイルの1行を `(見出し語, シンセットIDのリスト)` に解析します。
///
/// 行は空白区切りで、先頭が見出し語、品詞記号の直後がシンセット数 `n`、
/// 末尾の `n` 個のフィールドがシンセットIDです。品詞記号が2番目にあれば
/// シンセット数は3番目のフィールドになります。途中の可変長部分は読み飛ばされます。
pub(crate) fn parse_index_line(line: &str) -> Option<(String, Vec<String>)> {
    if is_skippable(line) {
        return None;
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }
    let count_idx = fields[1..3]
        .iter()
        .position(|f| POS_TAGS.contains(f))
        .map_or(2, |i| i + 2);
    let count: usize = fields.get(count_idx)?.parse().ok()?;
    if count > fields.len() - (count_idx + 1) {
        return None;
    }
    let synsets = fields[fields.len() - count..]
        .iter()
        .map(|id| id.to_string())
        .collect();
    Some((fields[0].to_string(), synsets))
}

/// データファイルの1行をシンセットに解析します。
///
/// 4番目のフィールドは16進数の語数 `w` で、それに続く `2w` 個のフィールドは
/// 語と補助IDが交互に並びます。`@` は下位、`~` は上位シンセットへのポインタで、
/// 直後のトークンが関連シンセットのIDです。定義文は最初の `|` 以降です。
pub(crate) fn parse_data_line(line: &str) -> Option<Synset> {
    if is_skippable(line) {
        return None;
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }
    let word_count = usize::from_str_radix(fields[3], 16).ok()?;
    let words = fields
        .iter()
        .skip(4)
        .step_by(2)
        .take(word_count)
        .map(|w| w.to_string())
        .collect();

    let mut parents = vec![];
    let mut children = vec![];
    let mut tokens = fields.iter();
    while let Some(&token) = tokens.next() {
        let target = match token {
            "@" => &mut children,
            "~" => &mut parents,
            _ => continue,
        };
        if let Some(&id) = tokens.next() {
            target.push(id.to_string());
        }
    }

    let gloss = line
        .split_once('|')
        .map(|(_, gloss)| gloss.trim().to_string())
        .unwrap_or_default();

    Some(Synset::new(
        fields[0].to_string(),
        words,
        gloss,
        parents,
        children,
    ))
}

/// 見出し語の空白を結合文字に置き換えます。
pub(crate) fn join_lemma(word: &str) -> String {
    word.trim().replace(' ', &LEMMA_JOINER.to_string())
}

/// 対訳辞書ファイル全体を解析します。
///
/// `@` で始まる行が新しい見出し語を開始し、`-` で始まる行がその見出し語に
/// 訳語行を追加します。それ以外の行は無視されます。同じ見出し語が再度現れた
/// 場合、その訳語リストは空からやり直されます。
pub(crate) fn parse_dictionary(text: &str) -> Vec<TableEntry> {
    let mut entries: Vec<TableEntry> = vec![];
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;
    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(word) = trimmed.strip_prefix('@') {
            let word = join_lemma(&word.replace('@', ""));
            let idx = match positions.get(&word) {
                Some(&idx) => {
                    entries[idx].values.clear();
                    idx
                }
                None => {
                    positions.insert(word.clone(), entries.len());
                    entries.push(TableEntry::new(word, vec![]));
                    entries.len() - 1
                }
            };
            current = Some(idx);
            continue;
        }
        if let Some(meaning) = line.strip_prefix('-') {
            let meaning = meaning.trim();
            match current {
                Some(idx) if !meaning.is_empty() => {
                    entries[idx].values.push(meaning.to_string());
                }
                Some(_) => {}
                None => log::debug!("Skipped a meaning line without a headword: {:?}", line),
            }
        }
    }
    entries
}

/// 特例ファイルの1行 `シンセットID|未使用|訳語,訳語,...` を解析します。
pub(crate) fn parse_special_case_line(line: &str) -> Option<TableEntry> {
    if line.trim().is_empty() {
        return None;
    }
    let fields = parse_delimited_row(line, b'|');
    if fields.len() < 3 || fields[0].is_empty() {
        return None;
    }
    let meanings = parse_delimited_row(&fields[2], b',')
        .into_iter()
        .filter(|m| !m.is_empty())
        .collect();
    Some(TableEntry::new(fields[0].clone(), meanings))
}

/// 同義語グループファイルの1行を解析します。
///
/// 行中の各語について、その語と同じ行の他のすべての語の組を返します。
pub(crate) fn parse_synonym_line(line: &str) -> Vec<(String, Vec<String>)> {
    let words: Vec<String> = parse_delimited_row(line, b',')
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect();
    words
        .iter()
        .map(|word| {
            let others = words.iter().filter(|w| *w != word).cloned().collect();
            (word.clone(), others)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_line_with_pos_in_third_column() {
        let (lemma, synsets) = parse_index_line("dog 0 n 2 2 01 02").unwrap();
        assert_eq!(lemma, "dog");
        assert_eq!(synsets, vec!["01", "02"]);
    }

    #[test]
    fn test_index_line_wordnet_layout() {
        let (lemma, synsets) =
            parse_index_line("dog n 2 3 @ ~ #m 2 1 02084071 10114209  ").unwrap();
        assert_eq!(lemma, "dog");
        assert_eq!(synsets, vec!["02084071", "10114209"]);
    }

    #[test]
    fn test_index_line_malformed() {
        assert!(parse_index_line("  1 This software and database").is_none());
        assert!(parse_index_line("dog n").is_none());
        assert!(parse_index_line("dog n x 01").is_none());
        assert!(parse_index_line("dog n 5 01 02").is_none());
        assert!(parse_index_line("").is_none());
    }

    #[test]
    fn test_data_line() {
        let synset = parse_data_line(
            "00001740 03 n 02 entity 0 object 0 001 @ 00001741 | that which is perceived",
        )
        .unwrap();
        assert_eq!(synset.id(), "00001740");
        assert_eq!(synset.words(), &["entity", "object"]);
        assert_eq!(synset.children(), &["00001741"]);
        assert!(synset.parents().is_empty());
        assert_eq!(synset.gloss(), "that which is perceived");
    }

    #[test]
    fn test_data_line_hex_word_count() {
        let line = format!(
            "00000001 03 n 0a {} 000 | many words",
            (0..10).map(|i| format!("w{} 0", i)).collect::<Vec<_>>().join(" ")
        );
        let synset = parse_data_line(&line).unwrap();
        assert_eq!(synset.words().len(), 10);
        assert_eq!(synset.words()[9], "w9");
    }

    #[test]
    fn test_data_line_parents_and_missing_gloss() {
        let synset = parse_data_line("00000002 03 n 01 thing 0 002 ~ 00000003 @ 00000004").unwrap();
        assert_eq!(synset.parents(), &["00000003"]);
        assert_eq!(synset.children(), &["00000004"]);
        assert_eq!(synset.gloss(), "");
    }

    #[test]
    fn test_data_line_malformed() {
        assert!(parse_data_line("  1 This software").is_none());
        assert!(parse_data_line("00000002 03 n").is_none());
        assert!(parse_data_line("00000002 03 n zz thing 0 | x").is_none());
    }

    #[test]
    fn test_dictionary() {
        let text = "- orphan\n@ahead of time\n* danh từ\n- trước thời hạn\n-   \n@machine\n- máy, thiết bị\n- cơ giới";
        let entries = parse_dictionary(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "ahead_of_time");
        assert_eq!(entries[0].values, vec!["trước thời hạn"]);
        assert_eq!(entries[1].key, "machine");
        assert_eq!(entries[1].values, vec!["máy, thiết bị", "cơ giới"]);
    }

    #[test]
    fn test_dictionary_repeated_headword() {
        let entries = parse_dictionary("@dog\n- chó\n@dog\n- con chó");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].values, vec!["con chó"]);
    }

    #[test]
    fn test_special_case_line() {
        let entry = parse_special_case_line("09044862|Texas|bang Texas, Texas").unwrap();
        assert_eq!(entry.key, "09044862");
        assert_eq!(entry.values, vec!["bang Texas", "Texas"]);
        assert!(parse_special_case_line("09044862|Texas").is_none());

        let entry = parse_special_case_line("01|x|\"Big\" Apple, Foo").unwrap();
        assert_eq!(entry.values, vec!["\"Big\" Apple", "Foo"]);
    }

    #[test]
    fn test_synonym_line() {
        let groups = parse_synonym_line("máy,máy móc, cơ khí");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], ("máy".to_string(), vec!["máy móc".to_string(), "cơ khí".to_string()]));
        assert_eq!(groups[2], ("cơ khí".to_string(), vec!["máy".to_string(), "máy móc".to_string()]));
    }

    #[test]
    fn test_synonym_line_splits_inside_quotes() {
        let groups = parse_synonym_line("\"máy, móc\",thiết bị");
        let words: Vec<&str> = groups.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["\"máy", "móc\"", "thiết bị"]);
    }
}
