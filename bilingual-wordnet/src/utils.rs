//! ユーティリティ関数を提供するモジュール
//!
//! ソースファイルの行を区切り文字で分割する処理と、テスト用のマクロが含まれています。

use csv_core::ReadFieldResult;

/// 区切り文字で区切られた1行を解析してフィールドのベクターに分割する
///
/// ダブルクォートは通常の文字として扱われ、区切り文字は常に分割されます。
/// 各フィールドの前後の空白は除去されます。
///
/// # 引数
///
/// * `row` - 解析する1行の文字列
/// * `delimiter` - フィールドの区切り文字(ASCII)
///
/// # 戻り値
///
/// 解析されたフィールドを格納する文字列のベクター
///
/// # 例
///
/// ```
/// # use bilingual_wordnet::utils::parse_delimited_row;
/// let fields = parse_delimited_row("08303490|university|trường đại học, đại học", b'|');
/// assert_eq!(fields, vec!["08303490", "university", "trường đại học, đại học"]);
///
/// let fields = parse_delimited_row("máy, thiết bị ,khí cụ", b',');
/// assert_eq!(fields, vec!["máy", "thiết bị", "khí cụ"]);
/// ```
pub fn parse_delimited_row(row: &str, delimiter: u8) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(false)
        .build();
    let mut bytes = row.as_bytes();
    // A field is never longer than the row, so this buffer cannot overflow.
    let mut output = vec![0; row.len() + 1];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty | ReadFieldResult::End => true,
            ReadFieldResult::Field { record_end } => record_end,
            ReadFieldResult::OutputFull => true,
        };
        fields.push(String::from_utf8_lossy(&output[..nout]).trim().to_string());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    fields
}

/// 文字列の集合に、最初に現れた順序を保ったまま要素を追加するヘルパー
///
/// 結果の再現性を保つため、ハッシュ集合の代わりにこの型で和集合を作ります。
#[derive(Debug, Default, Clone)]
pub(crate) struct OrderedSet {
    seen: hashbrown::HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 未登録の場合のみ追加し、追加したかどうかを返します。
    pub(crate) fn insert(&mut self, item: &str) -> bool {
        if self.seen.contains(item) {
            return false;
        }
        self.seen.insert(item.to_string());
        self.items.push(item.to_string());
        true
    }

    pub(crate) fn extend<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for item in items {
            self.insert(item);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
/// HashMapリテラルを簡潔に記述するためのマクロ
///
/// # 例
///
/// ```ignore
/// let map = hashmap! {
///     "key1" => "value1",
///     "key2" => "value2",
/// };
/// ```
macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

#[cfg(test)]
pub(crate) use hashmap;
