//! 語彙表の読み込み機能に関するテスト
//!
//! ソースファイルのパスからの構築、読み込みエラーの種類、
//! およびZstandard圧縮されたコンパイル済み語彙表の読み込みを検証します。

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use tempfile::{TempDir, tempdir};

use bilingual_wordnet::errors::WordnetError;
use bilingual_wordnet::{CaseLabel, Lexicon, Resolver, SourceKind, SourcePaths};

const SOURCES: [(SourceKind, &str); 5] = [
    (
        SourceKind::Index,
        include_str!("../src/tests/resources/index.noun"),
    ),
    (
        SourceKind::Data,
        include_str!("../src/tests/resources/data.noun"),
    ),
    (
        SourceKind::Dictionary,
        include_str!("../src/tests/resources/ev.txt"),
    ),
    (
        SourceKind::SpecialCases,
        include_str!("../src/tests/resources/special.txt"),
    ),
    (
        SourceKind::SynonymGroups,
        include_str!("../src/tests/resources/synDict.txt"),
    ),
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_sources(dir: &Path) {
    for (kind, text) in SOURCES {
        fs::write(dir.join(kind.file_name()), text).unwrap();
    }
}

fn source_dir() -> TempDir {
    let dir = tempdir().unwrap();
    write_sources(dir.path());
    dir
}

#[test]
fn test_from_paths() {
    init_logger();
    let dir = source_dir();
    let lexicon = Lexicon::from_paths(&SourcePaths::from_dir(dir.path())).unwrap();
    assert_eq!(lexicon.synsets().len(), 17);

    let meaning = Resolver::new(&lexicon).resolve_id("10000003").unwrap();
    assert_eq!(meaning.case_label(), CaseLabel::Case1);
}

#[test]
fn test_overridden_path() {
    init_logger();
    let dir = source_dir();
    let other = tempdir().unwrap();
    let dictionary = other.path().join("dictionary.txt");
    fs::rename(dir.path().join("ev.txt"), &dictionary).unwrap();

    let paths = SourcePaths::from_dir(dir.path()).with_path(SourceKind::Dictionary, &dictionary);
    let lexicon = Lexicon::from_paths(&paths).unwrap();
    assert_eq!(lexicon.meanings_of("gadget"), &["đồ dùng"]);
}

#[test]
fn test_missing_file_reports_its_kind() {
    init_logger();
    for (kind, _) in SOURCES {
        let dir = source_dir();
        fs::remove_file(dir.path().join(kind.file_name())).unwrap();

        let result = Lexicon::from_paths(&SourcePaths::from_dir(dir.path()));
        match result {
            Err(WordnetError::Load(e)) => {
                assert_eq!(e.kind(), kind);
                assert_eq!(e.io_kind(), ErrorKind::NotFound);
                assert_eq!(e.path(), dir.path().join(kind.file_name()));
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("a lexicon was built without the {} file", kind),
        }
    }
}

#[test]
fn test_directory_instead_of_file() {
    init_logger();
    let dir = source_dir();
    let paths = SourcePaths::from_dir(dir.path()).with_path(SourceKind::Data, dir.path());
    let result = Lexicon::from_paths(&paths);
    assert!(matches!(result, Err(WordnetError::PathIsDirectory(_))));
    assert!(result.err().is_some_and(|e| e.is_load_error()));
}

#[test]
fn test_compiled_lexicon_round_trip() {
    init_logger();
    let dir = source_dir();
    let lexicon = Lexicon::from_paths(&SourcePaths::from_dir(dir.path())).unwrap();

    let archive = dir.path().join("lexicon.bin.zst");
    {
        let mut encoder = zstd::Encoder::new(File::create(&archive).unwrap(), 19).unwrap();
        lexicon.write(&mut encoder).unwrap();
        encoder.finish().unwrap();
    }

    let restored = Lexicon::from_zstd(&archive).unwrap();
    assert_eq!(restored.stats(), lexicon.stats());

    let expected: Vec<String> = Resolver::new(&lexicon)
        .resolve_all()
        .map(|m| m.to_string())
        .collect();
    let actual: Vec<String> = Resolver::new(&restored)
        .resolve_all()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_compiled_lexicon_from_directory() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        Lexicon::from_zstd(dir.path()),
        Err(WordnetError::PathIsDirectory(_))
    ));
}
