use super::fixture_lexicon;

use crate::cascade::Resolver;
use crate::meaning::{CaseLabel, MeaningRecord};
use crate::utils::hashmap;

#[test]
fn test_fixture_resolutions() {
    let lexicon = fixture_lexicon();
    let resolver = Resolver::new(&lexicon);

    let expected = hashmap! {
        "10000001" => (CaseLabel::SpecialCase, vec!["bang Texas", "Texas"]),
        "10000002" => (CaseLabel::Original, vec!["Hanoi"]),
        "10000003" => (CaseLabel::Case1, vec!["máy"]),
        "10000004" => (CaseLabel::Case2, vec!["đồ dùng"]),
        "10000005" => (CaseLabel::Case31A, vec!["xe hơi", "ô tô"]),
        "10000006" => (CaseLabel::Case31B, vec!["mô tơ", "động cơ", "động cơ điện", "mô tơ điện"]),
        "10000007" => (CaseLabel::Case31B1, vec!["thuyền"]),
        "10000008" => (CaseLabel::Case32A, vec!["cún"]),
        "10000009" => (CaseLabel::Case32A, vec!["cún"]),
        "10000010" => (CaseLabel::Case32B, vec!["mèo con"]),
        "10000011" => (CaseLabel::Case32B, vec!["con mèo"]),
        "10000012" => (CaseLabel::Case33A, vec!["chó"]),
        "10000013" => (CaseLabel::Case33B, vec!["mèo con"]),
        "10000014" => (CaseLabel::Case32B1, vec!["bình"]),
        "10000015" => (CaseLabel::Case32B1, vec!["bình lớn"]),
        "10000016" => (CaseLabel::Case33B1, vec!["rượu mạnh"]),
        "10000017" => (CaseLabel::CannotTranslate, vec!["gizmo"]),
    };

    assert_eq!(resolver.resolve_all().len(), expected.len());
    for meaning in resolver.resolve_all() {
        let (case, meanings) = &expected[meaning.synset().id()];
        assert_eq!(meaning.case_label(), *case, "{}", meaning);
        assert_eq!(meaning.meanings(), meanings.as_slice(), "{}", meaning);
    }
}

#[test]
fn test_every_label_comes_from_its_strategy() {
    let lexicon = fixture_lexicon();
    let resolver = Resolver::new(&lexicon);
    for meaning in resolver.resolve_all() {
        match meaning.case_label().strategy() {
            Some(strategy) => {
                let applied = strategy.apply(&lexicon, meaning.synset()).unwrap();
                assert_eq!(applied, meaning);
            }
            None => assert_eq!(meaning.meanings(), meaning.synset().words()),
        }
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let lexicon = fixture_lexicon();
    let resolver = Resolver::new(&lexicon);
    let first: Vec<String> = resolver.resolve_all().map(|m| m.to_string()).collect();
    let second: Vec<String> = resolver.resolve_all().map(|m| m.to_string()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_record_round_trip_for_all_synsets() {
    let lexicon = fixture_lexicon();
    for meaning in Resolver::new(&lexicon).resolve_all() {
        let line = meaning.to_string();
        let record: MeaningRecord = line.parse().unwrap();
        assert_eq!(record, meaning.to_record());
        assert_eq!(record.to_string(), line);
    }
}

#[test]
fn test_resolve_word() {
    let lexicon = fixture_lexicon();
    let resolver = Resolver::new(&lexicon);
    let meanings = resolver.resolve_word("kitten");
    assert_eq!(meanings.len(), 1);
    assert_eq!(
        meanings[0].to_string(),
        "10000010|kitten|3.2B|mèo con|young domestic cat"
    );
    assert!(resolver.resolve_word("drink").is_empty());
}

#[test]
fn test_resolve_from_threads() {
    let lexicon = fixture_lexicon();
    let lexicon = &lexicon;
    let expected: Vec<String> = Resolver::new(lexicon)
        .resolve_all()
        .map(|m| m.to_string())
        .collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    Resolver::new(lexicon)
                        .resolve_all()
                        .map(|m| m.to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
