//! 訳語決定のベンチマーク
//!
//! テスト用の語彙表の構築と、すべてのシンセットの訳語決定の速度を計測します。

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use bilingual_wordnet::{Lexicon, LexiconBuilder, Resolver};

const INDEX: &str = include_str!("../src/tests/resources/index.noun");
const DATA: &str = include_str!("../src/tests/resources/data.noun");
const DICTIONARY: &str = include_str!("../src/tests/resources/ev.txt");
const SPECIAL: &str = include_str!("../src/tests/resources/special.txt");
const SYNONYMS: &str = include_str!("../src/tests/resources/synDict.txt");

fn build() -> Lexicon {
    LexiconBuilder::from_readers(
        INDEX.as_bytes(),
        DATA.as_bytes(),
        DICTIONARY.as_bytes(),
        SPECIAL.as_bytes(),
        SYNONYMS.as_bytes(),
    )
    .unwrap()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_lexicon", |b| b.iter(build));
}

fn bench_resolve_all(c: &mut Criterion) {
    let lexicon = build();
    let resolver = Resolver::new(&lexicon);

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(lexicon.synsets().len() as u64));
    group.bench_function("resolve_all", |b| {
        b.iter(|| resolver.resolve_all().map(|m| m.meanings().len()).sum::<usize>())
    });
    group.bench_function("resolve_word", |b| {
        b.iter(|| resolver.resolve_word("kitten"))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_resolve_all);
criterion_main!(benches);
