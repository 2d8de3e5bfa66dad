use criterion::{Criterion, criterion_group, criterion_main};
use rand::rng;
use rs_cards::core::{CardFactory, Deck};

fn knuth_shuffle_pass(c: &mut Criterion) {
    let factory = CardFactory::new();
    let mut rng = rng();
    let mut deck = Deck::standard(&factory);

    c.bench_function("knuth shuffle one pass", |b| {
        b.iter(|| {
            deck.knuth_shuffle(&mut rng, 1);
        });
    });
}

fn faro_out_shuffle_pass(c: &mut Criterion) {
    let factory = CardFactory::new();
    let mut deck = Deck::standard(&factory);

    c.bench_function("faro out-shuffle one pass", |b| {
        b.iter(|| {
            deck.out_shuffle(1);
        });
    });
}

fn full_shuffle(c: &mut Criterion) {
    let factory = CardFactory::new();
    let mut rng = rng();
    let mut deck = Deck::standard(&factory);

    c.bench_function("shuffle 10 to 20 passes", |b| {
        b.iter(|| {
            deck.shuffle(&mut rng);
        });
    });
}

criterion_group!(benches, knuth_shuffle_pass, faro_out_shuffle_pass, full_shuffle);
criterion_main!(benches);
