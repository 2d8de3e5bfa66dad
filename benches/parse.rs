use criterion::{Criterion, criterion_group, criterion_main};
use rs_cards::core::{CardFactory, Deck};

fn parse_short_card(c: &mut Criterion) {
    let factory = CardFactory::new();
    c.bench_function("Parse 10H", |b| {
        b.iter(|| factory.parse("10H"));
    });
}

fn parse_long_card(c: &mut Criterion) {
    let factory = CardFactory::new();
    c.bench_function("Parse Queen of Diamonds", |b| {
        b.iter(|| factory.parse("Queen of Diamonds"));
    });
}

fn parse_full_deck(c: &mut Criterion) {
    let factory = CardFactory::new();
    let serialized = Deck::standard(&factory).to_string();
    c.bench_function("Parse 52 card deck string", |b| {
        b.iter(|| Deck::parse(&factory, &serialized));
    });
}

criterion_group!(benches, parse_short_card, parse_long_card, parse_full_deck);
criterion_main!(benches);
