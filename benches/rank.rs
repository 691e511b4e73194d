use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;

use grinder::core::{Card, Deck, Hand, Rankable};

fn deal_hand(size: usize) -> Hand {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::default();
    deck.shuffle(&mut rng);
    let cards: Vec<Card> = (0..size).map(|_| deck.deal().unwrap()).collect();
    Hand::new_with_cards(cards)
}

fn rank_one(c: &mut Criterion) {
    let hand = deal_hand(5);
    c.bench_function("rank one 5 card hand", move |b| b.iter(|| hand.rank()));
}

fn rank_best_seven(c: &mut Criterion) {
    let hand = deal_hand(7);
    c.bench_function("rank best 5 card hand from 7", move |b| {
        b.iter(|| hand.rank())
    });
}

criterion_group!(benches, rank_one, rank_best_seven);
criterion_main!(benches);
