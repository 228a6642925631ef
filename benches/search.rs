//! Search benchmark over a synthetic catalogue
//!
//! Run: cargo bench --bench search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use food_lookup::catalogue::locale_key;
use food_lookup::{build_catalogue, search, Catalogue, CategoryRow, FoodRow, Locales, DEFAULT_MATCH_THRESHOLD};

const WORDS: &[&str] = &[
    "roast", "chicken", "beef", "stew", "pie", "slice", "tomato", "sauce", "cabbage", "rolls",
    "fried", "rice", "mutton", "wrap", "pumpkin", "soup", "honey", "glazed", "ham", "salad",
];

/// 500 foods with two- or three-word names drawn from WORDS
fn synthetic_catalogue() -> Catalogue {
    let category = CategoryRow {
        id: "meal".to_string(),
        hunger_old: Some("6".to_string()),
        saturation_old: Some("0.6".to_string()),
        ..Default::default()
    };

    let mut foods = Vec::new();
    let mut names = Vec::new();
    for i in 0..500 {
        let a = WORDS[i % WORDS.len()];
        let b = WORDS[(i / WORDS.len() + 3) % WORDS.len()];
        let name = if i % 3 == 0 {
            format!("{} {} {}", a, b, WORDS[(i * 7) % WORDS.len()])
        } else {
            format!("{} {}", a, b)
        };
        let key = format!("food_{}", i);
        names.push((locale_key("farmersdelight", &key), name));
        foods.push(FoodRow::new(key, "meal"));
    }

    let locales = Locales {
        zh_cn: names.iter().cloned().collect(),
        en_us: names.into_iter().collect(),
    };
    build_catalogue(&[category], &foods, &locales, "farmersdelight").expect("synthetic catalogue")
}

fn bench_search(c: &mut Criterion) {
    let catalogue = synthetic_catalogue();

    c.bench_function("search_exact_subset", |b| {
        b.iter(|| search(black_box("roast chicken"), &catalogue, DEFAULT_MATCH_THRESHOLD))
    });

    c.bench_function("search_typo", |b| {
        b.iter(|| search(black_box("pumpkn soup"), &catalogue, DEFAULT_MATCH_THRESHOLD))
    });

    c.bench_function("search_threshold_zero", |b| {
        b.iter(|| search(black_box("honey glazed ham"), &catalogue, 0))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
