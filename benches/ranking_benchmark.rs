use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recipe_match_engine::{
    ranking::{self, RankConfig, ScoringMode},
    Ingredient, Recipe,
};

fn create_test_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let mut recipe = Recipe::new(i.to_string(), format!("Test Recipe {}", i));
            recipe.ingredients = (0..8)
                .map(|j| {
                    Ingredient::new(
                        format!("{}-{}", i, j),
                        format!("ingredient{}", (i + j) % 20),
                    )
                })
                .collect();
            recipe
        })
        .collect()
}

fn create_pantry(count: usize) -> Vec<Ingredient> {
    (0..count)
        .map(|i| Ingredient::new(format!("p-{}", i), format!("ingredient{}", i)))
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let config = RankConfig::default();
    let pantry = create_pantry(10);

    let recipes_10 = create_test_recipes(10);
    let recipes_50 = create_test_recipes(50);
    let recipes_100 = create_test_recipes(100);

    c.bench_function("rank_blended_10", |b| {
        b.iter(|| black_box(ranking::rank(&recipes_10, &pantry, ScoringMode::Blended, &config)));
    });

    c.bench_function("rank_blended_50", |b| {
        b.iter(|| black_box(ranking::rank(&recipes_50, &pantry, ScoringMode::Blended, &config)));
    });

    c.bench_function("rank_blended_100", |b| {
        b.iter(|| black_box(ranking::rank(&recipes_100, &pantry, ScoringMode::Blended, &config)));
    });

    c.bench_function("rank_coverage_100", |b| {
        b.iter(|| black_box(ranking::rank(&recipes_100, &pantry, ScoringMode::Coverage, &config)));
    });
}

fn bench_suggest(c: &mut Criterion) {
    let config = RankConfig::default();
    let recipes = create_test_recipes(100);
    let names: Vec<String> = (0..10).map(|i| format!("ingredient{}", i)).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    c.bench_function("suggest_100", |b| {
        b.iter(|| black_box(ranking::suggest(&recipes, &name_refs, 10, &config)));
    });
}

criterion_group!(benches, bench_rank, bench_suggest);
criterion_main!(benches);
