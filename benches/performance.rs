use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fintrack_core::domain::Expense;
use fintrack_core::period::{Granularity, PeriodToken};
use fintrack_core::summary;

fn build_sample_expenses(count: usize) -> Vec<Expense> {
    let categories = ["Rent", "Food", "Transport", "Utilities", "Leisure"];
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    (0..count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let expense = Expense::new(
                10.0 + (idx % 100) as f64,
                categories[idx % categories.len()],
                "benchmark",
                date,
            );
            if idx % 3 == 0 {
                expense.with_recurring(true)
            } else {
                expense
            }
        })
        .collect()
}

fn bench_token_parsing(c: &mut Criterion) {
    c.bench_function("parse_month_token", |b| {
        b.iter(|| {
            let token: PeriodToken = black_box("April 2025").parse().expect("parse");
            black_box(token);
        })
    });

    c.bench_function("parse_quarter_token", |b| {
        b.iter(|| {
            let token: PeriodToken = black_box("Q2 2025").parse().expect("parse");
            black_box(token);
        })
    });
}

fn bench_summaries(c: &mut Criterion) {
    let expenses = build_sample_expenses(black_box(10_000));
    let period: PeriodToken = "June 2025".parse().expect("token");
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    c.bench_function("monthly_summary_10k", |b| {
        b.iter(|| {
            let summary = summary::summarize(&expenses, &period);
            black_box(summary);
        })
    });

    c.bench_function("monthly_trend_10k", |b| {
        b.iter(|| {
            let points = summary::trend(&expenses, Granularity::Monthly, today);
            black_box(points);
        })
    });
}

criterion_group!(benches, bench_token_parsing, bench_summaries);
criterion_main!(benches);
