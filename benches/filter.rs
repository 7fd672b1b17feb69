// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use collegefinder::{
    catalog::{COURSES, STATES},
    csv::parse_records,
    filter::{filter, FilterView, Query},
    record::{normalize, CollegeRecord},
    render::results_view,
};

// Synthetic upload: enough rows to make the per-record work visible.
fn synthetic_csv(rows: usize) -> String {
    let mut out = String::from("College,Location,State,Courses,Fees,Cutoff,Contact,Website\n");
    for i in 0..rows {
        let state = STATES[i % STATES.len()];
        let a = COURSES[i % COURSES.len()];
        let b = COURSES[(i * 7 + 3) % COURSES.len()];
        out.push_str(&format!(
            "\"College {i}, Campus\",City {i},{state},\"{a}, {b}\",{}000,{},+91 {i:010},https://c{i}.example.in\n",
            50 + i % 200,
            60 + i % 40,
        ));
    }
    out
}

fn load_dataset() -> Vec<CollegeRecord> {
    parse_records(&synthetic_csv(500)).iter().map(normalize).collect()
}

fn bench_filter(c: &mut Criterion) {
    let text = synthetic_csv(500);
    let data = load_dataset();

    c.bench_function("parse_normalize_500", |b| {
        b.iter(|| {
            let recs: Vec<CollegeRecord> = parse_records(black_box(&text)).iter().map(normalize).collect();
            black_box(recs.len())
        })
    });

    c.bench_function("filter_owned", |b| {
        b.iter(|| {
            let hits = filter(black_box(&data), "karnataka", "b.tech");
            black_box(hits.len())
        })
    });

    c.bench_function("filter_view", |b| {
        let q = Query::new("karnataka", "b.tech");
        b.iter(|| {
            let view = FilterView::new(black_box(&data), &q);
            black_box(view.len())
        })
    });

    c.bench_function("render_200", |b| {
        b.iter(|| {
            let view = results_view(black_box(&data), 200);
            black_box(view.cards.len())
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
