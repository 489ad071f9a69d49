use chrono::NaiveTime;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termlog::logger::{Layout, compose};
use termlog::{Category, Styler};

fn clock() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let mut buf = Vec::with_capacity(256);

    for (name, active, timestamps) in [
        ("plain", false, false),
        ("plain+timestamp", false, true),
        ("styled", true, false),
        ("styled+timestamp", true, true),
    ] {
        let layout = Layout {
            styler: Styler::new(active),
            timestamps,
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                buf.clear();
                compose(
                    &mut buf,
                    black_box(layout),
                    Some(Category::Error.style()),
                    Category::Error.prefix(),
                    black_box("connection refused by upstream"),
                    clock,
                );
            });
        });
    }

    group.finish();
}

fn bench_styler(c: &mut Criterion) {
    let styler = Styler::active();
    c.bench_function("Styler::red(bold)", |b| {
        b.iter(|| styler.red(&styler.bold(black_box("[!!]"))));
    });
}

criterion_group!(benches, bench_compose, bench_styler);
criterion_main!(benches);
