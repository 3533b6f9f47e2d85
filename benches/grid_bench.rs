// Benchmark for date grid construction
// Measures month grid layout and appearance resolution per frame

use calendar_picker::models::calendar_system::{CalendarSystem, CalendarTimeZone};
use calendar_picker::models::configuration::CalendarConfiguration;
use calendar_picker::services::appearance;
use calendar_picker::services::grid::MonthGrid;
use chrono::{NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_month_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_grid");
    let today = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();

    for first_weekday in [Weekday::Sun, Weekday::Mon] {
        let calendar = CalendarSystem::new(first_weekday, CalendarTimeZone::Local);
        group.bench_with_input(
            BenchmarkId::new("build", format!("{:?}", first_weekday)),
            &calendar,
            |b, calendar| {
                b.iter(|| MonthGrid::new(black_box(today), calendar, today, true));
            },
        );
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
    let config = CalendarConfiguration::default();

    c.bench_function("resolve_month_appearance", |b| {
        b.iter(|| {
            let mut grid = MonthGrid::new(today, &config.calendar, today, false);
            grid.select_date(black_box(today));
            grid.rows()
                .iter()
                .flat_map(|row| row.cells())
                .filter_map(|cell| appearance::resolve(&config, cell))
                .count()
        });
    });
}

criterion_group!(benches, bench_month_grid, bench_frame);
criterion_main!(benches);
