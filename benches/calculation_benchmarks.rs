//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure calculation paths (overlap, single shift, period
//! aggregation, batch sick-leave summaries) and one request through the
//! HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{
    PercentageAveraging, aggregate_shift_costs, calculate_overlap_hours, cost_shift,
    summarize_sick_leave,
};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{PayrollPeriod, Shift, SickLeaveSpan, TimeWindow};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a config loader for the default configuration.
fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
}

/// Creates a mix of day, evening and overnight shifts over consecutive days.
fn create_shifts(count: usize) -> Vec<Shift> {
    let patterns = [("08:00", "16:00"), ("14:00", "22:00"), ("22:00", "06:00")];
    (0..count)
        .map(|i| {
            let (start, end) = patterns[i % patterns.len()];
            let date = base_date() + Duration::days(i as i64);
            let shift = Shift::new(&format!("shift_{:04}", i), date, start, end)
                .expect("valid shift")
                .with_break(30);
            if i % 7 >= 5 { shift.weekend() } else { shift }
        })
        .collect()
}

/// Creates sick-leave spans spread over `employees` employees.
fn create_spans(employees: usize, spans_per_employee: usize) -> Vec<SickLeaveSpan> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (0..employees * spans_per_employee)
        .map(|i| {
            let employee = format!("emp_{:04}", i % employees);
            let first = start + Duration::days((i / employees * 6) as i64);
            SickLeaveSpan::new(&employee, first)
                .ending(first + Duration::days(4))
                .with_percentage(Decimal::new(if i % 2 == 0 { 100 } else { 50 }, 0))
                .nav_from(first + Duration::days(2))
        })
        .collect()
}

/// Benchmark: Overlap of an overnight shift with a wrapping window.
fn bench_overlap(c: &mut Criterion) {
    let shift = TimeWindow::parse("22:00", "06:00").expect("valid window");
    let rule = TimeWindow::parse("21:00", "06:00").expect("valid window");

    c.bench_function("overlap_overnight", |b| {
        b.iter(|| calculate_overlap_hours(black_box(shift), black_box(rule)))
    });
}

/// Benchmark: Single shift costing with the default rules.
fn bench_single_shift(c: &mut Criterion) {
    let config = load_config();
    let shift = create_shifts(3).pop().expect("one shift");
    let rate = Decimal::new(250, 0);

    c.bench_function("single_shift", |b| {
        b.iter(|| cost_shift(black_box(&shift), rate, config.rules()))
    });
}

/// Benchmark: Period aggregation at several shift counts.
fn bench_period_scaling(c: &mut Criterion) {
    let config = load_config();
    let rate = Decimal::new(250, 0);

    let mut group = c.benchmark_group("period_aggregation");
    for shift_count in [1, 7, 14, 31].iter() {
        let shifts = create_shifts(*shift_count);
        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            &shifts,
            |b, shifts| b.iter(|| aggregate_shift_costs(black_box(shifts), rate, config.rules())),
        );
    }
    group.finish();
}

/// Benchmark: Batch sick-leave summaries across many employees.
fn bench_sick_leave_batch(c: &mut Criterion) {
    let period = PayrollPeriod::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date"),
    )
    .expect("valid period");

    let mut group = c.benchmark_group("sick_leave_batch");
    for employees in [10, 100, 1000].iter() {
        let spans = create_spans(*employees, 4);
        group.throughput(Throughput::Elements(spans.len() as u64));
        group.bench_with_input(BenchmarkId::new("employees", employees), &spans, |b, spans| {
            b.iter(|| {
                summarize_sick_leave(
                    black_box(spans),
                    &period,
                    PercentageAveraging::FragmentMean,
                    &(),
                )
            })
        });
    }
    group.finish();
}

/// Benchmark: Two-week shift cost request through the router.
fn bench_shift_cost_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let router = create_router(AppState::new(load_config()));

    let shifts: Vec<serde_json::Value> = create_shifts(14)
        .iter()
        .map(|shift| serde_json::to_value(shift).expect("serializable shift"))
        .collect();
    let body = serde_json::json!({
        "base_hourly_rate": "250",
        "shifts": shifts
    })
    .to_string();

    c.bench_function("shift_cost_request_14_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/shift-costs")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .expect("valid request"),
                )
                .await
                .expect("router response");
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_overlap,
    bench_single_shift,
    bench_period_scaling,
    bench_sick_leave_batch,
    bench_shift_cost_request,
);
criterion_main!(benches);
