//! Performance benchmarks for the Punch Payroll Engine.
//!
//! Covers the library calculation across growing batches of employees and
//! the `/payroll` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use punch_payroll::api::create_router;
use punch_payroll::calculation::calculate_payroll;
use punch_payroll::config::{ConfigLoader, EmployeeData, PayrollInput, TimePunch};
use punch_payroll::models::JobRate;

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

const JOBS: [&str; 3] = ["Hospital - Painter", "Shop - Laborer", "Shop - Technician"];

/// Creates `punch_count` ten hour punches on consecutive days, listed newest first.
fn create_punches(punch_count: usize) -> Vec<TimePunch> {
    (0..punch_count)
        .rev()
        .map(|i| {
            let day = chrono::NaiveDate::from_ymd_opt(2022, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap();
            TimePunch {
                start: format!("{} 08:00:00", day),
                end: format!("{} 18:00:00", day),
                job: JOBS[i % JOBS.len()].to_string(),
            }
        })
        .collect()
}

/// Creates an input with `employee_count` employees of `punch_count` punches each.
fn create_input(employee_count: usize, punch_count: usize) -> PayrollInput {
    PayrollInput {
        job_meta: JOBS
            .iter()
            .enumerate()
            .map(|(i, job)| JobRate {
                job: job.to_string(),
                rate: Decimal::new(2000 + 525 * i as i64, 2),
                benefits_rate: Decimal::new(50 + 100 * i as i64, 2),
            })
            .collect(),
        employee_data: (0..employee_count)
            .map(|i| EmployeeData {
                employee: format!("employee_{:04}", i),
                time_punch: create_punches(punch_count),
            })
            .collect(),
    }
}

/// Benchmark: the bundled sample file.
fn bench_sample_file(c: &mut Criterion) {
    let input = ConfigLoader::load("./data/punch_logic_test.jsonc")
        .expect("Failed to load sample payroll")
        .into_input();

    c.bench_function("sample_file", |b| {
        b.iter(|| black_box(calculate_payroll(black_box(&input)).unwrap()))
    });
}

/// Benchmark: batches of employees with a fortnight of punches each.
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for employee_count in [1, 10, 100, 1000] {
        let input = create_input(employee_count, 14);

        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            &input,
            |b, input| b.iter(|| black_box(calculate_payroll(input).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: one employee with a growing number of punches.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for punch_count in [1, 7, 14, 31, 90] {
        let input = create_input(1, punch_count);

        group.throughput(Throughput::Elements(punch_count as u64));
        group.bench_with_input(
            BenchmarkId::new("punches", punch_count),
            &input,
            |b, input| b.iter(|| black_box(calculate_payroll(input).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: `POST /payroll` with 100 employees, including JSON handling.
fn bench_api_payroll(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router();
    let body = serde_json::to_string(&create_input(100, 14)).unwrap();

    c.bench_function("api_payroll_100_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_sample_file,
    bench_batches,
    bench_scaling,
    bench_api_payroll,
);
criterion_main!(benches);
