use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strava_run_stats::analysis::plot_data::prepare_overview_data;
use strava_run_stats::analysis::{
    aggregate_best_efforts, calculate_activity_totals, filter_valid_activities,
    summarize_activity_efforts,
};
use strava_run_stats::models::{ActivitySet, LastActivity, RawEffort};

/// A year of mixed activities, roughly one per day.
fn activity_set(count: usize) -> ActivitySet {
    let types = ["Run", "Ride", "TrailRun", "Walk", "VirtualRun"];
    let mut set = ActivitySet::default();

    for i in 0..count {
        set.push(LastActivity {
            name: format!("Activity {i}"),
            distance: (3000 + (i * 137) % 15000).to_string(),
            time: if i % 17 == 0 {
                "0".to_string()
            } else {
                (900 + (i * 53) % 5400).to_string()
            },
            polyline: String::new(),
            average_heartrate: if i % 5 == 0 {
                "None".to_string()
            } else {
                format!("{}.4", 120 + i % 50)
            },
            total_elevation_gain: ((i * 7) % 300).to_string(),
            activity_type: types[i % types.len()].to_string(),
        });
    }

    set
}

fn benchmark_filtering(c: &mut Criterion) {
    let set = activity_set(365);

    let mut group = c.benchmark_group("run_filtering");

    group.bench_function("filter_and_total", |b| {
        b.iter(|| {
            let indices = filter_valid_activities(
                black_box(&set.activity_type),
                &set.distances,
                &set.times,
                &set.total_elevation_gain,
                Some(set.average_heartrate.as_slice()),
            );
            calculate_activity_totals(
                &set.distances,
                &set.times,
                &set.total_elevation_gain,
                &indices,
            )
        })
    });

    group.bench_function("overview_plot_data", |b| {
        b.iter(|| prepare_overview_data(black_box(&set)))
    });

    group.finish();
}

fn benchmark_best_efforts(c: &mut Criterion) {
    let distances = [400.0, 805.0, 1000.0, 1609.34, 3218.69, 5000.0, 10000.0];
    let history: Vec<_> = (0..200)
        .filter_map(|i| {
            let efforts: Vec<RawEffort> = distances
                .iter()
                .map(|&d| RawEffort {
                    distance_m: d,
                    time_seconds: (d * 0.3) as i64 + (i * 31) % 60,
                    pr_rank: None,
                })
                .collect();
            summarize_activity_efforts(&format!("Run {i}"), "03/09/24", &efforts)
        })
        .collect();

    c.bench_function("aggregate_best_efforts", |b| {
        b.iter(|| aggregate_best_efforts(black_box(&history)))
    });
}

criterion_group!(benches, benchmark_filtering, benchmark_best_efforts);
criterion_main!(benches);
