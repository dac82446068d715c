use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use scribble_racer::{SimplifyParams, Track};
use std::hint::black_box;

/// Synthetische Zeichengeste: eine Sinuswelle mit feiner Abtastung,
/// wie sie ein schneller Maus-Drag erzeugt.
fn build_gesture(sample_count: usize) -> Vec<Vec2> {
    (0..sample_count)
        .map(|i| {
            let x = i as f32 * 0.08;
            Vec2::new(x, (x * 0.7).sin() * 4.0)
        })
        .collect()
}

fn bench_curve_simplifier(c: &mut Criterion) {
    let params = SimplifyParams::default();
    let mut group = c.benchmark_group("curve_simplifier");

    for &sample_count in &[1_000usize, 10_000usize] {
        let gesture = build_gesture(sample_count);

        group.bench_with_input(
            BenchmarkId::new("stroke_gesture", sample_count),
            &gesture,
            |b, gesture| {
                b.iter(|| {
                    let mut track = Track::new();
                    track.begin_stroke(gesture[0], 0.0);
                    for &point in &gesture[1..] {
                        track.continue_stroke(black_box(point), &params);
                    }
                    track.end_stroke(gesture[gesture.len() - 1]);
                    black_box(track.vertex_count())
                })
            },
        );
    }

    group.finish();
}

fn build_dense_track(stroke_count: usize) -> Track {
    let params = SimplifyParams::default();
    let mut track = Track::new();
    for s in 0..stroke_count {
        let y_offset = s as f32 * 3.0;
        let gesture = build_gesture(400);
        track.begin_stroke(gesture[0] + Vec2::new(0.0, y_offset), 0.0);
        for &point in &gesture[1..] {
            track.continue_stroke(point + Vec2::new(0.0, y_offset), &params);
        }
        track.end_stroke(gesture[gesture.len() - 1] + Vec2::new(0.0, y_offset));
    }
    track
}

fn bench_snap_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_scan");

    for &stroke_count in &[10usize, 100usize] {
        let track = build_dense_track(stroke_count);

        group.bench_with_input(
            BenchmarkId::new("snap_to_existing", stroke_count),
            &track,
            |b, track| {
                b.iter(|| {
                    // Kandidat ohne Treffer erzwingt den vollen Scan
                    black_box(track.snap_to_existing(black_box(Vec2::new(-100.0, -100.0)), 1.0))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_curve_simplifier, bench_snap_scan);
criterion_main!(benches);
