use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use handpose_geometry::{PointCloud, PointCloudConfig};

fn bench_pointcloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointcloud");

    for point_count in [21, 210, 2100].iter() {
        let config = PointCloudConfig {
            dimension: 3,
            point_count: *point_count,
            normalize: false,
        };
        let raw = (0..3 * point_count)
            .map(|_| rand::random::<f64>())
            .collect::<Vec<_>>();
        let cloud = PointCloud::from_config(&raw, &config).expect("valid shape");
        let line = cloud.to_delimited_text(",");

        group.bench_with_input(
            BenchmarkId::new("new_normalized", point_count),
            &raw,
            |b, raw| b.iter(|| PointCloud::new(black_box(raw), 3, *point_count, true)),
        );

        group.bench_with_input(
            BenchmarkId::new("from_delimited_text", point_count),
            &line,
            |b, line| b.iter(|| PointCloud::from_delimited_text(black_box(line), ",", &config)),
        );

        group.bench_with_input(
            BenchmarkId::new("to_delimited_text", point_count),
            &cloud,
            |b, cloud| b.iter(|| black_box(cloud).to_delimited_text(",")),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pointcloud);
criterion_main!(benches);
