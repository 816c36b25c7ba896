use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_collapse::{Collapse, Posix, Style, Windows};

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");

    group.bench_function("absolute_path", |b| {
        b.iter(|| Posix::effective_length(black_box(b"/absolute/path/to/file".as_slice())));
    });

    group.bench_function("relative_path", |b| {
        b.iter(|| Posix::effective_length(black_box(b"./relative/path".as_slice())));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| Posix::effective_length(black_box(b"/a/b/../c/./d".as_slice())));
    });

    group.bench_function("windows_drive", |b| {
        let path = br"C:\Users\.\me\..\you\file.txt".as_slice();
        b.iter(|| Windows::effective_length(black_box(path)));
    });

    group.finish();
}

fn bench_copy_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_depth");

    for depth in [8usize, 64, 512] {
        let mut path = String::from("/");
        for i in 0..depth {
            path.push_str(&format!("dir{i}/"));
            if i % 3 == 0 {
                path.push_str("../");
            }
        }
        let collapse = Collapse::<u8, Posix>::new(path.as_bytes());
        let mut buf = vec![0u8; collapse.length() + 1];

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| collapse.copy(black_box(&mut buf)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_length, bench_copy_depth);
criterion_main!(benches);
