use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scan_cube::detection::SampleLayout;
use scan_cube::{Classifier, ColorRegistry, HsvFrame, Hsv};

fn benchmark_classification(c: &mut Criterion) {
    let registry = ColorRegistry::with_defaults();
    let classifier = Classifier::new(&registry);

    let grid = [
        [Hsv::new(60, 200, 200), Hsv::new(5, 200, 200), Hsv::new(0, 20, 220)],
        [Hsv::new(120, 200, 200), Hsv::new(60, 200, 200), Hsv::new(15, 200, 200)],
        [Hsv::new(28, 200, 200), Hsv::new(160, 200, 200), Hsv::new(60, 200, 200)],
    ];
    c.bench_function("classify_grid", |b| {
        b.iter(|| classifier.classify_grid(black_box(&grid)))
    });

    let mut frame = HsvFrame::filled(1280, 720, Hsv::new(0, 0, 0));
    let layout = SampleLayout::for_frame(1280, 720).unwrap();
    for (index, (x, y)) in layout.sample_points().into_iter().enumerate() {
        frame.set_pixel(x, y, grid[index / 3][index % 3]);
    }
    c.bench_function("classify_frame_720p", |b| {
        b.iter(|| classifier.classify_frame(black_box(&frame)))
    });

    let rgb: Vec<u8> = (0..640 * 480 * 3).map(|i| (i % 251) as u8).collect();
    c.bench_function("hsv_frame_from_rgb_vga", |b| {
        b.iter(|| HsvFrame::from_rgb(640, 480, black_box(&rgb)))
    });
}

criterion_group!(benches, benchmark_classification);
criterion_main!(benches);
