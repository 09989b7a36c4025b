//! Benchmarks for carousel ticking and visibility context building.
//!
//! Run with: cargo bench -p marquee-widgets --bench widget_bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use web_time::Duration;

use marquee_core::event::ViewportEvent;
use marquee_core::geometry::{PixelBox, ViewportSize};
use marquee_widgets::carousel::{Carousel, CarouselConfig, CarouselItem};
use marquee_widgets::visibility::{ElementMeasure, NodeId, TrackerTree};

const FRAME: Duration = Duration::from_millis(16);

fn carousel(n: usize) -> Carousel<usize> {
    let items = (0..n).map(|i| CarouselItem::new(format!("c{i}"), i)).collect();
    let config = CarouselConfig::new()
        .display_items(3)
        .autoplay_interval_ms(250)
        .transition_duration_ms(120);
    Carousel::new(items, config).expect("bench carousel")
}

fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");

    group.bench_function("autoplay_1000_frames", |b| {
        b.iter(|| {
            let mut carousel = carousel(12);
            for _ in 0..1000 {
                black_box(carousel.tick(FRAME));
            }
            black_box(carousel.current_index())
        })
    });

    group.bench_function("single_long_tick", |b| {
        b.iter(|| {
            let mut carousel = carousel(12);
            black_box(carousel.tick(Duration::from_secs(16)).len())
        })
    });

    group.bench_function("view_layout", |b| {
        let carousel = carousel(12);
        b.iter(|| {
            let view = carousel.view();
            black_box(view.layout(marquee_core::geometry::Rect::new(0, 0, 120, 10)))
        })
    });

    group.finish();
}

struct Column {
    count: usize,
}

impl ElementMeasure for Column {
    fn viewport(&self) -> ViewportSize {
        ViewportSize::new(1280.0, 800.0)
    }

    fn element_box(&self, node: NodeId, _id: &str) -> Option<PixelBox> {
        let slot = (node.get() as usize % self.count) as f64;
        Some(PixelBox::new(0.0, slot * 120.0 - 600.0, 1280.0, 240.0))
    }
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");

    let mut tree = TrackerTree::new();
    let root = tree.mount_root("page");
    let mut leaf = root;
    for depth in 0..8 {
        let section = tree.mount(root, format!("section-{depth}")).expect("root mounted");
        leaf = tree.mount(section, format!("card-{depth}")).expect("section mounted");
    }
    let column = Column { count: 17 };

    group.bench_function("dispatch_scroll", |b| {
        b.iter(|| black_box(tree.dispatch(ViewportEvent::Scroll, &column)))
    });

    group.bench_function("context_for_leaf", |b| {
        b.iter(|| black_box(tree.context_for(leaf)))
    });

    group.finish();
}

criterion_group!(benches, bench_carousel, bench_visibility);
criterion_main!(benches);
