use criterion::{Criterion, black_box, criterion_group, criterion_main};
use faultline::event::{CallKind, FrameArg, StackFrame};
use faultline::report::ConsoleReporter;
use faultline::severity::SeverityFilter;

fn frames(depth: usize) -> Vec<StackFrame> {
    (1..=depth)
        .map(|n| {
            StackFrame::new(format!("step_{n}"), "pipeline.rs", n * 3)
                .on_type("Pipeline", CallKind::Instance)
                .with_args(vec![
                    FrameArg::from("stage"),
                    FrameArg::from(n as i64),
                    FrameArg::other(0.25 * n as f64),
                ])
        })
        .collect()
}

fn bench_trace(c: &mut Criterion) {
    let reporter = ConsoleReporter::new(SeverityFilter::default());
    let mut group = c.benchmark_group("render_trace");
    for depth in [4, 24, 96] {
        let trace = frames(depth);
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| reporter.render_trace(black_box(&trace)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_trace);
criterion_main!(benches);
