#![forbid(unsafe_code)]

use anchorfix_core::{BannerMetrics, CorrectorConfig, PageEvent, ScrollPosition};
use anchorfix_web::WebPage;
use anchorfix_web::session::Session;
use core::time::Duration;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MS: Duration = Duration::from_millis(1);

fn bench_session_click_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/click_cycle");

    group.bench_function("click_jump_correct", |b| {
        b.iter(|| {
            let mut session = Session::new(
                CorrectorConfig::new(),
                WebPage::new(BannerMetrics::new(0.0, 50.0)),
            );
            session.push_event(PageEvent::AnchorClicked {
                href: "#section2".into(),
            });
            session.page_mut().set_hash("#section2");
            session
                .page_mut()
                .set_scroll(ScrollPosition::new(0.0, 300.0));
            session.advance(MS);
            black_box(session.take_outputs().corrections.len());
        });
    });

    group.bench_function("navigate_64_anchors", |b| {
        b.iter(|| {
            let mut session = Session::new(
                CorrectorConfig::new(),
                WebPage::new(BannerMetrics::new(0.0, 50.0)),
            );
            for step in 0..64u32 {
                session.push_event(PageEvent::FragmentChanged);
                session.page_mut().set_hash(&format!("#s{step}"));
                session
                    .page_mut()
                    .set_scroll(ScrollPosition::new(0.0, f64::from(step) * 120.0));
                session.advance(MS);
            }
            black_box(session.take_outputs().corrections.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_session_click_cycle);
criterion_main!(benches);
