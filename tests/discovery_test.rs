mod support;

use std::time::Duration;

use maps_listing_scraper::services::selectors;
use maps_listing_scraper::services::{Discoverer, StopReason, TargetCount};
use maps_listing_scraper::SearchJob;
use support::{fast_config, FakeHandle, FakeListing, FakePage};

fn listings(n: usize) -> Vec<FakeListing> {
    (0..n).map(|i| FakeListing::named(&format!("Shop {}", i))).collect()
}

fn job() -> SearchJob {
    SearchJob::new("bakery", "Springfield", "IL")
}

#[tokio::test]
async fn stops_at_target_and_takes_exactly_target_handles() {
    let page = FakePage::new(listings(30), &[10, 20, 30]);
    let discoverer = Discoverer::new(&fast_config());

    let discovery = discoverer
        .discover(&page, &job(), TargetCount::Limited(25))
        .await
        .unwrap();

    assert_eq!(discovery.reason, StopReason::AtTarget);
    assert_eq!(discovery.polls, 3);
    assert_eq!(discovery.handles.len(), 25);
    assert_eq!(discovery.handles[0], FakeHandle::Listing(0));
    assert_eq!(discovery.handles[24], FakeHandle::Listing(24));
}

#[tokio::test]
async fn stops_when_two_polls_report_the_same_count() {
    let page = FakePage::new(listings(12), &[5, 9, 12, 12]);
    let discoverer = Discoverer::new(&fast_config());

    let discovery = discoverer
        .discover(&page, &job(), TargetCount::Unbounded)
        .await
        .unwrap();

    assert_eq!(discovery.reason, StopReason::Stabilized);
    assert_eq!(discovery.polls, 4);
    assert_eq!(discovery.handles.len(), 12);
    assert_eq!(page.scrolls(), 4);
}

#[tokio::test]
async fn returns_everything_when_fewer_than_target_exist() {
    let page = FakePage::new(listings(7), &[7, 7]);
    let discoverer = Discoverer::new(&fast_config());

    let discovery = discoverer
        .discover(&page, &job(), TargetCount::Limited(50))
        .await
        .unwrap();

    assert_eq!(discovery.reason, StopReason::Stabilized);
    assert_eq!(discovery.handles.len(), 7);
}

#[tokio::test]
async fn target_met_on_the_first_poll() {
    let page = FakePage::new(listings(20), &[20]);
    let discoverer = Discoverer::new(&fast_config());

    let discovery = discoverer
        .discover(&page, &job(), TargetCount::Limited(20))
        .await
        .unwrap();

    assert_eq!(discovery.reason, StopReason::AtTarget);
    assert_eq!(discovery.polls, 1);
    assert_eq!(discovery.handles.len(), 20);
}

#[tokio::test]
async fn no_results_is_an_empty_discovery() {
    let page = FakePage::new(Vec::new(), &[0]);
    let discoverer = Discoverer::new(&fast_config());

    let discovery = discoverer
        .discover(&page, &job(), TargetCount::Unbounded)
        .await
        .unwrap();

    assert!(discovery.handles.is_empty());
    assert_eq!(discovery.reason, StopReason::Stabilized);
    assert_eq!(discovery.polls, 1);
}

#[tokio::test]
async fn submits_the_query_before_scrolling() {
    let page = FakePage::new(listings(3), &[3, 3]);
    let discoverer = Discoverer::new(&fast_config());

    discoverer
        .discover(&page, &job(), TargetCount::Unbounded)
        .await
        .unwrap();

    let events = page.events();
    assert_eq!(
        events[0],
        format!("fill {} bakery, Springfield, IL", selectors::SEARCH_INPUT)
    );
    assert_eq!(events[1], "enter");
    assert_eq!(events[2], format!("hover {}", selectors::LISTING_ANCHOR));
    assert!(events[3].starts_with("scroll"));
}

#[tokio::test]
async fn wall_clock_guard_stops_a_list_that_keeps_growing() {
    let page = FakePage::new(listings(100), &[10, 20, 30, 40]);
    let discoverer = Discoverer::new(&fast_config()).with_timeout(Duration::ZERO);

    let discovery = discoverer
        .discover(&page, &job(), TargetCount::Unbounded)
        .await
        .unwrap();

    assert_eq!(discovery.reason, StopReason::TimedOut);
    assert_eq!(discovery.polls, 1);
    assert_eq!(discovery.handles.len(), 10);
}
