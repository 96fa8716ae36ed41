//! Rotating selection scenarios driven through the public API with real
//! catalog records

use std::time::{Duration, Instant};

use chrono::{TimeZone, Utc};
use storefront::app::carousel::{interpret_drag, CarouselTiming, DEFAULT_DRAG_THRESHOLD};
use storefront::app::{CarouselPhase, Direction, RotatingSelection};
use storefront::core::{ItemId, Moment, Offer};

fn moment() -> Moment {
    Moment::new(
        Instant::now(),
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap(),
    )
}

fn offer(id: u64) -> Offer {
    Offer {
        id: ItemId(id),
        title: format!("Offer {id}"),
        description: None,
        product_name: None,
        discount_percent: 10,
        code: None,
        starts_at: None,
        ends_at: None,
        is_active: true,
    }
}

fn spotlight(count: u64, now: Moment) -> RotatingSelection<Offer> {
    let mut carousel = RotatingSelection::new(CarouselTiming::default(), DEFAULT_DRAG_THRESHOLD);
    carousel.initialize((1..=count).map(offer).collect(), 1, now);
    carousel
}

#[test]
fn test_five_offers_advance_in_order() {
    let now = moment();
    let mut carousel = spotlight(5, now);
    assert_eq!(carousel.window_count(), 5);

    let mut seen = Vec::new();
    for _ in 0..3 {
        carousel.next(now.at);
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(carousel.select().map(|o| o.id), Some(ItemId(4)));
}

#[test]
fn test_all_ineligible_offers_leave_carousel_empty() {
    let now = moment();
    let mut carousel = RotatingSelection::new(CarouselTiming::default(), DEFAULT_DRAG_THRESHOLD);
    let expired = Offer {
        ends_at: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        ..offer(1)
    };
    let inactive = Offer {
        is_active: false,
        ..offer(2)
    };
    carousel.initialize(vec![expired, inactive], 1, now);

    assert_eq!(carousel.phase(), CarouselPhase::Empty);
    assert_eq!(carousel.window_count(), 0);
    assert!(!carousel.next(now.at));
    assert!(!carousel.jump_to(0, now.at));
    assert!(carousel.select().is_none());
}

#[test]
fn test_long_leftward_drag_goes_forward() {
    assert_eq!(interpret_drag(300, 180, 50), Some(Direction::Forward));

    let now = moment();
    let mut carousel = spotlight(3, now);
    carousel.drag_start(300);
    assert!(carousel.is_paused());
    assert_eq!(carousel.drag_end(180, now.at), Some(Direction::Forward));
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.is_paused());
}

#[test]
fn test_manual_jump_defers_next_auto_advance() {
    let now = moment();
    let mut carousel = spotlight(4, now);
    let interval = Duration::from_millis(5000);

    // Jump just before the originally scheduled advance
    let jumped_at = now.at + Duration::from_millis(4900);
    assert!(carousel.jump_to(2, jumped_at));

    // The old deadline no longer fires
    assert!(!carousel.tick(now.at + interval));
    // Nor does anything within one interval of the jump
    assert!(!carousel.tick(jumped_at + Duration::from_millis(4999)));
    assert_eq!(carousel.current_index(), 2);

    // After the grace period a full interval runs before the next advance
    assert!(!carousel.tick(jumped_at + interval));
    assert!(carousel.tick(jumped_at + interval * 2));
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn test_pause_toggling_never_stacks_timers() {
    let now = moment();
    let mut carousel = spotlight(3, now);

    for step in 0..10u64 {
        carousel.toggle_user_pause(now.at + Duration::from_millis(step));
        assert!(carousel.scheduled_timers() <= 1);
    }
    // Ten toggles leave the carousel running
    assert!(!carousel.is_paused());
    assert_eq!(carousel.scheduled_timers(), 1);
}
