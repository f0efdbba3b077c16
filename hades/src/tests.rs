use crate::*;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const VIEWPORT: u32 = 1;
const CONTAINER: u32 = 2;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

#[derive(Debug, Default)]
struct MockHost {
    sizes: HashMap<u32, Size>,
    window: Size,
    sections: Vec<u32>,
    translations: Vec<(u32, Translation)>,
    native: Vec<(ScrollPosition, ScrollBehavior)>,
    backface: Vec<u32>,
}

impl MockHost {
    fn with_size(mut self, element: u32, width: f64, height: f64) -> Self {
        self.sizes.insert(element, Size::new(width, height));
        self
    }

    fn last_translation(&self, element: u32) -> Option<Translation> {
        self.translations
            .iter()
            .rev()
            .find(|(e, _)| *e == element)
            .map(|(_, t)| *t)
    }
}

impl Host for MockHost {
    type Element = u32;

    fn size(&self, element: &u32) -> Size {
        self.sizes.get(element).copied().unwrap_or_default()
    }

    fn window_size(&self) -> Size {
        self.window
    }

    fn query_sections(&self, _selector: &str) -> Vec<u32> {
        self.sections.clone()
    }

    fn hide_backface(&mut self, container: &u32) {
        self.backface.push(*container);
    }

    fn translate(&mut self, element: &u32, translation: Translation) {
        self.translations.push((*element, translation));
    }

    fn native_scroll(&mut self, position: ScrollPosition, behavior: ScrollBehavior) {
        self.native.push((position, behavior));
    }
}

#[derive(Clone, Default)]
struct RecordingScrollbar {
    offsets: Arc<Mutex<Vec<Vec2>>>,
    destroyed: Arc<AtomicUsize>,
}

impl ScrollbarAdapter for RecordingScrollbar {
    fn listen(&mut self, offset: Vec2, _geometry: &ScrollGeometry) {
        self.offsets.lock().unwrap().push(offset);
    }

    fn destroy(&mut self) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}

fn options() -> HadesOptions<u32> {
    HadesOptions::new(VIEWPORT, CONTAINER)
        .with_boundaries(Boundaries::new(0.0, 1000.0, 0.0, 1000.0))
        .with_scrollbar(None)
}

fn hades(options: HadesOptions<u32>) -> Hades<MockHost> {
    Hades::new(options, MockHost::default()).unwrap()
}

fn count_events(h: &mut Hades<MockHost>) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let starts = Arc::new(AtomicUsize::new(0));
    let stops = Arc::new(AtomicUsize::new(0));
    let (s, t) = (Arc::clone(&starts), Arc::clone(&stops));
    h.subscribe(move |e| match e {
        HadesEvent::Start => {
            s.fetch_add(1, Ordering::SeqCst);
        }
        HadesEvent::Stop => {
            t.fetch_add(1, Ordering::SeqCst);
        }
        HadesEvent::Scroll(_) => {}
    });
    (starts, stops)
}

#[test]
fn create_boundaries_orders_min_and_max() {
    let b = Hades::<MockHost>::create_boundaries(0.0, 100.0, 0.0, 200.0);
    assert_eq!(b.min, Vec2::new(0.0, 0.0));
    assert_eq!(b.max, Vec2::new(100.0, 200.0));
}

#[test]
fn missing_elements_are_reported() {
    let no_viewport = HadesOptions::<u32>::default().with_container(CONTAINER);
    let err = Hades::new(no_viewport, MockHost::default()).unwrap_err();
    assert_eq!(err, HadesError::MissingViewport);
    assert_eq!(err.to_string(), "viewport cannot be undefined");

    let no_container = HadesOptions::<u32>::default().with_viewport(VIEWPORT);
    let err = Hades::new(no_container, MockHost::default()).unwrap_err();
    assert_eq!(err, HadesError::MissingContainer);

    // Viewport is checked first.
    let err = Hades::new(HadesOptions::<u32>::default(), MockHost::default()).unwrap_err();
    assert_eq!(err, HadesError::MissingViewport);
}

#[test]
fn construction_prepares_container() {
    let h = hades(options());
    assert_eq!(h.host().backface, [CONTAINER]);
    assert!(h.is_running());
    assert!(h.is_still());
    assert_eq!(h.direction(), DirectionPair::default());
}

#[test]
fn full_duration_tick_converges_with_linear_easing() {
    let mut h = hades(options());
    h.on_input(InputEvent::wheel(10.0, 0.0));
    assert_eq!(h.target().x, 10.0);
    assert_eq!(h.amount().x, 0.0);

    h.on_tick(1000.0);
    assert_eq!(h.amount().x, 10.0);
}

#[test]
fn half_duration_ticks_converge_monotonically() {
    let mut h = hades(options().with_render_by_pixel(false));
    h.on_input(InputEvent::wheel(10.0, 0.0));

    h.on_tick(500.0);
    assert_eq!(h.amount().x, 5.0);
    h.on_tick(500.0);
    assert_eq!(h.amount().x, 7.5);

    let mut last = h.amount().x;
    for _ in 0..20 {
        h.on_tick(500.0);
        let x = h.amount().x;
        assert!(x >= last);
        assert!(x <= 10.0);
        last = x;
    }
}

#[test]
fn elapsed_is_clamped_to_duration() {
    let mut h = hades(options().with_render_by_pixel(false));
    h.on_input(InputEvent::wheel(0.0, 40.0));
    h.on_tick(5000.0);
    assert_eq!(h.amount().y, 40.0);
    assert_eq!(h.velocity().y, 0.04);

    let mut h = hades(options().with_render_by_pixel(false));
    h.on_input(InputEvent::wheel(0.0, 40.0));
    h.on_tick(-16.0);
    assert_eq!(h.amount().y, 0.0);
}

#[test]
fn immediate_scroll_to_renders_on_next_tick() {
    let mut h = hades(options());
    h.scroll_to(ScrollPosition::x(50.0), 0.0);
    assert_eq!(h.target(), Vec2::new(50.0, 0.0));

    h.on_tick(16.0);
    assert_eq!(h.amount().x, 50.0);
    assert_eq!(h.timeline().duration, 1000.0);

    // One-shot: the next move eases again.
    h.scroll_to(ScrollPosition::x(150.0), 0.0);
    h.on_tick(16.0);
    assert_eq!(h.amount().x, 150.0);
    h.scroll_to(ScrollPosition::x(250.0), 1000.0);
    h.on_tick(500.0);
    assert_eq!(h.amount().x, 200.0);
}

#[test]
fn scroll_to_bypasses_boundaries() {
    let mut h = hades(options().with_boundaries(Boundaries::new(0.0, 10.0, 0.0, 10.0)));
    h.scroll_to(ScrollPosition::xy(500.0, -20.0), 0.0);
    h.on_tick(16.0);
    assert_eq!(h.amount(), Vec2::new(500.0, -20.0));
}

#[test]
fn eased_scroll_to_is_cancelled_by_live_input() {
    let mut h = hades(options().with_render_by_pixel(false));
    h.scroll_to(ScrollPosition::y(100.0), 2000.0);
    assert_eq!(h.timeline().duration, 2000.0);

    // Elapsed is clamped to the configured duration, normalized by the episode duration.
    h.on_tick(1000.0);
    assert_eq!(h.amount().y, 50.0);
    h.on_tick(16.0);
    let before = h.amount().y;
    assert!(before > 50.0);

    h.on_input(InputEvent::wheel(0.0, 1.0));
    assert_eq!(h.timeline().duration, 1000.0);
    assert_eq!(h.amount().y, before);
    assert_eq!(h.target().y, 101.0);
}

#[test]
fn direction_reversal_is_discarded_for_one_event() {
    let mut h = hades(options().with_boundaries(Boundaries::new(0.0, 100.0, 0.0, 100.0)));
    h.on_input(InputEvent::wheel(5.0, 0.0));
    assert_eq!(h.direction().x, Direction::Down);
    assert_eq!(h.direction().y, Direction::Up);
    h.on_tick(1000.0);
    assert_eq!(h.amount().x, 5.0);

    h.on_input(InputEvent::wheel(-5.0, 0.0));
    assert_eq!(h.target().x, 5.0);
    assert_eq!(h.direction().x, Direction::Up);

    // Same direction again: accepted.
    h.on_input(InputEvent::wheel(-5.0, 0.0));
    assert_eq!(h.target().x, 0.0);
}

#[test]
fn smooth_direction_change_accepts_reversal() {
    let mut h = hades(
        options()
            .with_boundaries(Boundaries::new(0.0, 100.0, 0.0, 100.0))
            .with_smooth_direction_change(true),
    );
    h.on_input(InputEvent::wheel(5.0, 0.0));
    h.on_tick(1000.0);
    h.on_input(InputEvent::wheel(-3.0, 0.0));
    assert_eq!(h.target().x, 2.0);
    assert_eq!(h.direction().x, Direction::Up);
}

#[test]
fn reversal_before_first_frame_falls_back_to_rendered_offset() {
    let mut h = hades(options());
    h.on_input(InputEvent::wheel(5.0, 0.0));
    h.on_input(InputEvent::wheel(-2.0, 0.0));
    // Nothing was rendered yet, so the axis resets to the rendered origin.
    assert_eq!(h.target().x, 0.0);
}

#[test]
fn start_and_stop_fire_once_per_motion_episode() {
    let mut h = hades(options().with_boundaries(Boundaries::new(0.0, 0.0, 0.0, 10_000.0)));
    let (starts, stops) = count_events(&mut h);

    h.on_input(InputEvent::wheel(0.0, 1000.0));
    for _ in 0..50 {
        h.on_tick(16.0);
        assert!(!h.is_still());
    }
    assert_eq!(starts.load(Ordering::SeqCst), 1);
    assert_eq!(stops.load(Ordering::SeqCst), 0);

    h.on_tick(1000.0);
    assert_eq!(h.amount().y, 1000.0);
    assert_eq!(stops.load(Ordering::SeqCst), 0);

    for _ in 0..10 {
        h.on_tick(16.0);
        assert!(h.is_still());
    }
    assert_eq!(starts.load(Ordering::SeqCst), 1);
    assert_eq!(stops.load(Ordering::SeqCst), 1);

    h.on_input(InputEvent::wheel(0.0, 10.0));
    h.on_tick(16.0);
    assert_eq!(starts.load(Ordering::SeqCst), 2);
    assert_eq!(h.motion(), Motion::Moving);
}

#[test]
fn rendered_offset_stays_within_boundaries() {
    let bounds = Boundaries::new(0.0, 300.0, 0.0, 500.0);
    for seed in 1..=8u64 {
        let mut rng = Lcg::new(seed);
        let smooth = seed % 2 == 0;
        let mut h = hades(
            options()
                .with_boundaries(bounds)
                .with_smooth_direction_change(smooth)
                .with_render_by_pixel(seed % 3 != 0)
                .with_lock(false, false),
        );
        for _ in 0..400 {
            for _ in 0..rng.gen_range_i64(0, 4) {
                let dx = rng.gen_range_i64(-200, 201) as f64;
                let dy = rng.gen_range_i64(-200, 201) as f64;
                h.on_input(InputEvent::wheel(dx, dy));
                assert!(bounds.contains(h.target()), "target {:?}", h.target());
            }
            let elapsed = rng.gen_range_i64(1, 60) as f64;
            h.on_tick(elapsed);
            assert!(bounds.contains(h.amount()), "amount {:?}", h.amount());
        }
    }
}

#[test]
fn infinite_scroll_skips_clamping() {
    let mut h = hades(
        options()
            .with_boundaries(Boundaries::new(0.0, 0.0, 0.0, 0.0))
            .with_infinite_scroll(true),
    );
    h.on_input(InputEvent::wheel(0.0, -30.0));
    assert_eq!(h.target().y, -30.0);
    h.on_input(InputEvent::wheel(0.0, -30.0));
    assert_eq!(h.target().y, -60.0);

    h.set_infinite_scroll(false);
    h.on_input(InputEvent::wheel(0.0, -1.0));
    assert_eq!(h.target().y, 0.0);
}

#[test]
fn render_by_pixel_rounds_half_up() {
    let mut h = hades(options());
    h.on_input(InputEvent::wheel(3.6, 0.0));
    h.on_tick(1000.0);
    assert_eq!(h.amount().x, 4.0);

    let mut h = hades(options().with_render_by_pixel(false));
    h.on_input(InputEvent::wheel(3.6, 0.0));
    h.on_tick(1000.0);
    assert_eq!(h.amount().x, 3.6);

    let mut h = hades(options().with_infinite_scroll(true));
    h.on_input(InputEvent::wheel(0.0, -2.5));
    h.on_tick(1000.0);
    assert_eq!(h.amount().y, -2.0);
}

#[test]
fn velocity_keeps_four_decimals() {
    let mut h = hades(
        options()
            .with_render_by_pixel(false)
            .with_easing(EasingOptions::new(Easing::Linear, 3.0)),
    );
    h.on_input(InputEvent::wheel(1.0, 0.0));
    h.on_tick(3.0);
    assert_eq!(h.amount().x, 1.0);
    assert_eq!(h.velocity().x, 0.3333);
    assert_eq!(h.velocity().y, 0.0);
}

#[test]
fn zero_elapsed_tick_reports_nan_velocity_and_never_settles() {
    // Known latent behavior: a zero-length frame divides by zero.
    let mut h = hades(options());
    let (starts, stops) = count_events(&mut h);

    h.on_tick(0.0);
    assert!(h.velocity().x.is_nan());
    assert!(h.velocity().y.is_nan());
    assert!(!h.is_still());
    assert_eq!(starts.load(Ordering::SeqCst), 1);

    h.on_input(InputEvent::wheel(0.0, 10.0));
    h.on_tick(0.0);
    assert!(h.velocity().y.is_nan());
    assert!(!h.is_still());

    h.scroll_to(ScrollPosition::y(20.0), 0.0);
    h.on_tick(0.0);
    assert!(h.velocity().y.is_infinite());
    assert!(!h.is_still());

    h.on_tick(16.0);
    assert!(h.is_still());
    assert_eq!(starts.load(Ordering::SeqCst), 1);
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[test]
fn paused_controller_drops_input_but_keeps_settling() {
    let mut h = hades(options().with_autoplay(false));
    assert!(!h.is_running());
    h.on_input(InputEvent::wheel(0.0, 50.0));
    assert_eq!(h.target(), Vec2::ZERO);
    assert_eq!(h.direction(), DirectionPair::default());

    h.play();
    h.on_input(InputEvent::wheel(0.0, 50.0));
    h.pause();
    h.on_input(InputEvent::wheel(0.0, 50.0));
    assert_eq!(h.target().y, 50.0);

    h.on_tick(500.0);
    assert_eq!(h.amount().y, 25.0);
    h.on_tick(1000.0);
    assert_eq!(h.amount().y, 50.0);
}

#[test]
fn virtual_mode_translates_container() {
    let mut h = hades(options());
    h.on_input(InputEvent::wheel(0.0, 40.0));
    h.on_tick(1000.0);
    let t = h.host().last_translation(CONTAINER).unwrap();
    // x is locked by default.
    assert_eq!(t, Translation::new(0.0, -40.0));
    assert_eq!(t.to_string(), "translate3d(0px, -40px, 0px)");

    let mut h = hades(options().with_lock(false, true).with_smooth_direction_change(true));
    h.on_input(InputEvent::wheel(30.0, 40.0));
    h.on_tick(1000.0);
    let t = h.host().last_translation(CONTAINER).unwrap();
    assert_eq!(t, Translation::new(-30.0, 0.0));

    let mut h = hades(options());
    h.set_render_scroll(false);
    h.on_input(InputEvent::wheel(0.0, 40.0));
    h.on_tick(1000.0);
    assert!(h.host().translations.is_empty());
}

#[test]
fn resting_translation_prints_positive_zero() {
    let mut h = hades(options().with_lock(false, false));
    h.on_tick(16.0);
    let t = h.host().last_translation(CONTAINER).unwrap();
    assert_eq!(t.to_string(), "translate3d(0px, 0px, 0px)");
}

#[test]
fn auto_boundaries_follow_measured_sizes() {
    let host = MockHost::default()
        .with_size(VIEWPORT, 800.0, 600.0)
        .with_size(CONTAINER, 700.0, 3000.0);
    let opts = HadesOptions::new(VIEWPORT, CONTAINER).with_scrollbar(None);
    let mut h = Hades::new(opts, host).unwrap();
    assert!(h.settings().auto_boundaries);

    h.on_tick(16.0);
    assert_eq!(h.boundaries(), Boundaries::new(0.0, 0.0, 0.0, 2400.0));

    h.on_input(InputEvent::wheel(0.0, 5000.0));
    assert_eq!(h.target().y, 2400.0);
}

#[test]
fn native_mode_measures_window_and_delegates_scroll_to() {
    let mut host = MockHost::default().with_size(CONTAINER, 500.0, 2000.0);
    host.window = Size::new(500.0, 800.0);
    let opts = HadesOptions::new(VIEWPORT, CONTAINER).with_mode(Mode::Native);
    let mut h = Hades::new(opts, host).unwrap();
    assert!(h.is_native());

    h.on_tick(16.0);
    assert_eq!(h.boundaries().max.y, 1200.0);

    h.scroll_to(ScrollPosition::y(120.0), 0.0);
    h.scroll_to(ScrollPosition::y(300.0), 400.0);
    assert_eq!(
        h.host().native,
        [
            (ScrollPosition::y(120.0), ScrollBehavior::Instant),
            (ScrollPosition::y(300.0), ScrollBehavior::Smooth),
        ]
    );
    assert_eq!(h.target().y, 300.0);
    assert_eq!(h.timeline().duration, 1000.0);

    h.on_tick(16.0);
    assert!(h.host().translations.is_empty());
}

#[test]
fn fake_mode_computes_without_rendering() {
    let mut h = hades(options().with_mode(Mode::Fake));
    assert!(h.is_fake());
    h.on_input(InputEvent::wheel(0.0, 60.0));
    h.on_tick(1000.0);
    assert_eq!(h.amount().y, 60.0);

    h.scroll_to(ScrollPosition::y(10.0), 0.0);
    h.on_tick(16.0);
    assert_eq!(h.amount().y, 10.0);
    assert!(h.host().translations.is_empty());
    assert!(h.host().native.is_empty());
}

#[test]
fn sections_follow_only_while_in_view() {
    const S0: u32 = 10;
    const S1: u32 = 11;
    const S2: u32 = 12;
    let mut host = MockHost::default()
        .with_size(S0, 800.0, 500.0)
        .with_size(S1, 800.0, 500.0)
        .with_size(S2, 800.0, 500.0);
    host.window = Size::new(800.0, 400.0);
    host.sections = std::vec![S0, S1, S2];

    let opts = options().with_sections(Sections::Enabled);
    let mut h = Hades::new(opts, host).unwrap();

    h.on_tick(16.0);
    assert_eq!(
        h.host().last_translation(S0),
        Some(Translation::new(0.0, 0.0))
    );
    assert_eq!(h.host().last_translation(S1), None);
    assert!(h.host().last_translation(CONTAINER).is_none());

    h.scroll_to(ScrollPosition::y(300.0), 0.0);
    h.on_tick(16.0);
    // The previous frame was still at 0: only the first section moves.
    assert_eq!(
        h.host().last_translation(S0),
        Some(Translation::new(0.0, -300.0))
    );
    assert_eq!(h.host().last_translation(S1), None);

    h.on_tick(16.0);
    assert_eq!(
        h.host().last_translation(S1),
        Some(Translation::new(0.0, -300.0))
    );
    assert_eq!(h.host().last_translation(S2), None);

    h.scroll_to(ScrollPosition::y(900.0), 0.0);
    h.on_tick(16.0);
    h.on_tick(16.0);
    assert_eq!(
        h.host().last_translation(S2),
        Some(Translation::new(0.0, -900.0))
    );
}

#[test]
fn sections_are_ignored_outside_virtual_mode() {
    let mut host = MockHost::default().with_size(20, 100.0, 100.0);
    host.sections = std::vec![20];
    let opts = options()
        .with_mode(Mode::Fake)
        .with_sections(Sections::Selector(".panel".into()));
    let mut h = Hades::new(opts, host).unwrap();
    h.on_tick(16.0);
    assert!(h.host().translations.is_empty());
}

#[test]
fn emit_global_gates_subscribers_but_not_callbacks() {
    let scrolls = Arc::new(AtomicUsize::new(0));
    let heard = Arc::new(AtomicUsize::new(0));
    let frames = Arc::new(AtomicUsize::new(0));

    let s = Arc::clone(&scrolls);
    let f = Arc::clone(&frames);
    let opts = options()
        .with_on_scroll(Some(move |_: &InputEvent| {
            s.fetch_add(1, Ordering::SeqCst);
        }))
        .with_on_frame(Some(move |_: &FrameState| {
            f.fetch_add(1, Ordering::SeqCst);
        }));
    let mut h = hades(opts);

    let hh = Arc::clone(&heard);
    let id = h.subscribe(move |e| {
        if matches!(e, HadesEvent::Scroll(_)) {
            hh.fetch_add(1, Ordering::SeqCst);
        }
    });

    h.on_input(InputEvent::wheel(0.0, 1.0));
    h.set_emit_global(false);
    h.on_input(InputEvent::wheel(0.0, 1.0));
    h.on_tick(16.0);

    assert_eq!(scrolls.load(Ordering::SeqCst), 2);
    assert_eq!(heard.load(Ordering::SeqCst), 1);
    assert_eq!(frames.load(Ordering::SeqCst), 1);

    assert!(h.unsubscribe(id));
    assert!(!h.unsubscribe(id));
    assert_eq!(h.subscriber_count(), 0);
}

#[test]
fn scroll_events_carry_scaled_delta() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut h = hades(options().with_scale(2.0).with_unique_direction(true));
    h.subscribe(move |e| {
        if let HadesEvent::Scroll(event) = e {
            sink.lock().unwrap().push(event.delta);
        }
    });

    h.on_input(InputEvent::wheel(0.0, 5.0));
    assert_eq!(h.target(), Vec2::new(10.0, 10.0));
    h.on_input(InputEvent::wheel(3.0, 5.0));
    assert_eq!(h.target(), Vec2::new(16.0, 20.0));

    assert_eq!(
        *seen.lock().unwrap(),
        [Vec2::new(10.0, 10.0), Vec2::new(6.0, 10.0)]
    );
    assert_eq!(HadesEvent::Start.name(), "hades-start");
    assert_eq!(HadesEvent::Scroll(InputEvent::default()).name(), "hades-scroll");
}

#[test]
fn frame_callback_sees_post_frame_state() {
    let last = Arc::new(Mutex::new(FrameState::default()));
    let sink = Arc::clone(&last);
    let opts = options().with_on_frame(Some(move |state: &FrameState| {
        *sink.lock().unwrap() = *state;
    }));
    let mut h = hades(opts);
    h.on_input(InputEvent::wheel(0.0, 20.0));
    h.on_tick(1000.0);

    let state = *last.lock().unwrap();
    assert_eq!(state, h.frame_state());
    assert_eq!(state.amount.y, 20.0);
    assert!(!state.still);
    assert_eq!(state.direction.y, Direction::Down);
}

#[test]
fn set_boundaries_pulls_target_back_inside() {
    let mut h = hades(options());
    h.on_input(InputEvent::wheel(0.0, 500.0));
    h.on_tick(1000.0);

    h.set_boundaries(Boundaries::new(0.0, 0.0, 0.0, 200.0));
    assert_eq!(h.target().y, 200.0);
    h.on_tick(16.0);
    assert_eq!(h.amount().y, 200.0);

    h.set_boundaries(Boundaries::new(0.0, 0.0, 300.0, 400.0));
    assert_eq!(h.target().y, 300.0);
}

#[test]
fn set_easing_changes_curve_and_duration() {
    let mut h = hades(options().with_render_by_pixel(false));
    h.set_easing(EasingOptions::new(Easing::Linear, 500.0));
    h.on_input(InputEvent::wheel(0.0, 10.0));
    h.on_tick(250.0);
    assert_eq!(h.amount().y, 5.0);

    h.set_easing(EasingOptions::new(Easing::QuadIn, 500.0));
    h.on_tick(250.0);
    assert_eq!(h.amount().y, 6.25);
}

#[test]
fn scrollbar_listens_every_frame_and_is_destroyed_once() {
    let bar = RecordingScrollbar::default();
    let handle = bar.clone();
    let host = MockHost::default().with_size(VIEWPORT, 100.0, 100.0);
    let opts = HadesOptions::new(VIEWPORT, CONTAINER)
        .with_boundaries(Boundaries::new(0.0, 0.0, 0.0, 1000.0));
    let mut h = Hades::with_scrollbar(opts, host, |settings, viewport| {
        assert_eq!(settings.tracks, [Track::Y]);
        assert_eq!(*viewport, VIEWPORT);
        bar
    })
    .unwrap();
    assert!(h.has_scrollbar());

    h.on_input(InputEvent::wheel(0.0, 30.0));
    h.on_tick(500.0);
    h.on_tick(500.0);
    assert_eq!(
        *handle.offsets.lock().unwrap(),
        [Vec2::new(0.0, 15.0), Vec2::new(0.0, 23.0)]
    );

    h.destroy();
    h.destroy();
    assert!(h.is_destroyed());
    assert!(!h.has_scrollbar());
    assert_eq!(handle.destroyed.load(Ordering::SeqCst), 1);

    h.on_input(InputEvent::wheel(0.0, 30.0));
    h.on_tick(16.0);
    assert_eq!(handle.offsets.lock().unwrap().len(), 2);
    assert_eq!(h.target().y, 30.0);
}

#[test]
fn scrollbar_requires_virtual_mode_and_settings() {
    let opts = options().with_mode(Mode::Native).with_scrollbar(Some(ScrollbarSettings::default()));
    let h = Hades::with_scrollbar(opts, MockHost::default(), |_, _| {
        RecordingScrollbar::default()
    })
    .unwrap();
    assert!(!h.has_scrollbar());

    let mut h = hades(options());
    assert!(!h.attach_scrollbar(RecordingScrollbar::default()));

    let mut h = hades(options().with_scrollbar(Some(ScrollbarSettings::default())));
    let first = RecordingScrollbar::default();
    let first_destroyed = Arc::clone(&first.destroyed);
    assert!(h.attach_scrollbar(first));
    assert!(h.attach_scrollbar(RecordingScrollbar::default()));
    assert_eq!(first_destroyed.load(Ordering::SeqCst), 1);
}

#[test]
fn named_easings_hit_both_endpoints() {
    let all = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::SmoothStep,
    ];
    for easing in all {
        assert!(easing.sample(0.0).abs() < 1e-12, "{easing:?} at 0");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        let mid = easing.sample(0.5);
        assert!((0.0..=1.0).contains(&mid), "{easing:?} at 0.5 = {mid}");
    }

    fn snap(t: f64) -> f64 {
        if t < 0.5 { 0.0 } else { 1.0 }
    }
    assert_eq!(Easing::Custom(snap).sample(0.7), 1.0);
    assert_eq!(Easing::Custom(snap).name(), "custom");
}

#[test]
fn settings_defaults() {
    let s = Settings::default();
    assert_eq!(s.mode, Mode::Virtual);
    assert_eq!(s.easing.duration, 1000.0);
    assert!(s.emit_global);
    assert!(s.render_by_pixel);
    assert!(s.lock_x);
    assert!(!s.lock_y);
    assert!(s.auto_boundaries);
    assert!(s.autoplay);
    assert_eq!(s.touch_multiplier, 1.5);
    assert_eq!(s.scrollbar, Some(ScrollbarSettings { tracks: std::vec![Track::Y] }));
    assert_eq!(s.scale, 1.0);
    assert_eq!(Sections::Enabled.selector(), Some(DEFAULT_SECTION_SELECTOR));
    assert_eq!(Sections::Disabled.selector(), None);
}
