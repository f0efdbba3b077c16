use hades::{
    Hades, HadesOptions, Host, InputEvent, ScrollBehavior, ScrollPosition, ScrollbarSettings,
    Size, Track, Translation,
};
use hades_adapter::{Scrollbar, Session, ThumbGeometry, TrackRenderer};

struct Page;

impl Host for Page {
    type Element = u8;

    fn size(&self, element: &u8) -> Size {
        match element {
            0 => Size::new(80.0, 24.0),
            _ => Size::new(80.0, 240.0),
        }
    }

    fn window_size(&self) -> Size {
        Size::new(80.0, 24.0)
    }

    fn query_sections(&self, _selector: &str) -> Vec<u8> {
        Vec::new()
    }

    fn translate(&mut self, _element: &u8, _translation: Translation) {}

    fn native_scroll(&mut self, _position: ScrollPosition, _behavior: ScrollBehavior) {}
}

struct Gutter;

impl TrackRenderer for Gutter {
    fn mount(&mut self, track: Track) {
        println!("mount {track:?}");
    }

    fn update(&mut self, thumb: &ThumbGeometry) {
        println!(
            "thumb {:?}: size={:.2} offset={:.2}",
            thumb.track, thumb.size, thumb.offset
        );
    }

    fn unmount(&mut self, track: Track) {
        println!("unmount {track:?}");
    }
}

fn main() {
    // Example: a terminal-style adapter feeding wheel deltas and timer frames through a
    // standalone session, with a headless scrollbar rendering into a gutter.
    let options = HadesOptions::new(0u8, 1u8).with_scrollbar(Some(ScrollbarSettings {
        tracks: vec![Track::Y],
    }));
    let hades = match Hades::with_scrollbar(options, Page, |settings, _| {
        Scrollbar::new(settings, Gutter)
    }) {
        Ok(h) => h,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let session = Session::standalone(hades);

    let mut now_ms = 0.0;
    for step in 0..60 {
        if step % 10 == 0 {
            session.emit(InputEvent::wheel(0.0, 30.0));
        }
        session.frame(now_ms);
        now_ms += 16.0;
    }

    let state = session.with(|h| h.frame_state());
    println!("amount={:?} still={}", state.amount, state.still);
    session.destroy();
}
