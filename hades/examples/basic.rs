// Example: driving the controller by hand with a fake host.
use hades::{
    Easing, EasingOptions, Hades, HadesOptions, Host, InputEvent, ScrollBehavior, ScrollPosition,
    Size, Translation,
};

struct PrintHost;

impl Host for PrintHost {
    type Element = &'static str;

    fn size(&self, element: &&'static str) -> Size {
        match *element {
            "viewport" => Size::new(800.0, 600.0),
            _ => Size::new(800.0, 4_000.0),
        }
    }

    fn window_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn query_sections(&self, _selector: &str) -> Vec<&'static str> {
        Vec::new()
    }

    fn translate(&mut self, element: &&'static str, translation: Translation) {
        println!("  {element}: transform: {translation}");
    }

    fn native_scroll(&mut self, position: ScrollPosition, behavior: ScrollBehavior) {
        println!("  window.scrollTo({position:?}, {behavior:?})");
    }
}

fn main() {
    let options = HadesOptions::new("viewport", "container")
        .with_easing(EasingOptions::new(Easing::QuadOut, 300.0))
        .with_on_frame(Some(|state: &hades::FrameState| {
            if state.still {
                println!("  settled at {:?}", state.amount);
            }
        }));
    let mut hades = match Hades::new(options, PrintHost) {
        Ok(h) => h,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    hades.on_input(InputEvent::wheel(0.0, 240.0));
    for frame in 0..24 {
        println!("frame {frame}");
        hades.on_tick(16.0);
    }

    hades.scroll_to(ScrollPosition::y(1_200.0), 0.0);
    hades.on_tick(16.0);
    println!("after scroll_to: amount={:?}", hades.amount());
}
