pub mod pointer;
pub mod wheel;

use crate::input::PointerState;
use heimer_core::{OrbitControls, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles cloned into every input closure.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub clock: Instant,
}

impl InputWiring {
    /// Seconds on the interaction clock.
    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    /// Interaction start, as reported by the orbit controls.
    pub fn begin(&self) {
        let now = self.now_sec();
        let mut orbit = self.orbit.borrow_mut();
        self.scene.borrow_mut().begin_drag(&mut orbit, now);
    }

    /// Interaction end; the scene picks the new auto-rotate speed.
    pub fn end(&self) {
        let now = self.now_sec();
        let mut orbit = self.orbit.borrow_mut();
        self.scene.borrow_mut().end_drag(&mut orbit, now);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_pointerdown(&w);
    pointer::wire_pointermove(&w);
    pointer::wire_pointerup(&w);
    pointer::wire_contextmenu(&w);
    wheel::wire_wheel(&w);
}
