use std::cell::RefCell;
use std::rc::Rc;

use crate::display::DisplayTarget;
use crate::observable::Observable;

/// Connection details the host resolves before mounting the panel.
#[derive(Clone, Debug)]
pub struct SessionInfo {
    /// Base path of the alignment-image endpoint, without a query string.
    pub api_base: String,
    /// Session token appended to every image request.
    pub api_key: String,
}

struct PanelState {
    session: SessionInfo,
    display: Rc<RefCell<dyn DisplayTarget>>,
    saved_source: Option<String>,
    align_active: bool,
}

impl PanelState {
    /// Rebuild the image URL from live toggle and viewport state and
    /// assign it to the display.
    fn refresh(&self, r1: bool, r2: bool) {
        let mut display = self.display.borrow_mut();
        let url = format!(
            "{}?apikey={}&image&width={}&height={}&r1={}&r2={}",
            self.session.api_base,
            self.session.api_key,
            display.width(),
            display.height(),
            r1,
            r2,
        );
        tracing::debug!(url = %url, "Refreshing camera image");
        display.set_source(url);
    }
}

/// View-model for the nozzle-alignment camera panel.
///
/// Three toggles drive one image slot. Any write to `r1` or `r2`
/// rebuilds the image URL immediately. Turning `align` on saves what
/// the slot currently shows and switches it to the live alignment
/// view; turning it off puts the saved source back without touching
/// the camera.
pub struct CameraRefreshController {
    pub align: Rc<Observable<bool>>,
    pub r1: Rc<Observable<bool>>,
    pub r2: Rc<Observable<bool>>,
    state: Rc<RefCell<PanelState>>,
}

impl CameraRefreshController {
    pub fn new(session: SessionInfo, display: Rc<RefCell<dyn DisplayTarget>>) -> Self {
        let align = Rc::new(Observable::new(false));
        let r1 = Rc::new(Observable::new(false));
        let r2 = Rc::new(Observable::new(false));

        let state = Rc::new(RefCell::new(PanelState {
            session,
            display,
            saved_source: None,
            align_active: false,
        }));

        // Radius toggles refresh on every write, including writes that
        // store the value already held.
        for toggle in [&r1, &r2] {
            let state = Rc::clone(&state);
            let r1 = Rc::clone(&r1);
            let r2 = Rc::clone(&r2);
            toggle.subscribe(move |_| {
                state.borrow().refresh(r1.get(), r2.get());
            });
        }

        // Align reacts to transitions only. The saved source is read
        // back on disable but kept around; the next enable overwrites
        // it with whatever is displayed at that moment.
        {
            let state_ref = Rc::clone(&state);
            let r1 = Rc::clone(&r1);
            let r2 = Rc::clone(&r2);
            align.subscribe(move |active| {
                if state_ref.borrow().align_active == active {
                    return;
                }

                if active {
                    let current = state_ref.borrow().display.borrow().source();
                    {
                        let mut state = state_ref.borrow_mut();
                        state.saved_source = Some(current);
                        state.align_active = true;
                    }
                    state_ref.borrow().refresh(r1.get(), r2.get());
                } else {
                    state_ref.borrow_mut().align_active = false;
                    let state = state_ref.borrow();
                    if let Some(source) = state.saved_source.clone() {
                        state.display.borrow_mut().set_source(source);
                    }
                }
            });
        }

        Self {
            align,
            r1,
            r2,
            state,
        }
    }

    /// Rebuild the image URL from the current toggle and viewport
    /// state without changing any toggle.
    pub fn refresh(&self) {
        self.state.borrow().refresh(self.r1.get(), self.r2.get());
    }
}
