use std::cell::RefCell;
use std::rc::Rc;

use toolscope_panel::controller::{CameraRefreshController, SessionInfo};
use toolscope_panel::display::DisplayTarget;

/// In-memory stand-in for the image slot, recording every source
/// assignment in order.
pub struct MockDisplay {
    pub width: u32,
    pub height: u32,
    pub source: String,
    pub assignments: Vec<String>,
}

impl MockDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            source: String::new(),
            assignments: Vec::new(),
        }
    }
}

impl DisplayTarget for MockDisplay {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn source(&self) -> String {
        self.source.clone()
    }

    fn set_source(&mut self, source: String) {
        self.assignments.push(source.clone());
        self.source = source;
    }
}

pub fn test_session() -> SessionInfo {
    SessionInfo {
        api_base: "/api/plugin/toolscope".to_string(),
        api_key: "KEY".to_string(),
    }
}

/// Build a controller wired to a 640x480 mock display.
pub fn panel() -> (CameraRefreshController, Rc<RefCell<MockDisplay>>) {
    let display = Rc::new(RefCell::new(MockDisplay::new(640, 480)));
    let target: Rc<RefCell<dyn DisplayTarget>> = display.clone();
    let controller = CameraRefreshController::new(test_session(), target);
    (controller, display)
}
