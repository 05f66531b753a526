use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::{CameraRefreshController, SessionInfo};
use crate::display::DisplayTarget;

/// Constructor signature the host calls once its dependencies resolve.
pub type Construct = fn(SessionInfo, Rc<RefCell<dyn DisplayTarget>>) -> CameraRefreshController;

/// Everything the host container needs to mount the panel: what to
/// build, which named collaborators to inject, and where to put it.
/// Dependency and mount lists are ordered the way the host feeds them.
pub struct ViewModelDescriptor {
    pub name: &'static str,
    pub construct: Construct,
    pub dependencies: &'static [&'static str],
    pub mount_targets: &'static [&'static str],
}

/// Descriptor for the camera-refresh panel.
pub fn descriptor() -> ViewModelDescriptor {
    ViewModelDescriptor {
        name: "camera_refresh",
        construct: CameraRefreshController::new,
        dependencies: &["settings", "login_state", "control"],
        mount_targets: &["#tool_control"],
    }
}

/// Host-side list panels register into.
///
/// Append-only; registration order is the order the host instantiates
/// in.
#[derive(Default)]
pub struct ViewModelRegistry {
    descriptors: Vec<ViewModelDescriptor>,
}

impl ViewModelRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    pub fn register(&mut self, descriptor: ViewModelDescriptor) {
        tracing::debug!(name = descriptor.name, "View model registered");
        self.descriptors.push(descriptor);
    }

    pub fn lookup(&self, name: &str) -> Option<&ViewModelDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewModelDescriptor> {
        self.descriptors.iter()
    }
}
