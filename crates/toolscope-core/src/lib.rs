pub mod error;
pub mod consts;
pub mod snapshot;
pub mod camera;
pub mod crop;
pub mod focus;
pub mod overlay;
pub mod inspect;
pub mod api;
pub mod settings;
