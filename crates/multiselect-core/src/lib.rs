// Domain modules
pub mod catalog;
pub mod component;
pub mod config;
pub mod error;
pub mod open_state;
pub mod presentation;
pub mod registry;
pub mod selection;

pub use catalog::{Catalog, DEFAULT_OPTIONS};
pub use component::{MultiSelect, OptionView, RenderState};
pub use config::{MultiSelectConfig, CONFIG_ENV};
pub use error::{MultiSelectError, Result};
pub use open_state::OpenState;
pub use presentation::{resolve, HelperTone, PresentationMode};
pub use registry::{ComponentFactory, ComponentRegistry, MULTI_SELECT_TAG};
pub use selection::{SelectionStore, Toggled, DEFAULT_SELECTED};
