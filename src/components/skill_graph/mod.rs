mod component;
mod config;
mod error;
mod layout;
mod model;
mod render;
mod similarity;
mod state;
mod types;

pub use component::SkillGraphCanvas;
pub use config::LayoutConfig;
pub use error::GraphError;
pub use layout::GraphLayout;
pub use types::Person;
