pub mod element;
pub mod event;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use element::{find_by_class, find_element, Content, Element};
pub use event::{convert_event, Event, Key, Modifiers};
pub use render::render_lines;
pub use terminal::Terminal;
pub use types::*;
