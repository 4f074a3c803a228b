mod enums;
mod inline;
mod style;

pub use enums::{Border, Direction, Display, Size, Tag, TextAlign, TextDecoration, TextStyle};
pub use inline::InlineStyle;
pub use style::Style;
