mod rectangle;

pub use rectangle::*;
