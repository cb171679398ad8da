mod interrupt;
mod observer;
mod schedule;
mod semester;
mod too_program;
mod too_request;

pub use interrupt::*;
pub use observer::*;
pub use schedule::*;
pub use semester::*;
pub use too_program::*;
pub use too_request::*;
