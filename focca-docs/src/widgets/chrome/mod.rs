mod event;
mod reducer;
pub(crate) mod view;

pub(crate) use event::{ChromeEffect, ChromeEvent};
pub(crate) use reducer::reduce;
