mod create;
mod delete;
mod read;

pub use crate::ops::{create::*, delete::*, read::*};
