mod id;
mod mood;
mod ping;
mod task;

pub use crate::{id::*, mood::*, ping::*, task::*};
