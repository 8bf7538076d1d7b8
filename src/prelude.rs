#![allow(unused_imports)]

pub use tracing::{debug, instrument};

pub use crate::error::{Error, Result};
