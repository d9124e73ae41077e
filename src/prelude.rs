pub use adw::prelude::*;
pub use anyhow::{Result, Context, bail};
