pub use crate::external_deps::*;
pub use crate::prelude::*;
