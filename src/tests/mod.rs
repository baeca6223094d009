mod errors;
mod wrap;

use crate::{CapacityError, IndexBuffer, MAX_CAPACITY};
