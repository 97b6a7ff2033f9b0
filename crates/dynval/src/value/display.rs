//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.debug_render(&mut out).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never panics on a value that is mid-operation
        match self.slot.try_borrow() {
            Ok(slot) => write!(
                f,
                "Value({}, {:?}, refs={})",
                slot.payload.value_type().name(),
                slot.payload,
                self.ref_count()
            ),
            Err(_) => write!(f, "Value(<borrowed>, refs={})", self.ref_count()),
        }
    }
}
