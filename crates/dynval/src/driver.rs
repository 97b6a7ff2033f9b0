//! Build a top-level object from a flat list of arguments

use tracing::{debug, warn};

use crate::context::DriverContext;
use crate::error::OpsResult;
use crate::failure::unwrap;
use crate::value::{Value, ValueType};

/// Build the object, stopping at the first failed operation.
///
/// Arguments are consumed in consecutive pairs: the first becomes a key of
/// `ctx.key_type`, the second a string value, both assigned from their
/// text and moved into the object. A trailing unpaired argument is ignored.
pub fn try_build_from_args<S: AsRef<str>>(args: &[S], ctx: &DriverContext) -> OpsResult<Value> {
    let top = Value::new();
    top.transition_type(ValueType::Object)?;

    let mut pairs = args.chunks_exact(2);
    for pair in &mut pairs {
        let (k, v): (&str, &str) = (pair[0].as_ref(), pair[1].as_ref());
        let key = Value::new();
        let val = Value::new();
        key.transition_type(ctx.key_type)?;
        key.assign_str(k)?;
        val.transition_type(ValueType::String)?;
        val.assign_str(v)?;

        debug!(key = k, value = v, "inserting argument pair");
        top.insert_pair(key, val)?;
    }
    if let [extra] = pairs.remainder() {
        let extra: &str = extra.as_ref();
        warn!(argument = extra, "ignoring trailing argument without a value");
    }

    Ok(top)
}

/// Build the object, handing any failure to the context's policy.
pub fn build_from_args<S: AsRef<str>>(args: &[S], ctx: &DriverContext) -> Value {
    unwrap(try_build_from_args(args, ctx), &ctx.failure)
}

/// The printed form of the top-level value, without the newline.
pub fn render_line(top: &Value) -> String {
    top.to_string()
}
