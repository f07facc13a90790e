use std::io::Write;

use serde::Serialize;

use crate::errors::{FeederError, FeederResult};

/// Write `records` as two-space indented JSON followed by a newline.
pub fn write_json<W, T>(mut writer: W, records: &T) -> FeederResult<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    // Encode fully before writing so a failure never leaves partial output
    let mut buf = serde_json::to_vec_pretty(records).map_err(FeederError::Serialize)?;
    buf.push(b'\n');

    writer.write_all(&buf)?;
    writer.flush()?;

    Ok(())
}
