use std::io::Write;

use anyhow::Context;
use serde::ser::{SerializeSeq, Serializer};

use passgen::{GeneratorError, Secret};

use crate::ProgError;

/// Write each password on its own line, as it's produced.
pub(crate) fn write_lines<I>(mut output: impl Write, passwords: I) -> Result<(), ProgError>
where
    I: IntoIterator<Item = Result<Secret, GeneratorError>>,
{
    for password in passwords {
        writeln!(&mut output, "{}", password?.as_str()).context("failed to write password")?;
    }
    output.flush().context("failed to flush output")?;
    Ok(())
}

/// Write the passwords as a JSON array, one element at a time.
pub(crate) fn write_json<I>(mut output: impl Write, passwords: I) -> Result<(), ProgError>
where
    I: IntoIterator<Item = Result<Secret, GeneratorError>>,
{
    let mut serializer = serde_json::Serializer::pretty(&mut output);
    let mut seq = serializer
        .serialize_seq(None)
        .context("failed to start JSON array")?;
    for password in passwords {
        seq.serialize_element(&password?)
            .context("failed to write password")?;
    }
    seq.end().context("failed to finish JSON array")?;
    writeln!(&mut output).context("failed to write newline")?;
    output.flush().context("failed to flush output")?;
    Ok(())
}
