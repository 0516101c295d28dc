use std::io::Write;

use tracing::{debug, info};
use utf8dfa::{CodePoint, Error};

use crate::{cli::Command, error::CliError};

/// Runs `command` on `input`, writing results to `out`.
///
/// `input` is ignored by `encode`. Invalid input is reported on `out` and then
/// returned as [`CliError::Invalid`] so the caller can pick an exit code.
///
/// # Errors
///
/// [`CliError::Invalid`] when `check`, `len` or `decode` meet invalid UTF-8,
/// [`CliError::Io`] when writing fails.
pub fn run<W: Write>(command: &Command, input: &[u8], out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Check { .. } => check(input, out),
        Command::Len { .. } => len(input, out),
        Command::Decode { .. } => decode(input, out),
        Command::Encode { code_points, hex } => encode(code_points, *hex, out),
        Command::Sanitize { replacement, .. } => sanitize(input, *replacement, out),
    }
}

fn invalid_at(input: &[u8], offset: usize) -> CliError {
    let source = utf8dfa::decode_first(&input[offset..])
        .err()
        .unwrap_or(Error::MissingByte);
    CliError::Invalid { offset, source }
}

fn check<W: Write>(input: &[u8], out: &mut W) -> Result<(), CliError> {
    let offset = utf8dfa::find_invalid(input);
    if offset == input.len() {
        writeln!(out, "valid: {} bytes", input.len())?;
        return Ok(());
    }
    let err = invalid_at(input, offset);
    writeln!(out, "{err}")?;
    Err(err)
}

fn len<W: Write>(input: &[u8], out: &mut W) -> Result<(), CliError> {
    match utf8dfa::str_len_partial(input) {
        (count, None) => {
            writeln!(out, "{count}")?;
            Ok(())
        }
        (count, Some(_)) => {
            let err = invalid_at(input, utf8dfa::find_invalid(input));
            writeln!(out, "{count} characters before {err}")?;
            Err(err)
        }
    }
}

fn decode<W: Write>(input: &[u8], out: &mut W) -> Result<(), CliError> {
    for item in utf8dfa::char_indices(input) {
        match item {
            Ok((offset, cp)) => writeln!(out, "{offset}\t{cp}")?,
            Err(source) => {
                let offset = utf8dfa::find_invalid(input);
                debug!(offset, %source, "decode stopped");
                let err = CliError::Invalid { offset, source };
                writeln!(out, "{err}")?;
                return Err(err);
            }
        }
    }
    Ok(())
}

fn encode<W: Write>(code_points: &[CodePoint], hex: bool, out: &mut W) -> Result<(), CliError> {
    if !hex {
        out.write_all(&utf8dfa::encode_to_vec(code_points.iter().copied()))?;
        return Ok(());
    }
    for &cp in code_points {
        let encoded = utf8dfa::encode(cp);
        let bytes: Vec<String> = encoded.as_bytes().iter().map(|b| format!("{b:02X}")).collect();
        writeln!(out, "{cp}\t{}", bytes.join(" "))?;
    }
    Ok(())
}

fn sanitize<W: Write>(input: &[u8], replacement: CodePoint, out: &mut W) -> Result<(), CliError> {
    let mut buf = Vec::with_capacity(input.len());
    let report = utf8dfa::sanitize_into_with(input, &mut buf, replacement);
    if report.replacements > 0 {
        info!(
            replacements = report.replacements,
            written = report.written,
            "sanitized input"
        );
    }
    out.write_all(&buf)?;
    Ok(())
}
