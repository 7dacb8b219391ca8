/// Count lines the way a text-mode reader sees them.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. Trailing characters after
/// the last terminator form one more line. Empty input has zero lines.
#[must_use]
pub fn count_lines(source: &str) -> usize {
    let bytes = source.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if bytes.last().is_some_and(|&b| b != b'\n' && b != b'\r') {
        count += 1;
    }

    count
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
