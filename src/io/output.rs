use std::io::{self, Write};

pub const ENTAILED: &str = "TRUE";
pub const NOT_ENTAILED: &str = "FALSE";

/// One line per answer, in query order.
pub fn write_answers<W: Write>(
    mut writer: W,
    answers: &[bool],
) -> io::Result<()> {
    for answer in answers {
        let line = if *answer { ENTAILED } else { NOT_ENTAILED };
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order() {
        let mut buffer = vec![];
        write_answers(&mut buffer, &[true, false, true]).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, "TRUE\nFALSE\nTRUE\n");
    }

    #[test]
    fn no_queries_no_output() {
        let mut buffer = vec![];
        write_answers(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }
}
