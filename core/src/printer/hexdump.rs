//! Bounded hex dump of a field's bytes

use std::fmt;

use super::Indent;

const BYTES_PER_LINE: usize = 16;
const PREFIX: &str = "        └─ Memory: ";
// Same visible width as PREFIX, so wrapped rows line up under the first byte
const CONTINUATION: &str = "                   ";

/// Hex dump of at most `max_bytes` bytes, wrapped every 16 bytes
///
/// Emits `...` when the data is longer than `max_bytes`. Always ends with a
/// newline.
pub(crate) struct HexDump<'a> {
    pub data: &'a [u8],
    pub max_bytes: usize,
    pub indent: Indent,
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.data.len().min(self.max_bytes);

        write!(f, "{}{}", self.indent, PREFIX)?;
        for (i, byte) in self.data[..shown].iter().enumerate() {
            write!(f, "{:02X} ", byte)?;
            if (i + 1) % BYTES_PER_LINE == 0 && i + 1 < shown {
                write!(f, "\n{}{}", self.indent, CONTINUATION)?;
            }
        }

        if self.data.len() > self.max_bytes {
            f.write_str("...")?;
        }
        f.write_str("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(data: &[u8], max_bytes: usize, indent: usize) -> String {
        HexDump {
            data,
            max_bytes,
            indent: Indent::new(1, indent),
        }
        .to_string()
    }

    #[test]
    fn test_short_dump() {
        assert_eq!(dump(&[0x05], 16, 0), "        └─ Memory: 05 \n");
        assert_eq!(dump(&[0x02, 0x01], 16, 2), "          └─ Memory: 02 01 \n");
    }

    #[test]
    fn test_truncated_dump() {
        let data: Vec<u8> = (0..20).collect();
        assert_eq!(
            dump(&data, 16, 0),
            "        └─ Memory: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F ...\n"
        );
    }

    #[test]
    fn test_exact_line_does_not_wrap() {
        let data = [0xAAu8; 16];
        let out = dump(&data, 16, 0);
        assert_eq!(out.lines().count(), 1);
        assert!(!out.contains("..."));
    }

    #[test]
    fn test_wraps_every_sixteen_bytes() {
        let data: Vec<u8> = (0..40).collect();
        let out = dump(&data, 32, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("          └─ Memory: 00 01"));
        assert!(lines[0].ends_with("0F "));
        assert_eq!(
            lines[1],
            "                     10 11 12 13 14 15 16 17 18 19 1A 1B 1C 1D 1E 1F ..."
        );
    }

    #[test]
    fn test_indent_is_capped() {
        assert_eq!(Indent::new(0, usize::MAX).to_string(), "");
        assert_eq!(Indent::new(3, 2).to_string(), "      ");
        assert_eq!(Indent::new(2, 70_000).to_string().len(), 1024);
        assert_eq!(Indent::new(usize::MAX, usize::MAX).to_string().len(), 1024);

        let out = dump(&[0xAB], 16, 5_000);
        assert!(out.starts_with(&" ".repeat(1024)));
        assert!(out.ends_with(" └─ Memory: AB \n"));
    }

    #[test]
    fn test_empty_budget() {
        assert_eq!(dump(&[1, 2], 0, 0), "        └─ Memory: ...\n");
    }
}
