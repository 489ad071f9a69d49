//! Line assembly: `PREFIX ␠ [TIMESTAMP ␠] MESSAGE \n`.
//!
//! Pure over its inputs so the byte contract can be tested without the process-wide lock.

use crate::fmt::{StyleFn, Styler, timestamp};
use chrono::NaiveTime;

/// Everything about the current configuration the composer needs to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub styler: Styler,
    pub timestamps: bool,
}

/// Appends one complete line to `buf`.
///
/// Prefix and message are both run through `style` (identity when `None`). The timestamp, when
/// enabled, is always faint and never caller-styled. A trailing `\n` is added unless the raw
/// message already ends with one; prefix and timestamp are not inspected. The final newline is
/// never inside an escape sequence. `now` is only called when timestamps are on.
pub fn compose(
    buf: &mut Vec<u8>,
    layout: Layout,
    style: Option<StyleFn>,
    prefix: &str,
    message: &str,
    now: impl FnOnce() -> NaiveTime,
) {
    let style = style.unwrap_or(crate::fmt::style::plain);
    let styler = layout.styler;

    buf.extend_from_slice(style(styler, prefix).as_bytes());
    buf.push(b' ');

    if layout.timestamps {
        let ts = styler.faint(&timestamp::format(now()));
        buf.extend_from_slice(ts.as_bytes());
        buf.push(b' ');
    }

    // The terminating newline is always ours and never styled.
    let body = message.strip_suffix('\n').unwrap_or(message);
    buf.extend_from_slice(style(styler, body).as_bytes());
    buf.push(b'\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::style;

    const PLAIN: Layout = Layout {
        styler: Styler::pass_through(),
        timestamps: false,
    };

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 34, 56).unwrap()
    }

    fn line(layout: Layout, style: Option<StyleFn>, prefix: &str, msg: &str) -> String {
        let mut buf = Vec::new();
        compose(&mut buf, layout, style, prefix, msg, noon);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_line() {
        assert_eq!(line(PLAIN, Some(style::faint), "[·]", "hi"), "[·] hi\n");
    }

    #[test]
    fn absent_style_is_identity() {
        let layout = Layout {
            styler: Styler::active(),
            timestamps: false,
        };
        assert_eq!(line(layout, None, "[+]", "hi"), "[+] hi\n");
    }

    #[test]
    fn timestamp_sits_between_prefix_and_message() {
        let layout = Layout {
            timestamps: true,
            ..PLAIN
        };
        assert_eq!(line(layout, None, "[·]", "hi"), "[·] 12:34:56 hi\n");
    }

    #[test]
    fn empty_message_with_timestamp_keeps_trailing_space() {
        let layout = Layout {
            timestamps: true,
            ..PLAIN
        };
        assert_eq!(line(layout, None, "[·]", ""), "[·] 12:34:56 \n");
    }

    #[test]
    fn empty_message_without_timestamp() {
        assert_eq!(line(PLAIN, None, "[*]", ""), "[*] \n");
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        assert_eq!(line(PLAIN, None, "[·]", "line\n"), "[·] line\n");
        assert_eq!(line(PLAIN, None, "[·]", "a\nb"), "[·] a\nb\n");
    }

    #[test]
    fn newline_stays_outside_styling() {
        let layout = Layout {
            styler: Styler::active(),
            timestamps: false,
        };
        assert_eq!(
            line(layout, Some(style::faint), "[·]", "done\n"),
            "\x1b[2m[·]\x1b[0m \x1b[2mdone\x1b[0m\n"
        );
    }

    #[test]
    fn active_styles_each_field_separately() {
        let layout = Layout {
            styler: Styler::active(),
            timestamps: true,
        };
        assert_eq!(
            line(layout, Some(style::bold), "[*]", "hi"),
            "\x1b[1m[*]\x1b[0m \x1b[2m12:34:56\x1b[0m \x1b[1mhi\x1b[0m\n"
        );
    }

    #[test]
    fn clock_untouched_without_timestamps() {
        let mut buf = Vec::new();
        compose(&mut buf, PLAIN, None, "[·]", "x", || {
            panic!("clock read with timestamps off")
        });
        assert_eq!(buf, b"[\xc2\xb7] x\n");
    }
}
