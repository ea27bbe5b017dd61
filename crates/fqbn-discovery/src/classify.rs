//! Line classification for board definition files
//!
//! Definition files are line-oriented with no section markers; the only
//! lines the resolver cares about are the two identifier declaration shapes:
//!
//! ```text
//! <boardKey>.vid.<n>=0x<4 hex digits>
//! <boardKey>.pid.<n>=0x<4 hex digits>
//! ```
//!
//! Every other line is noise and must not change parser state.

use regex::Regex;

/// Classification of one definition file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineClass<'a> {
    /// Vendor id declaration: `uno.vid.0=0x2341`
    Vendor { board_key: &'a str, value: &'a str },
    /// Product id declaration: `uno.pid.0=0x0043`
    Product { board_key: &'a str, value: &'a str },
    /// Any other line
    Other,
}

/// Classifier holding the two declaration patterns, compiled once.
pub(crate) struct LineClassifier {
    vid_pattern: Regex,
    pid_pattern: Regex,
}

impl LineClassifier {
    pub(crate) fn new() -> Self {
        let vid_pattern = Regex::new(r"^([A-Za-z]\w*)\.vid\.[0-9]=(0x[[:xdigit:]]{4})$")
            .expect("Invalid vid pattern regex");
        let pid_pattern = Regex::new(r"^([A-Za-z]\w*)\.pid\.[0-9]=(0x[[:xdigit:]]{4})$")
            .expect("Invalid pid pattern regex");

        Self {
            vid_pattern,
            pid_pattern,
        }
    }

    /// Classify one line. Vendor declarations are checked before product
    /// declarations; the captured value is the raw `0x`-prefixed token with
    /// its case preserved.
    pub(crate) fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(caps) = self.vid_pattern.captures(line) {
            if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
                return LineClass::Vendor {
                    board_key: key.as_str(),
                    value: value.as_str(),
                };
            }
        }
        if let Some(caps) = self.pid_pattern.captures(line) {
            if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
                return LineClass::Product {
                    board_key: key.as_str(),
                    value: value.as_str(),
                };
            }
        }
        LineClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vid_declaration() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("uno.vid.0=0x2341"),
            LineClass::Vendor {
                board_key: "uno",
                value: "0x2341"
            }
        );
    }

    #[test]
    fn test_classify_pid_declaration() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("uno.pid.0=0x0043"),
            LineClass::Product {
                board_key: "uno",
                value: "0x0043"
            }
        );
    }

    #[test]
    fn test_hex_digits_case_insensitive_value_preserved() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("leonardo.vid.1=0x2A03"),
            LineClass::Vendor {
                board_key: "leonardo",
                value: "0x2A03"
            }
        );
    }

    #[test]
    fn test_board_key_may_contain_digits_and_underscores() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("mega2560.vid.0=0x2341"),
            LineClass::Vendor {
                board_key: "mega2560",
                value: "0x2341"
            }
        );
        assert_eq!(
            classifier.classify("pro_mini.pid.3=0x0044"),
            LineClass::Product {
                board_key: "pro_mini",
                value: "0x0044"
            }
        );
    }

    #[test]
    fn test_other_lines_are_noise() {
        let classifier = LineClassifier::new();
        for line in [
            "uno.upload.tool=avrdude",
            "uno.name=Arduino Uno",
            "# comment",
            "",
            "uno.build.vid.0=0x2341",
            "uno.vid.0=0x2341 trailing",
            "uno.vid.10=0x2341",
            "uno.vid.0=0x23",
            "uno.vid.0=2341",
        ] {
            assert_eq!(classifier.classify(line), LineClass::Other, "line: {line:?}");
        }
    }
}
