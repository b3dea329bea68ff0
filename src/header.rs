use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a header cell is labelled.
///
/// Written as `"decimal"` / `"letter"`. Reading also accepts the integer
/// codes of older settings and metadata files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// 1, 2, 3, ...
    Decimal,
    /// A, B, ..., Z, AA, AB, ...
    Letter,
}

impl<'de> Deserialize<'de> for LabelMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Name(String),
            Code(i64),
        }

        match Stored::deserialize(deserializer)? {
            Stored::Name(name) => match name.as_str() {
                "decimal" => Ok(LabelMode::Decimal),
                "letter" => Ok(LabelMode::Letter),
                other => Err(D::Error::unknown_variant(other, &["decimal", "letter"])),
            },
            Stored::Code(code) => LabelMode::from_code(code)
                .ok_or_else(|| D::Error::custom(format!("unknown label mode code {}", code))),
        }
    }
}

impl LabelMode {
    /// Map the integer code older files used (0 = letter, 1 = decimal).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(LabelMode::Decimal),
            0 => Some(LabelMode::Letter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LabelMode::Decimal => "Decimal Number",
            LabelMode::Letter => "Letter",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("header index {index} is out of range for an axis of {len}")]
    InvalidIndex { index: usize, len: usize },
}

/// Display text for the header at zero-based `index`.
pub fn header_label(index: usize, mode: LabelMode) -> String {
    match mode {
        LabelMode::Decimal => decimal_label(index),
        LabelMode::Letter => letter_label(index),
    }
}

/// Like [`header_label`], but for a raw mode code. Unknown codes give an empty label.
pub fn header_label_for_code(index: usize, code: i64) -> String {
    LabelMode::from_code(code)
        .map(|mode| header_label(index, mode))
        .unwrap_or_default()
}

pub fn decimal_label(index: usize) -> String {
    (index as u128 + 1).to_string()
}

/// Bijective base-26: there is no zero digit, so `Z` is followed by `AA`.
pub fn letter_label(index: usize) -> String {
    let mut chars = Vec::new();
    let mut n = index as u128 + 1;
    while n > 0 {
        n -= 1;
        chars.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    chars.reverse();
    // Only ASCII uppercase bytes are ever pushed.
    String::from_utf8(chars).unwrap_or_default()
}

/// Label modes for every header on one axis of a document.
///
/// Only the modes are stored. Labels are derived from the current position
/// each time they are read, so inserting or removing headers renumbers
/// everything after the edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderAxis {
    modes: Vec<LabelMode>,
}

impl HeaderAxis {
    pub fn new(count: usize, mode: LabelMode) -> Self {
        Self {
            modes: vec![mode; count],
        }
    }

    pub fn from_modes(modes: Vec<LabelMode>) -> Self {
        Self { modes }
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn modes(&self) -> &[LabelMode] {
        &self.modes
    }

    pub fn mode(&self, index: usize) -> Option<LabelMode> {
        self.modes.get(index).copied()
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.mode(index).map(|mode| header_label(index, mode))
    }

    pub fn labels(&self) -> Vec<String> {
        self.modes
            .iter()
            .enumerate()
            .map(|(index, mode)| header_label(index, *mode))
            .collect()
    }

    /// Relabel a single header cell.
    pub fn set_mode(&mut self, index: usize, mode: LabelMode) -> Result<(), HeaderError> {
        let len = self.modes.len();
        let slot = self
            .modes
            .get_mut(index)
            .ok_or(HeaderError::InvalidIndex { index, len })?;
        *slot = mode;
        Ok(())
    }

    /// Relabel every header on the axis.
    pub fn set_all(&mut self, mode: LabelMode) {
        self.modes.iter_mut().for_each(|m| *m = mode);
    }

    pub fn insert(&mut self, at: usize, count: usize, mode: LabelMode) -> Result<(), HeaderError> {
        if at > self.modes.len() {
            return Err(HeaderError::InvalidIndex {
                index: at,
                len: self.modes.len(),
            });
        }
        self.modes.splice(at..at, std::iter::repeat_n(mode, count));
        Ok(())
    }

    pub fn remove(&mut self, at: usize, count: usize) -> Result<(), HeaderError> {
        let len = self.modes.len();
        let end = at.saturating_add(count);
        if at >= len || end > len {
            return Err(HeaderError::InvalidIndex { index: at, len });
        }
        self.modes.drain(at..end);
        Ok(())
    }

    /// Grow or shrink from the end; new headers take `mode`.
    pub fn resize(&mut self, count: usize, mode: LabelMode) {
        self.modes.resize(count, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn decimal_labels_are_one_based() {
        assert_eq!(header_label(0, LabelMode::Decimal), "1");
        assert_eq!(header_label(25, LabelMode::Decimal), "26");
        assert_eq!(header_label(999, LabelMode::Decimal), "1000");
    }

    #[test]
    fn letter_labels_follow_spreadsheet_columns() {
        let cases = [
            (0, "A"),
            (1, "B"),
            (25, "Z"),
            (26, "AA"),
            (27, "AB"),
            (51, "AZ"),
            (52, "BA"),
            (701, "ZZ"),
            (702, "AAA"),
            (16383, "XFD"),
        ];
        for (index, expected) in cases {
            assert_eq!(header_label(index, LabelMode::Letter), expected, "index {index}");
        }
    }

    #[test]
    fn letter_labels_do_not_overflow_at_usize_max() {
        let label = letter_label(usize::MAX);
        assert!(!label.is_empty());
        assert!(label.bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn unknown_mode_code_gives_empty_label() {
        assert_eq!(header_label_for_code(4, 1), "5");
        assert_eq!(header_label_for_code(4, 0), "E");
        assert_eq!(header_label_for_code(4, 2), "");
        assert_eq!(header_label_for_code(4, -1), "");
    }

    #[test]
    fn label_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LabelMode::Letter).unwrap(), "\"letter\"");
        let mode: LabelMode = serde_json::from_str("\"decimal\"").unwrap();
        assert_eq!(mode, LabelMode::Decimal);
    }

    #[test]
    fn label_mode_reads_legacy_integer_codes() {
        let modes: Vec<LabelMode> = serde_json::from_str("[0, 1, \"letter\"]").unwrap();
        assert_eq!(modes, vec![LabelMode::Letter, LabelMode::Decimal, LabelMode::Letter]);
        assert!(serde_json::from_str::<LabelMode>("2").is_err());
        assert!(serde_json::from_str::<LabelMode>("\"roman\"").is_err());
    }

    #[test]
    fn set_mode_touches_one_header_only() {
        let mut axis = HeaderAxis::new(4, LabelMode::Letter);
        axis.set_mode(2, LabelMode::Decimal).unwrap();
        assert_eq!(axis.labels(), vec!["A", "B", "3", "D"]);
    }

    #[test]
    fn set_mode_out_of_range() {
        let mut axis = HeaderAxis::new(2, LabelMode::Letter);
        assert_eq!(
            axis.set_mode(2, LabelMode::Decimal),
            Err(HeaderError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn set_all_relabels_whole_axis() {
        let mut axis = HeaderAxis::new(3, LabelMode::Letter);
        axis.set_mode(0, LabelMode::Decimal).unwrap();
        axis.set_all(LabelMode::Decimal);
        assert_eq!(axis.labels(), vec!["1", "2", "3"]);
        axis.set_all(LabelMode::Letter);
        assert_eq!(axis.labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn insert_renumbers_following_headers() {
        let mut axis = HeaderAxis::new(3, LabelMode::Letter);
        axis.set_mode(2, LabelMode::Decimal).unwrap();
        axis.insert(1, 2, LabelMode::Letter).unwrap();
        assert_eq!(axis.labels(), vec!["A", "B", "C", "D", "5"]);
    }

    #[test]
    fn insert_at_end_is_allowed() {
        let mut axis = HeaderAxis::new(1, LabelMode::Decimal);
        axis.insert(1, 1, LabelMode::Decimal).unwrap();
        assert_eq!(axis.labels(), vec!["1", "2"]);
        assert!(axis.insert(5, 1, LabelMode::Decimal).is_err());
    }

    #[test]
    fn remove_renumbers_following_headers() {
        let mut axis = HeaderAxis::new(5, LabelMode::Decimal);
        axis.set_mode(4, LabelMode::Letter).unwrap();
        axis.remove(0, 2).unwrap();
        assert_eq!(axis.labels(), vec!["1", "2", "C"]);
        assert!(axis.remove(3, 1).is_err());
        assert!(axis.remove(2, 2).is_err());
    }

    #[test]
    fn resize_keeps_existing_modes() {
        let mut axis = HeaderAxis::new(2, LabelMode::Decimal);
        axis.resize(4, LabelMode::Letter);
        assert_eq!(axis.labels(), vec!["1", "2", "C", "D"]);
        axis.resize(1, LabelMode::Letter);
        assert_eq!(axis.labels(), vec!["1"]);
    }

    proptest! {
        #[test]
        fn decimal_is_index_plus_one(i in 0usize..10_000_000) {
            prop_assert_eq!(header_label(i, LabelMode::Decimal), (i + 1).to_string());
        }

        #[test]
        fn letter_label_decodes_back_to_index(i in 0usize..10_000_000) {
            let label = header_label(i, LabelMode::Letter);
            let decoded = label
                .bytes()
                .fold(0usize, |acc, b| acc * 26 + (b - b'A') as usize + 1);
            prop_assert_eq!(decoded, i + 1);
        }

        #[test]
        fn letter_labels_are_strictly_ordered(i in 0usize..1_000_000) {
            let a = header_label(i, LabelMode::Letter);
            let b = header_label(i + 1, LabelMode::Letter);
            prop_assert!(a.len() < b.len() || (a.len() == b.len() && a < b));
        }

        #[test]
        fn labels_match_position_after_edits(
            len in 1usize..40,
            at in 0usize..40,
            count in 1usize..5,
        ) {
            let mut axis = HeaderAxis::new(len, LabelMode::Letter);
            let at = at % len;
            axis.set_mode(at, LabelMode::Decimal).unwrap();
            axis.insert(at, count, LabelMode::Letter).unwrap();
            for (i, label) in axis.labels().into_iter().enumerate() {
                prop_assert_eq!(label, header_label(i, axis.mode(i).unwrap()));
            }
            prop_assert_eq!(axis.mode(at + count), Some(LabelMode::Decimal));
        }
    }
}
