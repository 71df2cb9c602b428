use crate::frequency::FrequencyTable;

/// A small skewed table whose two rarest symbols tie:
///   a: 17, b: 8, c: 7, d: 14, '\n': 1, f: 1
pub fn sample_table() -> FrequencyTable {
    [
        (b'a', 17),
        (b'b', 8),
        (b'c', 7),
        (b'd', 14),
        (b'\n', 1),
        (b'f', 1),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts() {
        let table = sample_table();
        assert_eq!(table.count(b'a'), 17);
        assert_eq!(table.count(b'\n'), 1);
        assert_eq!(table.count(b'e'), 0);
    }

    #[test]
    fn test_total() {
        assert_eq!(sample_table().total().unwrap(), 48);
        assert_eq!(sample_table().distinct(), 6);
    }
}
