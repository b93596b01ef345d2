/// Stable `#rrggbb` colour for a label, used for the department dot.
///
/// Same string hash as the web client so both render identical colours.
pub fn string_to_colour(label: &str) -> String {
    let hash = label
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            i32::from(unit).wrapping_add((hash << 5).wrapping_sub(hash))
        });

    let [r, g, b] = [0, 8, 16].map(|shift| (hash >> shift) & 0xff);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_is_black() {
        assert_eq!(string_to_colour(""), "#000000");
    }

    #[test]
    fn single_character() {
        // 'A' = 0x41
        assert_eq!(string_to_colour("A"), "#410000");
    }

    #[test]
    fn deterministic_and_distinct() {
        let a = string_to_colour("Engineering");
        assert_eq!(a, string_to_colour("Engineering"));
        assert_ne!(a, string_to_colour("Marketing"));
        assert_eq!(a.len(), 7);
        assert!(a.starts_with('#'));
    }
}
