use std::io::Cursor;

use linecmp::{checksum_reader, compare_readers, Comparison, DigestAlgorithm};
use proptest::prelude::*;

fn lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,4}", 0..8)
}

fn text(lines: &[String], trailing_newline: bool) -> String {
    let mut s = lines.join("\n");
    if trailing_newline && !lines.is_empty() {
        s.push('\n');
    }
    s
}

fn cmp(a: &str, b: &str) -> Comparison {
    compare_readers(Cursor::new(a), Cursor::new(b)).unwrap()
}

fn md5(s: &str) -> String {
    checksum_reader(&mut Cursor::new(s), DigestAlgorithm::Md5)
        .unwrap()
        .to_hex()
}

proptest! {
    #[test]
    fn comparison_is_reflexive(lines in lines(), nl in any::<bool>()) {
        let a = text(&lines, nl);
        prop_assert_eq!(cmp(&a, &a), Comparison::Identical);
    }

    #[test]
    fn comparison_is_symmetric(
        a in lines(),
        b in lines(),
        nl_a in any::<bool>(),
        nl_b in any::<bool>()
    ) {
        let (a, b) = (text(&a, nl_a), text(&b, nl_b));
        match (cmp(&a, &b), cmp(&b, &a)) {
            (
                Comparison::Differ { at_line: l1, left: x1, right: y1 },
                Comparison::Differ { at_line: l2, left: x2, right: y2 },
            ) => {
                prop_assert_eq!(l1, l2);
                prop_assert_eq!(x1, y2);
                prop_assert_eq!(y1, x2);
            }
            (ab, ba) => prop_assert_eq!(ab, ba),
        }
    }

    #[test]
    fn line_equality_agrees_with_checksum_equality(
        a in lines(),
        b in lines(),
        nl_a in any::<bool>(),
        nl_b in any::<bool>()
    ) {
        let (a, b) = (text(&a, nl_a), text(&b, nl_b));
        prop_assert_eq!(cmp(&a, &b).is_identical(), a == b);
        prop_assert_eq!(md5(&a) == md5(&b), a == b);
    }

    #[test]
    fn reports_first_changed_line(
        lines in prop::collection::vec("[a-c]{1,4}", 1..8),
        idx in any::<prop::sample::Index>()
    ) {
        let k = idx.index(lines.len());
        let mut changed = lines.clone();
        changed[k] = format!("{}!", changed[k]);
        let expected = Comparison::Differ {
            at_line: k + 1,
            left: lines[k].clone(),
            right: changed[k].clone(),
        };
        prop_assert_eq!(cmp(&text(&lines, true), &text(&changed, true)), expected);
    }

    #[test]
    fn appended_lines_are_a_length_mismatch(
        lines in lines(),
        extra in prop::collection::vec("[a-c]{0,4}", 1..4)
    ) {
        let short = text(&lines, true);
        let mut long = short.clone();
        for line in &extra {
            long.push_str(line);
            long.push('\n');
        }
        prop_assert_eq!(cmp(&short, &long), Comparison::LengthMismatch);
    }
}
