use proptest::prelude::*;
use utfx::*;

#[ctor::ctor]
fn init() {
    dev_utils::setup_test_log();
}

fn all(len: usize) -> InputLength {
    InputLength::Exactly(len)
}

fn measure_utf32_to_utf8(input: &[u32]) -> usize {
    convert_utf32_to_utf8(input, all(input.len()), None, Capacity::Unbounded, false).written
}

fn measure_utf32_to_modified_utf8(input: &[u32]) -> usize {
    convert_utf32_to_modified_utf8(input, all(input.len()), None, Capacity::Unbounded, false)
        .written
}

fn scalars(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Sizes at which a truncated conversion may legally stop: the sums of whole groups.
fn group_boundaries(input: &[u32], measure: fn(&[u32]) -> usize) -> Vec<usize> {
    let mut ans = vec![0];
    let mut total = 0;
    for value in input {
        total += measure(std::slice::from_ref(value));
        ans.push(total);
    }

    ans
}

proptest! {
    #[test]
    fn utf8_matches_std(text in any::<String>()) {
        let input = scalars(&text);
        let mut out = vec![0u8; text.len()];
        let converted = convert_utf32_to_utf8(
            &input,
            all(input.len()),
            Some(&mut out),
            Capacity::Unbounded,
            false,
        );
        prop_assert_eq!(converted.status, Status::Ok);
        prop_assert_eq!(converted.written, text.len());
        prop_assert_eq!(out, text.as_bytes());
    }

    #[test]
    fn utf16_matches_std(text in any::<String>()) {
        let expected: Vec<u16> = text.encode_utf16().collect();
        let mut out = vec![0u16; expected.len()];
        let converted = convert_utf8_to_utf16(
            text.as_bytes(),
            all(text.len()),
            Some(&mut out),
            Capacity::Unbounded,
            false,
        );
        prop_assert_eq!(converted.units::<u16>(), expected.len());
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn round_trip_through_every_form(text in any::<String>()) {
        let input = scalars(&text);
        let len = all(input.len());
        let mut utf8 = vec![0u8; 4 * input.len()];
        let mut mutf8 = vec![0u8; 6 * input.len()];
        let mut utf16 = vec![0u16; 2 * input.len()];
        let mut back = vec![0u32; input.len()];

        let n = convert_utf32_to_utf8(&input, len, Some(&mut utf8), Capacity::Unbounded, false).written;
        let m = convert_utf8_to_utf32(&utf8, all(n), Some(&mut back), Capacity::Unbounded, false);
        prop_assert_eq!(m.units::<u32>(), input.len());
        prop_assert_eq!(&back, &input);

        let n = convert_utf32_to_modified_utf8(&input, len, Some(&mut mutf8), Capacity::Unbounded, false).written;
        prop_assert!(!mutf8[..n].contains(&0));
        let m = convert_modified_utf8_to_utf32(&mutf8, all(n), Some(&mut back), Capacity::Unbounded, false);
        prop_assert_eq!(m.units::<u32>(), input.len());
        prop_assert_eq!(&back, &input);

        let n = convert_utf32_to_utf16(&input, len, Some(&mut utf16), Capacity::Unbounded, false).units::<u16>();
        let m = convert_utf16_to_utf32(&utf16, all(n), Some(&mut back), Capacity::Unbounded, false);
        prop_assert_eq!(m.units::<u32>(), input.len());
        prop_assert_eq!(&back, &input);
    }

    #[test]
    fn direct_8bit_conversions_agree_with_utf32_path(text in any::<String>()) {
        let input = scalars(&text);
        let mut direct = vec![0u8; 6 * input.len() + 1];
        let mut via_utf32 = vec![0u8; 6 * input.len() + 1];
        let a = convert_utf8_to_modified_utf8(text.as_bytes(), all(text.len()), Some(&mut direct), Capacity::Unbounded, true);
        let b = convert_utf32_to_modified_utf8(&input, all(input.len()), Some(&mut via_utf32), Capacity::Unbounded, true);
        prop_assert_eq!(a, b);
        prop_assert_eq!(&direct, &via_utf32);

        let mut standard = vec![0u8; text.len()];
        let c = convert_modified_utf8_to_utf8(&direct, all(a.written - 1), Some(&mut standard), Capacity::Unbounded, false);
        prop_assert_eq!(c.written, text.len());
        prop_assert_eq!(standard, text.as_bytes());
    }

    #[test]
    fn modified_utf8_never_contains_zero_byte(values in prop::collection::vec(any::<u32>(), 0..32)) {
        let mut out = vec![0xFFu8; 6 * values.len()];
        let converted = convert_utf32_to_modified_utf8(
            &values,
            all(values.len()),
            Some(&mut out),
            Capacity::Unbounded,
            false,
        );
        prop_assert_eq!(converted.status, Status::Ok);
        prop_assert!(!out[..converted.written].contains(&0));

        let expected: usize = values
            .iter()
            .map(|v| if *v == 0 { 2 } else if *v >= 0x1_0000 { 6 } else { measure_utf32_to_utf8(&[*v]) })
            .sum();
        prop_assert_eq!(converted.written, expected);
    }

    #[test]
    fn length_agrees_with_identity_measurement(units in prop::collection::vec(any::<u16>(), 0..64)) {
        let len = length_utf16(&units);
        let measured = convert_utf16_to_utf16(&units, InputLength::UntilTerminator, None, Capacity::Unbounded, false);
        prop_assert_eq!(measured.units::<u16>(), len);

        let wide: Vec<u32> = units.iter().map(|u| *u as u32).collect();
        let measured = convert_utf32_to_utf32(&wide, InputLength::UntilTerminator, None, Capacity::Unbounded, false);
        prop_assert_eq!(measured.units::<u32>(), length_utf32(&wide));
    }

    #[test]
    fn utf8_length_agrees_with_identity_measurement(text in "[^\\x00]*") {
        let mut bytes = text.clone().into_bytes();
        bytes.push(0);
        bytes.extend_from_slice(b"tail");
        let measured = convert_utf8_to_utf8(&bytes, InputLength::UntilTerminator, None, Capacity::Unbounded, false);
        prop_assert_eq!(measured.written, length_utf8(&bytes));
        prop_assert_eq!(measured.written, text.len());

        let mut modified = vec![0u8; 2 * bytes.len()];
        let n = convert_utf8_to_modified_utf8(&bytes, InputLength::UntilTerminator, Some(&mut modified), Capacity::Unbounded, true);
        prop_assert_eq!(length_modified_utf8(&modified), n.written - 1);
        let measured = convert_modified_utf8_to_modified_utf8(&modified, InputLength::UntilTerminator, None, Capacity::Unbounded, false);
        prop_assert_eq!(measured.written, length_modified_utf8(&modified));
    }

    #[test]
    fn truncation_stops_on_group_boundaries(text in any::<String>(), cut in 0usize..64) {
        let input = scalars(&text);
        let encoders: [(fn(&[u32]) -> usize, bool); 2] = [
            (measure_utf32_to_utf8, false),
            (measure_utf32_to_modified_utf8, true),
        ];
        for (measure, modified) in encoders {
            let full = measure(&input);
            let boundaries = group_boundaries(&input, measure);
            let cap = cut.min(full);
            let mut out = vec![0u8; full];
            let mut truncated = vec![0u8; cap];
            let len = all(input.len());
            let converted = if modified {
                convert_utf32_to_modified_utf8(&input, len, Some(&mut out), Capacity::Unbounded, false);
                convert_utf32_to_modified_utf8(&input, len, Some(&mut truncated), Capacity::Bounded(cap), false)
            } else {
                convert_utf32_to_utf8(&input, len, Some(&mut out), Capacity::Unbounded, false);
                convert_utf32_to_utf8(&input, len, Some(&mut truncated), Capacity::Bounded(cap), false)
            };

            let expected = boundaries.iter().copied().filter(|b| *b <= cap).max().unwrap_or(0);
            prop_assert_eq!(converted.written, expected);
            prop_assert_eq!(converted.is_ok(), cap == full);
            prop_assert_eq!(&truncated[..expected], &out[..expected]);
        }
    }

    #[test]
    fn utf16_truncation_keeps_pairs_whole(text in any::<String>(), cut in 0usize..64) {
        let units: Vec<u16> = text.encode_utf16().collect();
        let cap = cut.min(units.len());
        let converted = convert_utf16_to_utf32(
            &units,
            all(units.len()),
            None,
            Capacity::Bounded(cap * 4),
            false,
        );
        prop_assert_eq!(converted.units::<u32>(), text.chars().count().min(cap));

        let converted = convert_utf16_to_utf16(&units, all(units.len()), None, Capacity::Bounded(cap * 2), false);
        let mut consumed = 0;
        for c in text.chars() {
            if consumed + c.len_utf16() > cap {
                break;
            }
            consumed += c.len_utf16();
        }
        prop_assert_eq!(converted.units::<u16>(), consumed);
    }

    #[test]
    fn terminator_fits_only_after_reservation(text in "[a-z]{0,16}", cap in 0usize..20) {
        let converted = convert_utf8_to_utf8(text.as_bytes(), all(text.len()), None, Capacity::Bounded(cap), true);
        if cap == 0 {
            prop_assert_eq!(converted.written, 0);
            prop_assert_eq!(converted.status, Status::CapacityExceeded);
        } else {
            prop_assert_eq!(converted.written, text.len().min(cap - 1) + 1);
            prop_assert_eq!(converted.is_ok(), text.len() < cap);
        }
    }
}
