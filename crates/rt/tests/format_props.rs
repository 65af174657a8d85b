// Fennec - RISC-V SoC Bring-Up Runtime
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Property tests for the numeric formatting paths.

use fennec_rt::format::{sprintf, Arg};
use proptest::prelude::*;

fn fmt(template: &str, args: &[Arg<'_>]) -> String {
    let mut buf = [0u8; 128];
    let n = sprintf(&mut buf, template, args);
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

proptest! {
    #[test]
    fn test_octal_round_trip(v in any::<u64>()) {
        let s = fmt("%llo", &[Arg::from(v)]);
        prop_assert_eq!(u64::from_str_radix(&s, 8).unwrap(), v);
    }

    #[test]
    fn test_decimal_round_trip(v in any::<u64>()) {
        let s = fmt("%llu", &[Arg::from(v)]);
        prop_assert_eq!(u64::from_str_radix(&s, 10).unwrap(), v);
    }

    #[test]
    fn test_hex_round_trip(v in any::<u64>()) {
        let s = fmt("%llx", &[Arg::from(v)]);
        prop_assert_eq!(u64::from_str_radix(&s, 16).unwrap(), v);
    }

    #[test]
    fn test_signed_sign_and_magnitude(v in (i64::MIN + 1)..=i64::MAX) {
        let s = fmt("%lld", &[Arg::from(v)]);
        if v < 0 {
            prop_assert!(s.starts_with('-'));
            prop_assert_eq!(u64::from_str_radix(&s[1..], 10).unwrap(), v.unsigned_abs());
        } else {
            prop_assert!(!s.starts_with('-'));
            prop_assert_eq!(u64::from_str_radix(&s, 10).unwrap(), v as u64);
        }
    }

    #[test]
    fn test_width_is_a_minimum(v in any::<u32>(), width in 0i32..20) {
        let s = fmt("%*u", &[Arg::from(width), Arg::from(v)]);
        prop_assert!(s.len() as i32 >= width);
        prop_assert_eq!(s.trim_start().parse::<u32>().unwrap(), v);
    }
}
