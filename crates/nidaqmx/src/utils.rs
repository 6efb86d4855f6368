//! Channel-name list codec.
//!
//! The driver exchanges channel lists as one flat string: comma-separated
//! names where a maximal run of consecutively numbered names collapses into
//! range syntax (`Dev1/ai0:3`). This module converts losslessly between the
//! flat form and the unflattened sequence of individual names, preserving
//! order and multiplicity in both directions.

/// Expand a flat channel string into individual names.
///
/// Range syntax expands inclusively in either direction: `ai0:2` yields
/// `ai0, ai1, ai2` and `ai2:0` yields `ai2, ai1, ai0`. Tokens without a
/// trailing range pass through verbatim.
pub fn unflatten_channel_string(names: &str) -> Vec<String> {
    let mut out = Vec::new();
    for token in names.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match parse_range(token) {
            Some((prefix, lo, hi)) if lo <= hi => {
                for i in lo..=hi {
                    out.push(format!("{prefix}{i}"));
                }
            }
            Some((prefix, lo, hi)) => {
                for i in (hi..=lo).rev() {
                    out.push(format!("{prefix}{i}"));
                }
            }
            None => out.push(token.to_string()),
        }
    }
    out
}

/// Collapse individual names into the driver's flat form.
///
/// Maximal runs of two or more names sharing a prefix and stepping by one
/// (ascending or descending) collapse into range syntax; everything else is
/// joined verbatim. Numbers written with leading zeros never collapse, so
/// the round trip through [`unflatten_channel_string`] is exact.
pub fn flatten_channel_string<S: AsRef<str>>(names: &[S]) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut i = 0;
    while i < names.len() {
        let name = names[i].as_ref();
        let Some((prefix, start)) = split_trailing_number(name) else {
            out.push(name.to_string());
            i += 1;
            continue;
        };

        let mut end = start;
        let mut direction: i64 = 0;
        let mut j = i + 1;
        while j < names.len() {
            let Some((next_prefix, next)) = split_trailing_number(names[j].as_ref()) else {
                break;
            };
            if next_prefix != prefix {
                break;
            }
            let step = next as i64 - end as i64;
            if direction == 0 {
                if step != 1 && step != -1 {
                    break;
                }
                direction = step;
            } else if step != direction {
                break;
            }
            end = next;
            j += 1;
        }

        if j > i + 1 {
            out.push(format!("{prefix}{start}:{end}"));
        } else {
            out.push(name.to_string());
        }
        i = j;
    }
    out.join(",")
}

/// Derive the virtual-channel name a factory reports after the driver call
/// succeeds.
///
/// With an assigned name covering N physical channels the driver suffixes
/// `0:N-1`; a single channel keeps the assigned name unchanged; without an
/// assigned name the physical-channel spec is used verbatim.
pub(crate) fn assigned_channel_name(physical_channel: &str, name_to_assign: Option<&str>) -> String {
    match name_to_assign {
        None | Some("") => physical_channel.to_string(),
        Some(name) => {
            let count = unflatten_channel_string(physical_channel).len();
            if count > 1 {
                format!("{name}0:{}", count - 1)
            } else {
                name.to_string()
            }
        }
    }
}

/// Split `name` into a prefix and its trailing decimal number.
///
/// Returns `None` when there is no trailing number or the number carries a
/// leading zero (collapsing those would not round-trip).
fn split_trailing_number(name: &str) -> Option<(&str, u64)> {
    let digit_start = name
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    if digit_start == name.len() {
        return None;
    }
    let digits = &name[digit_start..];
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    Some((&name[..digit_start], digits.parse().ok()?))
}

/// Parse a `prefix<m>:<n>` range token.
fn parse_range(token: &str) -> Option<(&str, u64, u64)> {
    let (head, tail) = token.split_once(':')?;
    let hi: u64 = tail.parse().ok()?;
    let (prefix, lo) = split_trailing_number(head)?;
    Some((prefix, lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unflatten_expands_ranges() {
        assert_eq!(
            unflatten_channel_string("Dev1/ai0:3"),
            vec!["Dev1/ai0", "Dev1/ai1", "Dev1/ai2", "Dev1/ai3"]
        );
        assert_eq!(
            unflatten_channel_string("Dev1/port0/line0:1,Dev2/ai5"),
            vec!["Dev1/port0/line0", "Dev1/port0/line1", "Dev2/ai5"]
        );
    }

    #[test]
    fn test_unflatten_descending_range() {
        assert_eq!(
            unflatten_channel_string("ai3:1"),
            vec!["ai3", "ai2", "ai1"]
        );
    }

    #[test]
    fn test_unflatten_passes_plain_names_through() {
        assert_eq!(
            unflatten_channel_string("myChan, other"),
            vec!["myChan", "other"]
        );
        assert!(unflatten_channel_string("").is_empty());
    }

    #[test]
    fn test_flatten_collapses_consecutive_runs() {
        assert_eq!(
            flatten_channel_string(&["Dev1/ai0", "Dev1/ai1", "Dev1/ai2"]),
            "Dev1/ai0:2"
        );
        assert_eq!(
            flatten_channel_string(&["Dev1/ai0", "Dev1/ai2"]),
            "Dev1/ai0,Dev1/ai2"
        );
        assert_eq!(flatten_channel_string(&["ai3", "ai2", "ai1", "x"]), "ai3:1,x");
        assert_eq!(flatten_channel_string::<&str>(&[]), "");
    }

    #[test]
    fn test_flatten_respects_prefix_boundaries() {
        assert_eq!(
            flatten_channel_string(&["Dev1/ai1", "Dev2/ai2"]),
            "Dev1/ai1,Dev2/ai2"
        );
    }

    #[test]
    fn test_round_trip_preserves_order_and_multiplicity() {
        let cases: &[&[&str]] = &[
            &["Dev1/ai0", "Dev1/ai1", "Dev1/ai2", "Dev1/ai3"],
            &["Dev1/ai3", "Dev1/ai2", "Dev2/ai0"],
            &["myChan"],
            &["a1", "a1", "a2"],
            &["Dev1/port0/line7", "Dev1/port0/line6", "Dev1/port0/line5"],
            &["ai007", "ai008"],
        ];
        for &case in cases {
            let flat = flatten_channel_string(case);
            assert_eq!(unflatten_channel_string(&flat), case, "via {flat:?}");
        }
    }

    #[test]
    fn test_assigned_name_suffixes_multi_channel_specs() {
        assert_eq!(assigned_channel_name("Dev1/ai0:3", Some("v")), "v0:3");
        assert_eq!(assigned_channel_name("Dev1/ai0", Some("myChan")), "myChan");
        assert_eq!(assigned_channel_name("Dev1/ai0:3", None), "Dev1/ai0:3");
        assert_eq!(assigned_channel_name("Dev1/ai0", Some("")), "Dev1/ai0");
        assert_eq!(
            assigned_channel_name("Dev1/ai0,Dev1/ai4", Some("pair")),
            "pair0:1"
        );
    }
}
