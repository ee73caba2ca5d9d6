//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// True if `haystack` contains any of `needles`. Callers lowercase both sides.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| haystack.contains(n))
}

/// Rounded whole-number percentage; an empty whole is 0%, never NaN.
pub fn percentage(part: usize, whole: usize) -> u32 {
  if whole == 0 { return 0; }
  ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Extract the minutes from an estimated-time label such as "15 min".
/// Keeps only the digits; labels without digits count as 0.
pub fn minutes_from_label(label: &str) -> u32 {
  let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
  digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_all_keys() {
    let out = fill_template("Processing: {logic} ({logic})", &[("logic", "x > 1")]);
    assert_eq!(out, "Processing: x > 1 (x > 1)");
  }

  #[test]
  fn percentage_of_empty_whole_is_zero() {
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(4, 4), 100);
  }

  #[test]
  fn minutes_from_label_reads_digits() {
    assert_eq!(minutes_from_label("15 min"), 15);
    assert_eq!(minutes_from_label("about an hour"), 0);
  }
}
