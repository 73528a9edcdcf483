use std::time::Duration;

use unicode_width::UnicodeWidthStr;

/// Lays words out in fixed-width columns within `total_width` cells.
///
/// Every cell is sized to the widest word plus a two-cell gutter, so rows
/// line up no matter which letters an arrangement starts with.
pub fn column_rows(words: &[String], total_width: usize) -> Vec<String> {
    let widest: usize = words
        .iter()
        .map(|word| UnicodeWidthStr::width(word.as_str()))
        .max()
        .unwrap_or(1);
    let cell: usize = widest + 2;
    let per_row: usize = (total_width / cell).max(1);

    words
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|word| {
                    let pad: usize = cell - UnicodeWidthStr::width(word.as_str());
                    format!("{word}{}", " ".repeat(pad))
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Renders a count with thousands separators, e.g. `3628800` → `3,628,800`.
pub fn group_thousands(value: u128) -> String {
    let digits: String = value.to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Sub-second runs read better in milliseconds.
pub fn duration(total: Duration) -> String {
    if total.as_secs_f64() < 1.0 {
        format!("{}ms", total.as_millis())
    } else {
        format!("{:.2}s", total.as_secs_f64())
    }
}
