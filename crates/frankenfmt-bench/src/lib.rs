//! Shared inputs for the frankenfmt benchmarks.

/// Format strings in the shape real call sites use.
pub const PRINTF_CORPUS: &[(&str, &str)] = &[
    ("plain", "connection established, waiting for peer"),
    ("single_int", "%d"),
    ("log_line", "[%s:%d] %s: %-20s took %8.3f ms (%zu bytes)\n"),
    ("positional", "%2$s has %1$d items, %3$*4$.*5$Lf%% done"),
    ("wide", "%ls %lc %S %C"),
];

pub const SCANF_CORPUS: &[(&str, &str)] = &[
    ("single_int", "%d"),
    ("record", "%63s %d %lf %[^\n]%n"),
    ("classes", "%[a-zA-Z0-9_] %[^]:;,]"),
];

/// A printf string with `n` directives, cycling through common conversions.
#[must_use]
pub fn scaled_printf_format(n: usize) -> String {
    const PIECES: &[&str] = &["%d ", "%-8s ", "%5.2f ", "%lld ", "%zu ", "%% ", "%p "];
    PIECES.iter().cycle().take(n).copied().collect()
}

/// A printf string whose `n` directives all use positional arguments, in
/// reverse order.
#[must_use]
pub fn reversed_positional_format(n: usize) -> String {
    (1..=n).rev().map(|i| format!("%{i}$d ")).collect()
}
