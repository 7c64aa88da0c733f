pub const MONTH_PHASES: [&str; 24] = [
    "early January",
    "late January",
    "early February",
    "late February",
    "early March",
    "late March",
    "early April",
    "late April",
    "early May",
    "late May",
    "early June",
    "late June",
    "early July",
    "late July",
    "early August",
    "late August",
    "early September",
    "late September",
    "early October",
    "late October",
    "early November",
    "late November",
    "early December",
    "late December",
];

/// Turns a seed into a phrase like "from early March to late September".
///
/// Uses euclidean remainders so negative seeds still land on a valid phase.
pub fn span_for(seed: i64) -> String {
    let len = MONTH_PHASES.len() as i64;
    let start = seed.rem_euclid(len) as usize;
    // 先取餘數再乘，避免極端種子溢位
    let end = ((start as i64) * 7 + 13).rem_euclid(len) as usize;
    format!("from {} to {}", MONTH_PHASES[start], MONTH_PHASES[end])
}
