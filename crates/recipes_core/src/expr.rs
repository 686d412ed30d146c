/// Comparison operators the search endpoint understands for numeric filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Ge,
    Le,
    Gt,
    Lt,
    Eq,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub op: CompareOp,
    pub value: f64,
}

// Two-character operators must be tried before their one-character prefixes.
const OPERATORS: [(&str, CompareOp); 5] = [
    (">=", CompareOp::Ge),
    ("<=", CompareOp::Le),
    (">", CompareOp::Gt),
    ("<", CompareOp::Lt),
    ("=", CompareOp::Eq),
];

/// Parses `>=4.5`, `< 30`, `=2` or a bare number. Whitespace is ignored.
///
/// `None` means the endpoint would silently drop the filter.
pub fn parse_comparison(expr: &str) -> Option<Comparison> {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    let (op, number) = OPERATORS
        .iter()
        .find_map(|(token, op)| compact.strip_prefix(token).map(|rest| (*op, rest)))
        .unwrap_or((CompareOp::Eq, compact.as_str()));
    let value = number.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(Comparison { op, value })
}
