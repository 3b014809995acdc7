use super::kinds::FormatKind;

/// Returns the kind whose delimiter is a literal prefix of `rest`, trying
/// kinds in [`FormatKind::PRIORITY`] order.
pub fn match_delimiter(rest: &str) -> Option<FormatKind> {
    FormatKind::PRIORITY
        .into_iter()
        .find(|kind| rest.starts_with(kind.delimiter()))
}
