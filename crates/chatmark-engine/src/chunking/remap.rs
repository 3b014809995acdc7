use crate::{annotation::Annotation, span::Span};

/// Projects global `annotations` onto one fragment of the plain text.
///
/// `fragment_start` is the byte offset of `fragment` within the full plain
/// text. Annotations lying entirely before or entirely after the fragment are
/// skipped; the rest are clipped to it, rebased to fragment-local byte
/// offsets, and get their UTF-16 position recomputed against `fragment`.
/// Order and kind are preserved, so a span crossing a fragment boundary shows
/// up truncated in every fragment it touches. Bounds are inclusive: empty
/// spans survive, and a span ending exactly where the fragment starts (or
/// starting where it ends) becomes an empty annotation at that edge.
pub fn remap_annotations(
    fragment: &str,
    fragment_start: usize,
    annotations: &[Annotation],
) -> Vec<Annotation> {
    let bounds = Span::new(fragment_start, fragment_start + fragment.len());

    annotations
        .iter()
        .filter_map(|annotation| {
            let clipped = annotation.span.clip_to(bounds)?;
            let local = clipped.rebase(fragment_start);
            Some(Annotation::new(annotation.kind, fragment, local))
        })
        .collect()
}
