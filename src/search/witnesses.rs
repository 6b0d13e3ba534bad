use crate::graphs::Vertex;

/// Expands `(source, target)` into the full vertex sequence of the path.
///
/// `witness(tail, head)` names a vertex lying on the path from `tail` to
/// `head`, or `None` if `head` follows `tail` directly. Pairs are split on an
/// explicit stack, so arbitrarily long paths do not grow the call stack.
/// Returns `None` once more than `max_splits` splits were needed.
pub fn unpack_witnesses<F>(
    source: Vertex,
    target: Vertex,
    max_splits: usize,
    witness: F,
) -> Option<Vec<Vertex>>
where
    F: Fn(Vertex, Vertex) -> Option<Vertex>,
{
    let mut vertices = vec![source];
    let mut pairs = vec![(source, target)];
    let mut splits = 0;

    while let Some((tail, head)) = pairs.pop() {
        if let Some(skipped_vertex) = witness(tail, head) {
            splits += 1;
            if splits > max_splits {
                return None;
            }
            // left half on top
            pairs.push((skipped_vertex, head));
            pairs.push((tail, skipped_vertex));
        } else {
            vertices.push(head);
        }
    }

    Some(vertices)
}
