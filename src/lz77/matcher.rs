//! Sliding-window longest-match search.

/// Result of a longest-match search at one input position.
///
/// `offset == 0 && length == 0` means no repetition was found and only the
/// literal is emitted. `literal` is `None` exactly when the matched run
/// extends to the end of the input, so there is no following byte to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Distance back from the current position to the start of the run.
    pub offset: usize,
    /// Length of the matched run in bytes.
    pub length: usize,
    /// The byte immediately after the run, absent at end of input.
    pub literal: Option<u8>,
}

/// Find the longest run at `pos` that repeats earlier input.
///
/// Candidate start positions are `[max(0, pos - window_size), pos)`, scanned
/// ascending; runs are bounded by `min(pos + window_size, data.len())`. A
/// candidate replaces the best only on a strictly greater length, so among
/// equal-length ties the earliest start (largest offset) wins. This
/// tie-break is part of the output contract: encoding must be deterministic.
///
/// When no run is found the result is a pure literal:
/// `offset = 0, length = 0, literal = Some(data[pos])`.
///
/// # Panics
///
/// Panics if `pos >= data.len()`; the codec only calls it with a valid
/// cursor.
pub fn find_longest_match(data: &[u8], pos: usize, window_size: usize) -> Match {
    let end = usize::min(pos + window_size, data.len());
    let start = pos.saturating_sub(window_size);

    let mut best = Match {
        offset: 0,
        length: 0,
        literal: Some(data[pos]),
    };

    for i in start..pos {
        let mut length = 0;
        while pos + length < end && data[i + length] == data[pos + length] {
            length += 1;
        }
        if length > best.length {
            best = Match {
                offset: pos - i,
                length,
                // At exact end of input there is no following byte.
                literal: data.get(pos + length).copied(),
            };
        }
    }

    best
}
