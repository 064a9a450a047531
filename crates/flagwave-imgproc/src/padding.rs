/// A border type used when a kernel or a sampler reaches outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// This border type takes the outermost row or column of pixels and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    #[default]
    Reflect101,

    /// This border type reflects the pixel values at the boundary, starting with the edge pixel itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,
}

impl PaddingMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        // the mirrored sequence repeats every 2 * len samples
        let len = len as isize;
        let j = i.rem_euclid(2 * len);
        (if j < len { j } else { 2 * len - 1 - j }) as usize
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        // the edge is not repeated, so the period is 2 * len - 2
        let len = len as isize;
        let j = i.rem_euclid(2 * len - 2);
        (if j < len { j } else { 2 * len - 2 - j }) as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the padding mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    ///
    /// The mapping takes constant time however far `i` lies outside the
    /// image. `len` must be greater than zero.
    ///
    /// # Example
    ///
    /// ```
    /// use flagwave_imgproc::padding::PaddingMode;
    ///
    /// assert_eq!(PaddingMode::Reflect.map_index(-1, 5), 0);
    /// assert_eq!(PaddingMode::Reflect101.map_index(-1, 5), 1);
    /// assert_eq!(PaddingMode::Reflect.map_index(5, 5), 4);
    /// assert_eq!(PaddingMode::Replicate.map_index(9, 5), 4);
    /// ```
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        match self {
            PaddingMode::Replicate => i.clamp(0, len as isize - 1) as usize,
            PaddingMode::Reflect => Self::reflect(i, len),
            PaddingMode::Reflect101 => Self::reflect101(i, len),
        }
    }

    /// Like [`PaddingMode::map_index`], but returns `None` for an empty axis.
    #[inline]
    pub fn map_index_checked(&self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.map_index(i, len))
    }
}

#[cfg(test)]
mod tests {
    use super::PaddingMode;

    fn mapped(mode: PaddingMode, range: std::ops::Range<isize>, len: usize) -> Vec<usize> {
        range.map(|i| mode.map_index(i, len)).collect()
    }

    #[test]
    fn reflect_repeats_edge() {
        // fedcba|abcdef|fedcba
        assert_eq!(
            mapped(PaddingMode::Reflect, -3..9, 6),
            vec![2, 1, 0, 0, 1, 2, 3, 4, 5, 5, 4, 3]
        );
    }

    #[test]
    fn reflect101_skips_edge() {
        assert_eq!(
            mapped(PaddingMode::Reflect101, -3..9, 6),
            vec![3, 2, 1, 0, 1, 2, 3, 4, 5, 4, 3, 2]
        );
    }

    #[test]
    fn reflect_far_outside() {
        // period is 2 * len for the mirrored sequence
        assert_eq!(PaddingMode::Reflect.map_index(-7, 3), 0);
        assert_eq!(PaddingMode::Reflect.map_index(13, 3), 1);
        assert_eq!(PaddingMode::Reflect.map_index(4, 1), 0);
    }

    #[test]
    fn replicate_clamps() {
        assert_eq!(
            mapped(PaddingMode::Replicate, -2..6, 4),
            vec![0, 0, 0, 1, 2, 3, 3, 3]
        );
    }

    #[test]
    fn checked_rejects_empty_axis() {
        assert_eq!(PaddingMode::Reflect.map_index_checked(-1, 4), Some(0));
        assert_eq!(PaddingMode::Reflect.map_index_checked(0, 0), None);
    }

    #[test]
    fn extreme_indices_map_in_range() {
        for mode in [
            PaddingMode::Replicate,
            PaddingMode::Reflect,
            PaddingMode::Reflect101,
        ] {
            for len in [1, 2, 7] {
                for i in [isize::MIN, isize::MIN + 1, -1_000_000_000_000, 1_000_000_000_000, isize::MAX] {
                    assert!(mode.map_index(i, len) < len, "{mode:?} {i} {len}");
                }
            }
        }

        // 10^12 is a multiple of both periods below
        assert_eq!(PaddingMode::Reflect.map_index(1_000_000_000_000, 5), 0);
        assert_eq!(PaddingMode::Reflect101.map_index(1_000_000_000_000, 5), 0);
        assert_eq!(PaddingMode::Reflect.map_index(-1_000_000_000_001, 5), 0);
    }
}
