use crate::error::*;

///
/// Describes the size of a frame in pixels
///
/// The frame size determines the wavelet domain: a square with sides that are the smallest power of two that fits both
/// dimensions, with enough levels of coefficients that the cells at the last level are one pixel across.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}

impl FrameSize {
    ///
    /// Creates a frame size, which must be at least one pixel in both directions
    ///
    pub fn new(width: usize, height: usize) -> Result<FrameSize, RasterError> {
        if width == 0 || height == 0 {
            Err(RasterError::EmptyFrame { width, height })
        } else {
            Ok(FrameSize { width, height })
        }
    }

    ///
    /// The width and height of the square domain that this frame is rendered within, in pixels
    ///
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.width.max(self.height).next_power_of_two()
    }

    ///
    /// The number of coefficient levels needed for pixel-accurate coverage (`ceil(log2(max(width, height)))`)
    ///
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.domain_size().trailing_zeros() as usize
    }

    ///
    /// The highest wavelet level used when rendering at this size, or None for a 1x1 frame (where the coverage is just the area)
    ///
    #[inline]
    pub fn max_level(&self) -> Option<usize> {
        self.num_levels().checked_sub(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn levels_for_power_of_two() {
        let frame = FrameSize::new(64, 64).unwrap();

        assert!(frame.domain_size() == 64);
        assert!(frame.num_levels() == 6);
        assert!(frame.max_level() == Some(5));
    }

    #[test]
    fn levels_round_up() {
        let frame = FrameSize::new(65, 10).unwrap();

        assert!(frame.domain_size() == 128);
        assert!(frame.max_level() == Some(6));
    }

    #[test]
    fn single_pixel_has_no_levels() {
        let frame = FrameSize::new(1, 1).unwrap();

        assert!(frame.domain_size() == 1);
        assert!(frame.max_level() == None);
    }

    #[test]
    fn empty_frame_is_an_error() {
        assert!(FrameSize::new(0, 10) == Err(RasterError::EmptyFrame { width: 0, height: 10 }));
    }
}
