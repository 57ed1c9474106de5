///
/// A matrix of coverage values, one per pixel
///
/// Values are stored row by row: the row is the y coordinate of the pixel, and the column is the x coordinate. Values
/// are nominally in the range 0..1 but are not clamped, so detail finer than a pixel can produce values slightly outside
/// that range.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageMatrix {
    width:  usize,
    height: usize,
    values: Vec<f64>,
}

impl CoverageMatrix {
    ///
    /// Creates a coverage matrix from a list of values in row order
    ///
    pub fn from_values(width: usize, height: usize, values: Vec<f64>) -> CoverageMatrix {
        debug_assert!(values.len() == width * height, "Expected {} coverage values for a {}x{} matrix, found {}", width*height, width, height, values.len());

        CoverageMatrix { width, height, values }
    }

    ///
    /// The number of columns in this matrix
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    ///
    /// The number of rows in this matrix
    ///
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The coverage of the pixel at (x, y)
    ///
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y*self.width + x]
    }

    ///
    /// The coverage values for a single row of pixels
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[f64] {
        &self.values[(y*self.width)..((y+1)*self.width)]
    }

    ///
    /// Iterates over the rows in this matrix, from top to bottom
    ///
    pub fn rows(&self) -> impl '_ + Iterator<Item=&[f64]> {
        self.values.chunks(self.width.max(1))
    }

    ///
    /// All of the values in this matrix, in row order
    ///
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    ///
    /// The sum of every coverage value in this matrix (the area of the contour within the matrix, in pixels)
    ///
    pub fn total_coverage(&self) -> f64 {
        self.values.iter().sum()
    }

    ///
    /// Converts to a list of rows
    ///
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}
