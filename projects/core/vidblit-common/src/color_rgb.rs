/// An expanded RGB colour, 8 bits per channel.
///
/// This is the form in which colours enter a pixel format (to be packed into a
/// word) and leave it (after the channels are widened back to 8 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorRgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl ColorRgb {
    /// Constructs a new [`ColorRgb`] from the specified red, green and blue components.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_common::color_rgb::ColorRgb;
    ///
    /// let pixel = ColorRgb::new(255, 0, 0);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared euclidean distance between two colours, summed over the three channels.
    ///
    /// Used for nearest colour searches (e.g. against a palette). Zero only for equal colours.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidblit_common::color_rgb::ColorRgb;
    ///
    /// let black = ColorRgb::new(0, 0, 0);
    /// let grey = ColorRgb::new(1, 2, 3);
    /// assert_eq!(black.distance(&grey), 1 + 4 + 9);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self) -> u32 {
        let r = self.r as i32 - other.r as i32;
        let g = self.g as i32 - other.g as i32;
        let b = self.b as i32 - other.b as i32;
        (r * r + g * g + b * b) as u32
    }
}
