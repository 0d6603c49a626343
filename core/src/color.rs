use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};

/// Scales 8-bit channels down to 5/6/5 bits with floor division, the same
/// rounding the display vendor tools use.
pub fn to_rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    let r5 = (r as u16 * 31) / 255;
    let g6 = (g as u16 * 63) / 255;
    let b5 = (b as u16 * 31) / 255;
    Rgb565::new(r5 as u8, g6 as u8, b5 as u8)
}

/// Packs an RGB888 triple as `(r5 << 11) | (g6 << 5) | b5`.
pub fn rgb_to_565(r: u8, g: u8, b: u8) -> u16 {
    to_rgb565(r, g, b).into_storage()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(rgb_to_565(0, 0, 0), 0x0000);
        assert_eq!(rgb_to_565(255, 255, 255), 0xFFFF);
    }

    #[test]
    fn primaries() {
        assert_eq!(rgb_to_565(255, 0, 0), 0xF800);
        assert_eq!(rgb_to_565(0, 255, 0), 0x07E0);
        assert_eq!(rgb_to_565(0, 0, 255), 0x001F);
    }

    #[test]
    fn floor_division() {
        // 128 * 31 / 255 = 15.56, 128 * 63 / 255 = 31.62
        assert_eq!(rgb_to_565(128, 128, 128), (15 << 11) | (31 << 5) | 15);
        assert_eq!(rgb_to_565(8, 4, 8), 0x0000);
        assert_eq!(rgb_to_565(9, 5, 9), (1 << 11) | (1 << 5) | 1);
    }

    #[test]
    fn monotonic_per_channel() {
        for fixed_a in (0..=255u8).step_by(17) {
            for fixed_b in (0..=255u8).step_by(17) {
                let mut last = (0u16, 0u16, 0u16);
                for v in 0..=255u8 {
                    let r = rgb_to_565(v, fixed_a, fixed_b);
                    let g = rgb_to_565(fixed_a, v, fixed_b);
                    let b = rgb_to_565(fixed_a, fixed_b, v);
                    if v > 0 {
                        assert!(r >= last.0, "red not monotonic at {v}");
                        assert!(g >= last.1, "green not monotonic at {v}");
                        assert!(b >= last.2, "blue not monotonic at {v}");
                    }
                    last = (r, g, b);
                }
            }
        }
    }

    #[test]
    fn matches_storage_layout() {
        let color = to_rgb565(200, 100, 50);
        let packed = rgb_to_565(200, 100, 50);
        assert_eq!(packed >> 11, (200 * 31 / 255) as u16);
        assert_eq!((packed >> 5) & 0x3F, (100 * 63 / 255) as u16);
        assert_eq!(packed & 0x1F, (50 * 31 / 255) as u16);
        assert_eq!(color.into_storage(), packed);
    }
}
