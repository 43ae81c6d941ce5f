//! Material color to hex conversion

/// Inverse of the gamma used to bring linear material colors to display space
const INVERSE_GAMMA: f64 = 1.0 / 2.2607278;

/// Convert a linear-light RGB color to a `#rrggbb` string.
///
/// Channels are not clamped: a channel above 1.0 produces more than two hex
/// digits. A negative channel has no real gamma-corrected value and
/// formats as `00`.
pub fn color_to_hex(color: [f64; 3]) -> String {
    color.iter().fold(String::from("#"), |mut hex, &channel| {
        let value = (channel.powf(INVERSE_GAMMA) * 255.0).round_ties_even();
        // NaN casts to 0
        hex.push_str(&format!("{:02x}", value as i64));
        hex
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(color_to_hex([1.0, 0.0, 0.0]), "#ff0000");
        assert_eq!(color_to_hex([0.0, 1.0, 0.0]), "#00ff00");
        assert_eq!(color_to_hex([1.0, 1.0, 1.0]), "#ffffff");
        assert_eq!(color_to_hex([0.0, 0.0, 0.0]), "#000000");
    }

    #[test]
    fn test_gamma_applied() {
        // 0.5 ^ (1 / 2.2607278) * 255 = 187.67...
        assert_eq!(color_to_hex([0.5, 0.5, 0.5]), "#bcbcbc");
    }

    #[test]
    fn test_small_channel_keeps_two_digits() {
        // 0.0001 ^ (1 / 2.2607278) * 255 = 4.3...
        assert_eq!(color_to_hex([0.0001, 0.0, 0.0]), "#040000");
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        // 2.0 ^ (1 / 2.2607278) * 255 = 346.49...
        assert_eq!(color_to_hex([2.0, 0.0, 0.0]), "#15a0000");
        assert_eq!(color_to_hex([-1.0, 0.0, 0.0]), "#000000");
    }

    #[test]
    fn test_deterministic() {
        let color = [0.8, 0.2, 0.4];
        let first = color_to_hex(color);
        let _ = color_to_hex([0.1, 0.9, 0.3]);
        assert_eq!(color_to_hex(color), first);
    }
}
