use crate::error::{Result, SceneError};

/// Linear-ish RGB triple in the \[0, 1\] range, parsed from `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);

    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| SceneError::InvalidColor(hex.to_string()))?;
        let mut out = [0.0_f32; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| SceneError::InvalidColor(hex.to_string()))?;
            *c = byte as f32 / 255.0;
        }
        Ok(Rgb(out))
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], alpha]
    }

    #[inline]
    pub fn scaled(self, k: f32) -> [f32; 3] {
        [self.0[0] * k, self.0[1] * k, self.0[2] * k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_brand_blue() {
        let c = Rgb::from_hex("#0070f3").unwrap();
        assert_eq!(c.0[0], 0.0);
        assert!((c.0[1] - 112.0 / 255.0).abs() < 1e-6);
        assert!((c.0[2] - 243.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["0070f3", "#0070f", "#zz70f3", "#0070f3ff", ""] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(SceneError::InvalidColor(bad.to_string()))
            );
        }
    }
}
